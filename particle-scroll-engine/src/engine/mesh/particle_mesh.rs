use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::sampling::SampledPoints;

#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleCloud {
    pub point_count: usize,
}

/// Build one quad per sampled point, lying in the XZ plane so it faces the
/// camera looking up the Y axis. Quads are `size` units across.
pub fn create_particle_mesh(points: &SampledPoints, size: f32) -> Mesh {
    let half = size * 0.5;
    let corners = [
        Vec3::new(-half, 0.0, -half),
        Vec3::new(half, 0.0, -half),
        Vec3::new(half, 0.0, half),
        Vec3::new(-half, 0.0, half),
    ];
    let corner_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut positions = Vec::with_capacity(points.len() * 4);
    let mut uvs = Vec::with_capacity(points.len() * 4);
    let mut indices = Vec::with_capacity(points.len() * 6);

    for (i, point) in points.iter().enumerate() {
        let base = (i * 4) as u32;
        positions.extend(corners.iter().map(|corner| (*point + *corner).to_array()));
        uvs.extend_from_slice(&corner_uvs);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    let normals = vec![[0.0, -1.0, 0.0]; positions.len()];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// White unlit material; the sprite's alpha below `alpha_cutoff` is discarded.
pub fn particle_material(sprite: Handle<Image>, alpha_cutoff: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(sprite),
        unlit: true,
        alpha_mode: AlphaMode::Mask(alpha_cutoff),
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Fully opaque particles keep the alpha mask; anything less blends.
pub fn set_particle_opacity(material: &mut StandardMaterial, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    let cutoff = match material.alpha_mode {
        AlphaMode::Mask(cutoff) => cutoff,
        _ => constants::render_settings::PARTICLE_ALPHA_CUTOFF,
    };

    material.base_color = Color::WHITE.with_alpha(opacity);
    material.alpha_mode = if opacity >= 1.0 {
        AlphaMode::Mask(cutoff)
    } else {
        AlphaMode::Blend
    };
}
