use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy::scene::SceneInstanceReady;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::animation::bob::{ParticleBob, Yoyo};
use crate::engine::core::app_state::AppState;
use crate::engine::core::settings::ParticleSettings;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::particle_mesh::{ParticleCloud, create_particle_mesh, particle_material};
use crate::engine::mesh::sprite::circle_sprite;
use crate::engine::sampling::mesh_extraction::world_triangles;
use crate::engine::sampling::{SampledPoints, SamplerError, SurfaceSampler};
use crate::rpc::host_bridge::HostBridge;

/// Bookkeeping resources touched when the load settles.
type LoadBookkeeping<'w> = (
    ResMut<'w, LoadingProgress>,
    ResMut<'w, ModelLoader>,
    ResMut<'w, NextState<AppState>>,
    ResMut<'w, HostBridge>,
);

pub fn create_point_cloud_on_scene_ready(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    mesh_nodes: Query<&Mesh3d>,
    transforms: Query<&Transform>,
    parents: Query<&ChildOf>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<ParticleSettings>,
    time: Res<Time>,
    bookkeeping: LoadBookkeeping,
) {
    let (mut loading_progress, mut model_loader, mut next_state, mut host_bridge) = bookkeeping;
    let root = trigger.target();
    loading_progress.scene_ready = true;

    let sampled = first_mesh_entity(root, &children, &mesh_nodes)
        .ok_or_else(|| "model scene contains no mesh".to_string())
        .and_then(|entity| {
            let handle = &mesh_nodes.get(entity).map_err(|e| e.to_string())?.0;
            let mesh = meshes
                .get(handle)
                .ok_or_else(|| "model mesh asset is not loaded".to_string())?;
            let world = world_affine(entity, root, &transforms, &parents);
            sample_mesh(mesh, &world, &settings).map_err(|e| e.to_string())
        });

    // The source model is never drawn, only its samples.
    commands.entity(root).despawn();
    model_loader.root = None;

    let points = match sampled {
        Ok(points) => points,
        Err(reason) => {
            error!("Cannot build particle cloud: {}", reason);
            host_bridge.send_notification(
                "particle_cloud_unavailable",
                serde_json::json!({ "reason": reason }),
            );
            loading_progress.failure = Some(reason);
            next_state.set(AppState::Degraded);
            return;
        }
    };

    let point_count = points.len();
    let sprite = images.add(circle_sprite(settings.sprite_resolution));
    let material = materials.add(particle_material(sprite, settings.alpha_cutoff));
    let mesh = meshes.add(create_particle_mesh(&points, settings.size));

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
        Visibility::Visible,
        ParticleCloud { point_count },
        ParticleBob::new(
            0.0,
            time.elapsed_secs(),
            Yoyo::sine(settings.bob_amplitude, settings.bob_half_period),
        ),
        NoFrustumCulling,
    ));

    info!("Particle cloud spawned with {} points", point_count);
    host_bridge.send_notification(
        "particle_cloud_ready",
        serde_json::json!({ "points": point_count }),
    );
    loading_progress.point_count = point_count;
    loading_progress.point_cloud_created = true;
    next_state.set(AppState::Running);
}

/// Samples `settings.count` points from `mesh` placed at `world`.
pub fn sample_mesh(
    mesh: &Mesh,
    world: &Affine3A,
    settings: &ParticleSettings,
) -> Result<SampledPoints, SamplerError> {
    let sampler = SurfaceSampler::new(world_triangles(mesh, world)?)?;
    debug!(
        "Sampling {} points over {} triangles ({:.3} units² of surface)",
        settings.count,
        sampler.mesh().len(),
        sampler.surface_area()
    );

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(sampler.sample_points(settings.count, &mut rng))
}

/// First entity carrying a mesh, in depth-first pre-order from `root`.
pub fn first_mesh_entity(
    root: Entity,
    children: &Query<&Children>,
    mesh_nodes: &Query<&Mesh3d>,
) -> Option<Entity> {
    if mesh_nodes.contains(root) {
        return Some(root);
    }
    let node_children = children.get(root).ok()?;
    (**node_children)
        .iter()
        .find_map(|&child| first_mesh_entity(child, children, mesh_nodes))
}

/// Composes local transforms from `entity` up to and including `root`.
pub fn world_affine(
    entity: Entity,
    root: Entity,
    transforms: &Query<&Transform>,
    parents: &Query<&ChildOf>,
) -> Affine3A {
    let local = |e: Entity| {
        transforms
            .get(e)
            .map(Transform::compute_affine)
            .unwrap_or(Affine3A::IDENTITY)
    };

    let mut world = local(entity);
    let mut current = entity;
    while current != root {
        let Ok(child_of) = parents.get(current) else {
            break;
        };
        current = child_of.parent();
        world = local(current) * world;
    }
    world
}
