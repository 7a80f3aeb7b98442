use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// RGBA8 pixels of a white disc filling a `resolution`² square, with a
/// one pixel soft edge. Alpha is zero outside the disc.
pub fn circle_sprite_pixels(resolution: u32) -> Vec<u8> {
    let resolution = resolution.max(1);
    let radius = resolution as f32 * 0.5;
    let mut pixels = Vec::with_capacity((resolution * resolution * 4) as usize);

    for y in 0..resolution {
        for x in 0..resolution {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let coverage = (radius - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
            pixels.extend_from_slice(&[255, 255, 255, (coverage * 255.0).round() as u8]);
        }
    }
    pixels
}

pub fn circle_sprite(resolution: u32) -> Image {
    let resolution = resolution.max(1);
    Image::new(
        Extent3d {
            width: resolution,
            height: resolution,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        circle_sprite_pixels(resolution),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
