use bevy::prelude::*;
use constants::render_settings::{
    BOB_AMPLITUDE, BOB_HALF_PERIOD, PARTICLE_ALPHA_CUTOFF, PARTICLE_COUNT, PARTICLE_SIZE,
    SPRITE_RESOLUTION,
};
use constants::scroll::{
    CAMERA_SMOOTHING, CANVAS_FADE_DURATION, NATIVE_SCROLL_EXTENT, WHEEL_LINE_PIXELS,
};

use crate::engine::camera::scroll_camera::ZoomRange;
use crate::engine::scroll::triggers::TriggerThresholds;

/// Everything that turns scroll input into camera motion and triggers.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScrollSettings {
    pub zoom: ZoomRange,
    pub smoothing: f32,
    pub triggers: TriggerThresholds,
    pub canvas_fade_duration: f32,
    pub wheel_line_pixels: f32,
    pub native_scroll_extent: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            zoom: ZoomRange::default(),
            smoothing: CAMERA_SMOOTHING,
            triggers: TriggerThresholds::default(),
            canvas_fade_duration: CANVAS_FADE_DURATION,
            wheel_line_pixels: WHEEL_LINE_PIXELS,
            native_scroll_extent: NATIVE_SCROLL_EXTENT,
        }
    }
}

/// Particle cloud construction parameters.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ParticleSettings {
    pub count: usize,
    pub size: f32,
    pub alpha_cutoff: f32,
    pub sprite_resolution: u32,
    pub bob_amplitude: f32,
    pub bob_half_period: f32,
    /// Fixed sampling seed; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size: PARTICLE_SIZE,
            alpha_cutoff: PARTICLE_ALPHA_CUTOFF,
            sprite_resolution: SPRITE_RESOLUTION,
            bob_amplitude: BOB_AMPLITUDE,
            bob_half_period: BOB_HALF_PERIOD,
            seed: None,
        }
    }
}
