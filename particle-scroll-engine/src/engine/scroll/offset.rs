use bevy::input::mouse::MouseScrollUnit;
use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::input::mouse::MouseWheel;

use crate::engine::core::settings::ScrollSettings;

/// Vertical page scroll position in pixels.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset(f32);

impl ScrollOffset {
    /// Non-finite and negative offsets are stored as zero.
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.max(0.0))
        } else {
            Self(0.0)
        }
    }

    pub fn pixels(&self) -> f32 {
        self.0
    }
}

/// Applies one wheel event to a virtual page offset.
///
/// Positive `delta_y` scrolls toward the top of the page, as browsers do.
pub fn apply_wheel(
    offset: f32,
    delta_y: f32,
    unit: MouseScrollUnit,
    settings: &ScrollSettings,
) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => delta_y * settings.wheel_line_pixels,
        MouseScrollUnit::Pixel => delta_y,
    };
    (offset - pixels).clamp(0.0, settings.native_scroll_extent)
}

#[cfg(target_arch = "wasm32")]
pub fn read_scroll_offset(mut offset: ResMut<ScrollOffset>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.scroll_y() {
        Ok(pixels) => *offset = ScrollOffset::new(pixels as f32),
        Err(e) => warn!("Failed to read page scroll offset: {:?}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_scroll_offset(
    mut offset: ResMut<ScrollOffset>,
    mut wheel_events: EventReader<MouseWheel>,
    settings: Res<ScrollSettings>,
) {
    let mut pixels = offset.pixels();
    for event in wheel_events.read() {
        pixels = apply_wheel(pixels, event.y, event.unit, &settings);
    }
    if pixels != offset.pixels() {
        *offset = ScrollOffset::new(pixels);
    }
}
