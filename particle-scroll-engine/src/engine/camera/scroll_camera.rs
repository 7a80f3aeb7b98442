use bevy::prelude::*;
use constants::scene::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_UP};
use constants::scroll::{ZOOM_MAX_HEIGHT, ZOOM_MIN_HEIGHT, ZOOM_SCROLL_RANGE};

use crate::engine::core::settings::ScrollSettings;
use crate::engine::scroll::offset::ScrollOffset;

/// Maps scroll offset onto a camera height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    pub min_height: f32,
    pub max_height: f32,
    /// Scroll distance (pixels) covering the whole zoom.
    pub scroll_range: f32,
}

impl ZoomRange {
    /// Fraction of the zoom range covered at `offset`, clamped to `[0, 1]`.
    pub fn progress(&self, offset: f32) -> f32 {
        if self.scroll_range <= 0.0 {
            return if offset > 0.0 { 1.0 } else { 0.0 };
        }
        (offset / self.scroll_range).clamp(0.0, 1.0)
    }

    pub fn target_height(&self, offset: f32) -> f32 {
        self.min_height + (self.max_height - self.min_height) * self.progress(offset)
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min_height: ZOOM_MIN_HEIGHT,
            max_height: ZOOM_MAX_HEIGHT,
            scroll_range: ZOOM_SCROLL_RANGE,
        }
    }
}

/// Camera height state, advanced once per frame.
#[derive(Resource, Debug, Clone)]
pub struct ScrollCamera {
    pub zoom: ZoomRange,
    pub current_height: f32,
    /// Fraction of the remaining distance covered per frame, in `[0, 1]`.
    pub smoothing: f32,
}

impl ScrollCamera {
    pub fn new(zoom: ZoomRange, smoothing: f32) -> Self {
        Self {
            zoom,
            current_height: zoom.min_height,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn from_settings(settings: &ScrollSettings) -> Self {
        Self::new(settings.zoom, settings.smoothing)
    }

    /// Moves the current height a `smoothing` fraction toward `target`.
    pub fn step_toward(&mut self, target: f32) -> f32 {
        self.current_height += (target - self.current_height) * self.smoothing;
        self.current_height
    }

    /// One frame of the render loop for the given scroll offset.
    pub fn update(&mut self, offset: f32) -> f32 {
        let target = self.zoom.target_height(offset);
        self.step_toward(target)
    }

    pub fn transform(&self) -> Transform {
        camera_transform(self.current_height)
    }
}

impl Default for ScrollCamera {
    fn default() -> Self {
        Self::from_settings(&ScrollSettings::default())
    }
}

/// Marks the camera entity driven by [`ScrollCamera`].
#[derive(Component)]
pub struct ScrollCameraRig;

fn camera_transform(height: f32) -> Transform {
    Transform::from_xyz(0.0, height, 0.0).looking_at(Vec3::ZERO, Vec3::from_array(CAMERA_UP))
}

pub fn spawn_scroll_camera(commands: &mut Commands, camera: &ScrollCamera) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        camera.transform(),
        ScrollCameraRig,
    ));
}

pub fn update_scroll_camera(
    offset: Res<ScrollOffset>,
    mut camera: ResMut<ScrollCamera>,
    mut rig_query: Query<&mut Transform, With<ScrollCameraRig>>,
) {
    camera.update(offset.pixels());

    for mut transform in &mut rig_query {
        *transform = camera.transform();
    }
}
