use std::ops::RangeInclusive;

/// Camera height at zero scroll.
pub const ZOOM_MIN_HEIGHT: f32 = -1.0;

/// Camera height once the zoom range has been fully scrolled.
pub const ZOOM_MAX_HEIGHT: f32 = -20.0;

/// Scroll distance over which the camera travels from min to max height.
pub const ZOOM_SCROLL_RANGE: f32 = 1500.0;

/// Per-frame fraction of the remaining distance the camera covers.
pub const CAMERA_SMOOTHING: f32 = 0.08;

/// Intro text fades in while the offset sits in this range.
pub const INTRO_FADE_IN: RangeInclusive<f32> = 0.0..=30.0;

/// Intro text fades out while the offset sits in this range.
pub const INTRO_FADE_OUT: RangeInclusive<f32> = 31.0..=50.0;

/// The "myself" text is visible only inside this range.
pub const SELF_TEXT_RANGE: RangeInclusive<f32> = 400.0..=1300.0;

/// Past this offset the "my" and "self" halves split apart.
pub const SPLIT_TRIGGER: f32 = 800.0;

/// Past this offset the canvas fades out.
pub const CANVAS_FADE_OUT_ABOVE: f32 = 1400.0;

/// At or below this offset a faded canvas fades back in.
pub const CANVAS_FADE_IN_AT_OR_BELOW: f32 = 1300.0;

/// Canvas opacity tween length in seconds.
pub const CANVAS_FADE_DURATION: f32 = 0.5;

/// Durations (seconds) announced to the host page with each trigger.
pub const INTRO_FADE_DURATION: f32 = 0.3;
pub const SELF_TEXT_FADE_DURATION: f32 = 0.5;
pub const SPLIT_DURATION: f32 = 1.0;

/// Pixels scrolled per wheel line on native builds.
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

/// Length of the virtual page native builds scroll through.
pub const NATIVE_SCROLL_EXTENT: f32 = 2000.0;
