/// glTF binary the particle cloud is sampled from, relative to the asset root.
pub const MODEL_ASSET_PATH: &str = "models/man.glb";

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// The camera travels along Y and looks at the origin, so its up vector
/// cannot be Y.
pub const CAMERA_UP: [f32; 3] = [0.0, 0.0, -1.0];

/// Relative light intensities, scaled into engine units by the scene setup.
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;

/// Engine brightness of an ambient light at intensity 1.0.
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 1000.0;

/// Engine illuminance (lux) of a directional light at intensity 1.0.
pub const DIRECTIONAL_ILLUMINANCE_SCALE: f32 = 10_000.0;

/// Canvas element the wasm build renders into and fades.
pub const CANVAS_SELECTOR: &str = "#webgl";

pub const WINDOW_TITLE: &str = "Particle Scroll";

/// Seconds between FPS notifications sent to the host page.
pub const FPS_NOTIFY_INTERVAL: f32 = 0.5;
