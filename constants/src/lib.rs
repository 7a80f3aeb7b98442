//! Named constants shared by the particle scroll engine.
//!
//! Every numeric threshold the page relies on lives here rather than inline
//! in systems, so scroll boundaries can be read and adjusted in one place.

/// Scroll offsets (in CSS pixels) that drive the camera zoom and the
/// section-one triggers.
pub mod scroll;

/// Particle cloud sampling and rendering parameters.
pub mod render_settings;

/// Camera, lighting, window and asset parameters for the scene.
pub mod scene;
