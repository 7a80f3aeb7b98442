//! Scroll-driven camera.
//!
//! The camera only travels along the Y axis: its target height is a clamped
//! linear function of the page scroll offset, and its actual height follows
//! the target through a per-frame exponential smoothing filter.

/// Zoom range mapping, smoothing state and the per-frame camera system.
pub mod scroll_camera;
