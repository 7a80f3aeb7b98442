//! Time-based property animation: easing curves, tweens, the particle cloud
//! bob and the canvas opacity fade.

pub mod bob;
pub mod canvas_fade;
pub mod tween;
