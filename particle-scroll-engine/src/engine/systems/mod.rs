/// Frame rate reporting to the host page and the native overlay.
pub mod fps_tracking;
