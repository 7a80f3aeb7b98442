//! Scroll input and the scroll-threshold triggers of the opening section.

/// Per-frame scroll offset, read from the page (wasm) or the mouse wheel (native).
pub mod offset;

/// Latched triggers that fire when the offset crosses named thresholds.
pub mod triggers;
