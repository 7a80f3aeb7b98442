//! One-way notifications from the engine to the page hosting the canvas.
//!
//! Messages follow the JSON-RPC 2.0 notification shape and are delivered with
//! `postMessage` on wasm builds. Native builds log them at debug level.
//!
//! ```text
//! Page (parent window)  <──postMessage──  Engine (canvas)
//!        │                                   │
//!        │ <──────── scroll_trigger ─────────┤
//!        │ <──── particle_cloud_ready ───────┤
//!        │ <── particle_cloud_unavailable ───┤
//!        │ <────────── fps_update ───────────┤
//! ```
//!
//! The page drives its text overlays from `scroll_trigger`:
//!
//! ```typescript
//! window.addEventListener("message", (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.method === "scroll_trigger" && msg.params.trigger === "split") {
//!     splitSection(msg.params.active, msg.params.duration);
//!   }
//! });
//! ```

/// Notification queue, its plugin, and the systems that flush it.
pub mod host_bridge;
