//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and the configuration resources for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the per-frame scroll chain, model loading
/// systems, and platform-specific configurations.
pub mod app_setup;

/// Application state machine: loading, running with a particle cloud, or
/// degraded without one.
pub mod app_state;

/// Configuration resources built from the shared named constants.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
