//! Model loading and particle cloud creation.
//!
//! The glTF scene is requested at startup and spawned hidden. Once its
//! entities exist, the first mesh found in depth-first order is converted to
//! world-space triangles, sampled, and replaced by the particle cloud. Any
//! failure along the way leaves the scene running without particles.

/// Asset request, hidden scene spawn and load-failure monitoring.
pub mod model_loader;

/// Scene traversal, surface sampling and particle cloud spawning.
pub mod point_cloud_creator;

/// Loading progress tracking resource for state transitions.
pub mod progress;
