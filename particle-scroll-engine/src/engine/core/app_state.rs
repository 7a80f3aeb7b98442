use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Model asset in flight; the scene renders without particles.
    #[default]
    Loading,
    /// Particle cloud spawned.
    Running,
    /// The model could not be loaded or sampled; no particle cloud.
    Degraded,
}

#[derive(Component)]
pub struct FpsText;

pub fn announce_running(loading_progress: Res<LoadingProgress>) {
    info!(
        "→ Particle cloud ready ({} points), running",
        loading_progress.point_count
    );
}

pub fn announce_degraded(loading_progress: Res<LoadingProgress>) {
    warn!(
        "→ Running without particle cloud: {}",
        loading_progress.failure.as_deref().unwrap_or("unknown failure")
    );
}
