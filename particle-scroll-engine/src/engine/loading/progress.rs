use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub model_requested: bool,
    pub scene_ready: bool,
    pub point_cloud_created: bool,
    pub point_count: usize,
    pub failure: Option<String>,
}

impl LoadingProgress {
    pub fn is_settled(&self) -> bool {
        self.point_cloud_created || self.failure.is_some()
    }
}
