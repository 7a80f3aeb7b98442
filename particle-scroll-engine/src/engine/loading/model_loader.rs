use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use constants::scene::MODEL_ASSET_PATH;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::point_cloud_creator::create_point_cloud_on_scene_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::host_bridge::HostBridge;

/// Root entity of the hidden model scene; removed once sampled.
#[derive(Component)]
pub struct ModelScene;

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub handle: Option<Handle<Scene>>,
    pub root: Option<Entity>,
}

// Request the model and spawn its scene hidden; sampling starts when the
// scene instance is ready.
pub fn start_model_load(
    mut commands: Commands,
    mut model_loader: ResMut<ModelLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading model from: {}", MODEL_ASSET_PATH);
    let handle: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(MODEL_ASSET_PATH));

    let root = commands
        .spawn((
            SceneRoot(handle.clone()),
            Transform::default(),
            Visibility::Hidden,
            ModelScene,
        ))
        .observe(create_point_cloud_on_scene_ready)
        .id();

    model_loader.handle = Some(handle);
    model_loader.root = Some(root);
    loading_progress.model_requested = true;
}

// Watch for a failed load; the scene then keeps rendering without particles.
pub fn watch_model_load(
    mut commands: Commands,
    mut model_loader: ResMut<ModelLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    mut host_bridge: ResMut<HostBridge>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.is_settled() {
        return;
    }
    let Some(handle) = model_loader.handle.as_ref() else {
        return;
    };

    if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        let reason = format!("model load failed: {error}");
        warn!("{}", reason);

        if let Some(root) = model_loader.root.take() {
            commands.entity(root).despawn();
        }
        model_loader.handle = None;

        host_bridge.send_notification(
            "particle_cloud_unavailable",
            serde_json::json!({ "reason": reason }),
        );
        loading_progress.failure = Some(reason);
        next_state.set(AppState::Degraded);
    }
}
