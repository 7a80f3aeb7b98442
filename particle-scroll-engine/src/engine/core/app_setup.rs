use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use constants::scene::{
    AMBIENT_BRIGHTNESS_SCALE, AMBIENT_INTENSITY, DIRECTIONAL_ILLUMINANCE_SCALE,
    DIRECTIONAL_INTENSITY,
};

use crate::engine::animation::bob::bob_particle_cloud;
use crate::engine::animation::canvas_fade::{
    CanvasFade, advance_canvas_fade, apply_canvas_opacity, start_canvas_fade,
};
use crate::engine::camera::scroll_camera::{ScrollCamera, spawn_scroll_camera, update_scroll_camera};
use crate::engine::core::app_state::{AppState, FpsText, announce_degraded, announce_running};
use crate::engine::core::settings::{ParticleSettings, ScrollSettings};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::model_loader::{ModelLoader, start_model_load, watch_model_load};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scroll::offset::{ScrollOffset, read_scroll_offset};
use crate::engine::scroll::triggers::{
    ScrollTriggerEvent, ScrollTriggers, evaluate_scroll_triggers,
};
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::rpc::host_bridge::HostBridgePlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(HostBridgePlugin)
        .add_event::<ScrollTriggerEvent>();

    let scroll_settings = ScrollSettings::default();
    app.insert_resource(ScrollCamera::from_settings(&scroll_settings))
        .insert_resource(scroll_settings)
        .init_resource::<ParticleSettings>()
        .init_resource::<ScrollOffset>()
        .init_resource::<ScrollTriggers>()
        .init_resource::<CanvasFade>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ModelLoader>()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
            ..default()
        });

    app.add_systems(Startup, (setup, start_model_load).chain())
        .add_systems(
            Update,
            watch_model_load.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), announce_running)
        .add_systems(OnEnter(AppState::Degraded), announce_degraded);

    // One pass per frame, in this order, whatever the load state.
    app.add_systems(
        Update,
        (
            read_scroll_offset,
            evaluate_scroll_triggers,
            update_scroll_camera,
            start_canvas_fade,
            advance_canvas_fade,
            apply_canvas_opacity,
            bob_particle_cloud,
        )
            .chain(),
    );

    app.add_systems(Update, fps_notification_system);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: "wgpu=error,naga=warn".to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

fn setup(mut commands: Commands, camera: Res<ScrollCamera>) {
    spawn_lighting(&mut commands);
    spawn_scroll_camera(&mut commands, &camera);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_INTENSITY * DIRECTIONAL_ILLUMINANCE_SCALE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}
