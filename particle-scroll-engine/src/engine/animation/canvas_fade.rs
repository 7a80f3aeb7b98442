use bevy::prelude::*;

use super::tween::{Ease, Tween};
use crate::engine::core::settings::ScrollSettings;
use crate::engine::scroll::triggers::ScrollTriggerEvent;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::mesh::particle_mesh::ParticleCloud;

/// Opacity of the rendered canvas, driven by the canvas scroll trigger.
#[derive(Resource, Debug, Clone)]
pub struct CanvasFade {
    pub tween: Tween,
}

impl Default for CanvasFade {
    fn default() -> Self {
        Self {
            tween: Tween::settled(1.0),
        }
    }
}

impl CanvasFade {
    pub fn opacity(&self) -> f32 {
        self.tween.value()
    }

    /// Fade out eases with `power1.out`, fade in with `power2.out`.
    pub fn fade_to(&mut self, visible: bool, duration: f32) {
        if visible {
            self.tween.retarget(1.0, duration, Ease::Power2Out);
        } else {
            self.tween.retarget(0.0, duration, Ease::Power1Out);
        }
    }
}

pub fn start_canvas_fade(
    mut trigger_events: EventReader<ScrollTriggerEvent>,
    mut fade: ResMut<CanvasFade>,
    settings: Res<ScrollSettings>,
) {
    for event in trigger_events.read() {
        if let ScrollTriggerEvent::Canvas { visible } = *event {
            fade.fade_to(visible, settings.canvas_fade_duration);
        }
    }
}

pub fn advance_canvas_fade(time: Res<Time>, mut fade: ResMut<CanvasFade>) {
    if !fade.tween.is_finished() {
        let delta = time.delta_secs();
        fade.tween.advance(delta);
    }
}

// The canvas element itself fades so the page behind it shows through.
#[cfg(target_arch = "wasm32")]
pub fn apply_canvas_opacity(fade: Res<CanvasFade>, mut applied: Local<Option<f32>>) {
    use constants::scene::CANVAS_SELECTOR;
    use wasm_bindgen::JsCast;

    let opacity = fade.opacity();
    if *applied == Some(opacity) {
        return;
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(Some(element)) = document.query_selector(CANVAS_SELECTOR) else {
        warn!("Canvas {} not found", CANVAS_SELECTOR);
        *applied = Some(opacity);
        return;
    };
    let Ok(canvas) = element.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(e) = canvas
        .style()
        .set_property("opacity", &format!("{opacity:.3}"))
    {
        warn!("Failed to set canvas opacity: {:?}", e);
        return;
    }
    *applied = Some(opacity);
}

// Natively there is no page behind the window, so particles fade instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_canvas_opacity(
    fade: Res<CanvasFade>,
    clouds: Query<&MeshMaterial3d<StandardMaterial>, With<ParticleCloud>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut applied: Local<Option<f32>>,
) {
    let opacity = fade.opacity();
    if *applied == Some(opacity) {
        return;
    }

    let mut updated = false;
    for material_handle in &clouds {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            crate::engine::mesh::particle_mesh::set_particle_opacity(material, opacity);
            updated = true;
        }
    }
    // Retry next frame until the cloud exists.
    if updated {
        *applied = Some(opacity);
    }
}
