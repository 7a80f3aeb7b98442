use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::scroll::triggers::ScrollTriggerEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// JSON-RPC 2.0 notification; no id, no response expected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

impl HostNotification {
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Outgoing notifications, flushed once per frame in the order queued.
#[derive(Resource, Default, Debug)]
pub struct HostBridge {
    outgoing_notifications: Vec<HostNotification>,
}

impl HostBridge {
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications
            .push(HostNotification::new(method, params));
    }

    pub fn pending(&self) -> &[HostNotification] {
        &self.outgoing_notifications
    }

    pub fn drain(&mut self) -> impl Iterator<Item = HostNotification> + '_ {
        self.outgoing_notifications.drain(..)
    }
}

pub struct HostBridgePlugin;

impl Plugin for HostBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HostBridge>()
            .add_event::<ScrollTriggerEvent>()
            .add_systems(
                PostUpdate,
                (forward_scroll_triggers, flush_host_notifications).chain(),
            );
    }
}

/// `params` carries the event fields plus the animation `duration` in seconds.
pub fn scroll_trigger_params(event: &ScrollTriggerEvent) -> serde_json::Value {
    let mut params = serde_json::to_value(event).unwrap_or_else(|e| {
        error!("Failed to serialize scroll trigger: {}", e);
        serde_json::Value::Null
    });
    if let Some(fields) = params.as_object_mut() {
        fields.insert("duration".to_string(), serde_json::json!(event.duration()));
    }
    params
}

pub fn forward_scroll_triggers(
    mut trigger_events: EventReader<ScrollTriggerEvent>,
    mut host_bridge: ResMut<HostBridge>,
) {
    for event in trigger_events.read() {
        host_bridge.send_notification("scroll_trigger", scroll_trigger_params(event));
    }
}

pub fn flush_host_notifications(mut host_bridge: ResMut<HostBridge>) {
    for notification in host_bridge.drain() {
        send_message_to_host(&notification);
    }
}

fn send_message_to_host(notification: &HostNotification) {
    let json = match serde_json::to_string(notification) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize notification: {}", e);
            return;
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            error!("Window object not available");
            return;
        };
        // A top-level page is its own parent.
        let target = window.parent().ok().flatten().unwrap_or(window);
        if let Err(e) = target.post_message(&JsValue::from_str(&json), "*") {
            error!("Failed to post {}: {:?}", notification.method, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    debug!("→ host: {}", json);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notification_has_json_rpc_shape() {
        let notification = HostNotification::new("particle_cloud_ready", json!({ "points": 20000 }));
        let value = serde_json::to_value(&notification).unwrap();

        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "particle_cloud_ready",
                "params": { "points": 20000 }
            })
        );
        assert!(value.get("id").is_none());
    }

    #[test]
    fn scroll_trigger_params_include_duration() {
        let params = scroll_trigger_params(&ScrollTriggerEvent::Split { active: true });
        assert_eq!(
            params,
            json!({ "trigger": "split", "active": true, "duration": 1.0 })
        );

        let params = scroll_trigger_params(&ScrollTriggerEvent::IntroText { visible: false });
        assert_eq!(params["trigger"], "intro_text");
        assert_eq!(params["visible"], false);
    }

    #[test]
    fn triggers_are_forwarded_then_flushed() {
        let mut app = App::new();
        app.add_event::<ScrollTriggerEvent>()
            .init_resource::<HostBridge>()
            .add_systems(Update, forward_scroll_triggers);

        app.world_mut()
            .send_event(ScrollTriggerEvent::Canvas { visible: false });
        app.update();

        let bridge = app.world().resource::<HostBridge>();
        assert_eq!(bridge.pending().len(), 1);
        assert_eq!(bridge.pending()[0].method, "scroll_trigger");
        assert_eq!(bridge.pending()[0].params["trigger"], "canvas");

        app.add_systems(Update, flush_host_notifications);
        app.update();
        assert!(app.world().resource::<HostBridge>().pending().is_empty());
    }

    #[test]
    fn notifications_keep_queue_order() {
        let mut bridge = HostBridge::default();
        bridge.send_notification("first", json!({}));
        bridge.send_notification("second", json!({}));

        let methods: Vec<String> = bridge.drain().map(|n| n.method).collect();
        assert_eq!(methods, ["first", "second"]);
        assert!(bridge.pending().is_empty());
    }
}
