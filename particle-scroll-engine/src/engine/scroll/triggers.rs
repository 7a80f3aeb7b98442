use std::ops::RangeInclusive;

use bevy::prelude::*;
use constants::scroll::{
    CANVAS_FADE_DURATION, CANVAS_FADE_IN_AT_OR_BELOW, CANVAS_FADE_OUT_ABOVE, INTRO_FADE_DURATION,
    INTRO_FADE_IN, INTRO_FADE_OUT, SELF_TEXT_FADE_DURATION, SELF_TEXT_RANGE, SPLIT_DURATION,
    SPLIT_TRIGGER,
};
use serde::Serialize;

use crate::engine::core::settings::ScrollSettings;
use crate::engine::scroll::offset::ScrollOffset;

/// Scroll boundaries (pixels) of the opening-section triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerThresholds {
    pub intro_fade_in: RangeInclusive<f32>,
    pub intro_fade_out: RangeInclusive<f32>,
    pub self_text: RangeInclusive<f32>,
    pub split_above: f32,
    pub canvas_fade_out_above: f32,
    pub canvas_fade_in_at_or_below: f32,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            intro_fade_in: INTRO_FADE_IN,
            intro_fade_out: INTRO_FADE_OUT,
            self_text: SELF_TEXT_RANGE,
            split_above: SPLIT_TRIGGER,
            canvas_fade_out_above: CANVAS_FADE_OUT_ABOVE,
            canvas_fade_in_at_or_below: CANVAS_FADE_IN_AT_OR_BELOW,
        }
    }
}

/// A trigger changed state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum ScrollTriggerEvent {
    IntroText { visible: bool },
    SelfText { visible: bool },
    Split { active: bool },
    Canvas { visible: bool },
}

impl ScrollTriggerEvent {
    /// Length in seconds of the animation this transition starts.
    pub fn duration(&self) -> f32 {
        match self {
            Self::IntroText { .. } => INTRO_FADE_DURATION,
            Self::SelfText { .. } => SELF_TEXT_FADE_DURATION,
            Self::Split { .. } => SPLIT_DURATION,
            Self::Canvas { .. } => CANVAS_FADE_DURATION,
        }
    }
}

/// Latched state of each trigger.
///
/// The intro text starts undecided so the first frame inside either intro
/// range announces it.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ScrollTriggers {
    intro_visible: Option<bool>,
    self_text_shown: bool,
    split_active: bool,
    canvas_hidden: bool,
}

impl ScrollTriggers {
    pub fn intro_visible(&self) -> Option<bool> {
        self.intro_visible
    }

    pub fn self_text_shown(&self) -> bool {
        self.self_text_shown
    }

    pub fn split_active(&self) -> bool {
        self.split_active
    }

    pub fn canvas_hidden(&self) -> bool {
        self.canvas_hidden
    }

    /// Updates every latch for `offset` and returns the transitions, canvas first.
    pub fn evaluate(
        &mut self,
        offset: f32,
        thresholds: &TriggerThresholds,
    ) -> Vec<ScrollTriggerEvent> {
        let mut events = Vec::new();

        if offset > thresholds.canvas_fade_out_above && !self.canvas_hidden {
            self.canvas_hidden = true;
            events.push(ScrollTriggerEvent::Canvas { visible: false });
        } else if offset <= thresholds.canvas_fade_in_at_or_below && self.canvas_hidden {
            self.canvas_hidden = false;
            events.push(ScrollTriggerEvent::Canvas { visible: true });
        }

        if thresholds.intro_fade_in.contains(&offset) && self.intro_visible != Some(true) {
            self.intro_visible = Some(true);
            events.push(ScrollTriggerEvent::IntroText { visible: true });
        } else if thresholds.intro_fade_out.contains(&offset) && self.intro_visible != Some(false)
        {
            self.intro_visible = Some(false);
            events.push(ScrollTriggerEvent::IntroText { visible: false });
        }

        let in_self_range = thresholds.self_text.contains(&offset);
        if in_self_range != self.self_text_shown {
            self.self_text_shown = in_self_range;
            events.push(ScrollTriggerEvent::SelfText {
                visible: in_self_range,
            });
        }

        let past_split = offset > thresholds.split_above;
        if past_split != self.split_active {
            self.split_active = past_split;
            events.push(ScrollTriggerEvent::Split { active: past_split });
        }

        events
    }
}

pub fn evaluate_scroll_triggers(
    offset: Res<ScrollOffset>,
    settings: Res<ScrollSettings>,
    mut triggers: ResMut<ScrollTriggers>,
    mut trigger_events: EventWriter<ScrollTriggerEvent>,
) {
    for event in triggers.evaluate(offset.pixels(), &settings.triggers) {
        debug!("Scroll trigger at {:.0}px: {:?}", offset.pixels(), event);
        trigger_events.write(event);
    }
}
