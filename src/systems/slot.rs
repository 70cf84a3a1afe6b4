//! Slot presentation system.
//!
//! This module provides the per-tick pass that refreshes every
//! [`ActionSlot`](crate::components::actionslot::ActionSlot)'s widgets from
//! its bound [`Action`](crate::components::action::Action):
//!
//! 1. Build a [`TimedState`] for the cooldown and duration overlays
//! 2. Run [`present`] for each overlay
//! 3. Apply visibility, fill fraction and countdown label to the widget
//!    entities through [`SlotVisual`]
//! 4. Show or hide the disabled overlay from the slot's `enabled` flag
//!
//! All failure modes are local to the slot and tick: a missing action or
//! widget reference and a zero total time are logged at `warn!` and the
//! update is skipped; the next tick retries.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::action::Action;
use crate::components::actionslot::{ActionSlot, OverlayConfig};
use crate::components::widget::{SlotVisual, SlotWidget};
use crate::presenter::{present, text_shown, TimedState};

/// Refreshes overlay widgets for all slots.
pub fn slot_update_system(
    slots: Query<(Entity, &ActionSlot)>,
    actions: Query<&Action>,
    mut widgets: Query<&mut SlotWidget>,
) {
    for (slot_entity, slot) in slots.iter() {
        if let Some(overlay_entity) = slot.disabled_overlay {
            match widgets.get_mut(overlay_entity) {
                Ok(mut widget) => widget.set_visible(!slot.enabled),
                Err(_) => warn!(
                    "Slot {:?}: disabled overlay widget {:?} is missing",
                    slot_entity, overlay_entity
                ),
            }
        }

        let Some(action_entity) = slot.action else {
            warn!("Slot {:?} has no action bound, skipping update", slot_entity);
            continue;
        };
        let Ok(action) = actions.get(action_entity) else {
            warn!(
                "Slot {:?}: action entity {:?} is missing, skipping update",
                slot_entity, action_entity
            );
            continue;
        };

        apply_overlay(
            slot_entity,
            "cooldown",
            TimedState::new(action.remaining_cooldown, action.total_cooldown),
            &slot.cooldown,
            slot.cooldown_fill,
            slot.cooldown_text,
            &mut widgets,
        );
        apply_overlay(
            slot_entity,
            "duration",
            TimedState::new(action.remaining_duration, action.total_duration),
            &slot.duration,
            slot.duration_fill,
            slot.duration_text,
            &mut widgets,
        );
    }
}

/// Applies one overlay's presentation to its fill and text widgets.
fn apply_overlay(
    slot_entity: Entity,
    label: &str,
    state: TimedState,
    config: &OverlayConfig,
    fill_entity: Option<Entity>,
    text_entity: Option<Entity>,
    widgets: &mut Query<&mut SlotWidget>,
) {
    let presentation = match present(state, config.mode, config.enabled) {
        Ok(p) => p,
        Err(e) => {
            warn!("Slot {:?}: {} overlay skipped: {}", slot_entity, label, e);
            return;
        }
    };

    if let Some(fill_entity) = fill_entity {
        match widgets.get_mut(fill_entity) {
            Ok(mut widget) => {
                widget.set_visible(presentation.visible);
                if let Some(fill) = presentation.fill {
                    widget.set_fill(fill);
                }
            }
            Err(_) => warn!(
                "Slot {:?}: {} fill widget {:?} is missing",
                slot_entity, label, fill_entity
            ),
        }
    } else if config.enabled && presentation.visible {
        warn!("Slot {:?} has no {} fill widget", slot_entity, label);
    }

    let Some(text_entity) = text_entity else {
        return; // slots without a label element are valid
    };
    match widgets.get_mut(text_entity) {
        Ok(mut widget) => {
            let shown = presentation.visible && text_shown(config.show_text, state.remaining);
            widget.set_text_visible(shown);
            if let Some(text) = presentation.text.as_deref() {
                widget.set_text(text);
            }
        }
        Err(_) => warn!(
            "Slot {:?}: {} text widget {:?} is missing",
            slot_entity, label, text_entity
        ),
    }
}
