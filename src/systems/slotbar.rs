//! Slot bar systems.
//!
//! This module provides systems for wiring actions to slots:
//! - [`bar_spawn_system`] – spawns slot and widget entities when a
//!   [`SlotBar`] is added
//! - [`bar_despawn`] – despawns bar entities and their slots
//! - [`shortcut_observer`] – activates a slot from a logical shortcut press
//! - [`button_click_observer`] – activates a slot from a button click
//!
//! Bars can list their bindings directly or reference a JSON layout file;
//! the spawn system handles both.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::action::Action;
use crate::components::actionslot::ActionSlot;
use crate::components::slotbar::{SlotBar, SlotBarData, SlotBinding};
use crate::components::widget::{SlotVisual, SlotWidget};
use crate::events::action::ActionUsedEvent;
use crate::events::button::ButtonClickEvent;
use crate::events::input::ShortcutEvent;
use crate::resources::barconfig::BarConfig;
use crate::resources::iconstore::IconStore;

/// Spawns slot and widget entities for newly added [`SlotBar`] components.
///
/// For each binding, spawns the overlay widget entities (cooldown fill and
/// text, duration fill and text, icon, disabled overlay) and a slot entity
/// wired to all of them, then stores the slot entity back on the binding.
/// If the bar references a layout file, its slot definitions are loaded
/// first and an [`Action`] entity is spawned per definition.
pub fn bar_spawn_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut SlotBar), Added<SlotBar>>,
    config: Res<BarConfig>,
    icons: Res<IconStore>,
) {
    for (bar_entity, mut bar) in query.iter_mut() {
        if let Some(path) = bar.layout_path.take() {
            match SlotBarData::load_from_file(&path) {
                Ok(data) => {
                    for def in &data.slots {
                        let action = commands
                            .spawn(Action::new(def.cooldown, def.duration))
                            .id();
                        let mut binding = SlotBinding::new(action);
                        binding.icon = def.icon.clone();
                        binding.shortcut = def.shortcut;
                        bar.bindings.push(binding);
                    }
                }
                Err(err) => {
                    warn!("Bar {:?}: failed to load layout {}: {}", bar_entity, path, err);
                }
            }
        }

        for binding in bar.bindings.iter_mut() {
            if binding.slot.is_some() {
                continue; // already wired
            }

            let cooldown_fill = commands.spawn(SlotWidget::default()).id();
            let cooldown_text = commands.spawn(SlotWidget::default()).id();
            let duration_fill = commands.spawn(SlotWidget::default()).id();
            let duration_text = commands.spawn(SlotWidget::default()).id();
            let disabled_overlay = commands.spawn(SlotWidget::default()).id();

            let mut icon_widget = SlotWidget::default();
            if let Some(icon_key) = &binding.icon {
                match icons.get(icon_key) {
                    Some(icon) => {
                        icon_widget.set_sprite(&icon.tex_key);
                        icon_widget.set_visible(true);
                    }
                    None => warn!(
                        "Bar {:?}: icon '{}' not found in IconStore",
                        bar_entity, icon_key
                    ),
                }
            }
            let icon = commands.spawn(icon_widget).id();

            let slot = ActionSlot {
                action: Some(binding.action),
                enabled: true,
                cooldown: config.cooldown_overlay(),
                duration: config.duration_overlay(),
                cooldown_fill: Some(cooldown_fill),
                cooldown_text: Some(cooldown_text),
                duration_fill: Some(duration_fill),
                duration_text: Some(duration_text),
                icon: Some(icon),
                disabled_overlay: Some(disabled_overlay),
                button: binding.button,
            };
            binding.slot = Some(commands.spawn(slot).id());
        }
    }
}

/// Despawns all bar-related entities.
///
/// Removes slot entities, their widget entities, and the bar entity itself.
/// Action entities are owned by the host and left alone.
pub fn bar_despawn(
    mut commands: Commands,
    query: Query<(Entity, &SlotBar)>,
    slots: Query<&ActionSlot>,
) {
    for (bar_entity, bar) in query.iter() {
        for binding in bar.bindings.iter() {
            let Some(slot_entity) = binding.slot else {
                continue;
            };
            if let Ok(slot) = slots.get(slot_entity) {
                for widget_entity in slot.widget_entities() {
                    commands.entity(widget_entity).try_despawn();
                }
            }
            commands.entity(slot_entity).try_despawn();
        }
        commands.entity(bar_entity).try_despawn();
    }
}

/// Activates the slot bound to a pressed shortcut.
///
/// Only key presses are handled; releases are ignored. Disabled slots and
/// actions still on cooldown do not fire.
pub fn shortcut_observer(
    trigger: On<ShortcutEvent>,
    bars: Query<&SlotBar>,
    slots: Query<&ActionSlot>,
    mut actions: Query<&mut Action>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if !event.pressed {
        return; // Only handle key press, not release
    }
    for bar in bars.iter() {
        if let Some(binding) = bar.binding_for_shortcut(event.index) {
            activate_binding(binding, &slots, &mut actions, &mut commands);
        }
    }
}

/// Activates the slot bound to a clicked button widget.
pub fn button_click_observer(
    trigger: On<ButtonClickEvent>,
    bars: Query<&SlotBar>,
    slots: Query<&ActionSlot>,
    mut actions: Query<&mut Action>,
    mut commands: Commands,
) {
    let event = trigger.event();
    for bar in bars.iter() {
        if let Some(binding) = bar.binding_for_button(event.button) {
            activate_binding(binding, &slots, &mut actions, &mut commands);
        }
    }
}

/// Uses the bound action if the slot is enabled and the action is ready.
///
/// Triggers [`ActionUsedEvent`] on success.
fn activate_binding(
    binding: &SlotBinding,
    slots: &Query<&ActionSlot>,
    actions: &mut Query<&mut Action>,
    commands: &mut Commands,
) {
    let Some(slot_entity) = binding.slot else {
        warn!("Binding for action {:?} has no spawned slot", binding.action);
        return;
    };
    let Ok(slot) = slots.get(slot_entity) else {
        warn!("Slot entity {:?} is missing, ignoring activation", slot_entity);
        return;
    };
    if !slot.enabled {
        return;
    }
    let Ok(mut action) = actions.get_mut(binding.action) else {
        warn!(
            "Slot {:?}: action entity {:?} is missing, ignoring activation",
            slot_entity, binding.action
        );
        return;
    };
    if action.use_action() {
        commands.trigger(ActionUsedEvent {
            slot: slot_entity,
            action: binding.action,
        });
    }
}
