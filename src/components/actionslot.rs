//! Action slot component.
//!
//! An [`ActionSlot`] binds one [`Action`](crate::components::action::Action)
//! entity to the widget entities that display it: a cooldown overlay, a
//! duration overlay (each a fill bar plus an optional countdown label), an
//! icon, a disabled overlay and a button. The
//! [`slot_update_system`](crate::systems::slot::slot_update_system) refreshes
//! the widgets each tick from the action's timers.

use crate::presenter::DisplayMode;
use bevy_ecs::prelude::{Component, Entity};

/// Display configuration for one overlay of a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// Disabled overlays stay hidden even while their timer runs.
    pub enabled: bool,
    /// Countdown label format.
    pub mode: DisplayMode,
    /// Whether the countdown label is shown at all.
    pub show_text: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            enabled: true,
            mode: DisplayMode::default(),
            show_text: true,
        }
    }
}

#[derive(Component, Clone, Debug, Default)]
pub struct ActionSlot {
    /// The bound action entity. Absent references are logged and skipped.
    pub action: Option<Entity>,
    /// Disabled slots show the disabled overlay and ignore activation.
    pub enabled: bool,
    pub cooldown: OverlayConfig,
    pub duration: OverlayConfig,
    // Widget entities, each holding a SlotWidget.
    pub cooldown_fill: Option<Entity>,
    pub cooldown_text: Option<Entity>,
    pub duration_fill: Option<Entity>,
    pub duration_text: Option<Entity>,
    pub icon: Option<Entity>,
    pub disabled_overlay: Option<Entity>,
    /// Button widget entity the slot reacts to on click.
    pub button: Option<Entity>,
}

impl ActionSlot {
    pub fn new() -> Self {
        ActionSlot {
            enabled: true,
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: Entity) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_cooldown(mut self, config: OverlayConfig) -> Self {
        self.cooldown = config;
        self
    }

    pub fn with_duration(mut self, config: OverlayConfig) -> Self {
        self.duration = config;
        self
    }

    pub fn with_button(mut self, button: Entity) -> Self {
        self.button = Some(button);
        self
    }

    /// All widget entities spawned for this slot, for teardown.
    pub fn widget_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        [
            self.cooldown_fill,
            self.cooldown_text,
            self.duration_fill,
            self.duration_text,
            self.icon,
            self.disabled_overlay,
        ]
        .into_iter()
        .flatten()
    }
}
