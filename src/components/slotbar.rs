//! Slot bar component for wiring actions to slots.
//!
//! A [`SlotBar`] lists the actions a player can trigger and how each one is
//! reachable: a shortcut index, an icon key and optionally a button widget
//! entity. When the component is added, the
//! [`bar_spawn_system`](crate::systems::slotbar::bar_spawn_system) spawns a
//! slot entity plus its widget entities for every binding.
//!
//! Bars can also be defined externally as JSON and referenced by path:
//!
//! ```json
//! {
//!   "slots": [
//!     { "icon": "fireball", "shortcut": 0, "cooldown": 8.0, "duration": 3.0 },
//!     { "icon": "sprint", "shortcut": 1, "cooldown": 30.0, "duration": 10.0 }
//!   ]
//! }
//! ```
//!
//! # Related
//!
//! - [`crate::systems::slotbar`] – spawn/despawn and activation observers
//! - [`crate::resources::barconfig::BarConfig`] – overlay defaults applied
//!   to spawned slots

use bevy_ecs::prelude::{Component, Entity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One action wired into a bar.
#[derive(Debug, Clone)]
pub struct SlotBinding {
    /// The action entity this binding presents.
    pub action: Entity,
    /// Icon key looked up in [`IconStore`](crate::resources::iconstore::IconStore).
    pub icon: Option<String>,
    /// Logical shortcut index matched against
    /// [`ShortcutEvent`](crate::events::input::ShortcutEvent).
    pub shortcut: Option<usize>,
    /// Button widget entity whose clicks activate this binding.
    pub button: Option<Entity>,
    /// The spawned slot entity, filled in by the spawn system.
    pub slot: Option<Entity>,
}

impl SlotBinding {
    pub fn new(action: Entity) -> Self {
        SlotBinding {
            action,
            icon: None,
            shortcut: None,
            button: None,
            slot: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_shortcut(mut self, index: usize) -> Self {
        self.shortcut = Some(index);
        self
    }

    pub fn with_button(mut self, button: Entity) -> Self {
        self.button = Some(button);
        self
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct SlotBar {
    pub bindings: Vec<SlotBinding>,
    /// Optional JSON file with additional slot definitions, loaded on spawn.
    pub layout_path: Option<String>,
}

impl SlotBar {
    pub fn new(bindings: Vec<SlotBinding>) -> Self {
        SlotBar {
            bindings,
            layout_path: None,
        }
    }

    pub fn from_layout(path: impl Into<String>) -> Self {
        SlotBar {
            bindings: Vec::new(),
            layout_path: Some(path.into()),
        }
    }

    /// The binding wired to `shortcut`, if any.
    pub fn binding_for_shortcut(&self, shortcut: usize) -> Option<&SlotBinding> {
        self.bindings
            .iter()
            .find(|b| b.shortcut == Some(shortcut))
    }

    /// The binding wired to the button entity, if any.
    pub fn binding_for_button(&self, button: Entity) -> Option<&SlotBinding> {
        self.bindings.iter().find(|b| b.button == Some(button))
    }
}

/// External bar definition loaded from JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotBarData {
    pub slots: Vec<SlotDef>,
}

/// One slot definition in a bar layout file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotDef {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub shortcut: Option<usize>,
    /// Cooldown length in seconds for the spawned action.
    pub cooldown: f32,
    /// Duration length in seconds for the spawned action.
    #[serde(default)]
    pub duration: f32,
}

impl SlotBarData {
    /// Parses a bar definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse bar layout: {}", e))
    }

    /// Loads a bar definition from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read bar layout file: {}", e))?;
        Self::from_json(&contents)
    }
}
