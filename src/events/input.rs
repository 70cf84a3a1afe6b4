//! Logical shortcut events.
//!
//! The host maps physical keys to shortcut indices (key `1` → index 0 and
//! so on) and triggers a [`ShortcutEvent`] on press and release. The
//! [`shortcut_observer`](crate::systems::slotbar::shortcut_observer)
//! activates the slot bound to the index on press; releases are ignored.

use bevy_ecs::prelude::*;

/// Event emitted by the host when a slot shortcut is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShortcutEvent {
    /// The logical shortcut index, matched against slot bindings.
    pub index: usize,
    /// Whether the shortcut was pressed (true) or released (false).
    pub pressed: bool,
}
