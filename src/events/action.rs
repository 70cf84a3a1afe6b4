//! Action usage events.
//!
//! Triggered after a slot activation successfully calls
//! [`Action::use_action`](crate::components::action::Action::use_action).
//! Hosts can observe this to play sounds, spawn effects or run game logic;
//! the slot layer itself only updates the overlay widgets.

use bevy_ecs::prelude::*;

/// Event emitted when a slot's action was used.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionUsedEvent {
    /// The slot entity that was activated.
    pub slot: Entity,
    /// The action entity that was used.
    pub action: Entity,
}
