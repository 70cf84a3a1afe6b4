//! Slotbar library.
//!
//! An action-slot UI layer for 2D games built on `bevy_ecs`: each slot shows
//! an icon, a cooldown/duration fill overlay and an optional countdown
//! label, bound to a timed action. A slot-bar manager wires actions to
//! slots, keyboard shortcuts and button widgets. The host engine owns
//! rendering and hardware input; this crate exposes plain widget state and
//! consumes logical events.

pub mod components;
pub mod events;
pub mod presenter;
pub mod resources;
pub mod systems;
