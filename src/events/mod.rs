//! Event types exchanged between the host and the slot-bar layer.
//!
//! The host translates hardware input into the logical events defined here
//! and triggers them on the world; observers registered by this crate react
//! to them. The crate never reads keyboards or pointers itself.
//!
//! Submodules:
//! - [`input`] – logical shortcut presses bound to bar slots
//! - [`button`] – clicks on button widget entities
//! - [`action`] – notification that a slot's action was used

pub mod action;
pub mod button;
pub mod input;
