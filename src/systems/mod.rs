//! Slot bar systems.
//!
//! This module groups the ECS systems that advance timers and refresh the
//! slot widgets.
//!
//! Submodules overview
//! - [`time`] – update simulation time and delta
//! - [`barconfig`] – load overlay defaults from the configuration file
//! - [`action`] – tick down action cooldown and duration counters
//! - [`slot`] – recompute overlay visibility, fill and labels per tick
//! - [`slotbar`] – bar spawning/teardown and shortcut/button activation

pub mod action;
pub mod barconfig;
pub mod slot;
pub mod slotbar;
pub mod time;
