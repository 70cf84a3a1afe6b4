//! ECS components for action slots.
//!
//! This module groups the component types the slot-bar layer attaches to
//! entities. Components hold plain data; the systems in
//! [`crate::systems`] read and mutate them each tick.
//!
//! Submodules overview:
//! - [`action`] – the timed action model: cooldown/duration counters and use
//! - [`actionslot`] – one slot: overlay configuration and widget wiring
//! - [`slotbar`] – the manager that binds a list of actions to slots,
//!   shortcuts and buttons
//! - [`widget`] – the opaque visual handle the host renderer reads

pub mod action;
pub mod actionslot;
pub mod slotbar;
pub mod widget;
