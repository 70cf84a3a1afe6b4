//! Action timer system.
//!
//! This module provides the [`action_tick_system`] that counts down the
//! cooldown and duration timers of every
//! [`Action`](crate::components::action::Action) component.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `action_tick_system` iterates all entities with an `Action`
//! 2. Decrements `remaining_cooldown` and `remaining_duration` by
//!    `delta * time_scale`
//! 3. Clamps both at zero; a zero remaining value is what hides the
//!    matching overlay on the next slot update
//!
//! # Time Scaling
//!
//! The countdown respects
//! [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime), so
//! slow-motion effects stretch cooldowns accordingly.

use bevy_ecs::prelude::*;

use crate::components::action::Action;
use crate::resources::worldtime::WorldTime;

/// Decrements cooldown and duration timers, clamping at zero.
pub fn action_tick_system(world_time: Res<WorldTime>, mut query: Query<&mut Action>) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for mut action in query.iter_mut() {
        if action.remaining_cooldown > 0.0 {
            action.remaining_cooldown = (action.remaining_cooldown - dt).max(0.0);
        }
        if action.remaining_duration > 0.0 {
            action.remaining_duration = (action.remaining_duration - dt).max(0.0);
        }
    }
}
