// The timed action model a slot presents: cooldown and duration counters.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Action {
    /// Seconds until the action can be used again. Zero means ready.
    pub remaining_cooldown: f32,
    /// Cooldown length started by [`Action::use_action`].
    pub total_cooldown: f32,
    /// Seconds the action's effect stays active. Zero means inactive.
    pub remaining_duration: f32,
    /// Duration length started by [`Action::use_action`].
    pub total_duration: f32,
}

impl Action {
    pub fn new(cooldown: f32, duration: f32) -> Self {
        Action {
            remaining_cooldown: 0.0,
            total_cooldown: cooldown,
            remaining_duration: 0.0,
            total_duration: duration,
        }
    }

    /// Whether the action is off cooldown.
    pub fn ready(&self) -> bool {
        self.remaining_cooldown <= 0.0
    }

    /// Starts the action's duration and cooldown.
    ///
    /// Returns `false` without changing anything while still on cooldown.
    pub fn use_action(&mut self) -> bool {
        if !self.ready() {
            return false;
        }
        self.remaining_duration = self.total_duration;
        self.remaining_cooldown = self.total_cooldown;
        true
    }
}
