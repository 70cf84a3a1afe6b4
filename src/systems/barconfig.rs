//! Configuration loading system.
//!
//! Loads [`BarConfig`](crate::resources::barconfig::BarConfig) values from
//! its INI file the first time the resource is seen. A missing or malformed
//! file is reported and the defaults stay in place.

use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::barconfig::BarConfig;

/// Loads the configuration file once after the resource is inserted.
pub fn apply_barconfig_changes(mut config: ResMut<BarConfig>, mut loaded: Local<bool>) {
    if *loaded {
        return;
    }
    *loaded = true;
    if let Err(e) = config.load_from_file() {
        warn!("Using default bar configuration: {}", e);
    }
}
