//! Slot bar configuration resource.
//!
//! Manages overlay display defaults loaded from an INI configuration file.
//! Provides defaults for safe startup and a loader that keeps current values
//! for any missing key.
//!
//! # Configuration File Format
//!
//! ```ini
//! [cooldown]
//! mode = seconds
//! show_text = true
//!
//! [duration]
//! mode = hms
//! show_text = false
//! ```
//!
//! Valid modes are `seconds`, `minutes`, `hours` and `hms`.

use crate::components::actionslot::OverlayConfig;
use crate::presenter::DisplayMode;
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

const DEFAULT_COOLDOWN_MODE: DisplayMode = DisplayMode::SecondsOnly;
const DEFAULT_DURATION_MODE: DisplayMode = DisplayMode::HoursThenMinutesThenSeconds;
const DEFAULT_SHOW_COOLDOWN_TEXT: bool = true;
const DEFAULT_SHOW_DURATION_TEXT: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./slotbar.ini";

/// Overlay display defaults applied to slots spawned by a bar.
///
/// On first insertion into the ECS world, the
/// [`apply_barconfig_changes`](crate::systems::barconfig::apply_barconfig_changes)
/// system will attempt to load values from the configuration file.
#[derive(Resource, Debug, Clone)]
pub struct BarConfig {
    /// Label format for cooldown overlays.
    pub cooldown_mode: DisplayMode,
    /// Label format for duration overlays.
    pub duration_mode: DisplayMode,
    /// Whether cooldown overlays show a countdown label.
    pub show_cooldown_text: bool,
    /// Whether duration overlays show a countdown label.
    pub show_duration_text: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BarConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            cooldown_mode: DEFAULT_COOLDOWN_MODE,
            duration_mode: DEFAULT_DURATION_MODE,
            show_cooldown_text: DEFAULT_SHOW_COOLDOWN_TEXT,
            show_duration_text: DEFAULT_SHOW_DURATION_TEXT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// The overlay defaults for cooldown overlays.
    pub fn cooldown_overlay(&self) -> OverlayConfig {
        OverlayConfig {
            enabled: true,
            mode: self.cooldown_mode,
            show_text: self.show_cooldown_text,
        }
    }

    /// The overlay defaults for duration overlays.
    pub fn duration_overlay(&self) -> OverlayConfig {
        OverlayConfig {
            enabled: true,
            mode: self.duration_mode,
            show_text: self.show_duration_text,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Unknown mode
    /// strings are reported and ignored. Returns an error if the file
    /// cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(mode) = config.get("cooldown", "mode") {
            match DisplayMode::parse(&mode) {
                Some(parsed) => self.cooldown_mode = parsed,
                None => warn!("Unknown cooldown mode '{}' in config, keeping default", mode),
            }
        }
        if let Some(show) = config.getbool("cooldown", "show_text").ok().flatten() {
            self.show_cooldown_text = show;
        }

        if let Some(mode) = config.get("duration", "mode") {
            match DisplayMode::parse(&mode) {
                Some(parsed) => self.duration_mode = parsed,
                None => warn!("Unknown duration mode '{}' in config, keeping default", mode),
            }
        }
        if let Some(show) = config.getbool("duration", "show_text").ok().flatten() {
            self.show_duration_text = show;
        }

        info!(
            "Loaded config: cooldown mode={:?} text={}, duration mode={:?} text={}",
            self.cooldown_mode, self.show_cooldown_text, self.duration_mode, self.show_duration_text
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("cooldown", "mode", Some(mode_str(self.cooldown_mode).to_string()));
        config.set(
            "cooldown",
            "show_text",
            Some(self.show_cooldown_text.to_string()),
        );
        config.set("duration", "mode", Some(mode_str(self.duration_mode).to_string()));
        config.set(
            "duration",
            "show_text",
            Some(self.show_duration_text.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn mode_str(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::SecondsOnly => "seconds",
        DisplayMode::MinutesOnly => "minutes",
        DisplayMode::HoursOnly => "hours",
        DisplayMode::HoursThenMinutesThenSeconds => "hms",
    }
}
