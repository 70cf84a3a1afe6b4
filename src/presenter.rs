//! Timed-state presentation core.
//!
//! This module turns a pair of `(remaining, total)` time values into what an
//! action-slot overlay should show: whether the overlay is visible, the fill
//! fraction of its progress bar, and a formatted countdown label. It is a
//! pure function of its inputs and carries no ECS state; the
//! [`slot_update_system`](crate::systems::slot::slot_update_system) calls it
//! once per overlay per tick and applies the result to widget components.
//!
//! # Display rules
//!
//! - `remaining == 0` hides the overlay (inactive/expired).
//! - An overlay whose configuration is disabled is hidden even while the
//!   timer runs.
//! - Otherwise the fill fraction is `remaining / total` and the label is
//!   formatted per [`DisplayMode`].
//!
//! The `MinutesOnly` and `HoursOnly` modes add one to the floored value, so
//! they never display "0m"/"0h" while time remains. The combined
//! `HoursThenMinutesThenSeconds` mode does not add one in its hour branch;
//! this asymmetry is intentional and pinned by tests.

use std::fmt;

/// A snapshot of a countdown, produced each tick by the bound action.
///
/// Invariant: `remaining <= total` when `total > 0`; `remaining == 0`
/// signals that the timer is inactive or expired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedState {
    /// Seconds left on the timer.
    pub remaining: f32,
    /// Full length of the timer in seconds.
    pub total: f32,
}

impl TimedState {
    pub fn new(remaining: f32, total: f32) -> Self {
        TimedState { remaining, total }
    }
}

/// How the countdown label is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Whole seconds, rounded up: `"5s"`.
    #[default]
    SecondsOnly,
    /// Whole minutes, floored plus one: `"2m"` (never `"0m"`).
    MinutesOnly,
    /// Whole hours, floored plus one: `"1h"` (never `"0h"`).
    HoursOnly,
    /// Largest applicable unit: hours, then minutes, then seconds, with
    /// sub-second values shown to two decimals.
    HoursThenMinutesThenSeconds,
}

impl DisplayMode {
    /// Parses a configuration string as used in `slotbar.ini`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "seconds" => Some(DisplayMode::SecondsOnly),
            "minutes" => Some(DisplayMode::MinutesOnly),
            "hours" => Some(DisplayMode::HoursOnly),
            "hms" => Some(DisplayMode::HoursThenMinutesThenSeconds),
            _ => None,
        }
    }
}

/// What a single overlay should show this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Whether the overlay (fill bar) is shown at all.
    pub visible: bool,
    /// Fill fraction in `[0, 1]`; only computed when visible.
    pub fill: Option<f32>,
    /// Formatted countdown label; only computed when visible.
    pub text: Option<String>,
}

impl Presentation {
    /// A hidden overlay: no fill, no text.
    pub fn hidden() -> Self {
        Presentation {
            visible: false,
            fill: None,
            text: None,
        }
    }
}

/// Non-fatal presentation errors. The caller logs and skips the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentError {
    /// `total == 0` while `remaining > 0`; the fill fraction is undefined.
    InvalidTimeRatio,
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::InvalidTimeRatio => {
                write!(f, "total time is zero while remaining time is positive")
            }
        }
    }
}

/// Computes the overlay presentation for one timed state.
///
/// Returns a hidden presentation when the timer is inactive
/// (`remaining == 0`) or when `use_overlay` is false. Otherwise the overlay
/// is visible with `fill = remaining / total` and a label formatted per
/// `mode`. A zero `total` with positive `remaining` is reported as
/// [`PresentError::InvalidTimeRatio`] instead of producing a NaN fill.
pub fn present(
    state: TimedState,
    mode: DisplayMode,
    use_overlay: bool,
) -> Result<Presentation, PresentError> {
    if state.remaining <= 0.0 || !use_overlay {
        return Ok(Presentation::hidden());
    }
    if state.total <= 0.0 {
        return Err(PresentError::InvalidTimeRatio);
    }
    let fill = (state.remaining / state.total).clamp(0.0, 1.0);
    Ok(Presentation {
        visible: true,
        fill: Some(fill),
        text: Some(format_countdown(state.remaining, mode)),
    })
}

/// Whether the text element of an overlay is shown.
///
/// Text visibility is gated independently of the fill bar: the label only
/// appears when the slot is configured to show text and time remains.
pub fn text_shown(show_text: bool, remaining: f32) -> bool {
    show_text && remaining > 0.0
}

/// Formats `remaining` seconds as a countdown label per `mode`.
pub fn format_countdown(remaining: f32, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::SecondsOnly => format!("{}s", remaining.ceil() as u64),
        DisplayMode::MinutesOnly => format!("{}m", (remaining / 60.0).floor() as u64 + 1),
        DisplayMode::HoursOnly => format!("{}h", (remaining / 3600.0).floor() as u64 + 1),
        DisplayMode::HoursThenMinutesThenSeconds => {
            let hours = (remaining / 3600.0).floor() as u64;
            let minutes = (remaining / 60.0).floor() as u64;
            if hours > 0 {
                format!("{}h", hours)
            } else if minutes > 0 {
                format!("{}m", minutes)
            } else if remaining > 1.0 {
                format!("{}s", remaining.floor() as u64)
            } else {
                // Sub-second countdowns show two decimals.
                format!("{}s", (remaining * 100.0).round() / 100.0)
            }
        }
    }
}
