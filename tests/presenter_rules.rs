//! Presentation rule tests for the pure timed-state core.

use slotbar::presenter::{
    format_countdown, present, text_shown, DisplayMode, PresentError, Presentation, TimedState,
};

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn visible(remaining: f32, total: f32, mode: DisplayMode) -> Presentation {
    present(TimedState::new(remaining, total), mode, true).expect("valid state")
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn zero_remaining_is_hidden_in_every_mode() {
    let modes = [
        DisplayMode::SecondsOnly,
        DisplayMode::MinutesOnly,
        DisplayMode::HoursOnly,
        DisplayMode::HoursThenMinutesThenSeconds,
    ];
    for mode in modes {
        for use_overlay in [true, false] {
            let p = present(TimedState::new(0.0, 10.0), mode, use_overlay).unwrap();
            assert!(!p.visible);
            assert!(p.fill.is_none());
            assert!(p.text.is_none());
        }
    }
}

#[test]
fn disabled_overlay_is_hidden_while_running() {
    let p = present(TimedState::new(5.0, 10.0), DisplayMode::SecondsOnly, false).unwrap();
    assert!(!p.visible);
    assert!(p.fill.is_none());
    assert!(p.text.is_none());
}

#[test]
fn running_overlay_is_visible() {
    let p = visible(5.0, 10.0, DisplayMode::SecondsOnly);
    assert!(p.visible);
    assert!(p.fill.is_some());
    assert!(p.text.is_some());
}

#[test]
fn zero_remaining_wins_over_zero_total() {
    // An inactive timer is hidden, never an error, even with total == 0.
    let p = present(TimedState::new(0.0, 0.0), DisplayMode::SecondsOnly, true).unwrap();
    assert!(!p.visible);
}

// =============================================================================
// Fill fraction
// =============================================================================

#[test]
fn fill_is_remaining_over_total() {
    let p = visible(2.5, 10.0, DisplayMode::SecondsOnly);
    assert!(approx_eq(p.fill.unwrap(), 0.25));
}

#[test]
fn fill_is_one_at_full_time() {
    let p = visible(10.0, 10.0, DisplayMode::SecondsOnly);
    assert!(approx_eq(p.fill.unwrap(), 1.0));
}

#[test]
fn fill_stays_in_unit_range() {
    for remaining in [0.001, 1.0, 4.2, 9.999, 10.0] {
        let p = visible(remaining, 10.0, DisplayMode::SecondsOnly);
        let fill = p.fill.unwrap();
        assert!((0.0..=1.0).contains(&fill));
    }
}

#[test]
fn zero_total_with_remaining_is_an_error() {
    let result = present(TimedState::new(5.0, 0.0), DisplayMode::SecondsOnly, true);
    assert_eq!(result, Err(PresentError::InvalidTimeRatio));
}

// =============================================================================
// Countdown formatting
// =============================================================================

#[test]
fn seconds_only_rounds_up() {
    assert_eq!(format_countdown(4.2, DisplayMode::SecondsOnly), "5s");
    assert_eq!(format_countdown(4.0, DisplayMode::SecondsOnly), "4s");
    assert_eq!(format_countdown(0.1, DisplayMode::SecondsOnly), "1s");
}

#[test]
fn minutes_only_floors_and_adds_one() {
    assert_eq!(format_countdown(61.0, DisplayMode::MinutesOnly), "2m");
    assert_eq!(format_countdown(59.0, DisplayMode::MinutesOnly), "1m");
    // Always at least "1m", even for tiny remainders.
    assert_eq!(format_countdown(0.5, DisplayMode::MinutesOnly), "1m");
}

#[test]
fn hours_only_floors_and_adds_one() {
    assert_eq!(format_countdown(3601.0, DisplayMode::HoursOnly), "2h");
    assert_eq!(format_countdown(10.0, DisplayMode::HoursOnly), "1h");
}

#[test]
fn combined_mode_picks_largest_unit() {
    let mode = DisplayMode::HoursThenMinutesThenSeconds;
    assert_eq!(format_countdown(3661.0, mode), "1h");
    assert_eq!(format_countdown(90.0, mode), "1m");
    assert_eq!(format_countdown(30.0, mode), "30s");
    assert_eq!(format_countdown(0.5, mode), "0.5s");
}

#[test]
fn combined_mode_shows_two_decimals_at_one_second_or_less() {
    let mode = DisplayMode::HoursThenMinutesThenSeconds;
    assert_eq!(format_countdown(1.0, mode), "1s");
    assert_eq!(format_countdown(0.456, mode), "0.46s");
    assert_eq!(format_countdown(1.7, mode), "1s"); // > 1: floored whole seconds
}

#[test]
fn hour_increment_differs_between_modes() {
    // The dedicated HoursOnly mode adds one to the floored hour count; the
    // combined mode does not. Pins the asymmetric behavior.
    assert_eq!(format_countdown(3661.0, DisplayMode::HoursOnly), "2h");
    assert_eq!(
        format_countdown(3661.0, DisplayMode::HoursThenMinutesThenSeconds),
        "1h"
    );
}

// =============================================================================
// Purity and text gating
// =============================================================================

#[test]
fn present_is_idempotent() {
    let state = TimedState::new(4.2, 10.0);
    let first = present(state, DisplayMode::SecondsOnly, true).unwrap();
    let second = present(state, DisplayMode::SecondsOnly, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn text_gating_requires_flag_and_remaining_time() {
    assert!(text_shown(true, 5.0));
    assert!(!text_shown(false, 5.0));
    assert!(!text_shown(true, 0.0));
    assert!(!text_shown(false, 0.0));
}

#[test]
fn display_mode_parses_config_strings() {
    assert_eq!(DisplayMode::parse("seconds"), Some(DisplayMode::SecondsOnly));
    assert_eq!(DisplayMode::parse("minutes"), Some(DisplayMode::MinutesOnly));
    assert_eq!(DisplayMode::parse("hours"), Some(DisplayMode::HoursOnly));
    assert_eq!(
        DisplayMode::parse("hms"),
        Some(DisplayMode::HoursThenMinutesThenSeconds)
    );
    assert_eq!(DisplayMode::parse("fortnights"), None);
}
