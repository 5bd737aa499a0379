use crate::{
    CaptureError,
    session::{DEFAULT_COUNTDOWN_PERIOD, DEFAULT_RECORD_DURATION, SessionConfig},
};

use std::time::Duration;

/// WHAT: Default config is a 5 second window with 500ms ticks
/// WHY: Matches the recording window users expect out of the box
#[test]
fn given_default_config_when_inspecting_then_five_seconds_and_half_second_ticks() {
    // Given/When: The default configuration
    let config = SessionConfig::default();

    // Then: 5s window, 500ms ticks, countdown from 5
    assert_eq!(config.record_duration(), DEFAULT_RECORD_DURATION);
    assert_eq!(config.countdown_period(), DEFAULT_COUNTDOWN_PERIOD);
    assert_eq!(config.countdown_start(), 5);
}

/// WHAT: Sub-second windows are rejected
/// WHY: The countdown display counts whole seconds
#[test]
fn given_sub_second_duration_when_building_config_then_invalid_config() {
    // Given/When: A 500ms recording window
    let result = SessionConfig::new(Duration::from_millis(500), DEFAULT_COUNTDOWN_PERIOD);

    // Then: InvalidConfig
    assert!(matches!(result, Err(CaptureError::InvalidConfig { .. })));
}

/// WHAT: Zero countdown period is rejected
/// WHY: A zero-period interval would spin the controller loop
#[test]
fn given_zero_period_when_building_config_then_invalid_config() {
    // Given/When: A zero tick period
    let result = SessionConfig::new(DEFAULT_RECORD_DURATION, Duration::ZERO);

    // Then: InvalidConfig
    assert!(matches!(result, Err(CaptureError::InvalidConfig { .. })));
}
