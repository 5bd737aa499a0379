use crate::{AppError, config::Config};

use std::time::Duration;

/// WHAT: The default config records five seconds with half-second countdown ticks
/// WHY: A fresh install must behave like the documented defaults
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_config_when_deriving_session_then_five_second_window() {
    // Given: The default configuration
    let config = Config::default();

    // When: Validating and deriving session timing
    config.validate().unwrap();
    let session = config.session_config().unwrap();

    // Then: The window and countdown match the defaults
    assert_eq!(session.record_duration(), Duration::from_secs(5));
    assert_eq!(session.countdown_period(), Duration::from_millis(500));
    assert_eq!(config.detector.options.max_num_hands, 1);
}

/// WHAT: Missing tables and keys fall back to defaults
/// WHY: Users only write the values they want to change
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_toml_when_parsing_then_missing_values_defaulted() {
    // Given: A document overriding two values
    let contents = r#"
        [recording]
        duration_secs = 3

        [detector]
        min_detection_confidence = 0.7
    "#;

    // When: Parsing it
    let config = Config::from_toml_str(contents).unwrap();

    // Then: Overrides apply and everything else is default
    let defaults = Config::default();
    assert_eq!(config.recording.duration_secs, 3);
    assert_eq!(
        config.recording.countdown_period_ms,
        defaults.recording.countdown_period_ms
    );
    assert_eq!(config.detector.command, defaults.detector.command);
    assert_eq!(config.detector.options.min_detection_confidence, 0.7);
    assert_eq!(config.detector.options.min_tracking_confidence, 0.5);
}

/// WHAT: An empty document yields the default config
/// WHY: A blank config file must not prevent startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_parsing_then_default_config() {
    // Given/When: Parsing an empty document
    let config = Config::from_toml_str("").unwrap();

    // Then: It equals the default
    assert_eq!(config, Config::default());
}

/// WHAT: The default config survives serialization
/// WHY: save() writes what load() must read back
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_config_when_serialized_then_parses_back_equal() {
    // Given: The default configuration rendered as TOML
    let contents = toml::to_string_pretty(&Config::default()).unwrap();

    // When: Parsing it back
    let config = Config::from_toml_str(&contents).unwrap();

    // Then: Nothing is lost
    assert_eq!(config, Config::default());
}

/// WHAT: Confidences outside [0, 1] are rejected
/// WHY: The detector would otherwise start with meaningless thresholds
#[test]
fn given_out_of_range_confidence_when_parsing_then_config_error() {
    // Given: A tracking confidence above 1
    let contents = "[detector]\nmin_tracking_confidence = 1.5\n";

    // When: Parsing it
    let result = Config::from_toml_str(contents);

    // Then: Validation fails
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: An empty detector command is rejected
/// WHY: There would be no program to spawn
#[test]
fn given_empty_command_when_parsing_then_config_error() {
    // Given: A detector table with no command
    let contents = "[detector]\ncommand = []\n";

    // When: Parsing it
    let result = Config::from_toml_str(contents);

    // Then: Validation fails
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: A zero-second window is rejected
/// WHY: A window must cover at least one countdown second
#[test]
fn given_zero_duration_when_parsing_then_capture_error() {
    // Given: A recording window of zero seconds
    let contents = "[recording]\nduration_secs = 0\n";

    // When: Parsing it
    let result = Config::from_toml_str(contents);

    // Then: The session config rejects it
    assert!(matches!(result, Err(AppError::Capture { .. })));
}

/// WHAT: Zero hands is rejected
/// WHY: The detector could never report a hand to sample
#[test]
fn given_zero_max_hands_when_parsing_then_config_error() {
    // Given: max_num_hands set to zero
    let contents = "[detector]\nmax_num_hands = 0\n";

    // When: Parsing it
    let result = Config::from_toml_str(contents);

    // Then: Validation fails
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}
