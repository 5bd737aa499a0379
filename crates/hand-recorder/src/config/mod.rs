#[allow(clippy::module_inception)]
mod config;
mod detector_config;
mod recording_config;

pub(crate) use {
    config::Config, detector_config::DetectorConfig, recording_config::RecordingConfig,
};

pub(crate) const DEFAULT_DURATION_SECS: u64 = 5;
pub(crate) const DEFAULT_COUNTDOWN_PERIOD_MS: u64 = 500;

pub(crate) fn default_duration_secs() -> u64 {
    DEFAULT_DURATION_SECS
}

pub(crate) fn default_countdown_period_ms() -> u64 {
    DEFAULT_COUNTDOWN_PERIOD_MS
}

pub(crate) fn default_detector_command() -> Vec<String> {
    vec!["python3".to_string(), "hand_landmarks.py".to_string()]
}
