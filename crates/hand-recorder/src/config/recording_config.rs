use crate::config::{default_countdown_period_ms, default_duration_secs};

use serde::{Deserialize, Serialize};

/// Recording window timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Length of one recording window in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,

    /// Interval between countdown display updates in milliseconds.
    #[serde(default = "default_countdown_period_ms")]
    pub countdown_period_ms: u64,
}
