use crate::config::default_detector_command;

use hand_recorder_core::DetectorOptions;
use serde::{Deserialize, Serialize};

/// External hand-landmark detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Program and arguments that print one detection result per line.
    #[serde(default = "default_detector_command")]
    pub command: Vec<String>,

    /// Options appended to the command line, passed through untouched.
    #[serde(flatten)]
    pub options: DetectorOptions,
}
