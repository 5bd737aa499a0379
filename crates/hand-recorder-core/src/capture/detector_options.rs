use serde::{Deserialize, Serialize};

/// Settings handed straight to the hand-landmark detector.
///
/// The recorder never interprets these; they only travel from configuration
/// to whichever detector backs the capture source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    /// Maximum number of hands the detector reports per frame.
    pub max_num_hands: u32,
    /// Landmark model complexity (0 or 1).
    pub model_complexity: u32,
    /// Minimum confidence for the palm detector to report a hand.
    pub min_detection_confidence: f32,
    /// Minimum confidence to keep tracking a hand between frames.
    pub min_tracking_confidence: f32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}
