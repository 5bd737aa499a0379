use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One detected hand keypoint, normalized to the frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0.0 at the left edge and 1.0 at the right.
    pub x: f32,
    /// Vertical position, 0.0 at the top edge and 1.0 at the bottom.
    pub y: f32,
    /// Depth relative to the wrist; smaller is closer to the camera.
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from its three coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates in the order they are written to a sample buffer.
    pub const fn coordinates(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Ordered landmark list for one detected hand.
pub type HandLandmarks = Vec<Landmark>;

/// The raw frame a detection was produced from.
///
/// Only the native resolution matters to the recorder. Pixel data is
/// carried for display sinks that draw it and is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameImage {
    /// Native frame width in pixels.
    pub width: u32,
    /// Native frame height in pixels.
    pub height: u32,
    /// RGBA pixel data, if the source provides it.
    #[serde(skip)]
    pub rgba: Option<Arc<[u8]>>,
}

impl FrameImage {
    /// A frame with known dimensions and no pixel data.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: None,
        }
    }
}

/// One processed frame as reported by the hand-landmark detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The frame the landmarks were detected on.
    #[serde(default)]
    pub image: FrameImage,
    /// Landmarks per detected hand, in detection order. Empty when no hand
    /// was found.
    #[serde(
        default,
        rename = "multiHandLandmarks",
        alias = "multi_hand_landmarks"
    )]
    pub multi_hand_landmarks: Vec<HandLandmarks>,
}

impl DetectionResult {
    /// The hand that gets sampled: index 0 of however many were reported.
    pub fn primary_hand(&self) -> Option<&[Landmark]> {
        self.multi_hand_landmarks
            .first()
            .map(Vec::as_slice)
            .filter(|hand| !hand.is_empty())
    }

    /// Number of hands reported for this frame.
    pub fn hand_count(&self) -> usize {
        self.multi_hand_landmarks.len()
    }
}
