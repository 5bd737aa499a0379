//! Hand landmark data as reported by the detector.

mod detection;

pub use detection::{DetectionResult, FrameImage, HandLandmarks, Landmark};
