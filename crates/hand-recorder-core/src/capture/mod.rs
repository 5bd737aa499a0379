//! Detection sources and the loop that feeds their results to the controller.

mod capture_loop;
mod detector_options;
mod source;

pub use {
    capture_loop::{CaptureLoop, CaptureStats},
    detector_options::DetectorOptions,
    source::{DetectionSource, DetectorPipeline, FrameSource, HandDetector},
};
