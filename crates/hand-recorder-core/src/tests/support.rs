use crate::{
    DisplaySink,
    landmark::{DetectionResult, FrameImage, HandLandmarks, Landmark},
    render::Color,
};

use std::sync::{Arc, Mutex};

// Test constants
pub(crate) const FULL_HAND_LANDMARKS: usize = 21;
pub(crate) const FRAME_WIDTH: u32 = 640;
pub(crate) const FRAME_HEIGHT: u32 = 480;

/// A hand whose landmark `i` sits at `(i, i + 0.25, -i)` scaled into 0..1.
pub(crate) fn hand(landmark_count: usize) -> HandLandmarks {
    (0..landmark_count)
        .map(|i| {
            let v = i as f32 / 100.0;
            Landmark::new(v, v + 0.25, -v)
        })
        .collect()
}

pub(crate) fn frame_with_hands(hands: Vec<HandLandmarks>) -> DetectionResult {
    DetectionResult {
        image: FrameImage::with_size(FRAME_WIDTH, FRAME_HEIGHT),
        multi_hand_landmarks: hands,
    }
}

pub(crate) fn empty_frame() -> DetectionResult {
    frame_with_hands(Vec::new())
}

/// One call made against a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Resize(u32, u32),
    Clear,
    Image,
    Connectors { landmarks: usize, connections: usize, color: Color },
    Landmarks { landmarks: usize, color: Color },
}

/// Display sink that records every draw call into a shared log.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingDisplay {
    pub(crate) calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingDisplay {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn push(&self, call: DrawCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DisplaySink for RecordingDisplay {
    fn resize(&mut self, width: u32, height: u32) {
        self.push(DrawCall::Resize(width, height));
    }

    fn clear(&mut self) {
        self.push(DrawCall::Clear);
    }

    fn draw_image(&mut self, _image: &FrameImage) {
        self.push(DrawCall::Image);
    }

    fn draw_connectors(
        &mut self,
        landmarks: &[Landmark],
        connections: &[(usize, usize)],
        color: Color,
        _line_width: f32,
    ) {
        self.push(DrawCall::Connectors {
            landmarks: landmarks.len(),
            connections: connections.len(),
            color,
        });
    }

    fn draw_landmarks(&mut self, landmarks: &[Landmark], color: Color, _line_width: f32) {
        self.push(DrawCall::Landmarks {
            landmarks: landmarks.len(),
            color,
        });
    }
}
