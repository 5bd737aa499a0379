use hand_recorder_core::{DisplaySink, FrameImage, Landmark, render::Color};

use tracing::{debug, trace};

/// Display sink for running without a window.
///
/// Keeps the canvas size in sync with the source and counts what would have
/// been drawn.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) frames: u64,
    pub(crate) hands: u64,
}

impl DisplaySink for HeadlessDisplay {
    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            debug!(
                width,
                height,
                frames = self.frames,
                hands = self.hands,
                "Canvas resized to source resolution"
            );
            self.width = width;
            self.height = height;
        }
    }

    fn clear(&mut self) {}

    fn draw_image(&mut self, _image: &FrameImage) {
        self.frames += 1;
    }

    fn draw_connectors(
        &mut self,
        _landmarks: &[Landmark],
        connections: &[(usize, usize)],
        _color: Color,
        _line_width: f32,
    ) {
        trace!(connections = connections.len(), "Connectors drawn");
    }

    fn draw_landmarks(&mut self, landmarks: &[Landmark], _color: Color, _line_width: f32) {
        self.hands += 1;
        trace!(landmarks = landmarks.len(), "Landmarks drawn");
    }
}
