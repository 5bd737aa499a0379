//! Skeleton overlay drawing.
//!
//! The recorder never owns a drawing surface. Frames and overlays are pushed
//! to a [`DisplaySink`] supplied by the embedding application.

use crate::landmark::{DetectionResult, FrameImage, Landmark};

/// Landmark index pairs joined by a line in the hand skeleton.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    // Thumb
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    // Index finger
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    // Middle finger
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    // Ring finger
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    // Pinky and palm base
    (13, 17),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// RGB color for overlay strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// Stroke settings for the skeleton overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Color of the bone lines.
    pub connector_color: Color,
    /// Width of the bone lines.
    pub connector_width: f32,
    /// Color of the keypoint markers.
    pub landmark_color: Color,
    /// Width of the keypoint marker outline.
    pub landmark_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            connector_color: Color::from_hex(0xFFFFFF),
            connector_width: 4.0,
            landmark_color: Color::from_hex(0x1E39D4),
            landmark_width: 2.0,
        }
    }
}

/// A drawable surface.
pub trait DisplaySink: Send {
    /// Match the surface to the source frame's native resolution.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw the raw frame scaled to the surface.
    fn draw_image(&mut self, image: &FrameImage);

    /// Draw lines between landmark pairs. Every index in `connections` is
    /// within `landmarks`.
    fn draw_connectors(
        &mut self,
        landmarks: &[Landmark],
        connections: &[(usize, usize)],
        color: Color,
        line_width: f32,
    );

    /// Draw a marker at each landmark.
    fn draw_landmarks(&mut self, landmarks: &[Landmark], color: Color, line_width: f32);
}

/// Draw one processed frame and the skeleton of every detected hand.
pub fn render_detection<D>(sink: &mut D, result: &DetectionResult, style: &OverlayStyle)
where
    D: DisplaySink + ?Sized,
{
    sink.resize(result.image.width, result.image.height);
    sink.clear();
    sink.draw_image(&result.image);

    for landmarks in &result.multi_hand_landmarks {
        if landmarks.is_empty() {
            continue;
        }

        // Partial hands only get the bones whose endpoints were reported.
        let connections: Vec<(usize, usize)> = HAND_CONNECTIONS
            .iter()
            .copied()
            .filter(|&(a, b)| a < landmarks.len() && b < landmarks.len())
            .collect();

        sink.draw_connectors(
            landmarks,
            &connections,
            style.connector_color,
            style.connector_width,
        );
        sink.draw_landmarks(landmarks, style.landmark_color, style.landmark_width);
    }
}
