use crate::landmark::Landmark;

/// Flattened landmark coordinates collected during an armed window.
///
/// Each landmark contributes `x, y, z` in detection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    points: Vec<f32>,
}

impl SampleBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every landmark of one hand. Returns the number of scalars added.
    pub fn append_hand(&mut self, landmarks: &[Landmark]) -> usize {
        let before = self.points.len();
        self.points
            .extend(landmarks.iter().flat_map(Landmark::coordinates));
        self.points.len() - before
    }

    /// Number of scalars held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been sampled.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Hand the samples off, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.points)
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.points
    }
}
