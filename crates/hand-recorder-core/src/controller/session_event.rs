use uuid::Uuid;

/// Side effects emitted by the recording controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The countdown display changed.
    Countdown {
        /// Seconds shown to the user.
        remaining_seconds: u32,
    },
    /// Sampling started (or the active window was restarted).
    Armed {
        /// Session ID of the window.
        session_id: Uuid,
    },
    /// New value for the external points state.
    Published {
        /// Window that produced the points, or `None` when a reset cleared them.
        session_id: Option<Uuid>,
        /// Flattened `x, y, z` coordinates.
        points: Vec<f32>,
    },
}
