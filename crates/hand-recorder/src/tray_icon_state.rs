/// Tray icon states corresponding to the recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Frames are rendered but not sampled.
    Idle,
    /// A recording window is sampling frames.
    Armed,
}
