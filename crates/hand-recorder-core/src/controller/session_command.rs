/// User commands delivered to the recording controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Clear the published points, disarm, empty the buffer and restart the
    /// countdown display.
    Reset,
    /// Arm sampling for one recording window, or restart the active one.
    StartRecording,
    /// Stop the controller loop.
    Shutdown,
}
