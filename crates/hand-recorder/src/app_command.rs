/// Commands sent from the hotkey handler and tray menu to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Clear recorded points and restart the countdown.
    Reset,
    /// Arm a recording window.
    Record,
    /// Request application shutdown.
    Shutdown,
}
