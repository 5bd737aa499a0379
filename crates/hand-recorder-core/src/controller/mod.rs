//! The recording controller task with its command and event types.

mod recording_controller;
mod session_command;
mod session_event;

pub use {
    recording_controller::RecordingController, session_command::SessionCommand,
    session_event::SessionEvent,
};
