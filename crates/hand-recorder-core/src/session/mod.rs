//! Recording session state: arm state, sample buffer and countdown display.

mod countdown;
mod recording_session;
mod sample_buffer;
mod session_config;

pub use {
    countdown::{Countdown, CountdownTick},
    recording_session::{ArmState, RecordingSession},
    sample_buffer::SampleBuffer,
    session_config::{DEFAULT_COUNTDOWN_PERIOD, DEFAULT_RECORD_DURATION, SessionConfig},
};
