//! Session state for one recording window.
//!
//! Owns the arm flag, the countdown display and the sample buffer. Timers
//! are not kept here; the controller drives `tick_countdown` and `disarm`
//! from its own timer handles.

use crate::{
    landmark::DetectionResult,
    session::{Countdown, CountdownTick, SampleBuffer, SessionConfig},
};

use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Whether incoming landmarks are being sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmState {
    /// Frames are rendered but not sampled.
    Idle,
    /// Frames are sampled into the buffer.
    Armed {
        /// When the current window (re)started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

/// Recording session state machine.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    config: SessionConfig,
    arm_state: ArmState,
    countdown: Countdown,
    buffer: SampleBuffer,
}

impl RecordingSession {
    /// An idle session with an empty buffer and a stopped countdown showing
    /// the full duration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            arm_state: ArmState::Idle,
            countdown: Countdown::new(config.countdown_start()),
            buffer: SampleBuffer::new(),
        }
    }

    /// Back to Idle with an empty buffer and a freshly started countdown.
    pub fn reset(&mut self) {
        if let ArmState::Armed { session_id, .. } = self.arm_state {
            info!(session_id = %session_id, "Armed window abandoned by reset");
        }

        self.arm_state = ArmState::Idle;
        self.buffer.clear();
        self.countdown.restart(self.config.countdown_start());

        debug!(
            remaining_seconds = self.countdown.displayed(),
            "Session reset"
        );
    }

    /// Start sampling, or restart the window if already armed.
    ///
    /// A restart keeps the session ID and everything sampled so far; only
    /// the window start moves. Returns the session ID of the window.
    pub fn arm(&mut self, now: Instant) -> Uuid {
        let session_id = match self.arm_state {
            ArmState::Armed { session_id, .. } => {
                debug!(
                    session_id = %session_id,
                    buffer_len = self.buffer.len(),
                    "Re-arming active window"
                );
                session_id
            }
            ArmState::Idle => Uuid::new_v4(),
        };

        self.arm_state = ArmState::Armed {
            started_at: now,
            session_id,
        };
        self.countdown.restart(self.config.countdown_start());

        session_id
    }

    /// End the window. Returns the session ID and the samples it collected,
    /// or `None` if nothing was armed.
    pub fn disarm(&mut self) -> Option<(Uuid, Vec<f32>)> {
        match self.arm_state {
            ArmState::Idle => None,
            ArmState::Armed {
                started_at,
                session_id,
            } => {
                self.arm_state = ArmState::Idle;
                let points = self.buffer.take();

                info!(
                    session_id = %session_id,
                    elapsed_ms = started_at.elapsed().as_millis(),
                    buffer_len = points.len(),
                    "Window closed"
                );

                Some((session_id, points))
            }
        }
    }

    /// Sample the first detected hand if armed. Returns the number of
    /// scalars appended; zero when idle or when no hand was found.
    pub fn record_frame(&mut self, result: &DetectionResult) -> usize {
        if !self.is_armed() {
            return 0;
        }

        match result.primary_hand() {
            Some(hand) => self.buffer.append_hand(hand),
            None => 0,
        }
    }

    /// Advance the countdown display by one period.
    pub fn tick_countdown(&mut self) -> CountdownTick {
        self.countdown.tick()
    }

    /// Whether frames are currently sampled.
    pub fn is_armed(&self) -> bool {
        matches!(self.arm_state, ArmState::Armed { .. })
    }

    /// Current arm state.
    pub fn arm_state(&self) -> ArmState {
        self.arm_state
    }

    /// Value on the countdown display.
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.displayed()
    }

    /// Whether the countdown is still ticking.
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Samples collected so far.
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Timing configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
