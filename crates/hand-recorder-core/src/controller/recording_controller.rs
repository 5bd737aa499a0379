//! Recording controller: one task that owns the session, its timers and the
//! display sink.
//!
//! Commands, frames and both timers interleave on a single `select!` loop,
//! so buffer appends and timer callbacks never race. Timer handles are owned
//! fields and are replaced on every transition; dropping a handle cancels it.

use crate::{
    CoreResult,
    controller::{SessionCommand, SessionEvent},
    landmark::DetectionResult,
    render::{DisplaySink, OverlayStyle, render_detection},
    session::{ArmState, RecordingSession, SessionConfig},
};

use std::{future::pending, pin::Pin};

use tokio::{
    sync::{mpsc, watch},
    time::{Instant, Interval, Sleep, interval_at, sleep},
};
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

/// Drives a [`RecordingSession`] from commands, frames and timers.
pub struct RecordingController<D: DisplaySink> {
    session: RecordingSession,
    display: D,
    style: OverlayStyle,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    countdown_timer: Option<Interval>,
    window_timer: Option<Pin<Box<Sleep>>>,
}

impl<D: DisplaySink> RecordingController<D> {
    /// Create an idle controller. Nothing ticks until the first command.
    pub fn new(
        config: SessionConfig,
        display: D,
        event_tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            session: RecordingSession::new(config),
            display,
            style: OverlayStyle::default(),
            event_tx,
            countdown_timer: None,
            window_timer: None,
        }
    }

    /// Replace the overlay stroke settings.
    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    /// Run until shutdown, a `Shutdown` command, or the command channel closes.
    ///
    /// The frame channel closing only stops sampling; pending timers still
    /// fire so an armed window is published.
    #[instrument(skip_all)]
    pub async fn run(
        mut self,
        mut command_rx: mpsc::Receiver<SessionCommand>,
        mut frame_rx: mpsc::Receiver<DetectionResult>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> CoreResult<()> {
        info!(
            duration_secs = self.session.config().record_duration().as_secs(),
            "Recording controller started"
        );

        let mut frames_open = true;

        loop {
            tokio::select! {
                biased;

                _ = shutdown_rx.changed() => {
                    info!("Recording controller shutting down");
                    break;
                }

                cmd = command_rx.recv() => {
                    match cmd {
                        Some(SessionCommand::Reset) => self.reset(),
                        Some(SessionCommand::StartRecording) => self.start_recording(),
                        Some(SessionCommand::Shutdown) | None => {
                            info!("Command channel finished, stopping controller");
                            break;
                        }
                    }
                }

                // Polled before frames: a frame that arrives at the deadline
                // belongs outside the window.
                _ = window_elapsed(&mut self.window_timer), if self.window_timer.is_some() => {
                    self.on_window_elapsed();
                }

                _ = countdown_tick(&mut self.countdown_timer), if self.countdown_timer.is_some() => {
                    self.on_countdown_tick();
                }

                frame = frame_rx.recv(), if frames_open => {
                    match frame {
                        Some(result) => self.on_frame(&result),
                        None => {
                            info!("Frame source closed");
                            frames_open = false;
                        }
                    }
                }
            }
        }

        if let Some(session_id) = self.armed_session_id() {
            info!(session_id = %session_id, "Armed window dropped at shutdown");
        }

        Ok(())
    }

    /// Clear the published points, disarm, empty the buffer and restart the
    /// countdown display. Any pending window timeout is cancelled.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.window_timer = None;
        self.session.reset();
        self.restart_countdown_timer();

        self.emit(SessionEvent::Published {
            session_id: None,
            points: Vec::new(),
        });
        self.emit(SessionEvent::Countdown {
            remaining_seconds: self.session.remaining_seconds(),
        });
    }

    /// Arm sampling for one window. While armed, this restarts the window:
    /// the previous timeout is cancelled so only one publication follows.
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) {
        let session_id = self.session.arm(Instant::now());
        let duration = self.session.config().record_duration();

        self.window_timer = Some(Box::pin(sleep(duration)));
        self.restart_countdown_timer();

        info!(
            session_id = %session_id,
            buffer_len = self.session.buffer().len(),
            duration_ms = duration.as_millis(),
            "Recording armed"
        );

        self.emit(SessionEvent::Armed { session_id });
        self.emit(SessionEvent::Countdown {
            remaining_seconds: self.session.remaining_seconds(),
        });
    }

    /// Render one frame and, while armed, sample its first hand.
    pub fn on_frame(&mut self, result: &DetectionResult) {
        render_detection(&mut self.display, result, &self.style);

        let appended = self.session.record_frame(result);
        trace!(
            hands = result.hand_count(),
            appended,
            buffer_len = self.session.buffer().len(),
            "Frame processed"
        );
    }

    /// Whether frames are currently sampled.
    pub fn is_armed(&self) -> bool {
        self.session.is_armed()
    }

    /// The session this controller drives.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// The display sink frames are rendered to.
    pub fn display(&self) -> &D {
        &self.display
    }

    fn on_window_elapsed(&mut self) {
        self.window_timer = None;

        if let Some((session_id, points)) = self.session.disarm() {
            info!(
                session_id = %session_id,
                point_count = points.len(),
                "Publishing recorded window"
            );
            self.emit(SessionEvent::Published {
                session_id: Some(session_id),
                points,
            });
        }
    }

    fn on_countdown_tick(&mut self) {
        let tick = self.session.tick_countdown();

        if let Some(remaining_seconds) = tick.changed {
            self.emit(SessionEvent::Countdown { remaining_seconds });
        }

        if tick.finished {
            debug!("Countdown finished");
            self.countdown_timer = None;
        }
    }

    fn restart_countdown_timer(&mut self) {
        let period = self.session.config().countdown_period();
        // interval_at so the first tick lands one period out, not immediately.
        self.countdown_timer = Some(interval_at(Instant::now() + period, period));
    }

    fn armed_session_id(&self) -> Option<Uuid> {
        match self.session.arm_state() {
            ArmState::Armed { session_id, .. } => Some(session_id),
            ArmState::Idle => None,
        }
    }

    fn emit(&self, event: SessionEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Session event receiver dropped");
        }
    }
}

async fn window_elapsed(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer {
        Some(deadline) => deadline.as_mut().await,
        None => pending().await,
    }
}

async fn countdown_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => pending().await,
    }
}
