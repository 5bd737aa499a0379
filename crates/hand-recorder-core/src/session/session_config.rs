use crate::{CaptureError, CoreResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;

/// Length of one recording window.
pub const DEFAULT_RECORD_DURATION: Duration = Duration::from_secs(5);

/// Interval between countdown display updates.
pub const DEFAULT_COUNTDOWN_PERIOD: Duration = Duration::from_millis(500);

/// Timing configuration for a recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    record_duration: Duration,
    countdown_period: Duration,
}

impl SessionConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the window is shorter than one second or
    /// the countdown period is zero.
    #[track_caller]
    pub fn new(record_duration: Duration, countdown_period: Duration) -> CoreResult<Self> {
        if record_duration.as_secs() == 0 {
            return Err(CaptureError::InvalidConfig {
                reason: format!(
                    "record duration must be at least one second, got {:?}",
                    record_duration
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if countdown_period.is_zero() {
            return Err(CaptureError::InvalidConfig {
                reason: "countdown period must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            record_duration,
            countdown_period,
        })
    }

    /// How long one armed window lasts.
    pub fn record_duration(&self) -> Duration {
        self.record_duration
    }

    /// How often the countdown display ticks.
    pub fn countdown_period(&self) -> Duration {
        self.countdown_period
    }

    /// The value the countdown display starts from: whole seconds of the
    /// recording window.
    pub fn countdown_start(&self) -> u32 {
        u32::try_from(self.record_duration.as_secs()).unwrap_or(u32::MAX)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_duration: DEFAULT_RECORD_DURATION,
            countdown_period: DEFAULT_COUNTDOWN_PERIOD,
        }
    }
}
