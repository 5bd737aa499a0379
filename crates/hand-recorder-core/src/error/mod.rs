use error_location::ErrorLocation;
use thiserror::Error;

/// Capture and session errors with source location tracking.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Detection wiring was started before the capture source was ready.
    #[error("Capture source not ready {location}")]
    SourceNotReady {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The hand detector failed to process a frame.
    #[error("Hand detector failed: {reason} {location}")]
    DetectorFailed {
        /// Description of the detector failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A detection result could not be decoded.
    #[error("Malformed detection result: {reason} {location}")]
    MalformedDetection {
        /// Description of the decoding failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading from the capture source failed.
    #[error("Capture source IO error: {source} {location}")]
    SourceIo {
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A session channel was closed on the receiving end.
    #[error("Channel closed: {message} {location}")]
    ChannelClosed {
        /// Which channel was closed.
        message: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Session configuration is out of range.
    #[error("Invalid session configuration: {reason} {location}")]
    InvalidConfig {
        /// Description of the invalid value.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CaptureError {
    /// Whether the capture loop may skip the failed frame and keep going.
    ///
    /// Per-frame failures degrade to "keep rendering, skip sampling";
    /// everything else ends the loop.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CaptureError::DetectorFailed { .. } | CaptureError::MalformedDetection { .. }
        )
    }
}

/// Result type alias using [`CaptureError`].
pub type Result<T> = std::result::Result<T, CaptureError>;
