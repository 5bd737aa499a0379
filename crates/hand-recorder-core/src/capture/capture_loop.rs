use crate::{CaptureError, CoreResult, capture::DetectionSource, landmark::DetectionResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{info, instrument, warn};

/// Frame counts from a finished capture loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Detection results handed to the controller.
    pub forwarded: u64,
    /// Frames dropped because of a recoverable failure.
    pub skipped: u64,
}

/// Pumps detection results from a source into the controller's frame channel.
pub struct CaptureLoop<S: DetectionSource> {
    source: S,
    frame_tx: mpsc::Sender<DetectionResult>,
}

impl<S: DetectionSource> CaptureLoop<S> {
    /// Pair a source with the controller's frame channel.
    ///
    /// Give the channel a capacity of one so a busy controller holds back
    /// the source instead of queueing frames.
    pub fn new(source: S, frame_tx: mpsc::Sender<DetectionResult>) -> Self {
        Self { source, frame_tx }
    }

    /// Forward frames until shutdown, end of stream, or the controller goes away.
    ///
    /// # Errors
    ///
    /// Returns `SourceNotReady` without reading anything if the source has
    /// not been initialized, and any non-recoverable source error.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> CoreResult<CaptureStats> {
        if !self.source.is_ready() {
            return Err(CaptureError::SourceNotReady {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Capture loop started");

        let mut stats = CaptureStats::default();

        loop {
            let next = tokio::select! {
                biased;

                _ = shutdown_rx.changed() => {
                    info!("Capture loop shutting down");
                    break;
                }

                next = self.source.next_detection() => next,
            };

            match next {
                Ok(Some(result)) => {
                    if self.frame_tx.send(result).await.is_err() {
                        info!("Controller gone, stopping capture");
                        break;
                    }
                    stats.forwarded += 1;
                }
                Ok(None) => {
                    info!("Capture source ended");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = ?e, "Skipping frame");
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            forwarded = stats.forwarded,
            skipped = stats.skipped,
            "Capture loop stopped"
        );

        Ok(stats)
    }
}
