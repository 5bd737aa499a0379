use crate::{
    CoreResult,
    capture::DetectorOptions,
    landmark::{DetectionResult, FrameImage},
};

use std::future::Future;

use tracing::{debug, instrument};

/// Anything that yields one detection result per captured frame.
pub trait DetectionSource: Send {
    /// Whether the underlying capture device is ready to deliver frames.
    fn is_ready(&self) -> bool;

    /// Wait for the next processed frame. `Ok(None)` ends the stream.
    fn next_detection(
        &mut self,
    ) -> impl Future<Output = CoreResult<Option<DetectionResult>>> + Send;
}

/// A live video source.
pub trait FrameSource: Send {
    /// Whether the source has been initialized and is producing frames.
    fn is_ready(&self) -> bool;

    /// Wait for the next frame. `Ok(None)` ends the stream.
    fn next_frame(&mut self) -> impl Future<Output = CoreResult<Option<FrameImage>>> + Send;
}

/// A hand-landmark detector.
pub trait HandDetector: Send {
    /// Apply detector settings before the first frame.
    fn configure(&mut self, options: &DetectorOptions) -> CoreResult<()>;

    /// Process one frame.
    fn detect(
        &mut self,
        frame: FrameImage,
    ) -> impl Future<Output = CoreResult<DetectionResult>> + Send;
}

/// Couples a frame source to a detector.
///
/// The next frame is only pulled once the detector has finished the
/// previous one, so frames are never queued behind a busy detector.
pub struct DetectorPipeline<S, D> {
    source: S,
    detector: D,
}

impl<S: FrameSource, D: HandDetector> DetectorPipeline<S, D> {
    /// Configure `detector` with `options` and pair it with `source`.
    ///
    /// # Errors
    ///
    /// Returns whatever the detector reports for the options.
    #[track_caller]
    #[instrument(skip(source, detector))]
    pub fn new(source: S, mut detector: D, options: DetectorOptions) -> CoreResult<Self> {
        detector.configure(&options)?;
        debug!("Detector configured");

        Ok(Self { source, detector })
    }
}

impl<S: FrameSource, D: HandDetector> DetectionSource for DetectorPipeline<S, D> {
    fn is_ready(&self) -> bool {
        self.source.is_ready()
    }

    async fn next_detection(&mut self) -> CoreResult<Option<DetectionResult>> {
        let Some(frame) = self.source.next_frame().await? else {
            return Ok(None);
        };

        self.detector.detect(frame).await.map(Some)
    }
}
