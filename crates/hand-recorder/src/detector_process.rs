//! External hand-landmark detector process.
//!
//! The detector owns the webcam and the perception model. It is started with
//! the configured command plus the detector options as flags and prints one
//! JSON detection result per processed frame on stdout.

use crate::{AppError, AppResult, config::DetectorConfig};

use std::{panic::Location, process::Stdio};

use error_location::ErrorLocation;
use hand_recorder_core::{CaptureError, CoreResult, DetectionResult, DetectionSource, DetectorOptions};
use tokio::{
    io::{AsyncBufReadExt, BufReader, Split},
    process::{Child, ChildStdout, Command},
};
use tracing::{info, instrument, warn};

/// Command-line flags carrying the detector options.
pub(crate) fn option_args(options: &DetectorOptions) -> Vec<String> {
    vec![
        "--max-num-hands".to_string(),
        options.max_num_hands.to_string(),
        "--model-complexity".to_string(),
        options.model_complexity.to_string(),
        "--min-detection-confidence".to_string(),
        options.min_detection_confidence.to_string(),
        "--min-tracking-confidence".to_string(),
        options.min_tracking_confidence.to_string(),
    ]
}

/// Decode one line of detector output. Blank lines yield `None`.
#[track_caller]
pub(crate) fn parse_line(line: &str) -> CoreResult<Option<DetectionResult>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| CaptureError::MalformedDetection {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Decode one raw line of detector output.
///
/// Bytes that are not UTF-8 are a malformed detection, not a read failure.
#[track_caller]
pub(crate) fn parse_raw_line(line: &[u8]) -> CoreResult<Option<DetectionResult>> {
    let line = std::str::from_utf8(line).map_err(|e| CaptureError::MalformedDetection {
        reason: format!("detector output is not UTF-8: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    parse_line(line)
}

/// Detection source backed by a child process's stdout.
pub struct DetectorProcess {
    // Held for kill_on_drop.
    _child: Child,
    lines: Option<Split<BufReader<ChildStdout>>>,
}

impl DetectorProcess {
    /// Start the detector.
    ///
    /// The child is killed when this value is dropped.
    #[track_caller]
    #[instrument(skip(config), fields(command = ?config.command))]
    pub fn spawn(config: &DetectorConfig) -> AppResult<Self> {
        let Some((program, args)) = config.command.split_first() else {
            return Err(AppError::ConfigError {
                reason: "detector.command must name a program".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let mut child = Command::new(program)
            .args(args)
            .args(option_args(&config.options))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AppError::DetectorSpawnFailed {
                command: config.command.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let lines = child
            .stdout
            .take()
            .map(|stdout| BufReader::new(stdout).split(b'\n'));

        info!(pid = ?child.id(), "Detector process started");

        Ok(Self {
            _child: child,
            lines,
        })
    }
}

impl DetectionSource for DetectorProcess {
    fn is_ready(&self) -> bool {
        self.lines.is_some()
    }

    async fn next_detection(&mut self) -> CoreResult<Option<DetectionResult>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        loop {
            let line = lines
                .next_segment()
                .await
                .map_err(|e| CaptureError::SourceIo {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let Some(line) = line else {
                warn!("Detector process closed its output");
                return Ok(None);
            };

            // Blank lines are keep-alives, not frames.
            if let Some(result) = parse_raw_line(&line)? {
                return Ok(Some(result));
            }
        }
    }
}
