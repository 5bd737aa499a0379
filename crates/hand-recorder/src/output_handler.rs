//! External points state.
//!
//! Every publication from the recording controller replaces the points
//! state and is written as one JSON line, so a downstream process can
//! consume recorded windows as they complete.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// One line of output.
#[derive(Debug, Serialize)]
struct PointsRecord<'a> {
    session_id: Option<Uuid>,
    points: &'a [f32],
}

/// Holds the latest published points and writes each update as JSON.
pub struct OutputHandler<W> {
    pub(crate) writer: W,
    pub(crate) points: Vec<f32>,
}

impl<W: AsyncWrite + Unpin> OutputHandler<W> {
    /// Create a handler writing to `writer` with empty points state.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            points: Vec::new(),
        }
    }

    /// Replace the points state and write it out.
    #[instrument(skip(self, points), fields(point_count = points.len()))]
    pub async fn publish(&mut self, session_id: Option<Uuid>, points: Vec<f32>) -> AppResult<()> {
        let mut line = serde_json::to_vec(&PointsRecord {
            session_id,
            points: &points,
        })
        .map_err(|e| AppError::OutputError {
            reason: format!("Failed to encode points: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        line.push(b'\n');

        self.writer
            .write_all(&line)
            .await
            .map_err(|e| AppError::OutputError {
                reason: format!("Failed to write points: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.writer.flush().await.map_err(|e| AppError::OutputError {
            reason: format!("Failed to flush points: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.points = points;

        match session_id {
            Some(session_id) => info!(
                session_id = %session_id,
                point_count = self.points.len(),
                "Recorded points published"
            ),
            None => debug!("Points cleared"),
        }

        Ok(())
    }
}
