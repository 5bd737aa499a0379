//! Hand-recorder Core Library
//!
//! Recording session state machine for hand-landmark capture: arms sampling
//! on command, flattens the first detected hand of each frame into a sample
//! buffer for a fixed window, and publishes the buffer when the window ends.
//!
//! # Example
//!
//! ```no_run
//! use hand_recorder_core::{
//!     CoreResult, DetectionResult, DisplaySink, FrameImage, Landmark, RecordingController,
//!     SessionCommand, SessionConfig, SessionEvent, render::Color,
//! };
//!
//! use tokio::sync::{mpsc, watch};
//!
//! struct NullDisplay;
//!
//! impl DisplaySink for NullDisplay {
//!     fn resize(&mut self, _width: u32, _height: u32) {}
//!     fn clear(&mut self) {}
//!     fn draw_image(&mut self, _image: &FrameImage) {}
//!     fn draw_connectors(&mut self, _: &[Landmark], _: &[(usize, usize)], _: Color, _: f32) {}
//!     fn draw_landmarks(&mut self, _: &[Landmark], _: Color, _: f32) {}
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> CoreResult<()> {
//!     let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//!     let (command_tx, command_rx) = mpsc::channel(8);
//!     let (frame_tx, frame_rx) = mpsc::channel::<DetectionResult>(1);
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!
//!     let controller = RecordingController::new(SessionConfig::default(), NullDisplay, event_tx);
//!     tokio::spawn(controller.run(command_rx, frame_rx, shutdown_rx));
//!
//!     let _ = command_tx.send(SessionCommand::Reset).await;
//!     let _ = command_tx.send(SessionCommand::StartRecording).await;
//!     drop(frame_tx);
//!
//!     while let Some(event) = event_rx.recv().await {
//!         if let SessionEvent::Published { session_id: Some(_), points } = event {
//!             println!("Recorded {} values", points.len());
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod controller;
mod error;
pub mod landmark;
pub mod render;
pub mod session;

pub use {
    capture::{CaptureLoop, DetectionSource, DetectorOptions},
    controller::{RecordingController, SessionCommand, SessionEvent},
    error::{CaptureError, Result as CoreResult},
    landmark::{DetectionResult, FrameImage, HandLandmarks, Landmark},
    render::{DisplaySink, HAND_CONNECTIONS, OverlayStyle},
    session::{RecordingSession, SessionConfig},
};

#[cfg(test)]
mod tests;
