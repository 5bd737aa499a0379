use crate::{AppCommand, AppError, AppResult, OutputHandler, TrayCommand, TrayIconState};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use hand_recorder_core::{SessionCommand, SessionEvent};
use tao::event_loop::EventLoopProxy;
use tokio::{
    io::AsyncWrite,
    sync::{mpsc, watch},
};
use tracing::{error, info, instrument};
use tray_icon::menu::{MenuEvent, MenuId};

/// Tray menu items the app reacts to.
#[derive(Debug, Clone)]
pub struct MenuIds {
    /// "Reset" menu item.
    pub reset: MenuId,
    /// "Record" menu item.
    pub record: MenuId,
    /// "Exit" menu item.
    pub exit: MenuId,
}

impl MenuIds {
    /// Command for a clicked menu item.
    pub(crate) fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        if *id == self.reset {
            Some(AppCommand::Reset)
        } else if *id == self.record {
            Some(AppCommand::Record)
        } else if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else {
            None
        }
    }
}

/// Tray updates that follow a session event.
pub(crate) fn tray_commands_for(event: &SessionEvent) -> Vec<TrayCommand> {
    match event {
        SessionEvent::Countdown { remaining_seconds } => {
            vec![TrayCommand::SetCountdown(*remaining_seconds)]
        }
        SessionEvent::Armed { .. } => vec![TrayCommand::SetState(TrayIconState::Armed)],
        SessionEvent::Published { .. } => vec![TrayCommand::SetState(TrayIconState::Idle)],
    }
}

/// Main application state.
///
/// Runs on the async runtime thread. Tray updates go back to the main thread
/// through `tray_proxy` because `TrayIcon` is `!Send` and must remain on the
/// UI thread.
pub struct App<W> {
    pub(crate) session_tx: mpsc::Sender<SessionCommand>,
    pub(crate) event_rx: mpsc::UnboundedReceiver<SessionEvent>,
    pub(crate) output_handler: OutputHandler<W>,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) menu_ids: MenuIds,
}

impl<W: AsyncWrite + Unpin> App<W> {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Hand-Recorder starting");

        // MenuEvent::receiver() is a blocking crossbeam receiver, so a single
        // blocking task forwards menu clicks. It exits on its next
        // blocking_send() once tray_event_rx is dropped.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            let command = tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    match self.menu_ids.command_for(&event.id) {
                        Some(command) => command,
                        None => continue,
                    }
                }

                Some(command) = self.command_rx.recv() => command,

                Some(event) = self.event_rx.recv() => {
                    if let Err(e) = self.handle_session_event(event).await {
                        error!(error = ?e, "Failed to handle session event");
                    }
                    continue;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            };

            if let Err(e) = self.handle_command(command).await {
                error!(command = ?command, error = ?e, "Failed to handle command");
            }

            if command == AppCommand::Shutdown {
                info!("Shutdown requested");
                break;
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
        info!("Hand-Recorder shut down successfully");

        Ok(())
    }

    /// Forward a user control to the recording controller.
    #[instrument(skip(self))]
    async fn handle_command(&self, command: AppCommand) -> AppResult<()> {
        let session_command = match command {
            AppCommand::Reset => SessionCommand::Reset,
            AppCommand::Record => SessionCommand::StartRecording,
            AppCommand::Shutdown => SessionCommand::Shutdown,
        };

        self.session_tx
            .send(session_command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", session_command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Apply a controller side effect to the points state and the tray.
    #[instrument(skip(self, event))]
    async fn handle_session_event(&mut self, event: SessionEvent) -> AppResult<()> {
        for tray_command in tray_commands_for(&event) {
            let _ = self.tray_proxy.send_event(tray_command);
        }

        if let SessionEvent::Published { session_id, points } = event {
            self.output_handler.publish(session_id, points).await?;
        }

        Ok(())
    }
}
