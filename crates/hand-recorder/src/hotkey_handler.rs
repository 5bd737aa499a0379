//! Global hotkeys for the Reset and Record controls.
//!
//! Registers CTRL+SHIFT+X (reset) and CTRL+SHIFT+R (record) and forwards
//! presses to the main application. Session state lives in the recording
//! controller, so the handler only translates key presses into commands.

use crate::{AppCommand, AppError, AppResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// IDs of the registered hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBindings {
    /// Hotkey that triggers a reset.
    pub reset_id: u32,
    /// Hotkey that triggers a recording window.
    pub record_id: u32,
}

/// Global hotkey handler.
pub struct HotkeyHandler {
    bindings: HotkeyBindings,
    command_tx: mpsc::Sender<AppCommand>,
}

impl HotkeyHandler {
    /// Register the reset and record hotkeys.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao`/`winit` event loop) so that `WM_HOTKEY` messages are
    /// dispatched on Windows. The returned [`GlobalHotKeyManager`] must be
    /// kept alive on that thread for the hotkeys to remain registered.
    #[track_caller]
    #[instrument]
    pub fn register_hotkeys() -> AppResult<(GlobalHotKeyManager, HotkeyBindings)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let reset = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyX);
        let record = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyR);

        for (hotkey, label) in [(reset, "CTRL+SHIFT+X"), (record, "CTRL+SHIFT+R")] {
            manager
                .register(hotkey)
                .map_err(|e| AppError::HotkeyRegistrationFailed {
                    reason: format!("Failed to register {}: {}", label, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!(
            reset = "CTRL+SHIFT+X",
            record = "CTRL+SHIFT+R",
            "Global hotkeys registered"
        );

        Ok((
            manager,
            HotkeyBindings {
                reset_id: reset.id(),
                record_id: record.id(),
            },
        ))
    }

    /// Create a handler for previously registered hotkeys.
    ///
    /// The bindings should come from [`register_hotkeys`](Self::register_hotkeys).
    /// This struct is `Send` and can live on any thread; it only listens on
    /// the global [`GlobalHotKeyEvent`] channel.
    pub fn new(bindings: HotkeyBindings, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            bindings,
            command_tx,
        }
    }

    /// Run the hotkey handler event loop until a shutdown signal is received.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // GlobalHotKeyEvent::receiver() is a blocking crossbeam receiver, so a
        // single blocking task forwards events. It exits on its next
        // blocking_send() once event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    if event.state == HotKeyState::Pressed {
                        self.handle_hotkey_press(event.id).await?;
                    }
                }
            }
        }

        drop(event_rx);

        // Best-effort join: the blocking task may be stuck in recv() until the
        // next hotkey event. The runtime cleans it up on process exit.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    /// Command bound to a hotkey ID, if any.
    pub(crate) fn command_for(&self, hotkey_id: u32) -> Option<AppCommand> {
        if hotkey_id == self.bindings.reset_id {
            Some(AppCommand::Reset)
        } else if hotkey_id == self.bindings.record_id {
            Some(AppCommand::Record)
        } else {
            None
        }
    }

    #[instrument(skip(self))]
    pub(crate) async fn handle_hotkey_press(&self, hotkey_id: u32) -> AppResult<()> {
        let Some(command) = self.command_for(hotkey_id) else {
            return Ok(());
        };

        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(command = ?command, "Hotkey command sent");

        Ok(())
    }
}
