//! Hand-Recorder: records fixed-length windows of hand landmarks from a live
//! detector, controlled from the system tray or global hotkeys.

mod app;
mod app_command;
mod config;
mod detector_process;
mod error;
mod headless_display;
mod hotkey_handler;
mod output_handler;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::{App, MenuIds},
    app_command::AppCommand,
    detector_process::DetectorProcess,
    error::{AppError, Result as AppResult},
    headless_display::HeadlessDisplay,
    hotkey_handler::HotkeyHandler,
    output_handler::OutputHandler,
    tray_command::TrayCommand,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use crate::config::Config;

use global_hotkey::GlobalHotKeyManager;
use hand_recorder_core::{CaptureLoop, RecordingController};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    // Stdout carries published points, so logs go to stderr.
    let (log_writer, log_guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hand_recorder=debug,hand_recorder_core=debug")),
        )
        .with_writer(log_writer)
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Persists across event loop iterations; dropping it unregisters the hotkeys.
    let mut hotkey_manager: Option<GlobalHotKeyManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetState(state) => {
                        if let Err(e) = tray_manager.update_state(state) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::SetCountdown(remaining_seconds) => {
                        if let Err(e) = tray_manager.update_countdown(remaining_seconds) {
                            error!(error = ?e, "Failed to update countdown tooltip");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let session_config = match config.session_config() {
                    Ok(sc) => sc,
                    Err(e) => {
                        error!("Invalid recording config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                // Register hotkeys on the main thread; tao's event loop pumps
                // the Windows messages needed for WM_HOTKEY delivery.
                let (manager, bindings) = match HotkeyHandler::register_hotkeys() {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to register hotkeys: {:?}", e);
                        std::process::exit(1);
                    }
                };
                hotkey_manager = Some(manager);

                let tray_proxy = tray_proxy.clone();
                let menu_ids = MenuIds {
                    reset: tray_manager.reset_item_id().clone(),
                    record: tray_manager.record_item_id().clone(),
                    exit: tray_manager.exit_item_id().clone(),
                };

                // Everything async shares one current-thread runtime so the
                // controller, capture and app loops interleave on one queue.
                // TrayManager and hotkey_manager stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                    {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        // Spawned inside the runtime: tokio::process needs its reactor.
                        let detector = match DetectorProcess::spawn(&config.detector) {
                            Ok(d) => d,
                            Err(e) => {
                                error!("Failed to start detector: {:?}", e);
                                let _ = tray_proxy.send_event(TrayCommand::Shutdown);
                                return;
                            }
                        };

                        let (command_tx, command_rx) = mpsc::channel(32);
                        let (session_tx, session_rx) = mpsc::channel(32);
                        let (frame_tx, frame_rx) = mpsc::channel(1);
                        let (event_tx, event_rx) = mpsc::unbounded_channel();
                        let (shutdown_tx, shutdown_rx) = watch::channel(false);

                        let controller =
                            RecordingController::new(session_config, HeadlessDisplay::default(), event_tx);
                        let capture = CaptureLoop::new(detector, frame_tx);
                        let hotkey_handler = HotkeyHandler::new(bindings, command_tx);

                        let app = App {
                            session_tx,
                            event_rx,
                            output_handler: OutputHandler::new(tokio::io::stdout()),
                            tray_proxy,
                            command_rx,
                            shutdown_tx,
                            menu_ids,
                        };

                        tokio::join!(
                            async {
                                if let Err(e) = hotkey_handler.run(shutdown_rx.clone()).await {
                                    error!(error = ?e, "Hotkey handler error");
                                }
                            },
                            async {
                                if let Err(e) =
                                    controller.run(session_rx, frame_rx, shutdown_rx.clone()).await
                                {
                                    error!(error = ?e, "Recording controller error");
                                }
                            },
                            async {
                                match capture.run(shutdown_rx.clone()).await {
                                    Ok(stats) => info!(
                                        forwarded = stats.forwarded,
                                        skipped = stats.skipped,
                                        "Capture finished"
                                    ),
                                    Err(e) => warn!(error = ?e, "Capture stopped"),
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }

        // Keep hotkey_manager and the log writer alive for the app's lifetime.
        let _ = (&hotkey_manager, &log_guard);
    });
}
