//! System tray icon with the recorder's controls.
//!
//! The menu carries the Reset and Record controls plus Exit. The icon color
//! follows the arm state and the tooltip shows the countdown display.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Edge length of the generated tray icon.
const ICON_SIZE: u32 = 32;

/// Idle icon color (blue).
const IDLE_RGB: [u8; 3] = [0x00, 0x00, 0xFF];

/// Armed icon color (hot pink).
const ARMED_RGB: [u8; 3] = [0xFF, 0x69, 0xB4];

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    state: TrayIconState,
    reset_item_id: MenuId,
    record_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create a new tray manager in the idle state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let reset_item = MenuItem::new("Reset", true, None);
        let record_item = MenuItem::new("Record", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let reset_id = reset_item.id().clone();
        let record_id = record_item.id().clone();
        let exit_id = exit_item.id().clone();

        for item in [&reset_item, &record_item, &exit_item] {
            menu.append(item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add {} menu item: {}", item.text(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let icon = Self::build_icon(TrayIconState::Idle)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(TrayIconState::Idle, None))
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            state: TrayIconState::Idle,
            reset_item_id: reset_id,
            record_item_id: record_id,
            exit_item_id: exit_id,
        })
    }

    /// Update the tray icon for a new arm state.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let icon = Self::build_icon(state)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.state = state;
        self.set_tooltip(&Self::tooltip(state, None))
    }

    /// Show the countdown display in the tooltip.
    #[track_caller]
    pub fn update_countdown(&mut self, remaining_seconds: u32) -> AppResult<()> {
        self.set_tooltip(&Self::tooltip(self.state, Some(remaining_seconds)))
    }

    /// Tooltip text for a state and optional countdown value.
    pub(crate) fn tooltip(state: TrayIconState, remaining_seconds: Option<u32>) -> String {
        let status = match state {
            TrayIconState::Idle => "Hand-Recorder - Ready",
            TrayIconState::Armed => "Hand-Recorder - Recording...",
        };

        match remaining_seconds {
            Some(seconds) => format!("{} (time: {})", status, seconds),
            None => status.to_string(),
        }
    }

    /// Solid square RGBA pixels in the state's color.
    pub(crate) fn icon_rgba(state: TrayIconState) -> Vec<u8> {
        let [r, g, b] = match state {
            TrayIconState::Idle => IDLE_RGB,
            TrayIconState::Armed => ARMED_RGB,
        };

        [r, g, b, 0xFF].repeat((ICON_SIZE * ICON_SIZE) as usize)
    }

    #[track_caller]
    fn set_tooltip(&mut self, tooltip: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn build_icon(state: TrayIconState) -> AppResult<Icon> {
        Icon::from_rgba(Self::icon_rgba(state), ICON_SIZE, ICON_SIZE).map_err(|e| {
            AppError::TrayError {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Get the reset menu item ID.
    pub fn reset_item_id(&self) -> &MenuId {
        &self.reset_item_id
    }

    /// Get the record menu item ID.
    pub fn record_item_id(&self) -> &MenuId {
        &self.record_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
