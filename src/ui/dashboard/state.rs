//! Dashboard state management
//!
//! Contains the dashboard screen state: the controller plus input-field and
//! animation state that only the terminal UI needs.

use crate::dashboard::{DashboardController, LoadOutcome};
use crate::ui::app::UIConfig;

use tokio::sync::mpsc;

/// What the UI loop should do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct DashboardState {
    /// Location state and load cycles.
    pub controller: DashboardController,
    /// Contents of the location input field.
    pub input: String,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Finished load cycles waiting to be applied
    pub(super) outcome_receiver: mpsc::Receiver<LoadOutcome>,
}

impl DashboardState {
    pub fn new(
        controller: DashboardController,
        outcome_receiver: mpsc::Receiver<LoadOutcome>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            controller,
            input: String::new(),
            tick: 0,
            with_background_color: ui_config.with_background_color,
            outcome_receiver,
        }
    }
}
