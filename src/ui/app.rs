//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::dashboard::{DashboardController, LoadOutcome};
use crate::ui::dashboard::{DashboardState, KeyAction, render_dashboard};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long to wait for a key before redrawing.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The dashboard screen, the only screen of the application.
    dashboard: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        outcome_receiver: mpsc::Receiver<LoadOutcome>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            dashboard: DashboardState::new(controller, outcome_receiver, ui_config),
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
///
/// The first load cycle is started here, so the dashboard opens in `Loading`.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.dashboard.controller.load_weather_data();

    loop {
        app.dashboard.update();
        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        if event::poll(KEY_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.dashboard.handle_key(key) == KeyAction::Quit {
                    return Ok(());
                }
            }
        } else if app.dashboard.controller.view().is_loading() {
            // Let the load cycle task make progress on single-threaded runtimes.
            tokio::task::yield_now().await;
        }
    }
}
