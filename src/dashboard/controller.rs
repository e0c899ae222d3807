//! Dashboard controller
//!
//! Owns the current location and view state and drives load cycles.

use super::loader::{LoadOutcome, spawn_load_cycle};
use super::view::{DashboardView, Panel};
use crate::consts::cli_consts::{LOAD_ERROR_MESSAGE, MAX_ACTIVITY_LOGS};
use crate::events::Event;
use crate::weather::WeatherProvider;
use log::{info, warn};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct DashboardController {
    /// Location shown in the display region.
    location: String,
    /// What the display region currently shows.
    view: DashboardView,
    /// Number of the most recently started load cycle.
    cycle: u64,
    provider: Arc<dyn WeatherProvider>,
    /// Time budget for a single provider call.
    time_budget: Duration,
    outcome_sender: mpsc::Sender<LoadOutcome>,
    /// Activity logs for display
    activity_logs: VecDeque<Event>,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("location", &self.location)
            .field("view", &self.view)
            .field("cycle", &self.cycle)
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Creates a controller in the `Loading` state. Nothing is fetched until
    /// [`load_weather_data`](Self::load_weather_data) is called.
    ///
    /// `time_budget` bounds every provider call.
    pub fn new(
        location: String,
        provider: Arc<dyn WeatherProvider>,
        time_budget: Duration,
        outcome_sender: mpsc::Sender<LoadOutcome>,
    ) -> Self {
        Self {
            location,
            view: DashboardView::Loading,
            cycle: 0,
            provider,
            time_budget,
            outcome_sender,
            activity_logs: VecDeque::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn panel(&self) -> Panel {
        self.view.panel()
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    /// Replace the location with the trimmed `text` and reload.
    ///
    /// Returns `false`, leaving location and view untouched, when `text` is
    /// empty after trimming.
    pub fn submit_location(&mut self, text: &str) -> bool {
        let location = text.trim();
        if location.is_empty() {
            self.push_event(Event::location_ignored());
            return false;
        }
        self.location = location.to_string();
        self.push_event(Event::location_changed(location));
        self.load_weather_data();
        true
    }

    /// Show the loading indicator and start a new load cycle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load_weather_data(&mut self) {
        self.cycle += 1;
        self.view = DashboardView::Loading;
        info!("Starting load cycle #{} for {}", self.cycle, self.location);
        self.push_event(Event::load_started(self.cycle, &self.location));
        spawn_load_cycle(
            Arc::clone(&self.provider),
            self.cycle,
            self.location.clone(),
            self.time_budget,
            self.outcome_sender.clone(),
        );
    }

    /// Retry control of the error panel: reload the current location.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.view, DashboardView::Error(_)) {
            return false;
        }
        self.load_weather_data();
        true
    }

    /// Fold a finished load cycle into the view.
    ///
    /// Superseded cycles are still applied; the newer cycle overwrites them
    /// once it finishes.
    pub fn apply(&mut self, outcome: LoadOutcome) {
        if outcome.cycle < self.cycle {
            warn!(
                "Load cycle #{} finished after #{} started",
                outcome.cycle, self.cycle
            );
            self.push_event(Event::stale_result(outcome.cycle, self.cycle));
        }

        match outcome.result {
            Ok(report) => {
                self.push_event(Event::load_succeeded(outcome.cycle, &outcome.location));
                self.view = DashboardView::Display(report);
            }
            Err(e) => {
                warn!("Load cycle #{} failed: {}", outcome.cycle, e);
                self.push_event(Event::load_failed(outcome.cycle, e.to_string()));
                self.view = DashboardView::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn push_event(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
