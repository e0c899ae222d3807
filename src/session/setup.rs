//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::{DEFAULT_LOCATION, OUTCOME_QUEUE_SIZE, load_cycle};
use crate::dashboard::{DashboardController, LoadOutcome};
use crate::weather::SimulatedProvider;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Settings resolved from the config file and command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub location: String,
    pub delay: Duration,
    pub failure_rate: f64,
    pub with_background_color: bool,
}

impl SessionSettings {
    /// Apply command-line overrides on top of the config file.
    ///
    /// A blank `--location` is ignored like any blank submission.
    pub fn resolve(
        config: &Config,
        location: Option<String>,
        delay_ms: Option<u64>,
        failure_rate: Option<f64>,
        with_background_color: bool,
    ) -> Self {
        let location = [location.as_deref(), Some(config.default_location.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
            .to_string();

        Self {
            location,
            delay: Duration::from_millis(delay_ms.unwrap_or(config.delay_ms)),
            failure_rate: failure_rate.unwrap_or(config.failure_rate),
            with_background_color: with_background_color || config.with_background_color,
        }
    }

    /// Time budget for one provider call; always covers the configured delay.
    pub fn time_budget(&self) -> Duration {
        load_cycle::provider_time_budget(self.delay)
    }
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    pub controller: DashboardController,
    /// Finished load cycles
    pub outcome_receiver: mpsc::Receiver<LoadOutcome>,
    pub settings: SessionSettings,
}

/// Wires the simulated provider and the outcome channel into a controller.
pub fn setup_session(settings: SessionSettings) -> SessionData {
    let provider = SimulatedProvider::new(settings.delay, settings.failure_rate);
    let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_QUEUE_SIZE);
    let controller = DashboardController::new(
        settings.location.clone(),
        Arc::new(provider),
        settings.time_budget(),
        outcome_sender,
    );

    SessionData {
        controller,
        outcome_receiver,
        settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let config = Config::default();
        let settings = SessionSettings::resolve(
            &config,
            Some("  Paris  ".to_string()),
            Some(0),
            Some(1.0),
            false,
        );
        assert_eq!(settings.location, "Paris");
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.failure_rate, 1.0);
    }

    #[test]
    fn blank_location_flag_falls_back_to_config() {
        let config = Config {
            default_location: "Tokyo".to_string(),
            ..Config::default()
        };
        let settings =
            SessionSettings::resolve(&config, Some("   ".to_string()), None, None, false);
        assert_eq!(settings.location, "Tokyo");
        assert_eq!(settings.delay, Duration::from_millis(config.delay_ms));
    }

    #[test]
    fn blank_everywhere_uses_built_in_default() {
        let config = Config {
            default_location: " ".to_string(),
            ..Config::default()
        };
        let settings = SessionSettings::resolve(&config, None, None, None, false);
        assert_eq!(settings.location, DEFAULT_LOCATION);
    }

    #[test]
    fn background_color_from_either_source() {
        let config = Config {
            with_background_color: true,
            ..Config::default()
        };
        assert!(SessionSettings::resolve(&config, None, None, None, false).with_background_color);
        assert!(
            SessionSettings::resolve(&Config::default(), None, None, None, true)
                .with_background_color
        );
    }

    #[test]
    fn session_starts_loading_at_resolved_location() {
        let settings = SessionSettings::resolve(&Config::default(), None, None, None, false);
        let session = setup_session(settings);
        assert_eq!(session.controller.location(), "New York");
        assert!(session.controller.view().is_loading());
    }

    #[test]
    fn time_budget_outlasts_long_delays() {
        for delay_ms in [0, 9_999, 10_000, 10_050, 60_000] {
            let settings =
                SessionSettings::resolve(&Config::default(), None, Some(delay_ms), None, false);
            assert_eq!(
                settings.time_budget(),
                Duration::from_millis(delay_ms + load_cycle::PROVIDER_TIMEOUT_MARGIN_MS)
            );
        }
    }

    #[test]
    fn huge_delay_saturates_time_budget() {
        let settings =
            SessionSettings::resolve(&Config::default(), None, Some(u64::MAX), None, false);
        assert!(settings.time_budget() >= settings.delay);
    }
}
