//! Load cycle task
//!
//! One fetch per cycle, reported back over a channel. Cycles are never
//! cancelled; a superseded one still delivers its outcome.

use crate::weather::WeatherProvider;
use crate::weather::error::ProviderError;
use crate::weather::types::WeatherReport;
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Result of a finished load cycle.
#[derive(Debug)]
pub struct LoadOutcome {
    pub cycle: u64,
    pub location: String,
    pub result: Result<WeatherReport, ProviderError>,
}

/// Spawn a load cycle for `location` on the current runtime.
pub fn spawn_load_cycle(
    provider: Arc<dyn WeatherProvider>,
    cycle: u64,
    location: String,
    time_budget: Duration,
    outcome_sender: mpsc::Sender<LoadOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = fetch_within(provider.as_ref(), &location, time_budget).await;
        debug!("Load cycle #{} for {} finished: ok={}", cycle, location, result.is_ok());
        // The receiver is gone only when the UI has shut down.
        let _ = outcome_sender
            .send(LoadOutcome {
                cycle,
                location,
                result,
            })
            .await;
    })
}

async fn fetch_within(
    provider: &dyn WeatherProvider,
    location: &str,
    time_budget: Duration,
) -> Result<WeatherReport, ProviderError> {
    let report = timeout(time_budget, provider.fetch(location))
        .await
        .map_err(|_| ProviderError::TimedOut {
            millis: time_budget.as_millis() as u64,
        })??;
    report.validate()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::load_cycle;
    use crate::weather::{MockWeatherProvider, SimulatedProvider};
    use crate::weather::simulated::generate_report;
    use chrono::Weekday;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn outcome_carries_cycle_and_location() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_fetch().returning(|location| {
            let mut rng = StdRng::seed_from_u64(1);
            Ok(generate_report(&mut rng, location, Weekday::Mon))
        });

        let (sender, mut receiver) = mpsc::channel(1);
        spawn_load_cycle(
            Arc::new(provider),
            9,
            "Nairobi".to_string(),
            Duration::from_secs(1),
            sender,
        )
        .await
        .unwrap();

        let outcome = receiver.recv().await.unwrap();
        assert_eq!(outcome.cycle, 9);
        assert_eq!(outcome.location, "Nairobi");
        assert_eq!(outcome.result.unwrap().current.location, "Nairobi");
    }

    #[tokio::test]
    async fn incomplete_forecast_is_a_failure() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_fetch().returning(|location| {
            let mut rng = StdRng::seed_from_u64(2);
            let mut report = generate_report(&mut rng, location, Weekday::Mon);
            report.forecast.truncate(3);
            Ok(report)
        });

        let result = fetch_within(&provider, "Bern", Duration::from_secs(1)).await;
        assert_eq!(
            result,
            Err(ProviderError::IncompleteForecast {
                expected: 5,
                actual: 3
            })
        );
    }

    struct StalledProvider;

    #[async_trait::async_trait]
    impl WeatherProvider for StalledProvider {
        async fn fetch(&self, _location: &str) -> Result<WeatherReport, ProviderError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(ProviderError::Unavailable {
                location: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn configured_delay_fits_in_its_time_budget() {
        let delay = Duration::from_millis(110);
        let provider = SimulatedProvider::new(delay, 0.0);
        let budget = load_cycle::provider_time_budget(delay);

        let report = fetch_within(&provider, "Paris", budget).await.unwrap();
        assert_eq!(report.current.location, "Paris");
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let result = fetch_within(&StalledProvider, "Bern", Duration::from_millis(50)).await;
        assert_eq!(result, Err(ProviderError::TimedOut { millis: 50 }));
    }
}
