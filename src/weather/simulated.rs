//! Simulated provider
//!
//! Synthesizes conditions from bounded random ranges after an artificial delay.

use super::WeatherProvider;
use super::error::ProviderError;
use super::types::{Condition, CurrentConditions, ForecastDay, WeatherReport, forecast_day_labels};
use crate::consts::cli_consts::ranges;
use chrono::{Datelike, Local, Weekday};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;
use strum::VariantArray;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedProvider {
    /// `failure_rate` is clamped to `[0, 1]`.
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            delay,
            failure_rate,
        }
    }

    #[cfg(test)]
    fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

#[async_trait::async_trait]
impl WeatherProvider for SimulatedProvider {
    async fn fetch(&self, location: &str) -> Result<WeatherReport, ProviderError> {
        sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        if rng.gen_bool(self.failure_rate) {
            return Err(ProviderError::Unavailable {
                location: location.to_string(),
            });
        }
        Ok(generate_report(&mut rng, location, Local::now().weekday()))
    }
}

/// Builds a full report for `location` with a forecast starting on `today`.
pub fn generate_report<R: Rng + ?Sized>(
    rng: &mut R,
    location: &str,
    today: Weekday,
) -> WeatherReport {
    let current = CurrentConditions {
        location: location.to_string(),
        temperature: rng.gen_range(ranges::TEMPERATURE_C),
        condition: random_condition(rng).to_string(),
        humidity: rng.gen_range(ranges::HUMIDITY_PCT),
        wind_speed: rng.gen_range(ranges::WIND_SPEED_KMH),
        visibility: rng.gen_range(ranges::VISIBILITY_KM),
        pressure: rng.gen_range(ranges::PRESSURE_HPA),
        feels_like: rng.gen_range(ranges::FEELS_LIKE_C),
    };

    let forecast = forecast_day_labels(today)
        .into_iter()
        .map(|day| {
            let high = rng.gen_range(ranges::FORECAST_HIGH_C);
            let low = high - rng.gen_range(ranges::FORECAST_SPREAD_C);
            let condition = random_condition(rng);
            ForecastDay {
                day,
                high,
                low,
                condition: condition.to_string(),
                icon: condition.pictogram().to_string(),
            }
        })
        .collect();

    WeatherReport { current, forecast }
}

fn random_condition<R: Rng + ?Sized>(rng: &mut R) -> Condition {
    Condition::VARIANTS
        .choose(rng)
        .copied()
        .unwrap_or(Condition::Sunny)
}
