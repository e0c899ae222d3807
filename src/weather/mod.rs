use crate::weather::error::ProviderError;
use crate::weather::types::WeatherReport;

pub mod error;
pub mod simulated;
pub mod types;

pub use simulated::SimulatedProvider;

#[cfg(test)]
use mockall::automock;

/// Source of weather data for one location.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions and the 5-day forecast for a location.
    async fn fetch(&self, location: &str) -> Result<WeatherReport, ProviderError>;
}
