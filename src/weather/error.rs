//! Error handling for the weather module

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider had no data for the location.
    #[error("Weather data unavailable for {location}")]
    Unavailable { location: String },

    /// The provider did not answer within the load cycle's time budget.
    #[error("Provider timed out after {millis} ms")]
    TimedOut { millis: u64 },

    /// The report was missing forecast days.
    #[error("Incomplete forecast: expected {expected} days, got {actual}")]
    IncompleteForecast { expected: usize, actual: usize },
}
