pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults and bounds for the dashboard, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for finished load cycles waiting to be applied by the UI loop.
    pub const OUTCOME_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // LOAD CYCLE CONFIGURATION
    // =============================================================================

    /// Location shown when nothing else is configured.
    pub const DEFAULT_LOCATION: &str = "New York";

    /// Message shown on the error panel, whatever the underlying failure.
    pub const LOAD_ERROR_MESSAGE: &str = "Failed to load weather data";

    /// Message shown while a load cycle is in flight.
    pub const LOADING_MESSAGE: &str = "Loading weather data...";

    /// Label of the error panel's retry control.
    pub const RETRY_LABEL: &str = "Try Again";

    /// Number of entries in every forecast, today included.
    pub const FORECAST_DAYS: usize = 5;

    /// Load cycle timing
    pub mod load_cycle {
        use std::time::Duration;

        /// Artificial delay standing in for the provider round trip (milliseconds)
        pub const SIMULATED_DELAY_MS: u64 = 1000;

        /// Time a provider call may take beyond the configured delay (milliseconds)
        pub const PROVIDER_TIMEOUT_MARGIN_MS: u64 = 10_000;

        /// Time budget for one provider call that sleeps for `delay`
        pub const fn provider_time_budget(delay: Duration) -> Duration {
            delay.saturating_add(Duration::from_millis(PROVIDER_TIMEOUT_MARGIN_MS))
        }
    }

    // =============================================================================
    // SIMULATED DATA RANGES
    // =============================================================================

    /// Inclusive value ranges for synthesized conditions
    pub mod ranges {
        use std::ops::RangeInclusive;

        /// Current temperature, °C
        pub const TEMPERATURE_C: RangeInclusive<i32> = 15..=39;
        /// Relative humidity, %
        pub const HUMIDITY_PCT: RangeInclusive<u32> = 40..=79;
        /// Wind speed, km/h
        pub const WIND_SPEED_KMH: RangeInclusive<u32> = 5..=19;
        /// Visibility, km
        pub const VISIBILITY_KM: RangeInclusive<u32> = 5..=14;
        /// Sea-level pressure, hPa
        pub const PRESSURE_HPA: RangeInclusive<u32> = 1000..=1049;
        /// Feels-like temperature, °C
        pub const FEELS_LIKE_C: RangeInclusive<i32> = 17..=41;

        /// Forecast daily high, °C
        pub const FORECAST_HIGH_C: RangeInclusive<i32> = 15..=30;
        /// Gap between a forecast day's high and low, °C
        pub const FORECAST_SPREAD_C: RangeInclusive<i32> = 4..=9;
    }
}
