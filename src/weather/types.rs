//! Weather data model

use super::error::ProviderError;
use crate::consts::cli_consts::FORECAST_DAYS;
use chrono::Weekday;

/// Pictogram used for any label missing from the lookup table.
pub const DEFAULT_PICTOGRAM: &str = "☀️";

/// Known weather condition labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
pub enum Condition {
    Sunny,
    #[strum(serialize = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Thunderstorm,
}

impl Condition {
    pub fn pictogram(self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Rainy => "🌧️",
            Self::Snowy => "❄️",
            Self::Thunderstorm => "⛈️",
        }
    }
}

/// Maps a free-text condition label to its pictogram.
///
/// Total: unknown labels get [`DEFAULT_PICTOGRAM`].
pub fn pictogram(label: &str) -> &'static str {
    label
        .parse::<Condition>()
        .map(Condition::pictogram)
        .unwrap_or(DEFAULT_PICTOGRAM)
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location: String,
    /// °C
    pub temperature: i32,
    pub condition: String,
    /// %
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// km
    pub visibility: u32,
    /// hPa
    pub pressure: u32,
    /// °C
    pub feels_like: i32,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub icon: String,
}

/// Output of one successful load cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    /// Rejects reports that would render a partial forecast.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.forecast.len() != FORECAST_DAYS {
            return Err(ProviderError::IncompleteForecast {
                expected: FORECAST_DAYS,
                actual: self.forecast.len(),
            });
        }
        Ok(())
    }
}

/// Day labels for a forecast starting on `today`: "Today", "Tomorrow", then weekday names.
pub fn forecast_day_labels(today: Weekday) -> Vec<String> {
    let mut labels = vec!["Today".to_string(), "Tomorrow".to_string()];
    let mut day = today.succ();
    while labels.len() < FORECAST_DAYS {
        day = day.succ();
        labels.push(weekday_name(day).to_string());
    }
    labels
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn every_known_label_has_its_own_pictogram() {
        assert_eq!(pictogram("Sunny"), "☀️");
        assert_eq!(pictogram("Partly Cloudy"), "⛅");
        assert_eq!(pictogram("Cloudy"), "☁️");
        assert_eq!(pictogram("Rainy"), "🌧️");
        assert_eq!(pictogram("Snowy"), "❄️");
        assert_eq!(pictogram("Thunderstorm"), "⛈️");
    }

    #[test]
    fn unknown_labels_fall_back_to_sunny() {
        for label in ["", "Foggy", "partly cloudy", "Hail", "  Sunny  "] {
            assert_eq!(pictogram(label), DEFAULT_PICTOGRAM, "label {:?}", label);
        }
    }

    #[test]
    fn labels_round_trip_through_display() {
        for condition in Condition::VARIANTS {
            let label = condition.to_string();
            assert_eq!(label.parse::<Condition>().ok(), Some(*condition));
        }
        assert_eq!(Condition::PartlyCloudy.to_string(), "Partly Cloudy");
    }

    #[test]
    fn forecast_labels_follow_the_week() {
        assert_eq!(
            forecast_day_labels(Weekday::Wed),
            vec!["Today", "Tomorrow", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(
            forecast_day_labels(Weekday::Sat),
            vec!["Today", "Tomorrow", "Monday", "Tuesday", "Wednesday"]
        );
    }

    #[test]
    fn validate_rejects_short_forecast() {
        let report = WeatherReport {
            current: CurrentConditions {
                location: "Quito".to_string(),
                temperature: 20,
                condition: "Sunny".to_string(),
                humidity: 50,
                wind_speed: 10,
                visibility: 10,
                pressure: 1010,
                feels_like: 21,
            },
            forecast: Vec::new(),
        };
        assert_eq!(
            report.validate(),
            Err(ProviderError::IncompleteForecast {
                expected: 5,
                actual: 0
            })
        );
    }
}
