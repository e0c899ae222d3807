//! Typed view state and the pure render step
//!
//! `DashboardView` is what the controller holds; `Panel` is what gets drawn
//! (by the TUI widgets) or printed (in headless mode).

use crate::consts::cli_consts::{LOADING_MESSAGE, RETRY_LABEL};
use crate::weather::types::{CurrentConditions, ForecastDay, WeatherReport, pictogram};
use std::fmt::{self, Display, Formatter};

pub const FORECAST_TITLE: &str = "5-Day Forecast";

/// What the display region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Display(WeatherReport),
    Error(String),
}

impl DashboardView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn panel(&self) -> Panel {
        match self {
            Self::Loading => Panel::Loading {
                message: LOADING_MESSAGE.to_string(),
            },
            Self::Display(report) => Panel::Weather(render(&report.current, &report.forecast)),
            Self::Error(message) => Panel::Error {
                message: message.clone(),
                retry_label: RETRY_LABEL.to_string(),
            },
        }
    }
}

/// Display fragment replacing the whole display region.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading { message: String },
    Weather(WeatherPanel),
    Error { message: String, retry_label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub title: String,
    pub pictogram: &'static str,
    pub temperature: String,
    pub condition: String,
    pub feels_like: String,
    pub details: Vec<Detail>,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub day: String,
    pub icon: String,
    pub condition: String,
    pub high: String,
    pub low: String,
}

/// Map one report to its display fragment.
pub fn render(current: &CurrentConditions, forecast: &[ForecastDay]) -> WeatherPanel {
    let details = vec![
        Detail {
            label: "Humidity",
            value: format!("{}%", current.humidity),
        },
        Detail {
            label: "Wind Speed",
            value: format!("{} km/h", current.wind_speed),
        },
        Detail {
            label: "Visibility",
            value: format!("{} km", current.visibility),
        },
        Detail {
            label: "Pressure",
            value: format!("{} hPa", current.pressure),
        },
    ];

    let forecast = forecast
        .iter()
        .map(|day| ForecastCard {
            day: day.day.clone(),
            icon: day.icon.clone(),
            condition: day.condition.clone(),
            high: format!("{}°", day.high),
            low: format!("{}°", day.low),
        })
        .collect();

    WeatherPanel {
        title: current.location.clone(),
        pictogram: pictogram(&current.condition),
        temperature: format!("{}°C", current.temperature),
        condition: current.condition.clone(),
        feels_like: format!("Feels like {}°C", current.feels_like),
        details,
        forecast,
    }
}

impl Display for Panel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Loading { message } => writeln!(f, "{}", message),
            Panel::Error {
                message,
                retry_label,
            } => {
                writeln!(f, "{}", message)?;
                writeln!(f, "[ {} ]", retry_label)
            }
            Panel::Weather(panel) => {
                writeln!(f, "{}  {}", panel.title, panel.pictogram)?;
                writeln!(f, "{}  {}", panel.temperature, panel.condition)?;
                writeln!(f, "{}", panel.feels_like)?;
                for detail in &panel.details {
                    writeln!(f, "{}: {}", detail.label, detail.value)?;
                }
                writeln!(f)?;
                writeln!(f, "{}", FORECAST_TITLE)?;
                for card in &panel.forecast {
                    writeln!(
                        f,
                        "{:<10} {}  {:<14} {} / {}",
                        card.day, card.icon, card.condition, card.high, card.low
                    )?;
                }
                Ok(())
            }
        }
    }
}
