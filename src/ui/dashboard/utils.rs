//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventType;
use crate::weather::types::Condition;
use ratatui::prelude::Color;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Get a ratatui color for an activity log entry
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Input => Color::Cyan,
        EventType::Loading => Color::LightBlue,
        EventType::Success => Color::Green,
        EventType::Error => Color::LightRed,
        EventType::Stale => Color::Yellow,
    }
}

/// Accent color for a condition label; unknown labels get the sunny accent.
pub fn condition_color(label: &str) -> Color {
    match label.parse::<Condition>().unwrap_or(Condition::Sunny) {
        Condition::Sunny => Color::LightYellow,
        Condition::PartlyCloudy => Color::Yellow,
        Condition::Cloudy => Color::Gray,
        Condition::Rainy => Color::LightBlue,
        Condition::Snowy => Color::White,
        Condition::Thunderstorm => Color::Magenta,
    }
}

/// Spinner glyph for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}
