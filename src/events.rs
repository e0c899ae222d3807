//! Event System
//!
//! Timestamped dashboard events feeding the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A location was submitted or rejected.
    Input,
    /// A load cycle started.
    Loading,
    Success,
    Error,
    /// A superseded cycle finished late.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Load cycle the event belongs to, if any
    pub cycle: Option<u64>,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel, cycle: Option<u64>) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            cycle,
        }
    }

    pub fn location_changed(location: &str) -> Self {
        Self::new(
            format!("Location set to {}", location),
            EventType::Input,
            LogLevel::Info,
            None,
        )
    }

    pub fn location_ignored() -> Self {
        Self::new(
            "Ignored empty location".to_string(),
            EventType::Input,
            LogLevel::Debug,
            None,
        )
    }

    pub fn load_started(cycle: u64, location: &str) -> Self {
        Self::new(
            format!("Fetching weather for {}", location),
            EventType::Loading,
            LogLevel::Info,
            Some(cycle),
        )
    }

    pub fn load_succeeded(cycle: u64, location: &str) -> Self {
        Self::new(
            format!("Weather loaded for {}", location),
            EventType::Success,
            LogLevel::Info,
            Some(cycle),
        )
    }

    pub fn load_failed(cycle: u64, detail: String) -> Self {
        Self::new(detail, EventType::Error, LogLevel::Error, Some(cycle))
    }

    /// A superseded cycle finished after a newer one was started.
    pub fn stale_result(cycle: u64, latest: u64) -> Self {
        Self::new(
            format!("Cycle #{} finished after #{} was requested", cycle, latest),
            EventType::Stale,
            LogLevel::Warn,
            Some(cycle),
        )
    }

    pub fn should_display(&self) -> bool {
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
