use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use thiserror::Error;

/// Errors produced when building a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    #[error("hour {0} out of range (0-23)")]
    HourOutOfRange(u32),

    #[error("minute {0} out of range (0-59)")]
    MinuteOutOfRange(u32),

    #[error("invalid time '{0}', expected HH:MM")]
    Malformed(String),
}

/// Minute-resolution wall-clock time, the key quotes are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeOfDayError> {
        if hour > 23 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Current local time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
        }
    }

    /// Zero-padded `HH:MM` lookup key.
    pub fn key(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeOfDayError::Malformed(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour = hour.parse::<u32>().map_err(|_| malformed())?;
        let minute = minute.parse::<u32>().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}
