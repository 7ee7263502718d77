// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Wall-clock time of day as shown in an "HH:MM" time field.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Hour/minute pair rendered zero-padded as `HH:MM`.
///
/// Field order makes the derived ordering chronological, which matches a
/// lexicographic comparison of the zero-padded text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Reasons a time string could not be read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("expected a time formatted as HH:MM, got {0:?}")]
    Format(String),
    #[error("hour must be 0-23, got {0}")]
    Hour(u32),
    #[error("minute must be 0-59, got {0}")]
    Minute(u32),
}

impl TimeOfDay {
    /// Build a time of day; `None` when hour or minute is out of range.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Unchecked constructor for in-range literals.
    pub(crate) const fn hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Truncate a wall-clock time to its hour and minute.
    pub fn from_time(time: chrono::NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Shift forward by `minutes`, carrying whole hours out of the minute field.
    ///
    /// The hour is never wrapped back to 0, so `23:59` plus one minute reads
    /// `24:00`. Such a value sorts after every selectable time.
    pub fn plus_minutes(self, minutes: u32) -> Self {
        let total = u32::from(self.minute).saturating_add(minutes);
        let hour = u32::from(self.hour).saturating_add(total / 60);
        Self {
            hour: hour.min(u32::from(u8::MAX)) as u8,
            minute: (total % 60) as u8,
        }
    }

    /// Whether `self` lies within `[start, end]`, both ends inclusive.
    pub fn is_within(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        *self >= start && *self <= end
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Accepts `H:MM`, `HH:MM` and `HH:MM:SS` (seconds are dropped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_err = || ParseTimeError::Format(trimmed.to_string());

        let mut parts = trimmed.split(':');
        let hour_part = parts.next().ok_or_else(format_err)?;
        let minute_part = parts.next().ok_or_else(format_err)?;
        if let Some(seconds) = parts.next() {
            if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format_err());
            }
        }
        if parts.next().is_some() {
            return Err(format_err());
        }

        if hour_part.is_empty()
            || hour_part.len() > 2
            || minute_part.len() != 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
            || !minute_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(format_err());
        }

        let hour: u32 = hour_part.parse().map_err(|_| format_err())?;
        let minute: u32 = minute_part.parse().map_err(|_| format_err())?;
        if hour > 23 {
            return Err(ParseTimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(ParseTimeError::Minute(minute));
        }

        Self::new(hour as u8, minute as u8).ok_or_else(format_err)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
