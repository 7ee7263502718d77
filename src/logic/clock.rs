// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Source of "now" for time-dependent guards.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the system's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant.
#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
