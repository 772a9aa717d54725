// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time remaining until a target instant, split into calendar-free units.

use chrono::{DateTime, Utc};
use std::fmt;

/// A unit of the countdown, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// All units, in decomposition order.
    pub const ALL: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    pub fn millis(&self) -> i64 {
        match self {
            Unit::Day => 24 * 60 * 60 * 1000,
            Unit::Hour => 60 * 60 * 1000,
            Unit::Minute => 60 * 1000,
            Unit::Second => 1000,
        }
    }

    /// Unit name for `value`: plural only above one.
    pub fn label(&self, value: i64) -> String {
        if value > 1 {
            format!("{}s", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole units left until the target. Every field is `-1` once the target
/// has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ELAPSED: Remaining = Remaining {
        days: -1,
        hours: -1,
        minutes: -1,
        seconds: -1,
    };

    pub fn is_elapsed(&self) -> bool {
        *self == Self::ELAPSED
    }

    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
        }
    }

    /// `(unit, value)` pairs, largest unit first.
    pub fn units(&self) -> [(Unit, i64); 4] {
        Unit::ALL.map(|unit| (unit, self.get(unit)))
    }
}

impl fmt::Display for Remaining {
    /// `05 days  01 hour  00 minute  09 seconds`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (unit, value)) in self.units().into_iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:02} {}", value, unit.label(value))?;
        }
        Ok(())
    }
}

/// Splits the time from `now` to `target` into days, hours, minutes and
/// seconds, flooring each unit and carrying the remainder down.
pub fn describe(now: DateTime<Utc>, target: DateTime<Utc>) -> Remaining {
    let mut ms = (target - now).num_milliseconds();
    if ms < 0 {
        return Remaining::ELAPSED;
    }

    let mut take = |unit: Unit| {
        let value = ms / unit.millis();
        ms -= value * unit.millis();
        value
    };
    Remaining {
        days: take(Unit::Day),
        hours: take(Unit::Hour),
        minutes: take(Unit::Minute),
        seconds: take(Unit::Second),
    }
}

#[cfg(test)]
#[path = "countdown_tests.rs"]
mod tests;
