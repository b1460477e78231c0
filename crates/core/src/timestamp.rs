// SPDX-License-Identifier: MIT

//!
//! The TimelineGrid timestamp type
//!

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The minimum year allowed in the TimelineGrid system
pub const MIN_YEAR: i32 = -100_000;

/// The maximum year allowed in the TimelineGrid system
pub const MAX_YEAR: i32 = 100_000;

/// Errors that can arise in relation to a [`Timestamp`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i32),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(u32),

    /// The day does not exist in the given month (e.g. 30th Feb)
    #[error("Day `{day}` does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// The time of day is not allowed (e.g. hour 24 or minute 60)
    #[error("Time `{hour:02}:{minute:02}:{second:02}.{millisecond:03}` is not allowed")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },
}

/// A calendar date and time of day, to millisecond precision
///
/// Timestamps are immutable and totally ordered.  There is no time zone: all
/// timestamps on a timeline are assumed to be in the same one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a new [`Timestamp`] if the result will be valid
    pub fn from(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, TimestampError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimestampError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(TimestampError::InvalidMonth(month));
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimestampError::InvalidDay { year, month, day })?;
        let invalid_time = TimestampError::InvalidTime {
            hour,
            minute,
            second,
            millisecond,
        };
        // chrono would read a millisecond of 1000+ as a leap second
        if millisecond >= 1000 {
            return Err(invalid_time);
        }
        let time =
            NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or(invalid_time)?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Create a new [`Timestamp`] at midnight on the given day
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self, TimestampError> {
        Self::from(year, month, day, 0, 0, 0, 0)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// The sub-second part of the timestamp in whole milliseconds
    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// e.g. 1.1.2020 (day.month.year, no padding)
    pub fn as_short_date_format(&self) -> String {
        format!("{}.{}.{}", self.day(), self.month(), self.year())
    }

    pub(crate) fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// The field-by-field encoding used in storage and JSON.  The time of day
/// fields may be omitted, in which case they are zero.
#[derive(Serialize, Deserialize)]
struct RawTimestamp {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
    #[serde(default)]
    millisecond: u32,
}

impl From<Timestamp> for RawTimestamp {
    fn from(value: Timestamp) -> Self {
        RawTimestamp {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            millisecond: value.millisecond(),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawTimestamp::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTimestamp::deserialize(deserializer)?;
        Timestamp::from(
            raw.year,
            raw.month,
            raw.day,
            raw.hour,
            raw.minute,
            raw.second,
            raw.millisecond,
        )
        .map_err(serde::de::Error::custom)
    }
}
