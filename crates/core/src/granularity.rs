// SPDX-License-Identifier: MIT

//!
//! The TimelineGrid granularity type
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can arise in relation to a [`Granularity`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GranularityError {
    /// The storage code is not one of the 11 known units (must be 1 <= code <= 11)
    #[error("Granularity code `{0}` is not allowed")]
    InvalidCode(i64),

    /// The name is not one of the 11 known units
    #[error("Granularity `{0}` is not recognised")]
    InvalidName(String),
}

/// The calendar unit a timeline is divided into.  One column of the timeline
/// is one unit.
///
/// Variants are ordered from finest to coarsest, so `Day < Month` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

impl Granularity {
    /// Every granularity, finest first
    pub const ALL: [Granularity; 11] = [
        Granularity::Millisecond,
        Granularity::Second,
        Granularity::Minute,
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
        Granularity::Decade,
        Granularity::Century,
        Granularity::Millennium,
    ];

    /// The storage code (`Millisecond` is 1, `Millennium` is 11)
    pub fn code(&self) -> i64 {
        match self {
            Granularity::Millisecond => 1,
            Granularity::Second => 2,
            Granularity::Minute => 3,
            Granularity::Hour => 4,
            Granularity::Day => 5,
            Granularity::Week => 6,
            Granularity::Month => 7,
            Granularity::Year => 8,
            Granularity::Decade => 9,
            Granularity::Century => 10,
            Granularity::Millennium => 11,
        }
    }

    /// The lower-case name used when (de)serialising
    pub fn name(&self) -> &'static str {
        match self {
            Granularity::Millisecond => "millisecond",
            Granularity::Second => "second",
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::Decade => "decade",
            Granularity::Century => "century",
            Granularity::Millennium => "millennium",
        }
    }

    /// Whether the unit is measured on the clock rather than the calendar
    pub fn is_time_based(&self) -> bool {
        *self <= Granularity::Hour
    }
}

impl TryFrom<i64> for Granularity {
    type Error = GranularityError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Granularity::ALL
            .into_iter()
            .find(|granularity| granularity.code() == value)
            .ok_or(GranularityError::InvalidCode(value))
    }
}

impl FromStr for Granularity {
    type Err = GranularityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Granularity::ALL
            .into_iter()
            .find(|granularity| granularity.name() == name)
            .ok_or(GranularityError::InvalidName(s.to_string()))
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Granularity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Storage hands us codes, people hand us names
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGranularity {
    Code(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for Granularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let granularity = match RawGranularity::deserialize(deserializer)? {
            RawGranularity::Code(code) => Granularity::try_from(code),
            RawGranularity::Name(name) => name.parse(),
        };
        granularity.map_err(serde::de::Error::custom)
    }
}
