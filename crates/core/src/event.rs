// SPDX-License-Identifier: MIT

//!
//! The TimelineGrid event types
//!

use crate::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`EventInterval`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The priority is not allowed (must be [`Priority::MIN`] <= priority <= [`Priority::MAX`])
    #[error("Priority `{0}` is not allowed")]
    InvalidPriority(i64),
}

/// The event ID type.  IDs are unique within a timeline and are used as the
/// final tie-break when laying events out, so they must be stable.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// The event priority type.  Higher priority events are placed first, and so
/// end up nearer the axis.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Default, Hash, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    /// The lowest priority (the default)
    pub const MIN: Priority = Priority(0);

    /// The highest priority
    pub const MAX: Priority = Priority(3);

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = EventError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(EventError::InvalidPriority(value))
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Priority::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// A time-bounded event to be placed on a timeline
///
/// The end may be before (or equal to) the start.  Such events are treated as
/// instants by the layout engine and still get a column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventInterval {
    id: EventId,
    start: Timestamp,
    end: Timestamp,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    label: String,
}

impl EventInterval {
    /// Create an event
    pub fn from<S: ToString>(
        id: EventId,
        start: Timestamp,
        end: Timestamp,
        priority: Priority,
        label: S,
    ) -> Self {
        Self {
            id,
            start,
            end,
            priority,
            label: label.to_string(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The caller's text for the event.  Never interpreted by the engine.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the event has no duration
    pub fn is_instant(&self) -> bool {
        self.end <= self.start
    }
}
