// SPDX-License-Identifier: MIT

//!
//! The TimelineGrid timeline window type
//!

use crate::{Granularity, Timestamp, distance};
use serde::{Deserialize, Serialize};

/// The span of time a timeline shows, and the unit it is divided into
///
/// The end is allowed to be before the start.  Such a window has no columns
/// and nothing is drawn on it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineWindow {
    start: Timestamp,
    end: Timestamp,
    granularity: Granularity,
}

impl TimelineWindow {
    /// Create a timeline window
    pub fn from(start: Timestamp, end: Timestamp, granularity: Granularity) -> Self {
        Self {
            start,
            end,
            granularity,
        }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The number of whole columns between the start and end.  Zero or
    /// negative means there is nothing to draw.
    pub fn total_columns(&self) -> i64 {
        distance(self.start, self.end, self.granularity)
    }

    /// The number of whole columns from the start of the window to `timestamp`
    pub fn column_of(&self, timestamp: Timestamp) -> i64 {
        distance(self.start, timestamp, self.granularity)
    }

    /// e.g. 1.1.2020 - 11.1.2020
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.as_short_date_format(),
            self.end.as_short_date_format()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn window(start: (i32, u32, u32), end: (i32, u32, u32), granularity: Granularity) -> TimelineWindow {
        TimelineWindow::from(
            Timestamp::from_date(start.0, start.1, start.2).unwrap(),
            Timestamp::from_date(end.0, end.1, end.2).unwrap(),
            granularity,
        )
    }

    #[test]
    fn total_columns() {
        assert_eq!(
            window((2020, 1, 1), (2020, 1, 11), Granularity::Day).total_columns(),
            10
        );
        assert_eq!(
            window((2020, 6, 1), (2020, 6, 1), Granularity::Day).total_columns(),
            0
        );
        assert_eq!(
            window((2020, 6, 1), (2019, 6, 1), Granularity::Month).total_columns(),
            -12
        );
    }

    #[test]
    fn column_of() {
        let window = window((2020, 1, 1), (2020, 12, 31), Granularity::Month);
        let march = Timestamp::from_date(2020, 3, 15).unwrap();
        let before = Timestamp::from_date(2019, 11, 1).unwrap();
        assert_eq!(window.column_of(march), 2);
        assert_eq!(window.column_of(before), -2);
    }

    #[test]
    fn date_range_label() {
        let window = window((2020, 1, 1), (2020, 1, 11), Granularity::Day);
        assert_eq!(window.date_range_label(), "1.1.2020 - 11.1.2020");
    }

    #[test]
    fn deserialise() {
        let json = r#"{
            "start": {"year": 2020, "month": 1, "day": 1},
            "end": {"year": 2020, "month": 1, "day": 11},
            "granularity": 5
        }"#;
        let window: TimelineWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.granularity(), Granularity::Day);
        assert_eq!(window.total_columns(), 10);
    }
}
