// SPDX-License-Identifier: MIT

//!
//! Axis ticks
//!

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use timeline_grid_core::{Granularity, TimelineWindow};

/// A label drawn on the axis row, at the left edge of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisTick {
    pub column: i64,
    pub label: i64,
}

/// The labels for the timeline's axis.
///
/// Calendar units of a year or more are numbered from the window's start
/// (e.g. the 1990s are decade 199), and years are labelled every other
/// column.  Finer units are simply counted from 1.  There is one label per
/// column boundary, including the far right edge, so an empty window has
/// none.
pub fn axis_ticks(window: &TimelineWindow) -> Vec<AxisTick> {
    let total_columns = window.total_columns();
    if total_columns < 1 {
        return Vec::new();
    }

    let start_year = i64::from(window.start().year());
    let (first, frequency) = match window.granularity() {
        Granularity::Year => (start_year, 2),
        Granularity::Decade => (start_year / 10, 1),
        Granularity::Century => (start_year / 100, 1),
        Granularity::Millennium => (start_year / 1000, 1),
        _ => (1, 1),
    };

    (0..=total_columns)
        .step_by(frequency)
        .map(|column| AxisTick {
            column,
            label: first + column,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use timeline_grid_core::Timestamp;

    fn window(start_year: i32, end_year: i32, granularity: Granularity) -> TimelineWindow {
        TimelineWindow::from(
            Timestamp::from_date(start_year, 1, 1).unwrap(),
            Timestamp::from_date(end_year, 1, 1).unwrap(),
            granularity,
        )
    }

    fn labels(ticks: &[AxisTick]) -> Vec<i64> {
        ticks.iter().map(|tick| tick.label).collect()
    }

    #[test]
    fn days_are_counted_from_one() {
        let window = TimelineWindow::from(
            Timestamp::from_date(2020, 1, 1).unwrap(),
            Timestamp::from_date(2020, 1, 5).unwrap(),
            Granularity::Day,
        );
        let ticks = axis_ticks(&window);
        assert_eq!(labels(&ticks), vec![1, 2, 3, 4, 5]);
        assert_eq!(ticks[4].column, 4);
    }

    #[test]
    fn years_every_other_column() {
        let ticks = axis_ticks(&window(2000, 2005, Granularity::Year));
        assert_eq!(labels(&ticks), vec![2000, 2002, 2004]);
        let columns: Vec<_> = ticks.iter().map(|tick| tick.column).collect();
        assert_eq!(columns, vec![0, 2, 4]);
    }

    #[test]
    fn coarse_units_from_start_year() {
        assert_eq!(
            labels(&axis_ticks(&window(1990, 2020, Granularity::Decade))),
            vec![199, 200, 201, 202]
        );
        assert_eq!(
            labels(&axis_ticks(&window(1800, 2000, Granularity::Century))),
            vec![18, 19, 20]
        );
        assert_eq!(
            labels(&axis_ticks(&window(0, 3000, Granularity::Millennium))),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn empty_window_has_no_ticks() {
        assert!(axis_ticks(&window(2020, 2020, Granularity::Year)).is_empty());
        assert!(axis_ticks(&window(2020, 2010, Granularity::Year)).is_empty());
    }
}
