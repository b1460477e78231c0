// SPDX-License-Identifier: MIT

//!
//! Window size checks
//!

use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can arise when laying out a timeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The window was too large and the large window policy said not to go on
    #[error("Timeline of {total_columns} columns is larger than {threshold} and was not laid out")]
    LargeWindowDeclined { total_columns: i64, threshold: i64 },
}

/// Handed to the large window policy when a window has more columns than the
/// threshold.  Laying it out is allowed, just slow to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LargeWindow {
    pub total_columns: i64,
    pub threshold: i64,
}

/// What a window's column count means for laying it out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowExtent {
    /// No columns (the end is not at least one unit after the start)
    Empty,

    /// A window that can be laid out straight away
    Normal { total_columns: i64 },

    /// A window the caller should be asked about first
    Large(LargeWindow),
}

impl WindowExtent {
    /// Classify a column count against the large window threshold
    pub fn from(total_columns: i64, threshold: i64) -> Self {
        if total_columns < 1 {
            WindowExtent::Empty
        } else if total_columns > threshold {
            WindowExtent::Large(LargeWindow {
                total_columns,
                threshold,
            })
        } else {
            WindowExtent::Normal { total_columns }
        }
    }

    pub fn total_columns(&self) -> i64 {
        match self {
            WindowExtent::Empty => 0,
            WindowExtent::Normal { total_columns } => *total_columns,
            WindowExtent::Large(large) => large.total_columns,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(WindowExtent::from(0, 1000), WindowExtent::Empty);
        assert_eq!(WindowExtent::from(-5, 1000), WindowExtent::Empty);
        assert_eq!(WindowExtent::from(-5, 1000).total_columns(), 0);
        assert_eq!(
            WindowExtent::from(1, 1000),
            WindowExtent::Normal { total_columns: 1 }
        );
        assert_eq!(
            WindowExtent::from(1000, 1000),
            WindowExtent::Normal {
                total_columns: 1000
            }
        );
        assert_eq!(
            WindowExtent::from(1001, 1000),
            WindowExtent::Large(LargeWindow {
                total_columns: 1001,
                threshold: 1000
            })
        );
        assert_eq!(WindowExtent::from(1001, 1000).total_columns(), 1001);
    }
}
