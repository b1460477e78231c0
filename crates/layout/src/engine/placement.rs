// SPDX-License-Identifier: MIT

//!
//! Placements
//!

use crate::AXIS_ROW;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use timeline_grid_core::EventId;

/// An event's columns once clipped to the window (for use between the column
/// mapper and the row packer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClippedEvent {
    pub id: EventId,

    /// The first column the event covers (0 is the window's first column)
    pub start_column: i64,

    /// The number of columns the event covers (always at least 1)
    pub column_span: i64,
}

impl ClippedEvent {
    /// The column after the last one the event covers
    pub fn end_column(&self) -> i64 {
        self.start_column + self.column_span
    }
}

/// Where an event is to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub id: EventId,

    /// The event's row.  Never [`AXIS_ROW`].
    pub row: usize,

    pub start_column: i64,
    pub column_span: i64,
}

impl PlacedEvent {
    pub(crate) fn from(clipped: &ClippedEvent, row: usize) -> Self {
        Self {
            id: clipped.id,
            row,
            start_column: clipped.start_column,
            column_span: clipped.column_span,
        }
    }

    /// The column after the last one the event covers
    pub fn end_column(&self) -> i64 {
        self.start_column + self.column_span
    }
}

/// Everything needed to draw a laid out timeline: the size of the grid and
/// where each event goes in it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The number of columns in the grid
    pub total_columns: i64,

    /// The number of rows in the grid, including the axis row
    pub total_rows: usize,

    /// In the order the events were placed (highest priority first)
    pub placements: Vec<PlacedEvent>,
}

impl LayoutResult {
    /// Wrap up the placements, deriving the number of rows from the highest
    /// row used
    pub fn from(total_columns: i64, placements: Vec<PlacedEvent>) -> Self {
        let highest_row = placements
            .iter()
            .map(|placement| placement.row)
            .max()
            .unwrap_or(AXIS_ROW);
        Self {
            total_columns,
            total_rows: highest_row + 1,
            placements,
        }
    }

    /// Nothing to draw: no columns, only the axis row
    pub fn empty() -> Self {
        Self::from(0, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Find where an event was placed (if it was)
    pub fn placement_of(&self, id: EventId) -> Option<&PlacedEvent> {
        self.placements.iter().find(|placement| placement.id == id)
    }
}
