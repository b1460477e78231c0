// SPDX-License-Identifier: MIT

//!
//! Row packing
//!

use crate::{AXIS_ROW, ClippedEvent, LayoutResult, PlacedEvent, ranges_intersect};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use timeline_grid_core::{EventInterval, Priority};

/// How the packer finds out which rows are already taken where a new event
/// wants to go.  Both give exactly the same placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// Check the new event against every event placed so far (O(n²))
    #[default]
    Scan,

    /// Keep an ordered map of occupied column ranges per row, and check the
    /// new event against the one range in each row that could overlap it
    RowIndex,
}

/// Put clipped events into rows so that no two events in a row share a
/// column.
///
/// Events are placed one at a time, highest priority first, then earliest
/// start, then longest, then lowest ID.  Each goes into the lowest row
/// (above the axis) that is free across all of its columns, and a new row is
/// added when none is.  The placements are returned in that order.
///
/// The priority of each clipped event is taken from `events` (matched by ID).
pub fn pack_rows(
    total_columns: i64,
    clipped: &[ClippedEvent],
    events: &[EventInterval],
    strategy: PackingStrategy,
) -> LayoutResult {
    let ordered = placement_order(clipped, events);
    let placements = match strategy {
        PackingStrategy::Scan => place_by_scan(&ordered),
        PackingStrategy::RowIndex => place_by_row_index(&ordered),
    };
    LayoutResult::from(total_columns, placements)
}

/// Sort the clipped events into the order they are to be placed in
fn placement_order(clipped: &[ClippedEvent], events: &[EventInterval]) -> Vec<ClippedEvent> {
    let priorities: HashMap<_, _> = events
        .iter()
        .map(|event| (event.id(), event.priority()))
        .collect();

    let mut ordered: Vec<(Priority, ClippedEvent)> = clipped
        .iter()
        .map(|event| {
            let priority = priorities.get(&event.id).copied().unwrap_or_else(|| {
                warn!("no event with id {} to take a priority from", event.id);
                Priority::MIN
            });
            (priority, *event)
        })
        .collect();

    ordered.sort_by_key(|(priority, event)| {
        (
            Reverse(*priority),
            event.start_column,
            Reverse(event.column_span),
            event.id,
        )
    });

    ordered.into_iter().map(|(_, event)| event).collect()
}

/// Place events by checking each against all those already placed
fn place_by_scan(ordered: &[ClippedEvent]) -> Vec<PlacedEvent> {
    let mut placed: Vec<PlacedEvent> = Vec::with_capacity(ordered.len());
    let mut highest_row = AXIS_ROW;

    for event in ordered {
        // Mark the rows that already have something in this event's columns
        let mut used_rows = vec![false; highest_row + 1];
        for other in &placed {
            if ranges_intersect(
                other.start_column,
                other.column_span,
                event.start_column,
                event.column_span,
            ) {
                used_rows[other.row] = true;
            }
        }

        // Take the first unmarked row, or start a new one
        let row = (AXIS_ROW + 1..used_rows.len())
            .find(|row| !used_rows[*row])
            .unwrap_or(used_rows.len());

        trace!("event {} placed in row {row}", event.id);
        highest_row = highest_row.max(row);
        placed.push(PlacedEvent::from(event, row));
    }

    placed
}

/// Place events by keeping each row's occupied ranges in order
fn place_by_row_index(ordered: &[ClippedEvent]) -> Vec<PlacedEvent> {
    let mut placed: Vec<PlacedEvent> = Vec::with_capacity(ordered.len());

    // The occupied ranges in each row above the axis, start column -> end
    // column.  Ranges in a row never overlap, so they're ordered by end too.
    let mut rows: Vec<BTreeMap<i64, i64>> = Vec::new();

    for event in ordered {
        let start = event.start_column;
        let end = event.end_column();

        let index = match rows.iter().position(|row| row_is_free(row, start, end)) {
            Some(index) => index,
            None => {
                rows.push(BTreeMap::new());
                rows.len() - 1
            }
        };
        rows[index].insert(start, end);

        let row = AXIS_ROW + 1 + index;
        trace!("event {} placed in row {row}", event.id);
        placed.push(PlacedEvent::from(event, row));
    }

    placed
}

/// Only the range starting last before `end` can reach into `[start, end)`:
/// anything starting earlier also ends no later than that range starts
fn row_is_free(row: &BTreeMap<i64, i64>, start: i64, end: i64) -> bool {
    row.range(..end)
        .next_back()
        .map_or(true, |(_, occupied_end)| *occupied_end <= start)
}
