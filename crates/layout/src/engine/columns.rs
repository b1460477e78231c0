// SPDX-License-Identifier: MIT

//!
//! Column mapping
//!

use crate::ClippedEvent;
use log::trace;
use timeline_grid_core::{EventInterval, TimelineWindow, distance};

/// Work out the columns each event covers, clipped to the window.
///
/// Events left with no columns once clipped (e.g. those entirely before or
/// after the window) are dropped.  If the window itself has no columns then
/// nothing is returned.  The order of the events is kept.
pub fn map_columns(window: &TimelineWindow, events: &[EventInterval]) -> Vec<ClippedEvent> {
    clip_events(window, window.total_columns(), events)
}

/// As [`map_columns`] but with the window's column count already known
pub(crate) fn clip_events(
    window: &TimelineWindow,
    total_columns: i64,
    events: &[EventInterval],
) -> Vec<ClippedEvent> {
    if total_columns < 1 {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(|event| {
            let clipped = clip_event(window, total_columns, event);
            if clipped.is_none() {
                trace!("event {} not visible in window, dropped", event.id());
            }
            clipped
        })
        .collect()
}

/// Map one event onto the window's columns
fn clip_event(
    window: &TimelineWindow,
    total_columns: i64,
    event: &EventInterval,
) -> Option<ClippedEvent> {
    let granularity = window.granularity();
    let mut start_column = window.column_of(event.start());

    // Instants (and events ending before they start) still get a column
    let mut column_span = distance(event.start(), event.end(), granularity).max(1);

    // Cut off the part before the window.  This must happen before the right
    // hand cut as it changes the span being checked there.
    if start_column < 0 {
        column_span += start_column;
        start_column = 0;
    }

    // Cut off the part after the window
    if start_column + column_span > total_columns {
        column_span = total_columns - start_column;
    }

    // Nothing left to show
    if column_span < 1 {
        return None;
    }

    Some(ClippedEvent {
        id: event.id(),
        start_column,
        column_span,
    })
}
