// SPDX-License-Identifier: MIT

//!
//! *Part of the wider TimelineGrid project*
//!
//! This crate lays timelines out.  Given a window of time, the calendar unit to
//! divide it into, and a list of events, it works out which columns each event
//! covers and which row each event goes in so that no two events in a row
//! overlap.  It also computes the zoom and scroll transforms used while the
//! timeline is being looked at.
//!
//! The engine is responsible for:
//!
//! - Mapping event dates onto integer columns, clipped to the window
//! - Packing events into rows (highest priority nearest the axis)
//! - The labels along the axis
//! - Zooming around the cursor
//!
//! Everything the engine produces is plain data.  Drawing it (to a canvas, a
//! terminal, an image) is left to the caller.
//!
//! ## Usage
//!
//! ```
//! use timeline_grid_core::{EventId, EventInterval, Granularity, Priority, Timestamp, TimelineWindow};
//! use timeline_grid_layout::layout;
//!
//! let window = TimelineWindow::from(
//!     Timestamp::from_date(2020, 1, 1).unwrap(),
//!     Timestamp::from_date(2020, 1, 11).unwrap(),
//!     Granularity::Day,
//! );
//! let events = vec![EventInterval::from(
//!     EventId::new(1),
//!     Timestamp::from_date(2020, 1, 3).unwrap(),
//!     Timestamp::from_date(2020, 1, 5).unwrap(),
//!     Priority::MIN,
//!     "Launch",
//! )];
//! let result = layout(&window, &events);
//! assert_eq!(result.total_columns, 10);
//! assert_eq!(result.placements[0].row, 1);
//! ```
//!

pub mod config;
pub mod engine;

pub use config::*;
pub use engine::*;
