// SPDX-License-Identifier: MIT

//!
//! Constants
//!

/// The row the axis is drawn in.  Events are never placed in it.
pub const AXIS_ROW: usize = 0;

/// Windows wider than this many columns are slow to draw, so the caller is
/// asked before laying them out
pub const LARGE_WINDOW_COLUMNS: i64 = 1000;

/// The smallest zoom scale
pub const MIN_SCALE: f64 = 0.001;

/// The largest zoom scale
pub const MAX_SCALE: f64 = 5.0;

/// The zoom scale the timeline starts at
pub const DEFAULT_SCALE: f64 = 1.0;

/// How much one wheel tick zooms in (or out, dividing)
pub const WHEEL_ZOOM_FACTOR: f64 = 1.2;
