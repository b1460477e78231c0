// SPDX-License-Identifier: MIT

//!
//! The `timeline-grid-layout` engine
//!

mod axis;
mod columns;
mod consts;
mod helpers;
mod layout_params;
mod placement;
mod point;
mod rows;
mod viewport;
mod window_check;

pub(crate) use helpers::*;

pub use axis::*;
pub use columns::*;
pub use consts::*;
pub use layout_params::*;
pub use placement::*;
pub use point::*;
pub use rows::*;
pub use viewport::*;
pub use window_check::*;

use log::debug;
use timeline_grid_core::{EventInterval, TimelineWindow};

/// Lay a timeline out with the default parameters, going ahead however large
/// the window is.
///
/// Identical inputs always give identical results.
pub fn layout(window: &TimelineWindow, events: &[EventInterval]) -> LayoutResult {
    let params = LayoutParams::default();
    let total_columns = window.total_columns();
    if total_columns < 1 {
        return LayoutResult::empty();
    }
    let clipped = clip_events(window, total_columns, events);
    pack_rows(total_columns, &clipped, events, params.packing_strategy)
}

/// The `timeline-grid-layout` engine.  Lays timelines out using its
/// parameters, and asks its large window policy before laying out any window
/// with more columns than the threshold.
///
/// The engine holds no state between layouts, so one engine can be shared
/// between threads and used for any number of timelines.
pub struct LayoutEngine {
    /// Layout parameters (large window threshold, packing strategy)
    params: LayoutParams,

    /// The function the engine calls when a window is large.
    ///
    /// It is passed the column count and threshold, and returns whether to go
    /// ahead (`true`) or give up on the layout (`false`).  This is where a
    /// frontend would ask "this timeline is very large, load it anyway?".
    ///
    /// i.e. `function(large_window) -> proceed`
    large_window_policy: Box<dyn Fn(LargeWindow) -> bool + Send + Sync>,
}

impl LayoutEngine {
    /// Create a new engine.  Pass in a function that the engine can call to
    /// decide whether to lay out a large window
    pub fn new<T>(large_window_policy: T) -> Self
    where
        T: 'static + Fn(LargeWindow) -> bool + Send + Sync,
    {
        Self {
            params: LayoutParams::default(),
            large_window_policy: Box::new(large_window_policy),
        }
    }

    /// Create an engine that lays out every window, however large
    pub fn always_proceed() -> Self {
        Self::new(|_| true)
    }

    /// Use the given parameters rather than the defaults
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> LayoutParams {
        self.params
    }

    pub fn set_params(&mut self, params: LayoutParams) {
        debug!("engine set params {params:?}");
        self.params = params;
    }

    /// Check the window's size, asking the large window policy if need be.
    /// Returns the window's extent if it's to be laid out.
    pub fn admit_window(&self, window: &TimelineWindow) -> Result<WindowExtent, LayoutError> {
        let extent = WindowExtent::from(window.total_columns(), self.params.large_window_columns);
        match extent {
            WindowExtent::Empty => {
                debug!("window {} has no columns", window.date_range_label());
            }
            WindowExtent::Large(large) => {
                debug!(
                    "window {} has {} columns (more than {}), asking policy",
                    window.date_range_label(),
                    large.total_columns,
                    large.threshold
                );
                if !(self.large_window_policy)(large) {
                    debug!("large window declined");
                    return Err(LayoutError::LargeWindowDeclined {
                        total_columns: large.total_columns,
                        threshold: large.threshold,
                    });
                }
            }
            WindowExtent::Normal { .. } => (),
        }
        Ok(extent)
    }

    /// Lay the events out on the window.
    ///
    /// An empty window gives an empty result (not an error).  A large window
    /// is only laid out if the large window policy agrees.
    pub fn layout(
        &self,
        window: &TimelineWindow,
        events: &[EventInterval],
    ) -> Result<LayoutResult, LayoutError> {
        let total_columns = match self.admit_window(window)? {
            WindowExtent::Empty => return Ok(LayoutResult::empty()),
            extent => extent.total_columns(),
        };

        let clipped = clip_events(window, total_columns, events);
        debug!(
            "{} of {} events visible across {total_columns} columns, packing by {:?}",
            clipped.len(),
            events.len(),
            self.params.packing_strategy
        );

        let result = pack_rows(total_columns, &clipped, events, self.params.packing_strategy);
        debug!("laid out in {} rows", result.total_rows);
        Ok(result)
    }

    /// The labels for the window's axis.  There is one per column, so a large
    /// window is only labelled if the large window policy agrees.
    pub fn axis_ticks(&self, window: &TimelineWindow) -> Result<Vec<AxisTick>, LayoutError> {
        match self.admit_window(window)? {
            WindowExtent::Empty => Ok(Vec::new()),
            _ => Ok(axis_ticks(window)),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::always_proceed()
    }
}
