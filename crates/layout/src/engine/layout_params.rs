// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{LARGE_WINDOW_COLUMNS, MAX_SCALE, MIN_SCALE, PackingStrategy, WHEEL_ZOOM_FACTOR};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Parameters that change how the layout is computed (but never where an
/// event ends up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Windows with more columns than this are reported to the large window
    /// policy before being laid out
    pub large_window_columns: i64,

    /// How row occupancy is tracked while packing
    pub packing_strategy: PackingStrategy,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            large_window_columns: LARGE_WINDOW_COLUMNS,
            packing_strategy: PackingStrategy::default(),
        }
    }
}

/// The bounds and step used when zooming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    /// The smallest scale that can be zoomed out to
    pub min_scale: f64,

    /// The largest scale that can be zoomed in to
    pub max_scale: f64,

    /// The scale is multiplied (zooming in) or divided (zooming out) by this
    /// for each wheel tick
    pub wheel_factor: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        ViewportLimits {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_factor: WHEEL_ZOOM_FACTOR,
        }
    }
}

impl ViewportLimits {
    /// Pull the scale into `[min_scale, max_scale]`.  Not a number is treated
    /// as the smallest scale.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale > self.max_scale {
            return self.max_scale;
        }
        scale.max(self.min_scale)
    }
}
