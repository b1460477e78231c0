// SPDX-License-Identifier: MIT

//!
//! Points
//!

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position as a fraction of the viewport's width (`x`) and height (`y`),
/// so `(0, 0)` is the top left and `(1, 1)` the bottom right
pub type CursorFraction = Point;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The middle of the viewport
    pub const CENTRE: Point = Point { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Turn a position in pixels into a fraction of the viewport's size.
    /// Positions outside the viewport are pulled back to its edge.
    pub fn fraction_of(position: Point, viewport_size: Point) -> Self {
        let fraction = |value: f64, size: f64| {
            if size > 0.0 {
                (value / size).clamp(0.0, 1.0)
            } else {
                0.5
            }
        };
        Point {
            x: fraction(position.x, viewport_size.x),
            y: fraction(position.y, viewport_size.y),
        }
    }
}
