// SPDX-License-Identifier: MIT

//!
//! Zooming and scrolling
//!

use crate::{CursorFraction, DEFAULT_SCALE, ViewportLimits};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How a timeline is currently being viewed.  Each rendered timeline has one,
/// held by the caller and replaced on every zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// How much the timeline is magnified (1.0 is 100%)
    pub scale: f64,

    /// The horizontal scroll position (0.0 is the far left, 1.0 the far right)
    pub scroll_x: f64,

    /// The vertical scroll position (0.0 is the top, 1.0 the bottom)
    pub scroll_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        ViewportState {
            scale: DEFAULT_SCALE,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

/// The direction of one wheel tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel deltas above zero zoom in, anything else zooms out
    pub fn from_wheel_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }
}

impl ViewportLimits {
    /// Zoom to `requested_scale` around the cursor.
    ///
    /// The new scroll position is a weighted average of the current one and the
    /// cursor position, weighted by the square of the ratio of the old and new
    /// scales.  This keeps the point under the cursor where it is: a small
    /// change in scale barely moves the scroll position, a large one moves it
    /// most of the way to the cursor (zooming in) or away from it (zooming
    /// out).
    pub fn zoom(
        &self,
        requested_scale: f64,
        cursor: CursorFraction,
        current: ViewportState,
    ) -> ViewportState {
        let scale = self.clamp_scale(requested_scale);
        // Caller held state, so its scale may be out of range
        let weight = (self.clamp_scale(current.scale) / scale).powi(2);
        let anchor = |scroll: f64, cursor: f64| {
            (scroll * weight + cursor * (1.0 - weight)).clamp(0.0, 1.0)
        };
        let zoomed = ViewportState {
            scale,
            scroll_x: anchor(current.scroll_x, cursor.x),
            scroll_y: anchor(current.scroll_y, cursor.y),
        };
        trace!("zoom {current:?} -> {zoomed:?} around {cursor:?}");
        zoomed
    }

    /// Zoom one wheel tick in or out around the cursor
    pub fn wheel_zoom(
        &self,
        direction: ZoomDirection,
        cursor: CursorFraction,
        current: ViewportState,
    ) -> ViewportState {
        let requested_scale = match direction {
            ZoomDirection::In => current.scale * self.wheel_factor,
            ZoomDirection::Out => current.scale / self.wheel_factor,
        };
        self.zoom(requested_scale, cursor, current)
    }

    /// Jump to a scale (e.g. from a slider or a typed percentage).  The scroll
    /// position is left where it is.
    pub fn set_zoom(&self, requested_scale: f64, current: ViewportState) -> ViewportState {
        ViewportState {
            scale: self.clamp_scale(requested_scale),
            ..current
        }
    }

    /// Go back to 100%
    pub fn reset_zoom(&self, current: ViewportState) -> ViewportState {
        self.set_zoom(DEFAULT_SCALE, current)
    }

    /// Read a zoom typed in as a percentage (e.g. `150%` or `150`).  Empty text
    /// is 100%.  Returns the (clamped) scale, or `None` if the text isn't a
    /// whole percentage.
    pub fn parse_zoom_percentage(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        let digits = text.strip_suffix('%').unwrap_or(text);
        if digits.is_empty() {
            return Some(self.clamp_scale(DEFAULT_SCALE));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let percentage: f64 = digits.parse().ok()?;
        Some(self.clamp_scale(percentage / 100.0))
    }
}

/// Zoom to `requested_scale` around the cursor, within the default limits.
/// See [`ViewportLimits::zoom`].
pub fn zoom(requested_scale: f64, cursor: CursorFraction, current: ViewportState) -> ViewportState {
    ViewportLimits::default().zoom(requested_scale, cursor, current)
}

/// Zoom one wheel tick around the cursor, within the default limits
pub fn wheel_zoom(
    direction: ZoomDirection,
    cursor: CursorFraction,
    current: ViewportState,
) -> ViewportState {
    ViewportLimits::default().wheel_zoom(direction, cursor, current)
}

/// Jump to a scale without moving the scroll position, within the default
/// limits
pub fn set_zoom(requested_scale: f64, current: ViewportState) -> ViewportState {
    ViewportLimits::default().set_zoom(requested_scale, current)
}

/// The scale as shown to people, e.g. `150%`
pub fn zoom_percentage_label(scale: f64) -> String {
    format!("{}%", (scale * 100.0) as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MAX_SCALE, MIN_SCALE, Point};

    const EPSILON: f64 = 1e-9;

    fn state(scale: f64, scroll_x: f64, scroll_y: f64) -> ViewportState {
        ViewportState {
            scale,
            scroll_x,
            scroll_y,
        }
    }

    #[test]
    fn scale_is_clamped() {
        let current = ViewportState::default();
        assert_eq!(zoom(10.0, Point::CENTRE, current).scale, MAX_SCALE);
        assert_eq!(zoom(0.0, Point::CENTRE, current).scale, MIN_SCALE);
        assert_eq!(zoom(-1.0, Point::CENTRE, current).scale, MIN_SCALE);
        assert_eq!(zoom(f64::NAN, Point::CENTRE, current).scale, MIN_SCALE);
        for requested in [1e-9, 0.001, 0.5, 1.0, 4.99, 5.0, 1e9] {
            let scale = zoom(requested, Point::new(0.3, 0.8), current).scale;
            assert!((MIN_SCALE..=MAX_SCALE).contains(&scale));
        }
    }

    #[test]
    fn same_scale_does_not_scroll() {
        let current = state(2.0, 0.25, 0.75);
        let zoomed = zoom(2.0, Point::new(0.9, 0.1), current);
        assert_eq!(zoomed, current);
    }

    #[test]
    fn zooming_in_moves_towards_cursor() {
        let current = state(1.0, 0.2, 0.2);
        let zoomed = zoom(2.0, Point::new(1.0, 0.0), current);

        // weight = (1 / 2)^2 = 0.25
        assert!((zoomed.scroll_x - (0.2 * 0.25 + 1.0 * 0.75)).abs() < EPSILON);
        assert!((zoomed.scroll_y - 0.2 * 0.25).abs() < EPSILON);
    }

    #[test]
    fn zooming_out_moves_away_from_cursor() {
        let current = state(1.0, 0.5, 0.5);
        let zoomed = zoom(1.0 / 1.2, Point::new(0.6, 0.4), current);

        // weight = 1.2^2 = 1.44
        assert!((zoomed.scroll_x - (0.5 * 1.44 + 0.6 * -0.44)).abs() < EPSILON);
        assert!((zoomed.scroll_y - (0.5 * 1.44 + 0.4 * -0.44)).abs() < EPSILON);
        assert!(zoomed.scroll_x < current.scroll_x);
        assert!(zoomed.scroll_y > current.scroll_y);
    }

    #[test]
    fn scroll_stays_in_range() {
        let current = state(5.0, 0.9, 0.1);
        let zoomed = zoom(0.001, Point::new(0.0, 1.0), current);
        assert_eq!(zoomed.scroll_x, 1.0);
        assert_eq!(zoomed.scroll_y, 0.0);
    }

    #[test]
    fn out_of_range_current_scale() {
        for bad_scale in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let current = state(bad_scale, 0.4, 0.6);
            let zoomed = zoom(1.0, Point::new(0.2, 0.8), current);
            assert_eq!(zoomed.scale, 1.0);
            assert!((0.0..=1.0).contains(&zoomed.scroll_x));
            assert!((0.0..=1.0).contains(&zoomed.scroll_y));
        }

        // Treated as the smallest scale: weight = (0.001 / 1)^2
        let zoomed = zoom(1.0, Point::new(0.2, 0.8), state(0.0, 0.4, 0.6));
        let weight = MIN_SCALE * MIN_SCALE;
        assert!((zoomed.scroll_x - (0.4 * weight + 0.2 * (1.0 - weight))).abs() < EPSILON);

        let zoomed = wheel_zoom(ZoomDirection::In, Point::CENTRE, state(f64::NAN, 0.5, 0.5));
        assert!(!zoomed.scroll_x.is_nan() && !zoomed.scroll_y.is_nan());
    }

    #[test]
    fn wheel_steps() {
        let current = state(1.0, 0.5, 0.5);
        let zoomed_in = wheel_zoom(ZoomDirection::In, Point::CENTRE, current);
        assert!((zoomed_in.scale - 1.2).abs() < EPSILON);

        let zoomed_out = wheel_zoom(ZoomDirection::Out, Point::CENTRE, current);
        assert!((zoomed_out.scale - 1.0 / 1.2).abs() < EPSILON);

        // Zooming around the point already in the middle doesn't scroll
        assert!((zoomed_in.scroll_x - 0.5).abs() < EPSILON);
        assert!((zoomed_out.scroll_y - 0.5).abs() < EPSILON);

        // Stops at the limit
        let at_max = state(MAX_SCALE, 0.5, 0.5);
        let zoomed = wheel_zoom(ZoomDirection::In, Point::new(0.0, 0.0), at_max);
        assert_eq!(zoomed, at_max);

        assert_eq!(ZoomDirection::from_wheel_delta(3.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_wheel_delta(-3.0), ZoomDirection::Out);
    }

    #[test]
    fn set_zoom_keeps_scroll() {
        let current = state(1.0, 0.3, 0.6);
        assert_eq!(set_zoom(2.5, current), state(2.5, 0.3, 0.6));
        assert_eq!(set_zoom(50.0, current), state(MAX_SCALE, 0.3, 0.6));
        assert_eq!(
            ViewportLimits::default().reset_zoom(state(3.0, 0.1, 0.2)),
            state(1.0, 0.1, 0.2)
        );
    }

    #[test]
    fn custom_limits() {
        let limits = ViewportLimits {
            min_scale: 0.5,
            max_scale: 2.0,
            wheel_factor: 2.0,
        };
        let current = ViewportState::default();
        let zoomed = limits.wheel_zoom(ZoomDirection::In, Point::CENTRE, current);
        assert_eq!(zoomed.scale, 2.0);
        let zoomed = limits.wheel_zoom(ZoomDirection::In, Point::CENTRE, zoomed);
        assert_eq!(zoomed.scale, 2.0);
        assert_eq!(limits.set_zoom(0.1, current).scale, 0.5);
    }

    #[test]
    fn percentages() {
        let limits = ViewportLimits::default();
        assert_eq!(limits.parse_zoom_percentage("150%"), Some(1.5));
        assert_eq!(limits.parse_zoom_percentage("25"), Some(0.25));
        assert_eq!(limits.parse_zoom_percentage(""), Some(1.0));
        assert_eq!(limits.parse_zoom_percentage("%"), Some(1.0));
        assert_eq!(limits.parse_zoom_percentage("900%"), Some(MAX_SCALE));
        assert_eq!(limits.parse_zoom_percentage("0%"), Some(MIN_SCALE));
        assert_eq!(limits.parse_zoom_percentage("1.5"), None);
        assert_eq!(limits.parse_zoom_percentage("-20%"), None);
        assert_eq!(limits.parse_zoom_percentage("big"), None);

        assert_eq!(zoom_percentage_label(1.5), "150%");
        assert_eq!(zoom_percentage_label(0.001), "0%");
        assert_eq!(zoom_percentage_label(MAX_SCALE), "500%");
    }
}
