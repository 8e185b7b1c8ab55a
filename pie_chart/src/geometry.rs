// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie placement within a drawing area.
//!
//! Coordinates are [`kurbo::Point`] and bounds are [`kurbo::Rect`]; a `Rect`
//! derives its width and height from its edges, so they can never drift.

use kurbo::{Point, Rect};

/// A width/height pair used by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns this size with negative or `NaN` components replaced by zero.
    pub fn non_negative(self) -> Self {
        Self::new(non_negative(self.width), non_negative(self.height))
    }

    /// Clamps each component into `[0, max]`.
    pub fn clamp_to(self, max: Self) -> Self {
        let max = max.non_negative();
        let s = self.non_negative();
        Self::new(s.width.min(max.width), s.height.min(max.height))
    }

    /// Shrinks both components by the given amounts, never going below zero.
    pub fn shrink(self, dw: f64, dh: f64) -> Self {
        Self::new(
            non_negative(self.width - dw),
            non_negative(self.height - dh),
        )
    }

    /// Returns `true` if either component exceeds `other` by more than `tolerance`.
    pub fn exceeds(self, other: Self, tolerance: f64) -> bool {
        self.width > other.width + tolerance || self.height > other.height + tolerance
    }
}

pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

/// Builds a rectangle from its four edges, normalizing swapped edges.
pub fn rect_from_edges(top: f64, left: f64, right: f64, bottom: f64) -> Rect {
    Rect::new(left, top, right, bottom).abs()
}

/// The center of a pie occupying `width × height` at (`top`, `start`).
pub fn pie_center(top: f64, start: f64, width: f64, height: f64) -> Point {
    Point::new(start + width / 2.0, top + height / 2.0)
}

/// The radius of the largest circle fitting in `width × height`.
pub fn pie_radius(width: f64, height: f64) -> f64 {
    non_negative(width.min(height) / 2.0)
}

/// The pie center for a `width × height` area after removing per-edge padding.
pub fn padded_pie_center(
    width: f64,
    height: f64,
    padding_left: f64,
    padding_right: f64,
    padding_top: f64,
    padding_bottom: f64,
) -> Point {
    let w = non_negative(width - padding_left - padding_right);
    let h = non_negative(height - padding_top - padding_bottom);
    pie_center(padding_top, padding_left, w, h)
}

/// The pie radius for a `width × height` area after removing per-edge padding.
pub fn padded_pie_radius(
    width: f64,
    height: f64,
    padding_left: f64,
    padding_right: f64,
    padding_top: f64,
    padding_bottom: f64,
) -> f64 {
    pie_radius(
        width - padding_left - padding_right,
        height - padding_top - padding_bottom,
    )
}

/// The axis-aligned square bounding a circle.
pub fn circle_bounds(center: Point, radius: f64) -> Rect {
    let r = radius.abs();
    rect_from_edges(center.y - r, center.x - r, center.x + r, center.y + r)
}

pub(crate) fn union_rect(a: Rect, b: Rect) -> Rect {
    Rect::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bounds_of_circle() {
        let b = circle_bounds(Point::new(500.0, 500.0), 200.0);
        assert_eq!(b, rect_from_edges(300.0, 300.0, 700.0, 700.0));
        assert_eq!(b.y0, 300.0);
        assert_eq!(b.x0, 300.0);
        assert_eq!(b.x1, 700.0);
        assert_eq!(b.y1, 700.0);
        assert_eq!(b.width(), 400.0);
    }

    #[test]
    fn center_respects_padding() {
        assert_eq!(
            padded_pie_center(500.0, 500.0, 150.0, 0.0, 0.0, 0.0),
            Point::new(325.0, 250.0)
        );
        assert_eq!(
            padded_pie_center(500.0, 500.0, 150.0, 150.0, 250.0, 250.0),
            Point::new(250.0, 250.0)
        );
    }

    #[test]
    fn radius_respects_asymmetric_padding() {
        assert_eq!(padded_pie_radius(500.0, 500.0, 250.0, 150.0, 0.0, 0.0), 50.0);
        assert_eq!(padded_pie_radius(500.0, 620.0, 150.0, 0.0, 300.0, 0.0), 160.0);
        assert_eq!(padded_pie_radius(100.0, 100.0, 80.0, 80.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn rect_edges_are_normalized() {
        let r = rect_from_edges(10.0, 50.0, 20.0, 0.0);
        assert!(r.x0 <= r.x1 && r.y0 <= r.y1);
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 10.0);
    }

    #[test]
    fn size_clamping_never_goes_negative() {
        let s = Size::new(120.0, -4.0).clamp_to(Size::new(100.0, 84.0));
        assert_eq!(s, Size::new(100.0, 0.0));
        assert_eq!(Size::new(5.0, 5.0).shrink(10.0, 1.0), Size::new(0.0, 4.0));
        assert!(Size::new(100.02, 1.0).exceeds(Size::new(100.0, 1.0), 0.01));
        assert!(!Size::new(100.005, 1.0).exceeds(Size::new(100.0, 1.0), 0.01));
    }
}
