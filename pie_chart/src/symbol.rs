// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend indicator shapes.

use kurbo::{BezPath, Circle, Rect, Shape};

use crate::slice::ARC_TOLERANCE;

/// A small set of indicator shapes drawn in a slice's color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A square filling the indicator box.
    Square,
    /// A circle inscribed in the indicator box.
    #[default]
    Circle,
    /// A diamond touching the middle of each side.
    Diamond,
}

impl Symbol {
    /// Returns the symbol's path centered in `bounds`.
    ///
    /// Squares and circles use the shorter side so they keep their proportions.
    pub fn path(self, bounds: Rect) -> BezPath {
        let c = bounds.center();
        let half = 0.5 * bounds.width().min(bounds.height());
        match self {
            Self::Square => Rect::new(c.x - half, c.y - half, c.x + half, c.y + half).to_path(0.0),
            Self::Circle => Circle::new(c, half).path_elements(ARC_TOLERANCE).collect(),
            Self::Diamond => {
                let mut p = BezPath::new();
                p.move_to((c.x, bounds.y0));
                p.line_to((bounds.x1, c.y));
                p.line_to((c.x, bounds.y1));
                p.line_to((bounds.x0, c.y));
                p.close_path();
                p
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn square_keeps_proportions_inside_wide_bounds() {
        let b = Symbol::Square.path(Rect::new(0.0, 0.0, 20.0, 10.0)).bounding_box();
        assert_eq!(b, Rect::new(5.0, 0.0, 15.0, 10.0));
    }

    #[test]
    fn diamond_spans_the_full_bounds() {
        let r = Rect::new(0.0, 0.0, 20.0, 10.0);
        assert_eq!(Symbol::Diamond.path(r).bounding_box(), r);
        let c = Symbol::Circle.path(r).bounding_box();
        assert!((c.width() - 10.0).abs() < 1e-6);
    }
}
