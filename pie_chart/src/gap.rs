// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gaps between slices.
//!
//! A gap is a thin quadrilateral laid along a slice boundary. Renderers subtract
//! it from the pie's fill region so adjacent slices appear separated.

use kurbo::{BezPath, Point};

use crate::angle::{SweepDirection, point_on_circle};

/// Where a gap sits relative to the boundary line between two slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GapPlacement {
    /// Centered on the boundary.
    #[default]
    Middle,
    /// Entirely inside the slice that ends at the boundary.
    PrecedingSlice,
    /// Entirely inside the slice that starts at the boundary.
    SucceedingSlice,
}

impl GapPlacement {
    /// Swaps preceding and succeeding; used for counter-clockwise pies, where
    /// the preceding slice lies on the other side of the boundary.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Middle => Self::Middle,
            Self::PrecedingSlice => Self::SucceedingSlice,
            Self::SucceedingSlice => Self::PrecedingSlice,
        }
    }

    /// The placement to use for a pie drawn in `direction`.
    pub fn for_direction(self, direction: SweepDirection) -> Self {
        match direction {
            SweepDirection::Clockwise => self,
            SweepDirection::CounterClockwise => self.mirrored(),
        }
    }

    fn initial_distance(self, width: f64) -> f64 {
        match self {
            Self::PrecedingSlice => 0.0,
            Self::SucceedingSlice => width,
            Self::Middle => width / 2.0,
        }
    }
}

/// Computes the four corners of a gap along the boundary at `angle`.
///
/// The corners are walked from `origin`: a perpendicular step (`+90°`) by the
/// placement's initial distance, along the boundary by `length`, back across by
/// `width` (`-90°`), and back toward the origin. The winding is the same for
/// every angle and placement.
pub fn gap_corners(
    origin: Point,
    angle: f64,
    width: f64,
    length: f64,
    placement: GapPlacement,
) -> [Point; 4] {
    let width = width.max(0.0);
    let c1 = point_on_circle(origin, placement.initial_distance(width), angle + 90.0);
    let c2 = point_on_circle(c1, length, angle);
    let c3 = point_on_circle(c2, width, angle - 90.0);
    let c4 = point_on_circle(c3, length, angle + 180.0);
    [c1, c2, c3, c4]
}

/// Closes a quadrilateral into a path.
pub fn quad_path(corners: &[Point; 4]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(corners[0]);
    for &c in &corners[1..] {
        path.line_to(c);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::GapPlacement::{Middle, PrecedingSlice, SucceedingSlice};
    use super::*;

    const ORIGIN: Point = Point::new(500.0, 500.0);

    const TABLE: [(f64, GapPlacement, [(f64, f64); 4]); 15] = [
        (0.0, Middle, [(500.0, 510.0), (650.0, 510.0), (650.0, 490.0), (500.0, 490.0)]),
        (0.0, PrecedingSlice, [(500.0, 500.0), (650.0, 500.0), (650.0, 480.0), (500.0, 480.0)]),
        (0.0, SucceedingSlice, [(500.0, 520.0), (650.0, 520.0), (650.0, 500.0), (500.0, 500.0)]),
        (30.0, Middle, [(495.0, 508.7), (624.9, 583.7), (634.9, 566.3), (505.0, 491.3)]),
        (30.0, PrecedingSlice, [(500.0, 500.0), (629.9, 575.0), (639.9, 557.7), (510.0, 482.7)]),
        (30.0, SucceedingSlice, [(490.0, 517.3), (619.9, 592.3), (629.9, 575.0), (500.0, 500.0)]),
        (120.0, Middle, [(491.3, 495.0), (416.3, 624.9), (433.7, 634.9), (508.7, 505.0)]),
        (120.0, PrecedingSlice, [(500.0, 500.0), (425.0, 629.9), (442.3, 639.9), (517.3, 510.0)]),
        (120.0, SucceedingSlice, [(482.7, 490.0), (407.7, 619.9), (425.0, 629.9), (500.0, 500.0)]),
        (210.0, Middle, [(505.0, 491.3), (375.1, 416.3), (365.1, 433.7), (495.0, 508.7)]),
        (210.0, PrecedingSlice, [(500.0, 500.0), (370.1, 425.0), (360.1, 442.3), (490.0, 517.3)]),
        (210.0, SucceedingSlice, [(510.0, 482.7), (380.1, 407.7), (370.1, 425.0), (500.0, 500.0)]),
        (-30.0, Middle, [(505.0, 508.7), (634.9, 433.7), (624.9, 416.3), (495.0, 491.3)]),
        (-30.0, PrecedingSlice, [(500.0, 500.0), (629.9, 425.0), (619.9, 407.7), (490.0, 482.7)]),
        (-30.0, SucceedingSlice, [(510.0, 517.3), (639.9, 442.3), (629.9, 425.0), (500.0, 500.0)]),
    ];

    fn expected(angle: f64, placement: GapPlacement) -> [(f64, f64); 4] {
        TABLE
            .iter()
            .find(|(a, p, _)| *a == angle && *p == placement)
            .map(|(_, _, c)| *c)
            .unwrap()
    }

    fn assert_corners(actual: [Point; 4], expected: [(f64, f64); 4]) {
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert!(
                (a.x - x).abs() <= 1.0 && (a.y - y).abs() <= 1.0,
                "expected ({x}, {y}), got ({}, {})",
                a.x,
                a.y
            );
        }
    }

    #[test]
    fn middle_gap_at_30_degrees() {
        let c = gap_corners(ORIGIN, 30.0, 20.0, 150.0, GapPlacement::Middle);
        assert_corners(
            c,
            [(495.0, 508.0), (624.0, 583.0), (634.0, 566.0), (505.0, 491.0)],
        );
    }

    #[test]
    fn middle_gap_at_0_degrees() {
        let c = gap_corners(ORIGIN, 0.0, 20.0, 150.0, GapPlacement::Middle);
        assert_corners(
            c,
            [(500.0, 510.0), (650.0, 510.0), (650.0, 490.0), (500.0, 490.0)],
        );
    }

    #[test]
    fn preceding_gap_starts_on_the_boundary() {
        let c = gap_corners(ORIGIN, 120.0, 20.0, 150.0, GapPlacement::PrecedingSlice);
        assert_corners(
            c,
            [(500.0, 500.0), (425.0, 629.0), (442.0, 639.0), (517.0, 510.0)],
        );
    }

    #[test]
    fn succeeding_gap_ends_on_the_boundary() {
        let c = gap_corners(ORIGIN, 210.0, 20.0, 150.0, GapPlacement::SucceedingSlice);
        assert_corners(
            c,
            [(510.0, 482.0), (380.0, 407.0), (370.0, 425.0), (500.0, 500.0)],
        );
    }

    #[test]
    fn negative_angle_matches_its_normalized_twin() {
        let a = gap_corners(ORIGIN, -30.0, 20.0, 150.0, GapPlacement::Middle);
        let b = gap_corners(ORIGIN, 330.0, 20.0, 150.0, GapPlacement::Middle);
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((*p - *q).hypot() < 1e-9);
        }
        assert_corners(
            a,
            [(505.0, 508.0), (634.0, 433.0), (624.0, 416.0), (495.0, 491.0)],
        );
    }

    #[test]
    fn every_angle_and_placement() {
        for (angle, placement, corners) in TABLE {
            let c = gap_corners(ORIGIN, angle, 20.0, 150.0, placement);
            assert_corners(c, corners);
            let cw = placement.for_direction(SweepDirection::Clockwise);
            assert_eq!(cw, placement, "clockwise keeps {placement:?} at {angle}");
        }
    }

    #[test]
    fn counter_clockwise_mirrors_placement() {
        assert_eq!(
            GapPlacement::PrecedingSlice.for_direction(SweepDirection::CounterClockwise),
            GapPlacement::SucceedingSlice
        );
        assert_eq!(
            GapPlacement::Middle.for_direction(SweepDirection::CounterClockwise),
            GapPlacement::Middle
        );
        for (angle, placement, _) in TABLE {
            let ccw = placement.for_direction(SweepDirection::CounterClockwise);
            let c = gap_corners(ORIGIN, angle, 20.0, 150.0, ccw);
            assert_corners(c, expected(angle, placement.mirrored()));
            // The mirrored quad sits on the other side of the boundary.
            if placement != Middle {
                let side = |q: [Point; 4]| {
                    let dir = point_on_circle(Point::ZERO, 1.0, angle + 90.0).to_vec2();
                    let mid = q.iter().fold(Point::ZERO, |acc, p| acc + p.to_vec2() / 4.0);
                    (mid - ORIGIN).dot(dir).signum()
                };
                let cw = gap_corners(ORIGIN, angle, 20.0, 150.0, placement);
                assert_eq!(side(c), -side(cw), "{placement:?} at {angle}");
            }
        }
    }
}
