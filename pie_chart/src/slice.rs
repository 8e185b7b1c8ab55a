// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice angles and outlines.
//!
//! Slices are laid around the circle in order, each taking `360 * fraction`
//! degrees starting where the previous one ended. Fractions are not required to
//! sum to one; only the running angle is tracked.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

use crate::angle::{
    SweepDirection, clamp_ratio, end_angle, middle_angle, normalize_angle, point_on_circle,
    to_degrees, to_radians,
};
use crate::geometry::non_negative;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Flattening tolerance used when converting arcs to cubic segments.
pub const ARC_TOLERANCE: f64 = 0.1;

/// A triangular point replacing the middle of a slice's outer arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// How far the apex reaches beyond the pie radius.
    pub length: f64,
    /// Chord width of the pointer's base on the rim.
    pub width: f64,
}

impl Pointer {
    /// Creates a pointer with the given apex length and base width.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

/// Resolved per-slice geometry input, rebuilt on every plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceProperties {
    /// Fraction of the circle in `[0, 1]`.
    pub fraction: f64,
    /// Start angle in degrees (not normalized).
    pub start_angle: f64,
    /// Sweep direction.
    pub direction: SweepDirection,
    /// Pie center, once known.
    pub center: Option<Point>,
    /// Pie radius, once known.
    pub radius: Option<f64>,
}

impl SliceProperties {
    /// The angles spanned by this slice.
    pub fn angles(&self) -> SliceAngles {
        SliceAngles::new(self.start_angle, self.fraction, self.direction)
    }
}

/// The angular extent of one slice, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceAngles {
    /// Start angle (continuous with the previous slice's end).
    pub start: f64,
    /// End angle.
    pub end: f64,
    /// Angle halfway through the sweep.
    pub middle: f64,
    /// Signed sweep: negative for counter-clockwise slices.
    pub sweep: f64,
}

impl SliceAngles {
    /// Angles for a slice starting at `start` and covering `fraction` of the circle.
    pub fn new(start: f64, fraction: f64, direction: SweepDirection) -> Self {
        let end = end_angle(start, fraction, direction);
        Self {
            start,
            end,
            middle: middle_angle(start, fraction, direction),
            sweep: end - start,
        }
    }

    /// The smaller of the two boundary angles.
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }
}

/// Resolves slice properties for a slice list.
///
/// `start_angle` is normalized into `[0, 360)` first. Each fraction is clamped
/// to `[0, 1]` and scaled by `progress` (also clamped), which is how a partially
/// drawn, animating pie is expressed.
pub fn slice_properties(
    fractions: &[f64],
    start_angle: i32,
    direction: SweepDirection,
    progress: f64,
) -> Vec<SliceProperties> {
    let progress = clamp_ratio(progress);
    let mut current = f64::from(normalize_angle(start_angle));
    fractions
        .iter()
        .map(|&fraction| {
            let fraction = clamp_ratio(fraction) * progress;
            let props = SliceProperties {
                fraction,
                start_angle: current,
                direction,
                center: None,
                radius: None,
            };
            current = end_angle(current, fraction, direction);
            props
        })
        .collect()
}

/// Builds the outline of one slice as a closed path.
///
/// The outline moves to `center`, arcs from the start angle through
/// `360 * fraction` degrees and closes back to the center. A fraction of
/// exactly one yields a full circle; zero (or a zero radius) yields an empty
/// path.
pub fn slice_outline(
    center: Point,
    radius: f64,
    start_angle: f64,
    fraction: f64,
    direction: SweepDirection,
    pointer: Option<Pointer>,
) -> BezPath {
    let fraction = clamp_ratio(fraction);
    let radius = non_negative(radius);
    if fraction == 0.0 || radius == 0.0 {
        return BezPath::new();
    }
    if fraction == 1.0 {
        return Circle::new(center, radius)
            .path_elements(ARC_TOLERANCE)
            .collect();
    }

    let angles = SliceAngles::new(start_angle, fraction, direction);
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(point_on_circle(center, radius, angles.start));

    match pointer.and_then(|p| pointer_half_angle(p, radius, angles.sweep)) {
        Some((half, length)) => {
            let s = direction.sign();
            let before = angles.middle - s * half;
            let after = angles.middle + s * half;
            append_arc(&mut path, center, radius, angles.start, before - angles.start);
            path.line_to(point_on_circle(center, radius + length, angles.middle));
            path.line_to(point_on_circle(center, radius, after));
            append_arc(&mut path, center, radius, after, angles.end - after);
        }
        None => append_arc(&mut path, center, radius, angles.start, angles.sweep),
    }

    path.close_path();
    path
}

/// Half the angle subtended by the pointer base, if the slice is wide enough.
fn pointer_half_angle(pointer: Pointer, radius: f64, sweep: f64) -> Option<(f64, f64)> {
    let width = non_negative(pointer.width);
    let length = non_negative(pointer.length);
    if width == 0.0 || length == 0.0 || !length.is_finite() {
        return None;
    }
    let half_chord = (width / 2.0 / radius).min(1.0);
    let half = to_degrees(half_chord.asin());
    (2.0 * half < sweep.abs()).then_some((half, length))
}

pub(crate) fn append_arc(path: &mut BezPath, center: Point, radius: f64, start: f64, sweep: f64) {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: to_radians(start),
        sweep_angle: to_radians(sweep),
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-6
    }

    #[test]
    fn properties_accumulate_running_angle() {
        let props = slice_properties(&[0.25, 0.5, 0.25], 409, SweepDirection::Clockwise, 1.0);
        assert_eq!(props[0].start_angle, 49.0);
        assert_eq!(props[1].start_angle, 139.0);
        assert_eq!(props[2].start_angle, 319.0);
        // The accumulator is not re-normalized between slices.
        assert_eq!(props[2].angles().end, 409.0);
    }

    #[test]
    fn properties_clamp_and_scale_by_progress() {
        let props = slice_properties(&[3.0, -1.0, 0.5], 0, SweepDirection::Clockwise, 0.5);
        assert_eq!(props[0].fraction, 0.5);
        assert_eq!(props[1].fraction, 0.0);
        assert_eq!(props[2].fraction, 0.25);
        assert_eq!(props[2].start_angle, 180.0);
    }

    #[test]
    fn counter_clockwise_angles_decrease() {
        let props = slice_properties(&[0.25, 0.25], -90, SweepDirection::CounterClockwise, 1.0);
        assert_eq!(props[0].start_angle, 270.0);
        assert_eq!(props[1].start_angle, 180.0);
        let a = props[1].angles();
        assert_eq!(a.end, 90.0);
        assert_eq!(a.middle, 135.0);
        assert_eq!(a.sweep, -90.0);
    }

    #[test]
    fn zero_fraction_yields_empty_path() {
        let p = slice_outline(
            Point::new(50.0, 50.0),
            40.0,
            0.0,
            0.0,
            SweepDirection::Clockwise,
            None,
        );
        assert!(p.elements().is_empty());
        let p = slice_outline(Point::ORIGIN, 0.0, 0.0, 0.5, SweepDirection::Clockwise, None);
        assert!(p.elements().is_empty());
    }

    #[test]
    fn full_fraction_yields_circle() {
        let c = Point::new(50.0, 50.0);
        let p = slice_outline(c, 40.0, 123.0, 1.0, SweepDirection::Clockwise, None);
        let b = p.bounding_box();
        assert!((b.width() - 80.0).abs() < 1e-6);
        assert!((b.height() - 80.0).abs() < 1e-6);
        // A circle never passes through its center.
        assert!(!p.elements().iter().any(|el| matches!(el, PathEl::LineTo(p) if close(*p, c))));
    }

    #[test]
    fn quarter_wedge_starts_and_ends_at_center() {
        let c = Point::new(0.0, 0.0);
        let p = slice_outline(c, 10.0, 0.0, 0.25, SweepDirection::Clockwise, None);
        let els = p.elements();
        assert!(matches!(els[0], PathEl::MoveTo(m) if close(m, c)));
        assert!(matches!(els[1], PathEl::LineTo(l) if close(l, Point::new(10.0, 0.0))));
        assert!(matches!(els.last(), Some(PathEl::ClosePath)));
        let b = p.bounding_box();
        assert!(b.x0 > -1e-6 && b.y0 > -1e-6);
        assert!(b.x1 < 10.0 + 1e-6 && b.y1 < 10.0 + 1e-6);
    }

    #[test]
    fn pointer_extends_beyond_radius() {
        let c = Point::new(0.0, 0.0);
        let plain = slice_outline(c, 10.0, 0.0, 0.25, SweepDirection::Clockwise, None);
        let pointed = slice_outline(
            c,
            10.0,
            0.0,
            0.25,
            SweepDirection::Clockwise,
            Some(Pointer::new(5.0, 4.0)),
        );
        let apex = point_on_circle(c, 15.0, 45.0);
        assert!(
            pointed
                .elements()
                .iter()
                .any(|el| matches!(el, PathEl::LineTo(p) if close(*p, apex)))
        );
        assert!(pointed.bounding_box().x1 > plain.bounding_box().x1);
    }

    #[test]
    fn degenerate_pointers_and_radii_are_ignored() {
        let c = Point::new(0.0, 0.0);
        for pointer in [
            Pointer::new(f64::NAN, 4.0),
            Pointer::new(5.0, f64::NAN),
            Pointer::new(f64::INFINITY, 4.0),
            Pointer::new(-5.0, 4.0),
        ] {
            let p = slice_outline(c, 10.0, 0.0, 0.25, SweepDirection::Clockwise, Some(pointer));
            let b = p.bounding_box();
            assert!(b.is_finite(), "{pointer:?} produced {b:?}");
            assert!(b.x1 <= 10.0 + 1e-6, "{pointer:?} kept its apex");
        }
        let p = slice_outline(c, f64::NAN, 0.0, 0.25, SweepDirection::Clockwise, None);
        assert!(p.elements().is_empty());
    }

    #[test]
    fn pointer_too_wide_for_slice_is_ignored() {
        let c = Point::new(0.0, 0.0);
        let p = slice_outline(
            c,
            10.0,
            0.0,
            0.01,
            SweepDirection::Clockwise,
            Some(Pointer::new(5.0, 8.0)),
        );
        assert!(p.bounding_box().x1 <= 10.0 + 1e-6);
    }
}
