// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle and circle math.
//!
//! Angles are in degrees unless a name says otherwise. `0°` points along `+x`
//! and increasing angles sweep clockwise on screen, since `y` grows downward.

use core::f64::consts::PI;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The direction in which successive slices are laid around the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    /// Angles grow from one slice to the next.
    #[default]
    Clockwise,
    /// Angles shrink from one slice to the next.
    CounterClockwise,
}

impl SweepDirection {
    /// `+1.0` for clockwise, `-1.0` for counter-clockwise.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Converts degrees to radians (`degrees / 180 * π`).
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

/// Converts radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

/// Normalizes an integer angle into `[0, 360)`.
///
/// `409` becomes `49` and `-13` becomes `347`.
pub fn normalize_angle(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Normalizes a fractional angle into `[0, 360)`.
pub fn normalize_angle_f64(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let d = ((degrees % 360.0) + 360.0) % 360.0;
    // `-1e-20 % 360 + 360` rounds to exactly 360.
    if d >= 360.0 { 0.0 } else { d }
}

/// Clamps a ratio, fraction or alpha into `[0, 1]`. `NaN` maps to `0`.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Returns the point at `angle` degrees on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let a = to_radians(angle);
    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// The end angle of a slice starting at `current` and covering `fraction` of the circle.
///
/// The result is not normalized so running accumulators stay continuous.
pub fn end_angle(current: f64, fraction: f64, direction: SweepDirection) -> f64 {
    current + direction.sign() * 360.0 * fraction
}

/// The angle halfway through a slice's sweep; label anchors hang off it.
pub fn middle_angle(start: f64, fraction: f64, direction: SweepDirection) -> f64 {
    end_angle(start, fraction / 2.0, direction)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn normalizes_out_of_range_angles() {
        assert_eq!(normalize_angle(409), 49);
        assert_eq!(normalize_angle(-13), 347);
        assert_eq!(normalize_angle(360), 0);
        assert_eq!(normalize_angle(-720), 0);
        for d in [i32::MIN, -1, 0, 1, 359, 1_000_003, i32::MAX] {
            let n = normalize_angle(d);
            assert!((0..360).contains(&n), "{d} normalized to {n}");
        }
        assert_eq!(normalize_angle_f64(-90.0), 270.0);
        assert_eq!(normalize_angle_f64(f64::NAN), 0.0);
        assert!(normalize_angle_f64(-1e-20) < 360.0);
    }

    #[test]
    fn clamps_ratios() {
        assert_eq!(clamp_ratio(3.4), 1.0);
        assert_eq!(clamp_ratio(-3.4), 0.0);
        assert_eq!(clamp_ratio(0.25), 0.25);
        assert_eq!(clamp_ratio(f64::NAN), 0.0);
        assert_eq!(clamp_ratio(f64::INFINITY), 1.0);
    }

    #[test]
    fn radian_conversion_round_trips() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_degrees(to_radians(-450.0)) + 450.0).abs() < 1e-9);
    }

    #[test]
    fn point_on_circle_sweeps_clockwise_on_screen() {
        let c = Point::new(10.0, 10.0);
        let p = point_on_circle(c, 5.0, 90.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 15.0).abs() < 1e-9);
        let q = point_on_circle(c, 5.0, 0.0);
        assert!((q.x - 15.0).abs() < 1e-9);
    }

    #[test]
    fn end_and_middle_angles_follow_direction() {
        assert_eq!(end_angle(350.0, 0.25, SweepDirection::Clockwise), 440.0);
        assert_eq!(end_angle(10.0, 0.25, SweepDirection::CounterClockwise), -80.0);
        assert_eq!(middle_angle(0.0, 0.5, SweepDirection::Clockwise), 90.0);
        assert_eq!(
            middle_angle(0.0, 0.5, SweepDirection::CounterClockwise),
            -90.0
        );
    }
}
