// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice gradients.
//!
//! Two flavors are supported:
//! - **Radial**: one gradient per slice, from `color` at the center to
//!   `color_end` at the rim, mirrored beyond the rim.
//! - **Sweep**: one gradient shared by every slice. Each slice contributes a
//!   `color → color_end` run and boundaries repeat their position, so colors
//!   change abruptly between slices instead of cross-fading.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Point};
use peniko::{
    Brush, Color, ColorStop, ColorStops, Extend, Gradient, GradientKind, RadialGradientPosition,
    SweepGradientPosition,
};

use crate::angle::{SweepDirection, clamp_ratio, to_radians};

/// How slices are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientMode {
    /// Solid `color` fill.
    #[default]
    None,
    /// Per-slice radial gradient.
    Radial,
    /// A single sweep gradient spanning all slices.
    Sweep,
}

/// Builds the radial brush for one slice.
pub fn radial_brush(center: Point, radius: f64, color: Color, color_end: Color) -> Brush {
    if radius <= 0.0 {
        return Brush::Solid(color);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "gradient radii are f32 in peniko"
    )]
    let r = radius as f32;
    let stops = [ColorStop::from((0.0, color)), ColorStop::from((1.0, color_end))];
    Brush::Gradient(Gradient {
        kind: GradientKind::Radial(RadialGradientPosition::new_two_point(center, 0.0, center, r)),
        extend: Extend::Reflect,
        stops: ColorStops::from(&stops[..]),
        ..Gradient::default()
    })
}

/// Color stops for a sweep gradient spanning all slices.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepStops {
    /// `[color_0, color_end_0, color_1, color_end_1, ...]`.
    pub colors: Vec<Color>,
    /// One position in `[0, 1]` per color.
    pub positions: Vec<f32>,
}

impl SweepStops {
    /// Computes stops for `(fraction, color, color_end)` triples in drawing order.
    ///
    /// The running sum of fractions is emitted twice per inner boundary; the
    /// leading duplicate and trailing duplicate are dropped, leaving exactly one
    /// position per color.
    pub fn new(slices: &[(f64, Color, Color)]) -> Self {
        let mut colors = Vec::with_capacity(slices.len() * 2);
        let mut positions = Vec::with_capacity(slices.len() * 2);
        let mut sum = 0.0_f64;
        for &(fraction, color, color_end) in slices {
            colors.push(color);
            colors.push(color_end);
            positions.push(stop_position(sum));
            sum += clamp_ratio(fraction);
            positions.push(stop_position(sum));
        }
        Self { colors, positions }
    }

    /// Stops for a pie drawn in `direction`.
    ///
    /// A sweep gradient always runs clockwise, so counter-clockwise pies are
    /// described in reverse with each slice's colors swapped.
    pub fn for_direction(slices: &[(f64, Color, Color)], direction: SweepDirection) -> Self {
        match direction {
            SweepDirection::Clockwise => Self::new(slices),
            SweepDirection::CounterClockwise => {
                let reversed: Vec<_> = slices
                    .iter()
                    .rev()
                    .map(|&(f, color, color_end)| (f, color_end, color))
                    .collect();
                Self::new(&reversed)
            }
        }
    }

    /// Returns `true` if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn stop_position(sum: f64) -> f32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "stop offsets are f32 in peniko"
    )]
    let p = sum.min(1.0) as f32;
    p
}

/// A sweep gradient positioned on the pie.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepGradient {
    /// The pie center the gradient rotates around.
    pub center: Point,
    /// Degrees the gradient is rotated by (the sweep itself starts at `0°`).
    pub rotation: f64,
    /// Color stops.
    pub stops: SweepStops,
}

impl SweepGradient {
    /// Creates the shared gradient for slices drawn from `start_angle` in `direction`.
    pub fn new(
        center: Point,
        start_angle: f64,
        direction: SweepDirection,
        slices: &[(f64, Color, Color)],
    ) -> Self {
        let rotation = match direction {
            SweepDirection::Clockwise => start_angle,
            SweepDirection::CounterClockwise => {
                let total: f64 = slices.iter().map(|s| clamp_ratio(s.0)).sum();
                start_angle - 360.0 * total.min(1.0)
            }
        };
        Self {
            center,
            rotation,
            stops: SweepStops::for_direction(slices, direction),
        }
    }

    /// The rotation transform a backend applies to a gradient starting at `0°`.
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(to_radians(self.rotation), self.center)
    }

    /// The gradient as a brush, with the rotation folded into its angles.
    pub fn to_brush(&self) -> Brush {
        if self.stops.is_empty() {
            return Brush::Solid(Color::TRANSPARENT);
        }
        let stops: Vec<ColorStop> = self
            .stops
            .positions
            .iter()
            .zip(&self.stops.colors)
            .map(|(&p, &c)| ColorStop::from((p, c)))
            .collect();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "sweep angles are f32 in peniko"
        )]
        let start = to_radians(self.rotation) as f32;
        Brush::Gradient(Gradient {
            kind: GradientKind::Sweep(SweepGradientPosition::new(
                self.center,
                start,
                start + core::f32::consts::TAU,
            )),
            extend: Extend::Pad,
            stops: ColorStops::from(stops.as_slice()),
            ..Gradient::default()
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn sweep_stops_repeat_inner_boundaries() {
        let stops = SweepStops::new(&[
            (0.25, css::RED, css::ORANGE),
            (0.5, css::GREEN, css::LIME),
            (0.25, css::BLUE, css::NAVY),
        ]);
        assert_eq!(
            stops.colors,
            vec![css::RED, css::ORANGE, css::GREEN, css::LIME, css::BLUE, css::NAVY]
        );
        assert_eq!(stops.positions, vec![0.0, 0.25, 0.25, 0.75, 0.75, 1.0]);
    }

    #[test]
    fn sweep_stops_for_counter_clockwise_are_reversed() {
        let stops = SweepStops::for_direction(
            &[(0.25, css::RED, css::ORANGE), (0.75, css::GREEN, css::LIME)],
            SweepDirection::CounterClockwise,
        );
        assert_eq!(
            stops.colors,
            vec![css::LIME, css::GREEN, css::ORANGE, css::RED]
        );
        assert_eq!(stops.positions, vec![0.0, 0.75, 0.75, 1.0]);
    }

    #[test]
    fn sweep_gradient_rotates_by_start_angle() {
        let c = Point::new(100.0, 100.0);
        let slices = [(0.5, css::RED, css::RED), (0.25, css::BLUE, css::BLUE)];
        let cw = SweepGradient::new(c, 90.0, SweepDirection::Clockwise, &slices);
        assert_eq!(cw.rotation, 90.0);
        let ccw = SweepGradient::new(c, 90.0, SweepDirection::CounterClockwise, &slices);
        assert_eq!(ccw.rotation, -180.0);

        let moved = cw.transform() * Point::new(110.0, 100.0);
        assert!((moved.x - 100.0).abs() < 1e-9);
        assert!((moved.y - 110.0).abs() < 1e-9);
        assert!(matches!(cw.to_brush(), Brush::Gradient(_)));
    }

    #[test]
    fn radial_brush_mirrors_beyond_radius() {
        let b = radial_brush(Point::new(0.0, 0.0), 10.0, css::RED, css::BLUE);
        let Brush::Gradient(g) = b else {
            panic!("expected a gradient brush");
        };
        assert_eq!(g.extend, Extend::Reflect);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(
            radial_brush(Point::ORIGIN, 0.0, css::RED, css::BLUE),
            Brush::Solid(css::RED)
        );
    }
}
