// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-model edges and decoration styles.

use peniko::Color;

use crate::angle::clamp_ratio;
use crate::dash::{DashArray, DashArrayError, parse_border_dash_array};
use crate::dimension::{Density, Dimension};

/// Per-edge lengths in logical (direction-relative) terms.
///
/// `start` is the left edge for LTR layouts and the right edge for RTL ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges<T = f64> {
    /// Top edge.
    pub top: T,
    /// Bottom edge.
    pub bottom: T,
    /// Leading edge along the text direction.
    pub start: T,
    /// Trailing edge along the text direction.
    pub end: T,
}

/// Space outside a box, in pixels.
pub type Margins = Edges<f64>;
/// Space between a container's border and its children, in pixels.
pub type Paddings = Edges<f64>;

impl<T: Copy> Edges<T> {
    /// The same length on every edge.
    pub fn uniform(v: T) -> Self {
        Self {
            top: v,
            bottom: v,
            start: v,
            end: v,
        }
    }

    /// `vertical` on top and bottom, `horizontal` on start and end.
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            start: horizontal,
            end: horizontal,
        }
    }
}

impl Edges<f64> {
    /// All edges zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        start: 0.0,
        end: 0.0,
    };

    /// `start + end`.
    pub fn horizontal(&self) -> f64 {
        self.start + self.end
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// The larger of each pair of edges; this is how margins collapse.
    pub fn collapse(&self, other: &Self) -> Self {
        Self {
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
            start: self.start.max(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Edges<Dimension> {
    /// Resolves every edge to pixels.
    pub fn px(&self, density: Density) -> Edges<f64> {
        Edges {
            top: self.top.px(density),
            bottom: self.bottom.px(density),
            start: self.start.px(density),
            end: self.end.px(density),
        }
    }
}

/// A container border.
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke thickness in pixels; inflates the container on every edge.
    pub thickness: f64,
    /// Stroke color.
    pub color: Color,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Dash pattern; empty for a solid stroke.
    pub dash: DashArray,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Border {
    /// A solid border.
    pub fn solid(thickness: f64, color: Color) -> Self {
        Self {
            thickness: thickness.max(0.0),
            color,
            corner_radius: 0.0,
            dash: DashArray::new(),
            alpha: 1.0,
        }
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Sets the opacity (clamped to `[0, 1]`).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = clamp_ratio(alpha);
        self
    }

    /// Sets the dash pattern from a string such as `"4, 2"`.
    pub fn with_dash_pattern(mut self, pattern: &str) -> Result<Self, DashArrayError> {
        self.dash = parse_border_dash_array(Some(pattern))?;
        Ok(self)
    }

    /// The stroke color with `alpha` applied.
    pub fn paint(&self) -> Color {
        self.color.multiply_alpha(unit_f32(self.alpha))
    }
}

/// A container background fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    /// Fill color.
    pub color: Color,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Corner radius in pixels.
    pub corner_radius: f64,
}

impl Background {
    /// An opaque background.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            alpha: 1.0,
            corner_radius: 0.0,
        }
    }

    /// Sets the opacity (clamped to `[0, 1]`).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = clamp_ratio(alpha);
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// The fill color with `alpha` applied.
    pub fn paint(&self) -> Color {
        self.color.multiply_alpha(unit_f32(self.alpha))
    }
}

pub(crate) fn unit_f32(v: f64) -> f32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "alpha in [0, 1] fits f32"
    )]
    let a = clamp_ratio(v) as f32;
    a
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn edges_collapse_to_the_larger_side() {
        let a = Edges {
            top: 1.0,
            bottom: 8.0,
            start: 3.0,
            end: 0.0,
        };
        let b = Edges::uniform(4.0);
        assert_eq!(
            a.collapse(&b),
            Edges {
                top: 4.0,
                bottom: 8.0,
                start: 4.0,
                end: 4.0,
            }
        );
        assert_eq!(a.horizontal(), 3.0);
        assert_eq!(a.vertical(), 9.0);
    }

    #[test]
    fn dimension_edges_resolve_with_density() {
        let e = Edges::symmetric(Dimension::Dp(2.0), Dimension::Px(3.0));
        assert_eq!(e.px(Density::new(2.0, 2.0)), Edges::symmetric(4.0, 3.0));
    }

    #[test]
    fn border_dash_pattern_is_validated() {
        let b = Border::solid(2.0, css::BLACK).with_dash_pattern("4, 2").unwrap();
        assert_eq!(b.dash.as_slice(), &[4.0, 2.0]);
        assert!(Border::solid(2.0, css::BLACK).with_dash_pattern("4 two").is_err());
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Border::solid(1.0, css::BLACK).with_alpha(3.4).alpha, 1.0);
        assert_eq!(Background::new(css::WHITE).with_alpha(-3.4).alpha, 0.0);
    }
}
