// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lengths in device-independent, scaled or raw pixels.

/// Screen density scalars supplied by the host environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    /// Pixels per device-independent pixel.
    pub density: f64,
    /// Pixels per scaled pixel (density times the user's font scale).
    pub scaled_density: f64,
}

impl Density {
    /// A density where every unit is one pixel.
    pub const IDENTITY: Self = Self {
        density: 1.0,
        scaled_density: 1.0,
    };

    /// Creates a density pair.
    pub fn new(density: f64, scaled_density: f64) -> Self {
        Self {
            density,
            scaled_density,
        }
    }

    /// Creates a density pair from a density and a font scale.
    pub fn with_font_scale(density: f64, font_scale: f64) -> Self {
        Self::new(density, density * font_scale)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A length tagged with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Raw pixels.
    Px(f64),
    /// Device-independent pixels.
    Dp(f64),
    /// Scaled pixels (follow the user's font scale).
    Sp(f64),
}

impl Dimension {
    /// The zero length.
    pub const ZERO: Self = Self::Px(0.0);

    /// The raw value, in this dimension's own unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Dp(v) | Self::Sp(v) => v,
        }
    }

    /// This length in pixels.
    pub fn px(self, density: Density) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Dp(v) => v * density.density,
            Self::Sp(v) => v * density.scaled_density,
        }
    }

    /// This length in device-independent pixels.
    pub fn dp(self, density: Density) -> f64 {
        divide(self.px(density), density.density)
    }

    /// This length in scaled pixels.
    pub fn sp(self, density: Density) -> f64 {
        divide(self.px(density), density.scaled_density)
    }

    /// Converts to a [`Dimension::Px`].
    pub fn to_px(self, density: Density) -> Self {
        Self::Px(self.px(density))
    }

    /// Converts to a [`Dimension::Dp`].
    pub fn to_dp(self, density: Density) -> Self {
        Self::Dp(self.dp(density))
    }

    /// Converts to a [`Dimension::Sp`].
    pub fn to_sp(self, density: Density) -> Self {
        Self::Sp(self.sp(density))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::ZERO
    }
}

fn divide(px: f64, scale: f64) -> f64 {
    if scale == 0.0 { 0.0 } else { px / scale }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn converts_between_units() {
        let d = Density::with_font_scale(2.75, 1.3);
        assert_eq!(Dimension::Dp(10.0).px(d), 27.5);
        assert!((Dimension::Sp(10.0).px(d) - 35.75).abs() < 1e-9);
        assert!((Dimension::Dp(10.0).sp(d) - 10.0 / 1.3).abs() < 1e-9);
        assert_eq!(Dimension::Px(7.0).value(), 7.0);
    }

    #[test]
    fn px_round_trips_through_dp() {
        let d = Density::new(3.5, 4.2);
        for v in [0.0, 1.0, 0.1, 17.3, 1e6, -42.0] {
            let back = Dimension::Px(v).to_dp(d).to_px(d);
            assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
            let back = Dimension::Px(v).to_sp(d).to_px(d);
            assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }

    #[test]
    fn zero_is_zero_in_every_unit() {
        let d = Density::new(2.0, 2.5);
        for z in [Dimension::Px(0.0), Dimension::Dp(0.0), Dimension::Sp(0.0)] {
            assert_eq!(z.px(d), 0.0);
            assert_eq!(z.dp(d), 0.0);
            assert_eq!(z.sp(d), 0.0);
        }
    }
}
