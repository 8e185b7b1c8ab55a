// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart geometry and layout.
//!
//! This crate computes everything a backend needs to draw a pie chart and
//! nothing more:
//! - **Geometry**: slice angles and outlines, gap quadrilaterals, hole and
//!   overlay circles, radial and sweep gradients.
//! - **Labels**: inside, outside and rim-following label placement with
//!   optional icons, honoring an explicit [`TextDirection`].
//! - **Layout**: a small box model (margins, paddings, borders, alignment,
//!   wrapping) used to arrange the legend and center label around the pie.
//!
//! [`PieChart::plan`] ties these together into a [`RenderPlan`]. Drawing, text
//! shaping and icon decoding stay with the caller; text is measured through
//! [`TextMeasurer`] and icons are sized through [`IconProvider`].
//!
//! ```
//! use peniko::color::palette::css;
//! use pie_chart::{ChartConfig, Environment, NoIcons, PieChart, Size, SliceSpec};
//! use pie_text::HeuristicTextMeasurer;
//!
//! let chart = PieChart::new(ChartConfig::new(vec![
//!     SliceSpec::new(0.6).with_color(css::TEAL).with_label("60%"),
//!     SliceSpec::new(0.4).with_color(css::CORAL).with_label("40%"),
//! ]));
//! let plan = chart.plan(
//!     Size::new(400.0, 300.0),
//!     &Environment::default(),
//!     &HeuristicTextMeasurer,
//!     &NoIcons,
//! );
//! assert_eq!(plan.slices.len(), 2);
//! assert_eq!(plan.radius, 150.0);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod angle;
mod boxes;
mod chart;
mod container;
mod dash;
mod dimension;
#[cfg(not(feature = "std"))]
mod float;
mod gap;
mod geometry;
mod gradient;
mod icon;
mod label;
mod layout;
mod legend;
mod slice;
mod style;
mod symbol;
mod wrap;

pub use angle::{
    SweepDirection, clamp_ratio, end_angle, middle_angle, normalize_angle, normalize_angle_f64,
    point_on_circle, to_degrees, to_radians,
};
pub use boxes::{
    BoxId, EmptyBox, IconBox, IconSource, LayoutBox, Measured, PieBox, PlacedBox, PlacedContent,
    TextBox, find_placed,
};
pub use chart::{
    CenterLabel, ChartConfig, DEFAULT_PALETTE, Environment, Gap, Overlay, PieChart, PlanWarning,
    PlannedLabel, PlannedSlice, RenderPlan, SliceSpec,
};
pub use container::{Alignment, Arrangement, Container, Wrapping};
pub use dash::{DashArray, DashArrayError, get_element_circular, parse_border_dash_array};
pub use dimension::{Density, Dimension};
pub use gap::{GapPlacement, gap_corners, quad_path};
pub use geometry::{
    Size, circle_bounds, padded_pie_center, padded_pie_radius, pie_center, pie_radius,
    rect_from_edges,
};
pub use gradient::{GradientMode, SweepGradient, SweepStops, radial_brush};
pub use icon::{IconId, IconProvider, IconRegistry, NoIcons, icon_width, resolve_icon_size};
pub use label::{
    DEFAULT_OFFSET_FROM_CENTER, IconPlacement, LabelContent, LabelPlacement, LabelProperties,
    LabelStyle, LabelType, place_label, reduce_radius_for_labels,
};
pub use layout::{
    CENTER_ID, CENTER_LABEL_ID, ChartLayout, ChartLayoutSpec, FIRST_FREE_ID, PIE_ID, ROOT_ID,
};
pub use legend::{LegendIndicator, LegendItem, LegendPosition, LegendSpec};
pub use slice::{
    ARC_TOLERANCE, Pointer, SliceAngles, SliceProperties, slice_outline, slice_properties,
};
pub use style::{Background, Border, Edges, Margins, Paddings};
pub use symbol::Symbol;

pub use pie_text::{TextDirection, TextMeasurer};
