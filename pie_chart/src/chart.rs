// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart planner.
//!
//! A [`ChartConfig`] is an immutable description of a pie chart. Any change
//! means building a new config and calling [`PieChart::plan`] again, which runs
//! layout and geometry from scratch and returns a [`RenderPlan`] for a
//! rendering backend to draw.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use pie_text::{TextDirection, TextMeasurer, TextStyle};
use smallvec::SmallVec;

use crate::angle::{SweepDirection, clamp_ratio, normalize_angle};
use crate::boxes::{PlacedBox, TextBox};
use crate::dash::get_element_circular;
use crate::dimension::{Density, Dimension};
use crate::gap::{GapPlacement, gap_corners, quad_path};
use crate::geometry::{Size, circle_bounds, non_negative, pie_center, pie_radius, union_rect};
use crate::gradient::{GradientMode, SweepGradient, radial_brush};
use crate::icon::{IconId, IconProvider, resolve_icon_size};
use crate::label::{
    LabelContent, LabelPlacement, LabelProperties, LabelStyle, place_label,
    reduce_radius_for_labels,
};
use crate::layout::{CENTER_LABEL_ID, ChartLayout, ChartLayoutSpec};
use crate::legend::{LegendSpec, legend_items};
use crate::slice::{Pointer, SliceAngles, SliceProperties, slice_outline, slice_properties};
use crate::style::{Edges, unit_f32};

/// Fill colors for slices that do not set one. Repeats when there are more slices.
pub const DEFAULT_PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// Inputs supplied by the host environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Display density, for [`Dimension`] conversion.
    pub density: Density,
    /// Text direction, for start/end placements.
    pub text_direction: TextDirection,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            density: Density::IDENTITY,
            text_direction: TextDirection::Ltr,
        }
    }
}

impl Environment {
    /// Sets the density.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Sets the text direction.
    pub fn with_text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }
}

/// One slice of the pie.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceSpec {
    /// Fraction of the circle; clamped to `[0, 1]`.
    pub fraction: f64,
    /// Fill color; `None` picks from [`DEFAULT_PALETTE`].
    pub color: Option<Color>,
    /// Gradient end color; `None` uses the fill color.
    pub color_end: Option<Color>,
    /// Label text.
    pub label: String,
    /// Per-slice label overrides.
    pub label_style: LabelStyle,
    /// Optional label icon.
    pub icon: Option<IconId>,
    /// Legend text; `None` uses `label`.
    pub legend_label: Option<String>,
    /// Legend icon; `None` uses the legend's indicator.
    pub legend_icon: Option<IconId>,
    /// Optional pointer.
    pub pointer: Option<Pointer>,
}

impl SliceSpec {
    /// A slice covering `fraction` of the circle.
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction,
            ..Self::default()
        }
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the gradient end color.
    pub fn with_color_end(mut self, color: Color) -> Self {
        self.color_end = Some(color);
        self
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the label overrides.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Sets the label icon.
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the legend text.
    pub fn with_legend_label(mut self, label: impl Into<String>) -> Self {
        self.legend_label = Some(label.into());
        self
    }

    /// Sets the legend icon.
    pub fn with_legend_icon(mut self, icon: IconId) -> Self {
        self.legend_icon = Some(icon);
        self
    }

    /// Sets the pointer.
    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = Some(pointer);
        self
    }
}

/// Text drawn over the pie center.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterLabel {
    /// The text.
    pub text: String,
    /// Style overrides; the chart label style fills the rest.
    pub style: LabelStyle,
}

/// A complete pie chart description.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Slices in drawing order.
    pub slices: Vec<SliceSpec>,
    /// Angle of the first slice's start, in degrees; any integer.
    pub start_angle: i32,
    /// Direction successive slices are laid in.
    pub direction: SweepDirection,
    /// Hole radius as a fraction of the pie radius.
    pub hole_ratio: f64,
    /// Overlay radius as a fraction of the pie radius.
    pub overlay_ratio: f64,
    /// Overlay opacity.
    pub overlay_alpha: f64,
    /// Overlay color.
    pub overlay_color: Color,
    /// Width of the gaps between slices.
    pub gap_width: Dimension,
    /// Where gaps sit relative to slice boundaries.
    pub gap_placement: GapPlacement,
    /// How slices are filled.
    pub gradient: GradientMode,
    /// Chart-wide label style.
    pub labels: LabelStyle,
    /// Optional legend.
    pub legend: Option<LegendSpec>,
    /// Optional center label.
    pub center_label: Option<CenterLabel>,
    /// Padding around the whole chart.
    pub padding: Edges<Dimension>,
    /// How much of every slice is drawn, in `[0, 1]`.
    pub sweep_progress: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            slices: Vec::new(),
            start_angle: -90,
            direction: SweepDirection::Clockwise,
            hole_ratio: 0.25,
            overlay_ratio: 0.55,
            overlay_alpha: 0.25,
            overlay_color: css::WHITE,
            gap_width: Dimension::Dp(8.0),
            gap_placement: GapPlacement::Middle,
            gradient: GradientMode::None,
            labels: LabelStyle::default(),
            legend: None,
            center_label: None,
            padding: Edges::uniform(Dimension::ZERO),
            sweep_progress: 1.0,
        }
    }
}

impl ChartConfig {
    /// A chart with the given slices and default styling.
    pub fn new(slices: Vec<SliceSpec>) -> Self {
        Self {
            slices,
            ..Self::default()
        }
    }

    /// Sets the start angle.
    pub fn with_start_angle(mut self, degrees: i32) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the hole ratio.
    pub fn with_hole_ratio(mut self, ratio: f64) -> Self {
        self.hole_ratio = ratio;
        self
    }

    /// Sets the overlay ratio and opacity.
    pub fn with_overlay(mut self, ratio: f64, alpha: f64) -> Self {
        self.overlay_ratio = ratio;
        self.overlay_alpha = alpha;
        self
    }

    /// Sets the gap width and placement.
    pub fn with_gap(mut self, width: Dimension, placement: GapPlacement) -> Self {
        self.gap_width = width;
        self.gap_placement = placement;
        self
    }

    /// Sets the gradient mode.
    pub fn with_gradient(mut self, gradient: GradientMode) -> Self {
        self.gradient = gradient;
        self
    }

    /// Sets the chart-wide label style.
    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the legend.
    pub fn with_legend(mut self, legend: LegendSpec) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Sets the center label.
    pub fn with_center_label(mut self, text: impl Into<String>, style: LabelStyle) -> Self {
        self.center_label = Some(CenterLabel {
            text: text.into(),
            style,
        });
        self
    }

    /// Sets the chart padding.
    pub fn with_padding(mut self, padding: Edges<Dimension>) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the sweep progress.
    pub fn with_sweep_progress(mut self, progress: f64) -> Self {
        self.sweep_progress = progress;
        self
    }

    fn slice_colors(&self, index: usize) -> (Color, Color) {
        let slice = &self.slices[index];
        let color = slice.color.unwrap_or_else(|| {
            get_element_circular(Some(&DEFAULT_PALETTE[..]), index as isize)
                .copied()
                .unwrap_or(css::GRAY)
        });
        (color, slice.color_end.unwrap_or(color))
    }
}

/// A degenerate situation the planner absorbed.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanWarning {
    /// Slice fractions add up to more than one; later slices overlap earlier ones.
    FractionsExceedOne {
        /// The sum of the clamped fractions.
        total: f64,
    },
    /// Outside labels did not fit even after shrinking the pie.
    LabelsDoNotFit,
    /// The legend needed more space than was available and was clamped.
    LegendClipped,
}

/// A label with everything needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedLabel {
    /// Where it goes.
    pub placement: LabelPlacement,
    /// The text.
    pub text: String,
    /// Text style (size in pixels).
    pub style: TextStyle,
    /// Text color.
    pub color: Color,
    /// Optional icon.
    pub icon: Option<IconId>,
    /// Optional icon tint.
    pub icon_tint: Option<Color>,
}

/// One planned slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedSlice {
    /// Index into [`ChartConfig::slices`].
    pub index: usize,
    /// Resolved angles.
    pub angles: SliceAngles,
    /// Outline, empty for zero-sized slices.
    pub outline: BezPath,
    /// Fill.
    pub fill: Brush,
    /// Resolved fill color.
    pub color: Color,
    /// Resolved gradient end color.
    pub color_end: Color,
    /// Label, unless invisible.
    pub label: Option<PlannedLabel>,
}

/// A gap quadrilateral to subtract from the pie fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    /// Boundary angle in degrees.
    pub angle: f64,
    /// Corners in winding order.
    pub corners: [Point; 4],
}

impl Gap {
    /// The gap as a closed path.
    pub fn path(&self) -> BezPath {
        quad_path(&self.corners)
    }
}

/// A translucent circle drawn over the slices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    /// The circle.
    pub circle: Circle,
    /// Color with opacity applied.
    pub color: Color,
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// The whole view.
    pub view: Rect,
    /// The view minus chart padding.
    pub content: Rect,
    /// Pie center.
    pub center: Point,
    /// Pie radius after making room for outside labels.
    pub radius: f64,
    /// Slices in drawing order.
    pub slices: Vec<PlannedSlice>,
    /// Gaps between slices.
    pub gaps: SmallVec<[Gap; 8]>,
    /// The shared sweep gradient, in [`GradientMode::Sweep`].
    pub sweep_gradient: Option<SweepGradient>,
    /// Center hole to cut out.
    pub hole: Option<Circle>,
    /// Overlay circle.
    pub overlay: Option<Overlay>,
    /// Legend border box.
    pub legend: Option<Rect>,
    /// Center label.
    pub center_label: Option<PlacedBox>,
    /// Every laid-out box (legend, center label and the pie slot).
    pub boxes: Vec<PlacedBox>,
    /// Absorbed degeneracies.
    pub warnings: Vec<PlanWarning>,
}

impl RenderPlan {
    /// Bounds of the pie circle.
    pub fn pie_bounds(&self) -> Rect {
        circle_bounds(self.center, self.radius)
    }
}

/// Plans a pie chart from a [`ChartConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieChart {
    config: ChartConfig,
}

/// Measured label inputs for one slice.
struct SliceLabel {
    props: LabelProperties,
    content: LabelContent,
}

impl PieChart {
    /// Wraps a config.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// The config.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Runs layout and geometry for a `size` view.
    pub fn plan(
        &self,
        size: Size,
        env: &Environment,
        measurer: &dyn TextMeasurer,
        icons: &dyn IconProvider,
    ) -> RenderPlan {
        let cfg = &self.config;
        let density = env.density;
        let size = size.non_negative();
        let mut warnings = Vec::new();

        let view = Rect::new(0.0, 0.0, size.width, size.height);
        let content = content_rect(view, &cfg.padding.px(density), env.text_direction);

        let legend = cfg.legend.as_ref().map(|spec| {
            let items = legend_items(cfg.slices.iter().enumerate().map(|(i, s)| {
                (
                    s.legend_label.as_deref().unwrap_or(&s.label),
                    cfg.slice_colors(i).0,
                    s.legend_icon,
                )
            }));
            (spec.build(&items, density, measurer, icons), spec.position)
        });
        let center_label = cfg.center_label.as_ref().map(|c| {
            let p =
                LabelProperties::resolve(c.text.as_str(), None, &c.style, &cfg.labels, density);
            TextBox::new(CENTER_LABEL_ID, p.text, p.style, p.color, measurer)
        });
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            region: content,
            direction: env.text_direction,
            legend,
            center_label,
        });
        if layout.legend_clipped {
            warnings.push(PlanWarning::LegendClipped);
        }

        let pie_rect = layout.pie;
        let center = pie_center(pie_rect.y0, pie_rect.x0, pie_rect.width(), pie_rect.height());
        let fractions: Vec<f64> = cfg.slices.iter().map(|s| s.fraction).collect();
        let total: f64 = fractions.iter().map(|&f| clamp_ratio(f)).sum();
        if total > 1.0 + 1e-9 {
            warnings.push(PlanWarning::FractionsExceedOne { total });
        }
        let props =
            slice_properties(&fractions, cfg.start_angle, cfg.direction, cfg.sweep_progress);

        let labels: Vec<SliceLabel> = cfg
            .slices
            .iter()
            .map(|s| {
                let props = LabelProperties::resolve(
                    s.label.as_str(),
                    s.icon,
                    &s.label_style,
                    &cfg.labels,
                    density,
                );
                let content = LabelContent {
                    text: measurer.measure(&props.text, &props.style),
                    icon: resolve_icon_size(icons, props.icon, props.icon_height),
                };
                SliceLabel { props, content }
            })
            .collect();

        let place_all = |radius: f64| -> Vec<Option<LabelPlacement>> {
            props
                .iter()
                .zip(&labels)
                .map(|(p, l)| {
                    if p.fraction == 0.0 {
                        return None;
                    }
                    let angles = p.angles();
                    place_label(&l.props, l.content, &angles, center, radius, env.text_direction)
                })
                .collect()
        };

        let mut radius = pie_radius(pie_rect.width(), pie_rect.height());
        if labels.iter().any(|l| l.props.label_type.is_outside()) {
            let (reduced, fits) = reduce_radius_for_labels(pie_rect, radius, |r| {
                place_all(r)
                    .iter()
                    .flatten()
                    .filter(|l| l.label_type.is_outside())
                    .map(|l| l.bounds)
                    .reduce(union_rect)
            });
            radius = reduced;
            if !fits {
                warnings.push(PlanWarning::LabelsDoNotFit);
            }
        }

        let sweep_gradient = (cfg.gradient == GradientMode::Sweep).then(|| {
            let stops: Vec<(f64, Color, Color)> = props
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let (c, e) = cfg.slice_colors(i);
                    (p.fraction, c, e)
                })
                .collect();
            SweepGradient::new(
                center,
                f64::from(normalize_angle(cfg.start_angle)),
                cfg.direction,
                &stops,
            )
        });
        let sweep_brush = sweep_gradient.as_ref().map(SweepGradient::to_brush);

        let placements = place_all(radius);
        let slices: Vec<PlannedSlice> = props
            .iter()
            .zip(labels)
            .zip(placements)
            .enumerate()
            .map(|(index, ((p, l), placement))| {
                let (color, color_end) = cfg.slice_colors(index);
                let fill = match (&sweep_brush, cfg.gradient) {
                    (Some(brush), _) => brush.clone(),
                    (None, GradientMode::Radial) => radial_brush(center, radius, color, color_end),
                    (None, _) => Brush::Solid(color),
                };
                let resolved = SliceProperties {
                    center: Some(center),
                    radius: Some(radius),
                    ..*p
                };
                PlannedSlice {
                    index,
                    angles: resolved.angles(),
                    outline: slice_outline(
                        center,
                        radius,
                        resolved.start_angle,
                        resolved.fraction,
                        resolved.direction,
                        cfg.slices[index].pointer,
                    ),
                    fill,
                    color,
                    color_end,
                    label: placement.map(|placement| PlannedLabel {
                        placement,
                        text: l.props.text,
                        style: l.props.style,
                        color: l.props.color,
                        icon: l.props.icon,
                        icon_tint: l.props.icon_tint,
                    }),
                }
            })
            .collect();

        let reach = radius
            + cfg
                .slices
                .iter()
                .filter_map(|s| s.pointer.map(|p| non_negative(p.length)))
                .fold(0.0, f64::max);
        let drawn: f64 = props.iter().map(|p| p.fraction).sum();
        let gaps = plan_gaps(
            &slices,
            center,
            non_negative(cfg.gap_width.px(density)),
            reach,
            cfg.gap_placement.for_direction(cfg.direction),
            drawn,
        );

        let hole_ratio = clamp_ratio(cfg.hole_ratio);
        let overlay_ratio = clamp_ratio(cfg.overlay_ratio);
        let hole =
            (hole_ratio > 0.0 && radius > 0.0).then(|| Circle::new(center, radius * hole_ratio));
        let overlay_visible =
            overlay_ratio > 0.0 && radius > 0.0 && clamp_ratio(cfg.overlay_alpha) > 0.0;
        let overlay = overlay_visible.then(|| Overlay {
            circle: Circle::new(center, radius * overlay_ratio),
            color: cfg.overlay_color.multiply_alpha(unit_f32(cfg.overlay_alpha)),
        });

        RenderPlan {
            view,
            content,
            center,
            radius,
            slices,
            gaps,
            sweep_gradient,
            hole,
            overlay,
            legend: layout.legend,
            center_label: layout.center_label,
            boxes: layout.placed,
            warnings,
        }
    }
}

/// The view minus padding; `start`/`end` follow the text direction.
fn content_rect(view: Rect, padding: &Edges, direction: TextDirection) -> Rect {
    let (left, right) = match direction {
        TextDirection::Ltr => (padding.start, padding.end),
        TextDirection::Rtl => (padding.end, padding.start),
    };
    let x0 = view.x0 + left;
    let y0 = view.y0 + padding.top;
    Rect::new(
        x0,
        y0,
        (view.x1 - right).max(x0),
        (view.y1 - padding.bottom).max(y0),
    )
}

/// Gaps at every boundary between two visible slices.
///
/// When the drawn slices close the circle, the boundary between the last and
/// the first one gets a gap too. A single visible slice has none.
fn plan_gaps(
    slices: &[PlannedSlice],
    center: Point,
    width: f64,
    length: f64,
    placement: GapPlacement,
    total: f64,
) -> SmallVec<[Gap; 8]> {
    let visible: Vec<&PlannedSlice> = slices.iter().filter(|s| s.angles.sweep != 0.0).collect();
    let mut gaps = SmallVec::new();
    if width <= 0.0 || length <= 0.0 || visible.len() < 2 {
        return gaps;
    }
    let closes = total >= 1.0 - 1e-9;
    for (i, s) in visible.iter().enumerate() {
        if i + 1 == visible.len() && !closes {
            break;
        }
        gaps.push(Gap {
            angle: s.angles.end,
            corners: gap_corners(center, s.angles.end, width, length, placement),
        });
    }
    gaps
}
