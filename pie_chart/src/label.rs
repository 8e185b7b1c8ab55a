// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice label and icon placement.
//!
//! Every function here is a pure function of the slice angles, the pie circle,
//! the resolved [`LabelProperties`] and measured text/icon sizes. The text
//! direction is always an explicit parameter.
//!
//! A label is a group of (optional) icon and text laid side by side. The icon
//! sits on the reading-order left of the text for a direction of `+1` and on
//! the right for `-1` (see [`IconPlacement::direction`]). The margin between
//! them only applies when both are present.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Rect, Shape};
use peniko::Color;
use peniko::color::palette::css;
use pie_text::{FontFamily, FontStyle, FontWeight, TextDirection, TextMetrics, TextStyle};

use crate::angle::{clamp_ratio, point_on_circle, to_degrees, to_radians};
use crate::dimension::{Density, Dimension};
use crate::geometry::{Size, non_negative, union_rect};
use crate::icon::IconId;
use crate::slice::{SliceAngles, append_arc};

/// Where a slice label is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelType {
    /// No label.
    Invisible,
    /// Inside the slice, at a fraction of the radius.
    #[default]
    Inside,
    /// Outside the pie, offset radially from the rim.
    Outside,
    /// Outside the pie, following the rim with glyph tops toward the center.
    OutsideCircularInward,
    /// Outside the pie, following the rim with glyph tops away from the center.
    OutsideCircularOutward,
}

impl LabelType {
    /// Returns `true` for labels drawn beyond the pie rim.
    pub fn is_outside(self) -> bool {
        matches!(
            self,
            Self::Outside | Self::OutsideCircularInward | Self::OutsideCircularOutward
        )
    }

    /// Returns `true` for labels whose text follows an arc.
    pub fn is_circular(self) -> bool {
        matches!(
            self,
            Self::OutsideCircularInward | Self::OutsideCircularOutward
        )
    }
}

/// Which side of the text a label icon goes on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconPlacement {
    /// Always to the left.
    Left,
    /// Always to the right.
    Right,
    /// Before the text in reading order.
    #[default]
    Start,
    /// After the text in reading order.
    End,
}

impl IconPlacement {
    /// `+1.0` if the icon ends up to the left of the text, `-1.0` if to the right.
    pub fn direction(self, text_direction: TextDirection) -> f64 {
        match (self, text_direction) {
            (Self::Left, _)
            | (Self::Start, TextDirection::Ltr)
            | (Self::End, TextDirection::Rtl) => 1.0,
            (Self::Right, _)
            | (Self::Start, TextDirection::Rtl)
            | (Self::End, TextDirection::Ltr) => -1.0,
        }
    }
}

/// Fraction of the radius at which inside labels are centered by default.
pub const DEFAULT_OFFSET_FROM_CENTER: f64 = 0.65;

/// Label styling where every field is optional.
///
/// A slice's style falls back to the chart's, which falls back to built-in
/// defaults. See [`LabelProperties::resolve`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    /// Label type.
    pub label_type: Option<LabelType>,
    /// Fraction of the radius for inside labels.
    pub offset_from_center: Option<f64>,
    /// Distance between the rim and outside labels.
    pub margin_from_pie: Option<Dimension>,
    /// Font size.
    pub font_size: Option<Dimension>,
    /// Font family.
    pub font_family: Option<FontFamily>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Text color.
    pub color: Option<Color>,
    /// Icon height; the width follows the icon's aspect ratio.
    pub icon_height: Option<Dimension>,
    /// Space between icon and text.
    pub icon_margin: Option<Dimension>,
    /// Icon side.
    pub icon_placement: Option<IconPlacement>,
    /// Icon tint.
    pub icon_tint: Option<Color>,
}

impl LabelStyle {
    /// Sets the label type.
    pub fn with_type(mut self, label_type: LabelType) -> Self {
        self.label_type = Some(label_type);
        self
    }

    /// Sets the inside-label offset as a fraction of the radius.
    pub fn with_offset_from_center(mut self, offset: f64) -> Self {
        self.offset_from_center = Some(offset);
        self
    }

    /// Sets the outside-label margin.
    pub fn with_margin_from_pie(mut self, margin: Dimension) -> Self {
        self.margin_from_pie = Some(margin);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, size: Dimension) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    /// Sets the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the icon height.
    pub fn with_icon_height(mut self, height: Dimension) -> Self {
        self.icon_height = Some(height);
        self
    }

    /// Sets the icon-to-text margin.
    pub fn with_icon_margin(mut self, margin: Dimension) -> Self {
        self.icon_margin = Some(margin);
        self
    }

    /// Sets the icon placement.
    pub fn with_icon_placement(mut self, placement: IconPlacement) -> Self {
        self.icon_placement = Some(placement);
        self
    }

    /// Sets the icon tint.
    pub fn with_icon_tint(mut self, tint: Color) -> Self {
        self.icon_tint = Some(tint);
        self
    }

    /// Fields set in `self`, falling back to `fallback` for the rest.
    pub fn or(&self, fallback: &Self) -> Self {
        Self {
            label_type: self.label_type.or(fallback.label_type),
            offset_from_center: self.offset_from_center.or(fallback.offset_from_center),
            margin_from_pie: self.margin_from_pie.or(fallback.margin_from_pie),
            font_size: self.font_size.or(fallback.font_size),
            font_family: self
                .font_family
                .clone()
                .or_else(|| fallback.font_family.clone()),
            font_weight: self.font_weight.or(fallback.font_weight),
            font_style: self.font_style.or(fallback.font_style),
            color: self.color.or(fallback.color),
            icon_height: self.icon_height.or(fallback.icon_height),
            icon_margin: self.icon_margin.or(fallback.icon_margin),
            icon_placement: self.icon_placement.or(fallback.icon_placement),
            icon_tint: self.icon_tint.or(fallback.icon_tint),
        }
    }
}

/// Label inputs for one slice, resolved once per plan.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelProperties {
    /// The label text.
    pub text: String,
    /// Label type.
    pub label_type: LabelType,
    /// Fraction of the radius for inside labels, in `[0, 1]`.
    pub offset_from_center: f64,
    /// Rim-to-label distance in pixels.
    pub margin_from_pie: f64,
    /// Resolved text style (size in pixels).
    pub style: TextStyle,
    /// Text color.
    pub color: Color,
    /// Optional icon.
    pub icon: Option<IconId>,
    /// Optional icon tint.
    pub icon_tint: Option<Color>,
    /// Icon height in pixels.
    pub icon_height: f64,
    /// Icon-to-text margin in pixels.
    pub icon_margin: f64,
    /// Icon side.
    pub icon_placement: IconPlacement,
}

impl LabelProperties {
    /// Resolves `slice` over `chart` over the built-in defaults.
    pub fn resolve(
        text: impl Into<String>,
        icon: Option<IconId>,
        slice: &LabelStyle,
        chart: &LabelStyle,
        density: Density,
    ) -> Self {
        let s = slice.or(chart);
        let px = |d: Option<Dimension>, default: Dimension| {
            non_negative(d.unwrap_or(default).px(density))
        };
        let mut style = TextStyle::new(px(s.font_size, Dimension::Sp(14.0)));
        if let Some(family) = s.font_family {
            style = style.with_family(family);
        }
        if let Some(weight) = s.font_weight {
            style = style.with_weight(weight);
        }
        if let Some(font_style) = s.font_style {
            style = style.with_style(font_style);
        }
        Self {
            text: text.into(),
            label_type: s.label_type.unwrap_or_default(),
            offset_from_center: clamp_ratio(
                s.offset_from_center
                    .unwrap_or(DEFAULT_OFFSET_FROM_CENTER),
            ),
            margin_from_pie: px(s.margin_from_pie, Dimension::Dp(8.0)),
            style,
            color: s.color.unwrap_or(css::BLACK),
            icon,
            icon_tint: s.icon_tint,
            icon_height: px(s.icon_height, Dimension::Dp(16.0)),
            icon_margin: px(s.icon_margin, Dimension::Dp(4.0)),
            icon_placement: s.icon_placement.unwrap_or_default(),
        }
    }
}

/// Final geometry of one slice label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Label type.
    pub label_type: LabelType,
    /// Text anchor: horizontal center of the text on its baseline, or the
    /// middle of the baseline arc for circular labels.
    pub anchor: Point,
    /// Text box (zero-sized for empty text).
    pub text_bounds: Rect,
    /// Baseline arc for circular labels, running in reading order.
    pub text_path: Option<BezPath>,
    /// Unrotated icon box, if the slice has a sized icon.
    pub icon_bounds: Option<Rect>,
    /// Icon rotation in degrees about the icon center.
    pub icon_rotation: f64,
    /// Axis-aligned bounds of everything drawn for this label.
    pub bounds: Rect,
}

/// Measured sizes a label is placed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelContent {
    /// Metrics of the label text.
    pub text: TextMetrics,
    /// Resolved icon size ([`Size::ZERO`] when there is no icon).
    pub icon: Size,
}

impl LabelContent {
    fn text_size(&self) -> Size {
        if self.text.is_empty() {
            Size::ZERO
        } else {
            Size::new(self.text.advance_width, self.text.line_height())
        }
    }

    fn has_icon(&self) -> bool {
        self.icon.width > 0.0 && self.icon.height > 0.0
    }

    /// The icon-to-text margin, applied only when both are present.
    fn gap(&self, margin: f64) -> f64 {
        if self.has_icon() && self.text_size().width > 0.0 {
            margin
        } else {
            0.0
        }
    }

    /// Size of icon and text side by side.
    fn group_size(&self, margin: f64) -> Size {
        let text = self.text_size();
        let icon = if self.has_icon() { self.icon } else { Size::ZERO };
        Size::new(
            text.width + self.gap(margin) + icon.width,
            text.height.max(icon.height),
        )
    }
}

/// Places the label of one slice, or returns `None` for invisible labels.
pub fn place_label(
    props: &LabelProperties,
    content: LabelContent,
    angles: &SliceAngles,
    center: Point,
    radius: f64,
    text_direction: TextDirection,
) -> Option<LabelPlacement> {
    let dir = props.icon_placement.direction(text_direction);
    let radius = non_negative(radius);
    match props.label_type {
        LabelType::Invisible => None,
        LabelType::Inside => {
            let anchor = point_on_circle(center, radius * props.offset_from_center, angles.middle);
            Some(straight_group(props, content, anchor, dir, LabelType::Inside))
        }
        LabelType::Outside => {
            let anchor = point_on_circle(center, radius + props.margin_from_pie, angles.middle);
            let group = content.group_size(props.icon_margin);
            let unit = point_on_circle(Point::ZERO, 1.0, angles.middle).to_vec2();
            // Extent of the group along `unit`, so its nearest point sits on the anchor line.
            let reach = unit.x.abs() * group.width / 2.0 + unit.y.abs() * group.height / 2.0;
            let c = anchor + unit * reach;
            Some(straight_group(props, content, c, dir, LabelType::Outside))
        }
        LabelType::OutsideCircularInward | LabelType::OutsideCircularOutward => {
            Some(circular_group(props, content, angles, center, radius, dir))
        }
    }
}

/// Icon and text side by side, centered on `c`.
fn straight_group(
    props: &LabelProperties,
    content: LabelContent,
    c: Point,
    dir: f64,
    label_type: LabelType,
) -> LabelPlacement {
    let text = content.text_size();
    let gap = content.gap(props.icon_margin);
    let text_cx = if content.has_icon() {
        c.x + dir * (content.icon.width + gap) / 2.0
    } else {
        c.x
    };
    let text_bounds = Rect::from_center_size((text_cx, c.y), (text.width, text.height));
    let icon_bounds = content.has_icon().then(|| {
        let icon_cx = c.x - dir * (text.width + gap) / 2.0;
        Rect::from_center_size((icon_cx, c.y), (content.icon.width, content.icon.height))
    });
    let bounds = icon_bounds.map_or(text_bounds, |i| union_rect(text_bounds, i));
    LabelPlacement {
        label_type,
        anchor: Point::new(text_cx, text_bounds.y0 + content.text.ascent),
        text_bounds,
        text_path: None,
        icon_bounds,
        icon_rotation: 0.0,
        bounds,
    }
}

/// Icon and text following the rim.
///
/// Outward text reads clockwise with its baseline nearest the rim; inward
/// text reads counter-clockwise with its top nearest the rim.
fn circular_group(
    props: &LabelProperties,
    content: LabelContent,
    angles: &SliceAngles,
    center: Point,
    radius: f64,
    dir: f64,
) -> LabelPlacement {
    let outward = props.label_type == LabelType::OutsideCircularOutward;
    let (reading, up) = if outward { (1.0, 90.0) } else { (-1.0, -90.0) };
    let text = content.text_size();
    let gap = content.gap(props.icon_margin);
    let inner = radius + props.margin_from_pie;
    let baseline_radius = if outward {
        inner + content.text.descent
    } else {
        inner + content.text.ascent
    };
    let along = |distance: f64| {
        if baseline_radius > 0.0 {
            angles.middle + reading * to_degrees(distance / baseline_radius)
        } else {
            angles.middle
        }
    };

    let text_angle = along(if content.has_icon() {
        dir * (content.icon.width + gap) / 2.0
    } else {
        0.0
    });
    let half_span = if baseline_radius > 0.0 {
        to_degrees(text.width / 2.0 / baseline_radius)
    } else {
        0.0
    };
    let start = text_angle - reading * half_span;
    let sweep = reading * 2.0 * half_span;

    let (text_path, text_bounds) = if text.width > 0.0 {
        let mut path = BezPath::new();
        path.move_to(point_on_circle(center, baseline_radius, start));
        append_arc(&mut path, center, baseline_radius, start, sweep);

        let outer = inner + text.height;
        let mut band = BezPath::new();
        band.move_to(point_on_circle(center, inner, start));
        append_arc(&mut band, center, inner, start, sweep);
        band.line_to(point_on_circle(center, outer, start + sweep));
        append_arc(&mut band, center, outer, start + sweep, -sweep);
        band.close_path();
        (Some(path), band.bounding_box())
    } else {
        let p = point_on_circle(center, inner, text_angle);
        (None, Rect::from_points(p, p))
    };

    let mut bounds = text_bounds;
    let mut icon_rotation = 0.0;
    let icon_bounds = content.has_icon().then(|| {
        let icon_angle = along(-dir * (text.width + gap) / 2.0);
        let c = point_on_circle(center, inner + content.icon.height / 2.0, icon_angle);
        icon_rotation = icon_angle + up;
        let r = Rect::from_center_size(c, (content.icon.width, content.icon.height));
        let rotated = Affine::rotate_about(to_radians(icon_rotation), c).transform_rect_bbox(r);
        bounds = union_rect(bounds, rotated);
        r
    });

    LabelPlacement {
        label_type: props.label_type,
        anchor: point_on_circle(center, baseline_radius, text_angle),
        text_bounds,
        text_path,
        icon_bounds,
        icon_rotation,
        bounds,
    }
}

/// Iterations of the radius reduction before giving up.
const MAX_FIT_ITERATIONS: usize = 16;
/// Overflow below which labels count as fitting.
const FIT_TOLERANCE: f64 = 0.5;

/// Shrinks the pie radius until the label bounds fit inside `region`.
///
/// `label_bounds(radius)` returns the union of all label bounds for a pie of
/// that radius, or `None` when there are none. Returns the reduced radius and
/// whether the labels fit.
pub fn reduce_radius_for_labels(
    region: Rect,
    radius: f64,
    mut label_bounds: impl FnMut(f64) -> Option<Rect>,
) -> (f64, bool) {
    let mut radius = non_negative(radius);
    for _ in 0..MAX_FIT_ITERATIONS {
        let Some(u) = label_bounds(radius) else {
            return (radius, true);
        };
        let overflow = (region.y0 - u.y0)
            .max(region.x0 - u.x0)
            .max(u.x1 - region.x1)
            .max(u.y1 - region.y1);
        if overflow <= FIT_TOLERANCE {
            return (radius, true);
        }
        if radius == 0.0 {
            return (0.0, false);
        }
        radius = non_negative(radius - overflow);
    }
    let fits = label_bounds(radius).is_none_or(|u| {
        u.x0 >= region.x0 - FIT_TOLERANCE
            && u.y0 >= region.y0 - FIT_TOLERANCE
            && u.x1 <= region.x1 + FIT_TOLERANCE
            && u.y1 <= region.y1 + FIT_TOLERANCE
    });
    (radius, fits)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::angle::SweepDirection;
    use crate::geometry::circle_bounds;

    fn props(label_type: LabelType) -> LabelProperties {
        let mut p = LabelProperties::resolve(
            "Label",
            None,
            &LabelStyle::default().with_type(label_type),
            &LabelStyle::default(),
            Density::IDENTITY,
        );
        p.icon_margin = 4.0;
        p.margin_from_pie = 10.0;
        p
    }

    fn content(text_w: f64, icon: Size) -> LabelContent {
        LabelContent {
            text: TextMetrics {
                advance_width: text_w,
                ascent: 8.0,
                descent: 2.0,
                leading: 0.0,
            },
            icon,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn icon_direction_follows_text_direction() {
        assert_eq!(IconPlacement::Left.direction(TextDirection::Rtl), 1.0);
        assert_eq!(IconPlacement::Right.direction(TextDirection::Ltr), -1.0);
        assert_eq!(IconPlacement::Start.direction(TextDirection::Ltr), 1.0);
        assert_eq!(IconPlacement::Start.direction(TextDirection::Rtl), -1.0);
        assert_eq!(IconPlacement::End.direction(TextDirection::Ltr), -1.0);
        assert_eq!(IconPlacement::End.direction(TextDirection::Rtl), 1.0);
    }

    #[test]
    fn slice_style_overrides_chart_style() {
        let chart = LabelStyle::default()
            .with_type(LabelType::Outside)
            .with_font_size(Dimension::Px(20.0));
        let slice = LabelStyle::default().with_font_size(Dimension::Px(9.0));
        let p = LabelProperties::resolve("x", None, &slice, &chart, Density::IDENTITY);
        assert_eq!(p.label_type, LabelType::Outside);
        assert_eq!(p.style.font_size, 9.0);
        assert_eq!(p.offset_from_center, DEFAULT_OFFSET_FROM_CENTER);
        let p = LabelProperties::resolve(
            "x",
            None,
            &LabelStyle::default().with_offset_from_center(3.4),
            &chart,
            Density::IDENTITY,
        );
        assert_eq!(p.offset_from_center, 1.0);
    }

    #[test]
    fn inside_label_shifts_away_from_icon() {
        // Slice centered at 0°, so the anchor is on the +x axis.
        let angles = SliceAngles::new(-45.0, 0.25, SweepDirection::Clockwise);
        let mut p = props(LabelType::Inside);
        p.offset_from_center = 0.5;
        let c = content(40.0, Size::new(12.0, 12.0));
        let center = Point::new(100.0, 100.0);
        let l = place_label(&p, c, &angles, center, 100.0, TextDirection::Ltr).unwrap();
        // Anchor (150, 100); text shifted right by (12 + 4) / 2.
        assert!(close(l.text_bounds.center().x, 158.0));
        assert!(close(l.text_bounds.center().y, 100.0));
        let icon = l.icon_bounds.unwrap();
        assert!(close(icon.center().x, 150.0 - (40.0 + 4.0) / 2.0));
        assert!(icon.x1 <= l.text_bounds.x0);
        // Baseline is half the text height below the anchor, less the descent.
        assert!(close(l.anchor.y, 100.0 - 5.0 + 8.0));

        let rtl = place_label(&p, c, &angles, center, 100.0, TextDirection::Rtl).unwrap();
        assert!(close(rtl.text_bounds.center().x, 142.0));
        assert!(rtl.icon_bounds.unwrap().x0 >= rtl.text_bounds.x1);
    }

    #[test]
    fn empty_text_is_zero_sized_and_skips_the_margin() {
        let angles = SliceAngles::new(-45.0, 0.25, SweepDirection::Clockwise);
        let p = props(LabelType::Inside);
        let l = place_label(
            &p,
            content(0.0, Size::new(12.0, 12.0)),
            &angles,
            Point::ZERO,
            100.0,
            TextDirection::Ltr,
        )
        .unwrap();
        assert_eq!(l.text_bounds.area(), 0.0);
        // The icon stays centered on the anchor.
        assert!(close(l.icon_bounds.unwrap().center().x, 65.0));
    }

    #[test]
    fn outside_label_clears_the_rim() {
        let p = props(LabelType::Outside);
        let c = content(40.0, Size::ZERO);
        for start in [-45.0, 45.0, 135.0, 225.0] {
            let angles = SliceAngles::new(start, 0.25, SweepDirection::Clockwise);
            let l = place_label(&p, c, &angles, Point::ZERO, 100.0, TextDirection::Ltr).unwrap();
            let nearest = Point::new(
                0.0_f64.clamp(l.bounds.x0, l.bounds.x1),
                0.0_f64.clamp(l.bounds.y0, l.bounds.y1),
            );
            assert!(nearest.to_vec2().hypot() >= 100.0, "label at {start} overlaps the pie");
        }
    }

    #[test]
    fn wide_outside_labels_clear_the_rim_on_diagonals() {
        let p = props(LabelType::Outside);
        let c = content(200.0, Size::ZERO);
        for start in [0.0, 90.0, 180.0, 270.0] {
            // Slices centered at 45°, 135°, 225° and 315°.
            let angles = SliceAngles::new(start, 0.25, SweepDirection::Clockwise);
            let l = place_label(&p, c, &angles, Point::ZERO, 100.0, TextDirection::Ltr).unwrap();
            let nearest = Point::new(
                0.0_f64.clamp(l.bounds.x0, l.bounds.x1),
                0.0_f64.clamp(l.bounds.y0, l.bounds.y1),
            );
            let dist = nearest.to_vec2().hypot();
            assert!(dist >= 110.0 - 1e-9, "label at {start} reaches {dist}");
        }
    }

    #[test]
    fn invisible_labels_are_skipped() {
        let angles = SliceAngles::new(0.0, 0.5, SweepDirection::Clockwise);
        let p = props(LabelType::Invisible);
        let c = content(10.0, Size::ZERO);
        assert!(place_label(&p, c, &angles, Point::ZERO, 10.0, TextDirection::Ltr).is_none());
    }

    #[test]
    fn circular_labels_follow_the_rim() {
        // Slice centered at -90° (top of the pie).
        let angles = SliceAngles::new(-135.0, 0.25, SweepDirection::Clockwise);
        let c = content(40.0, Size::new(10.0, 10.0));
        let out = place_label(
            &props(LabelType::OutsideCircularOutward),
            c,
            &angles,
            Point::ZERO,
            100.0,
            TextDirection::Ltr,
        )
        .unwrap();
        assert!(out.text_path.is_some());
        assert!(close(out.anchor.to_vec2().hypot(), 112.0));
        // Icon before the text in reading order, upright at the top.
        let icon = out.icon_bounds.unwrap();
        assert!(icon.center().x < 0.0);
        assert!(out.icon_rotation < 0.0 && out.icon_rotation > -20.0);
        assert!(out.bounds.y1 < -100.0);

        let inward = place_label(
            &props(LabelType::OutsideCircularInward),
            c,
            &angles,
            Point::ZERO,
            100.0,
            TextDirection::Ltr,
        )
        .unwrap();
        assert!(close(inward.anchor.to_vec2().hypot(), 118.0));
        // Reading counter-clockwise, "before" is at larger angles.
        assert!(inward.icon_bounds.unwrap().center().x > 0.0);
    }

    #[test]
    fn radius_shrinks_until_labels_fit() {
        let region = Rect::new(0.0, 0.0, 200.0, 200.0);
        let c = Point::new(100.0, 100.0);
        let (r, fits) =
            reduce_radius_for_labels(region, 100.0, |r| Some(circle_bounds(c, r + 20.0)));
        assert!(fits);
        assert!(close(r, 80.0));
        let (r, fits) = reduce_radius_for_labels(region, 100.0, |_| None);
        assert!(fits);
        assert_eq!(r, 100.0);
        let (r, fits) =
            reduce_radius_for_labels(region, 100.0, |r| Some(circle_bounds(c, r + 500.0)));
        assert!(!fits);
        assert_eq!(r, 0.0);
    }
}
