// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a [`RenderPlan`].
//!
//! Gaps and the hole are cut out of the slices with a mask. SVG has no conic
//! gradient, so sweep fills fall back to each slice's solid color.

use kurbo::{BezPath, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use pie_chart::{
    ARC_TOLERANCE, Border, IconSource, LabelPlacement, PlacedBox, PlacedContent, PlannedLabel,
    RenderPlan,
};
use pie_text::{FontStyle, TextStyle};

#[derive(Debug, Default)]
pub(crate) struct SvgDocument {
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgDocument {
    pub(crate) fn from_plan(plan: &RenderPlan) -> Self {
        let mut doc = Self::default();
        doc.draw_pie(plan);
        for slice in &plan.slices {
            if let Some(label) = &slice.label {
                doc.draw_label(label);
            }
        }
        for placed in &plan.boxes {
            doc.draw_box(placed);
        }
        doc
    }

    pub(crate) fn to_svg_string(&self, view: Rect) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            view.width(),
            view.height()
        ));
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn draw_pie(&mut self, plan: &RenderPlan) {
        if plan.radius <= 0.0 {
            return;
        }
        let mask = self.fresh_id("cut");
        let bounds = plan.pie_bounds();
        self.defs.push_str(&format!(
            r#"<mask id="{mask}"><rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
            bounds.x0 - bounds.width(),
            bounds.y0 - bounds.height(),
            bounds.width() * 3.0,
            bounds.height() * 3.0,
        ));
        for gap in &plan.gaps {
            self.defs
                .push_str(&format!(r#"<path d="{}" fill="black"/>"#, gap.path().to_svg()));
        }
        if let Some(hole) = plan.hole {
            self.defs.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
                hole.center.x, hole.center.y, hole.radius
            ));
        }
        self.defs.push_str("</mask>\n");

        self.body.push_str(&format!(r#"<g mask="url(#{mask})">"#));
        self.body.push('\n');
        for slice in &plan.slices {
            if slice.outline.elements().is_empty() {
                continue;
            }
            let fill = match &slice.fill {
                Brush::Solid(color) => paint_attr("fill", *color),
                Brush::Gradient(_) if plan.sweep_gradient.is_some() => {
                    paint_attr("fill", slice.color)
                }
                Brush::Gradient(_) => {
                    let id = self.fresh_id("radial");
                    self.defs.push_str(&format!(
                        r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" spreadMethod="reflect" cx="{}" cy="{}" r="{}"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></radialGradient>"#,
                        plan.center.x,
                        plan.center.y,
                        plan.radius,
                        hex(slice.color),
                        hex(slice.color_end),
                    ));
                    self.defs.push('\n');
                    format!(r#" fill="url(#{id})""#)
                }
                Brush::Image(_) => r#" fill="none""#.to_string(),
            };
            self.body
                .push_str(&format!(r#"<path d="{}"{fill}/>"#, slice.outline.to_svg()));
            self.body.push('\n');
        }
        if let Some(overlay) = plan.overlay {
            self.body.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                overlay.circle.center.x,
                overlay.circle.center.y,
                overlay.circle.radius,
                paint_attr("fill", overlay.color),
            ));
            self.body.push('\n');
        }
        self.body.push_str("</g>\n");
    }

    fn draw_label(&mut self, label: &PlannedLabel) {
        let placement = &label.placement;
        if let (Some(bounds), Some(icon)) = (placement.icon_bounds, label.icon) {
            let color = label.icon_tint.unwrap_or(label.color);
            let rotation = placement.icon_rotation;
            let c = bounds.center();
            self.body.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" transform="rotate({rotation} {} {})" data-icon="{}"{}/>"#,
                bounds.x0,
                bounds.y0,
                bounds.width(),
                bounds.height(),
                c.x,
                c.y,
                icon.0,
                paint_attr("fill", color),
            ));
            self.body.push('\n');
        }
        if label.text.is_empty() {
            return;
        }
        match &placement.text_path {
            Some(path) => self.draw_text_on_path(label, path),
            None => self.draw_straight_text(label, placement),
        }
    }

    fn draw_straight_text(&mut self, label: &PlannedLabel, placement: &LabelPlacement) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle"{}{}>{}</text>"#,
            placement.text_bounds.center().x,
            placement.anchor.y,
            font_attrs(&label.style),
            paint_attr("fill", label.color),
            escape_xml(&label.text),
        ));
        self.body.push('\n');
    }

    fn draw_text_on_path(&mut self, label: &PlannedLabel, path: &BezPath) {
        let id = self.fresh_id("rim");
        self.defs
            .push_str(&format!(r#"<path id="{id}" d="{}"/>"#, path.to_svg()));
        self.defs.push('\n');
        self.body.push_str(&format!(
            r##"<text{}{}><textPath href="#{id}" startOffset="50%" text-anchor="middle">{}</textPath></text>"##,
            font_attrs(&label.style),
            paint_attr("fill", label.color),
            escape_xml(&label.text),
        ));
        self.body.push('\n');
    }

    fn draw_box(&mut self, placed: &PlacedBox) {
        let r = placed.bounds;
        match &placed.content {
            PlacedContent::Empty | PlacedContent::Pie => {}
            PlacedContent::Container { border, background } => {
                if let Some(bg) = background {
                    self.body.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
                        r.x0,
                        r.y0,
                        r.width(),
                        r.height(),
                        bg.corner_radius,
                        paint_attr("fill", bg.paint()),
                    ));
                    self.body.push('\n');
                }
                if let Some(border) = border {
                    self.draw_border(r, border);
                }
            }
            PlacedContent::Text {
                text,
                style,
                color,
                baseline,
            } => {
                self.body.push_str(&format!(
                    r#"<text x="{}" y="{baseline}"{}{}>{}</text>"#,
                    r.x0,
                    font_attrs(style),
                    paint_attr("fill", *color),
                    escape_xml(text),
                ));
                self.body.push('\n');
            }
            PlacedContent::Icon(IconSource::Symbol { symbol, color }) => {
                self.body.push_str(&format!(
                    r#"<path d="{}"{}/>"#,
                    symbol.path(r).to_svg(),
                    paint_attr("fill", *color),
                ));
                self.body.push('\n');
            }
            PlacedContent::Icon(IconSource::Resource { icon, tint }) => {
                let color = tint.unwrap_or(css::DIM_GRAY);
                self.body.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" data-icon="{}"{}/>"#,
                    r.x0,
                    r.y0,
                    r.width(),
                    r.height(),
                    icon.0,
                    paint_attr("fill", color),
                ));
                self.body.push('\n');
            }
        }
    }

    fn draw_border(&mut self, bounds: Rect, border: &Border) {
        if border.thickness <= 0.0 {
            return;
        }
        // The stroke is centered on the path, so inset by half its width.
        let half = border.thickness / 2.0;
        let inset = bounds.inset(-half);
        let path = inset
            .to_rounded_rect(border.corner_radius)
            .path_elements(ARC_TOLERANCE)
            .collect::<BezPath>();
        self.body.push_str(&format!(
            r#"<path d="{}" fill="none" stroke-width="{}"{}"#,
            path.to_svg(),
            border.thickness,
            paint_attr("stroke", border.paint()),
        ));
        if !border.dash.is_empty() {
            let dash: Vec<String> = border.dash.iter().map(f64::to_string).collect();
            self.body
                .push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
        }
        self.body.push_str("/>\n");
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn paint_attr(name: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut out = format!(r#" {name}="{}""#, hex(color));
    if rgba.a != 255 {
        out.push_str(&format!(r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0));
    }
    out
}

fn font_attrs(style: &TextStyle) -> String {
    let mut out = format!(
        r#" font-size="{}" font-family="{}""#,
        style.font_size,
        escape_xml(style.font_family.as_css_family())
    );
    if style.font_weight.0 != 400 {
        out.push_str(&format!(r#" font-weight="{}""#, style.font_weight.0));
    }
    match style.font_style {
        FontStyle::Normal => {}
        FontStyle::Italic => out.push_str(r#" font-style="italic""#),
        FontStyle::Oblique => out.push_str(r#" font-style="oblique""#),
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use pie_chart::{ChartConfig, Environment, GradientMode, NoIcons, PieChart, Size, SliceSpec};
    use pie_text::HeuristicTextMeasurer;

    use super::SvgDocument;

    #[test]
    fn radial_fills_mirror_like_the_brush() {
        let config = ChartConfig::new(vec![
            SliceSpec::new(0.5)
                .with_color(css::RED)
                .with_color_end(css::BLUE),
            SliceSpec::new(0.5),
        ])
        .with_gradient(GradientMode::Radial);
        let plan = PieChart::new(config).plan(
            Size::new(200.0, 200.0),
            &Environment::default(),
            &HeuristicTextMeasurer,
            &NoIcons,
        );
        let svg = SvgDocument::from_plan(&plan).to_svg_string(plan.view);
        assert_eq!(svg.matches("<radialGradient").count(), 2);
        assert_eq!(svg.matches(r#"spreadMethod="reflect""#).count(), 2);
    }
}
