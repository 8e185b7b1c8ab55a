// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level measure/arrange.
//!
//! The chart region is split between the pie and an optional legend by
//! building a root [`Container`]:
//! - **Measure**: the legend is measured first; the pie takes what is left.
//! - **Arrange**: the root is arranged from the region's start edge, so `Start`
//!   and `End` legends follow the text direction while `Left` and `Right` stay put.
//!
//! A center label is layered over the pie, as is a `Center` legend.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use pie_text::TextDirection;

use crate::boxes::{BoxId, LayoutBox, PieBox, PlacedBox, TextBox, find_placed};
use crate::container::{Alignment, Arrangement, Container, Wrapping};
use crate::geometry::Size;
use crate::legend::LegendPosition;
use crate::style::Margins;

/// Id of the root container.
pub const ROOT_ID: BoxId = BoxId(1);
/// Id of the pie box.
pub const PIE_ID: BoxId = BoxId(2);
/// Id of the container layering the center label over the pie.
pub const CENTER_ID: BoxId = BoxId(3);
/// Id the center label's text box should carry.
pub const CENTER_LABEL_ID: BoxId = BoxId(4);
/// Smallest id available to caller-built boxes; smaller ids are reserved.
pub const FIRST_FREE_ID: u64 = 16;

/// Layout inputs for a single chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayoutSpec {
    /// The region shared by pie and legend (chart padding already applied).
    pub region: Rect,
    /// Text direction.
    pub direction: TextDirection,
    /// Optional legend box tree and its position.
    pub legend: Option<(Container, LegendPosition)>,
    /// Optional label layered over the pie center.
    pub center_label: Option<TextBox>,
}

/// Output of the arrange pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    /// The rectangle given to the pie.
    pub pie: Rect,
    /// Legend border box, if any.
    pub legend: Option<Rect>,
    /// Whether the legend needed more room than it got.
    pub legend_clipped: bool,
    /// The center label, if any.
    pub center_label: Option<PlacedBox>,
    /// Every placed box, parents before children.
    pub placed: Vec<PlacedBox>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let region = spec.region.abs();
        let avail = Size::new(region.width(), region.height());
        let start = match spec.direction {
            TextDirection::Ltr => region.x0,
            TextDirection::Rtl => region.x1,
        };

        let mut legend_outer = Size::ZERO;
        let mut legend_clipped = false;
        if let Some((legend, _)) = &spec.legend {
            let m = legend.margins.unwrap_or(Margins::ZERO);
            let inner = avail.shrink(m.horizontal(), m.vertical());
            let legend = LayoutBox::Container(legend.clone());
            let measured = legend.measure(inner);
            let natural_width = match &legend {
                LayoutBox::Container(c) if wraps(c) => inner.width,
                _ => f64::INFINITY,
            };
            let natural = legend.measure(Size::new(natural_width, f64::INFINITY));
            legend_clipped = natural.size.exceeds(measured.size, 0.01);
            legend_outer = Size::new(
                measured.size.width + m.horizontal(),
                measured.size.height + m.vertical(),
            );
        }

        let position = spec.legend.as_ref().map(|(_, p)| *p);
        let pie_size = match position {
            Some(LegendPosition::Top | LegendPosition::Bottom) => {
                avail.shrink(0.0, legend_outer.height)
            }
            Some(
                LegendPosition::Left
                | LegendPosition::Right
                | LegendPosition::Start
                | LegendPosition::End,
            ) => avail.shrink(legend_outer.width, 0.0),
            Some(LegendPosition::Center) | None => avail,
        };
        let pie = PieBox {
            id: PIE_ID,
            size: pie_size,
            margins: None,
        };
        let slot: LayoutBox = match &spec.center_label {
            Some(label) => Container::new(CENTER_ID, Arrangement::Layered)
                .with_alignment(Alignment::Center)
                .with_child(pie)
                .with_child(label.clone())
                .into(),
            None => pie.into(),
        };

        let root: LayoutBox = match &spec.legend {
            None => slot,
            Some((legend, position)) => {
                let legend_first = match position {
                    LegendPosition::Top | LegendPosition::Start => true,
                    LegendPosition::Bottom | LegendPosition::End | LegendPosition::Center => false,
                    LegendPosition::Left => !spec.direction.is_rtl(),
                    LegendPosition::Right => spec.direction.is_rtl(),
                };
                let arrangement = match position {
                    LegendPosition::Top | LegendPosition::Bottom => Arrangement::Vertical,
                    LegendPosition::Center => Arrangement::Layered,
                    _ => Arrangement::Horizontal,
                };
                let root = Container::new(ROOT_ID, arrangement).with_alignment(Alignment::Center);
                let root = if legend_first {
                    root.with_child(legend.clone()).with_child(slot)
                } else {
                    root.with_child(slot).with_child(legend.clone())
                };
                root.into()
            }
        };

        let placed = root.measure(avail).arrange(region.y0, start, spec.direction);
        let pie = find_placed(&placed, PIE_ID).map_or(Rect::ZERO, |p| p.bounds);
        let legend = spec
            .legend
            .as_ref()
            .and_then(|(l, _)| find_placed(&placed, l.id))
            .map(|p| p.bounds);
        let center_label = spec
            .center_label
            .as_ref()
            .and_then(|l| find_placed(&placed, l.id))
            .cloned();
        Self {
            pie,
            legend,
            legend_clipped,
            center_label,
            placed,
        }
    }
}

fn wraps(c: &Container) -> bool {
    c.wrapping == Wrapping::Wrap
        || c.children.iter().any(|child| match child {
            LayoutBox::Container(inner) => wraps(inner),
            _ => false,
        })
}
