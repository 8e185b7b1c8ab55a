// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite boxes.
//!
//! A [`Container`] lays its children out in one of three arrangements:
//!
//! - [`Arrangement::Horizontal`]: left to right (start to end), in lines that
//!   stack downward when wrapping is enabled.
//! - [`Arrangement::Vertical`]: top to bottom, in columns that stack toward the
//!   end edge when wrapping is enabled.
//! - [`Arrangement::Layered`]: all children share the same area and are aligned
//!   on both axes.
//!
//! The border inflates the container on every edge. Paddings and child margins
//! collapse to the larger value rather than adding up.

extern crate alloc;

use alloc::vec::Vec;

use pie_text::TextDirection;

use crate::boxes::{BoxId, LayoutBox, Measured, PlacedBox};
use crate::geometry::{Size, non_negative};
use crate::style::{Background, Border, Margins, Paddings};
use crate::wrap::{self, Axis, Line};

/// How a container places its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    /// Children follow each other along the text direction.
    #[default]
    Horizontal,
    /// Children follow each other downward.
    Vertical,
    /// Children overlap.
    Layered,
}

/// Cross-axis alignment of children within a line.
///
/// For [`Arrangement::Layered`] containers it applies to both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Align to the top (or start) of the line.
    #[default]
    Start,
    /// Center within the line.
    Center,
    /// Align to the bottom (or end) of the line.
    End,
}

/// Whether children that overflow the main axis start a new line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Wrapping {
    /// Keep every child on one line; overflow is clipped by the parent.
    #[default]
    Clip,
    /// Break into lines that fit the available main extent.
    Wrap,
}

/// A box that owns and arranges child boxes.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    /// Box id.
    pub id: BoxId,
    /// Children in layout order.
    pub children: Vec<LayoutBox>,
    /// How children are placed.
    pub arrangement: Arrangement,
    /// Cross-axis alignment.
    pub alignment: Alignment,
    /// Line breaking.
    pub wrapping: Wrapping,
    /// Minimum distance between wrapped lines.
    pub line_spacing: f64,
    /// Minimum distance between neighbors on one line.
    pub item_spacing: f64,
    /// Optional margins.
    pub margins: Option<Margins>,
    /// Optional paddings.
    pub paddings: Option<Paddings>,
    /// Optional border.
    pub border: Option<Border>,
    /// Optional background.
    pub background: Option<Background>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(id: BoxId, arrangement: Arrangement) -> Self {
        Self {
            id,
            children: Vec::new(),
            arrangement,
            alignment: Alignment::Start,
            wrapping: Wrapping::Clip,
            line_spacing: 0.0,
            item_spacing: 0.0,
            margins: None,
            paddings: None,
            border: None,
            background: None,
        }
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<LayoutBox>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Container::push`].
    pub fn with_child(mut self, child: impl Into<LayoutBox>) -> Self {
        self.push(child);
        self
    }

    /// Sets the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Enables wrapping with at least `line_spacing` between lines.
    pub fn with_wrapping(mut self, line_spacing: f64) -> Self {
        self.wrapping = Wrapping::Wrap;
        self.line_spacing = line_spacing.max(0.0);
        self
    }

    /// Keeps neighbors on a line at least `spacing` apart.
    ///
    /// Unlike a child margin, the spacing never applies at the ends of a line.
    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = non_negative(spacing);
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Sets the paddings.
    pub fn with_paddings(mut self, paddings: Paddings) -> Self {
        self.paddings = Some(paddings);
        self
    }

    /// Sets the border.
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the background.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    fn border_width(&self) -> f64 {
        self.border.as_ref().map_or(0.0, |b| b.thickness.max(0.0))
    }

    /// Measures the container against `available`, which is already non-negative.
    pub(crate) fn measure(&self, available: Size) -> (Size, MeasuredContainer) {
        let bw = self.border_width();
        let paddings = self.paddings.unwrap_or(Paddings::ZERO);

        let children: Vec<Measured> = self
            .children
            .iter()
            .map(|child| {
                let edges = paddings.collapse(&child.margins());
                child.measure(available.shrink(
                    2.0 * bw + edges.horizontal(),
                    2.0 * bw + edges.vertical(),
                ))
            })
            .collect();

        let (content, lines) = match self.arrangement {
            Arrangement::Layered => {
                let mut content = Size::ZERO;
                for c in &children {
                    let edges = paddings.collapse(&c.margins);
                    content.width = content.width.max(edges.horizontal() + c.size.width);
                    content.height = content.height.max(edges.vertical() + c.size.height);
                }
                if children.is_empty() {
                    content = Size::new(paddings.horizontal(), paddings.vertical());
                }
                (content, Vec::new())
            }
            Arrangement::Horizontal | Arrangement::Vertical => {
                let axis = main_axis(self.arrangement);
                let lines = match self.wrapping {
                    Wrapping::Clip => {
                        wrap::single_line(axis, &children, &paddings, self.item_spacing)
                    }
                    Wrapping::Wrap => wrap::break_lines(
                        axis,
                        &children,
                        &paddings,
                        self.item_spacing,
                        axis.main(available) - 2.0 * bw,
                    ),
                };
                let (main, cross) = wrap::stack_extent(axis, &lines, &paddings, self.line_spacing);
                (axis.size(main, cross), lines)
            }
        };

        let size =
            Size::new(content.width + 2.0 * bw, content.height + 2.0 * bw).clamp_to(available);
        (
            size,
            MeasuredContainer {
                arrangement: self.arrangement,
                alignment: self.alignment,
                paddings,
                border_width: bw,
                border: self.border.clone(),
                background: self.background,
                line_spacing: self.line_spacing,
                item_spacing: self.item_spacing,
                children,
                lines,
            },
        )
    }
}

fn main_axis(arrangement: Arrangement) -> Axis {
    match arrangement {
        Arrangement::Vertical => Axis::Vertical,
        Arrangement::Horizontal | Arrangement::Layered => Axis::Horizontal,
    }
}

/// A container with measured children and resolved lines.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MeasuredContainer {
    arrangement: Arrangement,
    alignment: Alignment,
    paddings: Paddings,
    border_width: f64,
    pub(crate) border: Option<Border>,
    pub(crate) background: Option<Background>,
    line_spacing: f64,
    item_spacing: f64,
    children: Vec<Measured>,
    lines: Vec<Line>,
}

/// Offset of a box of `extent` in `avail`, leaving `lead` and `trail` clear.
fn align_offset(alignment: Alignment, lead: f64, trail: f64, avail: f64, extent: f64) -> f64 {
    match alignment {
        Alignment::Start => lead,
        Alignment::Center => lead + 0.5 * (avail - lead - trail - extent),
        Alignment::End => avail - trail - extent,
    }
}

impl MeasuredContainer {
    /// Places the children of a container whose border box starts at (`top`, `start`).
    pub(crate) fn arrange_children(
        &self,
        top: f64,
        start: f64,
        size: Size,
        direction: TextDirection,
        out: &mut Vec<PlacedBox>,
    ) {
        let bw = self.border_width;
        let sign = direction.sign();
        let inner = size.shrink(2.0 * bw, 2.0 * bw);
        // Children never extend past the inner edges, even when the container was clamped.
        let mut place = |child: &Measured, x: f64, y: f64| {
            let x = non_negative(x).min(inner.width);
            let y = non_negative(y).min(inner.height);
            let size = child
                .size
                .clamp_to(Size::new(inner.width - x, inner.height - y));
            child.arrange_into(top + bw + y, start + sign * (bw + x), size, direction, out);
        };

        if self.arrangement == Arrangement::Layered {
            for child in &self.children {
                let edges = self.paddings.collapse(&child.margins);
                let x = align_offset(
                    self.alignment,
                    edges.start,
                    edges.end,
                    inner.width,
                    child.size.width,
                );
                let y = align_offset(
                    self.alignment,
                    edges.top,
                    edges.bottom,
                    inner.height,
                    child.size.height,
                );
                place(child, x, y);
            }
            return;
        }

        let axis = main_axis(self.arrangement);
        let Some(first_line) = self.lines.first() else {
            return;
        };
        let mut cross = axis.cross_lead(&self.paddings).max(first_line.lead);
        for (k, line) in self.lines.iter().enumerate() {
            let run = &self.children[line.start..line.end];
            let mut main = run.first().map_or(0.0, |c| {
                axis.main_lead(&self.paddings).max(axis.main_lead(&c.margins))
            });
            for (i, child) in run.iter().enumerate() {
                let slack = line.cross - axis.cross(child.size);
                let offset = match self.alignment {
                    Alignment::Start => 0.0,
                    Alignment::Center => 0.5 * slack,
                    Alignment::End => slack,
                };
                let (x, y) = axis.xy(main, cross + offset);
                place(child, x, y);
                main += axis.main(child.size);
                if let Some(next) = run.get(i + 1) {
                    main += wrap::neighbor_gap(axis, child, next, self.item_spacing);
                }
            }
            cross += line.cross;
            if let Some(next) = self.lines.get(k + 1) {
                cross += wrap::line_gap(line, next, self.line_spacing);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;
    use crate::boxes::{EmptyBox, PlacedContent, find_placed};

    fn leaf(id: u64, w: f64, h: f64, margin: f64) -> EmptyBox {
        EmptyBox {
            id: BoxId(id),
            size: Size::new(w, h),
            margins: (margin > 0.0).then(|| Margins::uniform(margin)),
        }
    }

    fn bounds(placed: &[PlacedBox], id: u64) -> Rect {
        find_placed(placed, BoxId(id)).map(|p| p.bounds).unwrap()
    }

    #[test]
    fn single_child_margins_surround_it() {
        let c =
            Container::new(BoxId(0), Arrangement::Horizontal).with_child(leaf(1, 34.0, 29.0, 9.0));
        let m = LayoutBox::from(c).measure(Size::new(100.0, 84.0));
        assert_eq!(m.size, Size::new(52.0, 47.0));
        let placed = m.arrange(0.0, 0.0, TextDirection::Ltr);
        assert_eq!(bounds(&placed, 0), Rect::new(0.0, 0.0, 52.0, 47.0));
        assert_eq!(bounds(&placed, 1), Rect::new(9.0, 9.0, 43.0, 38.0));
    }

    #[test]
    fn sibling_margins_collapse() {
        let c = Container::new(BoxId(0), Arrangement::Vertical)
            .with_child(leaf(1, 10.0, 10.0, 4.0))
            .with_child(leaf(2, 10.0, 10.0, 6.0));
        let m = LayoutBox::from(c).measure(Size::new(500.0, 500.0));
        assert_eq!(m.size, Size::new(22.0, 36.0));
        let placed = m.arrange(0.0, 0.0, TextDirection::Ltr);
        assert_eq!(bounds(&placed, 2).y0, 4.0 + 10.0 + 6.0);
    }

    #[test]
    fn border_and_padding_inflate_the_container() {
        let c = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_paddings(Paddings::uniform(5.0))
            .with_border(Border::solid(2.0, css::BLACK))
            .with_child(leaf(1, 10.0, 10.0, 3.0));
        let m = LayoutBox::from(c).measure(Size::new(500.0, 500.0));
        assert_eq!(m.size, Size::new(24.0, 24.0));
        let placed = m.arrange(10.0, 10.0, TextDirection::Ltr);
        assert!(matches!(
            placed[0].content,
            PlacedContent::Container { border: Some(_), .. }
        ));
        assert_eq!(bounds(&placed, 1), Rect::new(17.0, 17.0, 27.0, 27.0));
    }

    #[test]
    fn cross_alignment_within_a_line() {
        for (alignment, y) in [
            (Alignment::Start, 0.0),
            (Alignment::Center, 5.0),
            (Alignment::End, 10.0),
        ] {
            let c = Container::new(BoxId(0), Arrangement::Horizontal)
                .with_alignment(alignment)
                .with_child(leaf(1, 10.0, 20.0, 0.0))
                .with_child(leaf(2, 10.0, 10.0, 0.0));
            let placed =
                LayoutBox::from(c).layout(Size::new(100.0, 100.0), 0.0, 0.0, TextDirection::Ltr);
            assert_eq!(bounds(&placed, 2), Rect::new(10.0, y, 20.0, y + 10.0));
        }
    }

    #[test]
    fn layered_children_align_on_both_axes() {
        let c = Container::new(BoxId(0), Arrangement::Layered)
            .with_alignment(Alignment::Center)
            .with_child(leaf(1, 40.0, 40.0, 0.0))
            .with_child(leaf(2, 10.0, 20.0, 0.0));
        let m = LayoutBox::from(c).measure(Size::new(100.0, 100.0));
        assert_eq!(m.size, Size::new(40.0, 40.0));
        let placed = m.arrange(0.0, 0.0, TextDirection::Ltr);
        assert_eq!(bounds(&placed, 2), Rect::new(15.0, 10.0, 25.0, 30.0));
    }

    #[test]
    fn rtl_mirrors_the_main_axis() {
        let c = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_child(leaf(1, 10.0, 10.0, 0.0))
            .with_child(leaf(2, 20.0, 10.0, 0.0));
        let placed =
            LayoutBox::from(c).layout(Size::new(100.0, 100.0), 0.0, 100.0, TextDirection::Rtl);
        assert_eq!(bounds(&placed, 0), Rect::new(70.0, 0.0, 100.0, 10.0));
        assert_eq!(bounds(&placed, 1), Rect::new(90.0, 0.0, 100.0, 10.0));
        assert_eq!(bounds(&placed, 2), Rect::new(70.0, 0.0, 90.0, 10.0));
    }

    #[test]
    fn wrapping_stacks_lines_with_spacing() {
        let mut c = Container::new(BoxId(0), Arrangement::Horizontal).with_wrapping(4.0);
        for id in 1..=5 {
            c.push(leaf(id, 20.0, 10.0, 0.0));
        }
        let m = LayoutBox::from(c).measure(Size::new(50.0, 100.0));
        assert_eq!(m.size, Size::new(40.0, 10.0 + 4.0 + 10.0 + 4.0 + 10.0));
        let placed = m.arrange(0.0, 0.0, TextDirection::Ltr);
        assert_eq!(bounds(&placed, 3), Rect::new(0.0, 14.0, 20.0, 24.0));
        assert_eq!(bounds(&placed, 5), Rect::new(0.0, 28.0, 20.0, 38.0));
    }

    #[test]
    fn empty_container_is_just_its_padding() {
        let c = Container::new(BoxId(0), Arrangement::Vertical)
            .with_paddings(Paddings::symmetric(3.0, 2.0));
        let m = LayoutBox::from(c).measure(Size::new(100.0, 100.0));
        assert_eq!(m.size, Size::new(4.0, 6.0));
        assert_eq!(m.arrange(0.0, 0.0, TextDirection::Ltr).len(), 1);
    }

    #[test]
    fn oversized_content_is_clamped() {
        let c = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_child(leaf(1, 80.0, 10.0, 0.0))
            .with_child(leaf(2, 80.0, 10.0, 0.0));
        let m = LayoutBox::from(c).measure(Size::new(100.0, 5.0));
        assert_eq!(m.size, Size::new(100.0, 5.0));
    }

    #[test]
    fn children_stay_inside_a_clamped_container() {
        let c = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_child(leaf(1, 80.0, 10.0, 0.0))
            .with_child(leaf(2, 80.0, 10.0, 0.0))
            .with_child(leaf(3, 80.0, 10.0, 0.0));
        let placed =
            LayoutBox::from(c).layout(Size::new(100.0, 5.0), 0.0, 0.0, TextDirection::Ltr);
        let outer = bounds(&placed, 0);
        assert_eq!(outer, Rect::new(0.0, 0.0, 100.0, 5.0));
        assert_eq!(bounds(&placed, 1), Rect::new(0.0, 0.0, 80.0, 5.0));
        assert_eq!(bounds(&placed, 2), Rect::new(80.0, 0.0, 100.0, 5.0));
        assert_eq!(bounds(&placed, 3), Rect::new(100.0, 0.0, 100.0, 5.0));
        for id in 1..=3 {
            assert_eq!(outer.union(bounds(&placed, id)), outer, "child {id} overflows");
        }

        let rtl = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_paddings(Paddings::uniform(4.0))
            .with_child(leaf(1, 80.0, 10.0, 0.0))
            .with_child(leaf(2, 80.0, 10.0, 0.0));
        let placed =
            LayoutBox::from(rtl).layout(Size::new(100.0, 50.0), 0.0, 100.0, TextDirection::Rtl);
        assert_eq!(bounds(&placed, 2), Rect::new(0.0, 4.0, 16.0, 14.0));
    }

    #[test]
    fn layered_children_are_clamped_to_the_container() {
        let c = Container::new(BoxId(0), Arrangement::Layered)
            .with_alignment(Alignment::Center)
            .with_child(leaf(1, 200.0, 20.0, 0.0));
        let placed =
            LayoutBox::from(c).layout(Size::new(50.0, 50.0), 0.0, 0.0, TextDirection::Ltr);
        assert_eq!(bounds(&placed, 0), Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(bounds(&placed, 1), Rect::new(0.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn arranging_twice_is_identical() {
        let c = Container::new(BoxId(0), Arrangement::Horizontal)
            .with_wrapping(2.0)
            .with_alignment(Alignment::End)
            .with_child(leaf(1, 30.0, 12.0, 1.0))
            .with_child(leaf(2, 30.0, 8.0, 2.0))
            .with_child(leaf(3, 30.0, 10.0, 0.0));
        let m = LayoutBox::from(c).measure(Size::new(70.0, 70.0));
        assert_eq!(
            m.arrange(3.0, 60.0, TextDirection::Rtl),
            m.arrange(3.0, 60.0, TextDirection::Rtl)
        );
    }
}
