// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line metrics and line breaking for stacked containers.
//!
//! A horizontal or vertical container arranges its children in one or more
//! lines along its main axis. Lines stack along the cross axis. Margins between
//! neighbors, and between a container's padding and its outermost children,
//! collapse to the larger of the two.

extern crate alloc;

use alloc::vec::Vec;

use crate::boxes::Measured;
use crate::geometry::Size;
use crate::style::Edges;

/// How much a tentative line may overshoot before it is broken.
pub(crate) const WRAP_TOLERANCE: f64 = 0.01;

/// The main axis of a stacked container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub(crate) fn main(self, s: Size) -> f64 {
        match self {
            Self::Horizontal => s.width,
            Self::Vertical => s.height,
        }
    }

    pub(crate) fn cross(self, s: Size) -> f64 {
        match self {
            Self::Horizontal => s.height,
            Self::Vertical => s.width,
        }
    }

    pub(crate) fn main_lead(self, e: &Edges) -> f64 {
        match self {
            Self::Horizontal => e.start,
            Self::Vertical => e.top,
        }
    }

    pub(crate) fn main_trail(self, e: &Edges) -> f64 {
        match self {
            Self::Horizontal => e.end,
            Self::Vertical => e.bottom,
        }
    }

    pub(crate) fn cross_lead(self, e: &Edges) -> f64 {
        match self {
            Self::Horizontal => e.top,
            Self::Vertical => e.start,
        }
    }

    pub(crate) fn cross_trail(self, e: &Edges) -> f64 {
        match self {
            Self::Horizontal => e.bottom,
            Self::Vertical => e.end,
        }
    }

    /// Maps main/cross offsets to start-relative `(x, y)`.
    pub(crate) fn xy(self, main: f64, cross: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }

    pub(crate) fn size(self, main: f64, cross: f64) -> Size {
        let (w, h) = self.xy(main, cross);
        Size::new(w, h)
    }
}

/// A run of consecutive children laid along the main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Line {
    /// First child index.
    pub(crate) start: usize,
    /// One past the last child index.
    pub(crate) end: usize,
    /// Main extent, including edge margins collapsed with the paddings.
    pub(crate) main: f64,
    /// Largest child cross size.
    pub(crate) cross: f64,
    /// Largest cross-leading child margin.
    pub(crate) lead: f64,
    /// Largest cross-trailing child margin.
    pub(crate) trail: f64,
}

/// Main extent of `children` laid in a single line inside `paddings`.
///
/// Neighbors are at least `spacing` apart; the line's outer edges are not.
pub(crate) fn main_extent(
    axis: Axis,
    children: &[Measured],
    paddings: &Edges,
    spacing: f64,
) -> f64 {
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return axis.main_lead(paddings) + axis.main_trail(paddings);
    };
    let sizes: f64 = children.iter().map(|c| axis.main(c.size)).sum();
    let between: f64 = children
        .windows(2)
        .map(|w| neighbor_gap(axis, &w[0], &w[1], spacing))
        .sum();
    axis.main_lead(paddings).max(axis.main_lead(&first.margins))
        + sizes
        + between
        + axis.main_trail(paddings).max(axis.main_trail(&last.margins))
}

/// The main-axis gap between two neighbors on one line.
pub(crate) fn neighbor_gap(axis: Axis, prev: &Measured, next: &Measured, spacing: f64) -> f64 {
    axis.main_trail(&prev.margins)
        .max(axis.main_lead(&next.margins))
        .max(spacing)
}

fn measure_line(
    axis: Axis,
    children: &[Measured],
    start: usize,
    end: usize,
    paddings: &Edges,
    spacing: f64,
) -> Line {
    let run = &children[start..end];
    let mut line = Line {
        start,
        end,
        main: main_extent(axis, run, paddings, spacing),
        cross: 0.0,
        lead: 0.0,
        trail: 0.0,
    };
    for c in run {
        line.cross = line.cross.max(axis.cross(c.size));
        line.lead = line.lead.max(axis.cross_lead(&c.margins));
        line.trail = line.trail.max(axis.cross_trail(&c.margins));
    }
    line
}

/// All children in one line; no lines for no children.
pub(crate) fn single_line(
    axis: Axis,
    children: &[Measured],
    paddings: &Edges,
    spacing: f64,
) -> Vec<Line> {
    if children.is_empty() {
        return Vec::new();
    }
    alloc::vec![measure_line(axis, children, 0, children.len(), paddings, spacing)]
}

/// Breaks `children` into lines no longer than `available_main`.
///
/// Children are added to the current line one at a time. When the tentative
/// line overshoots, the line closes before that child, which starts the next
/// line. A child that alone overshoots still gets its own line.
pub(crate) fn break_lines(
    axis: Axis,
    children: &[Measured],
    paddings: &Edges,
    spacing: f64,
    available_main: f64,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    for i in 1..children.len() {
        let tentative = main_extent(axis, &children[line_start..=i], paddings, spacing);
        if tentative > available_main + WRAP_TOLERANCE {
            lines.push(measure_line(axis, children, line_start, i, paddings, spacing));
            line_start = i;
        }
    }
    if !children.is_empty() {
        let end = children.len();
        lines.push(measure_line(axis, children, line_start, end, paddings, spacing));
    }
    lines
}

/// The gap between two stacked lines.
pub(crate) fn line_gap(prev: &Line, next: &Line, spacing: f64) -> f64 {
    prev.trail.max(next.lead).max(spacing)
}

/// Main and cross extents of stacked `lines`, paddings included.
pub(crate) fn stack_extent(
    axis: Axis,
    lines: &[Line],
    paddings: &Edges,
    spacing: f64,
) -> (f64, f64) {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return (
            axis.main_lead(paddings) + axis.main_trail(paddings),
            axis.cross_lead(paddings) + axis.cross_trail(paddings),
        );
    };
    let main = lines.iter().map(|l| l.main).fold(0.0, f64::max);
    let crosses: f64 = lines.iter().map(|l| l.cross).sum();
    let gaps: f64 = lines
        .windows(2)
        .map(|w| line_gap(&w[0], &w[1], spacing))
        .sum();
    let cross = axis.cross_lead(paddings).max(first.lead)
        + crosses
        + gaps
        + axis.cross_trail(paddings).max(last.trail);
    (main, cross)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::boxes::{BoxId, EmptyBox, LayoutBox};
    use crate::style::Margins;

    fn child(w: f64, h: f64, margin: f64) -> Measured {
        LayoutBox::Empty(EmptyBox {
            id: BoxId(0),
            size: Size::new(w, h),
            margins: Some(Margins::uniform(margin)),
        })
        .measure(Size::new(1e6, 1e6))
    }

    #[test]
    fn neighbor_margins_collapse_instead_of_summing() {
        let children = [child(10.0, 5.0, 4.0), child(20.0, 5.0, 6.0)];
        // 4 + 10 + max(4, 6) + 20 + 6
        assert_eq!(main_extent(Axis::Horizontal, &children, &Edges::ZERO, 0.0), 46.0);
        // Paddings larger than the edge margins win.
        let p = Edges::uniform(8.0);
        assert_eq!(main_extent(Axis::Horizontal, &children, &p, 0.0), 52.0);
    }

    #[test]
    fn breaks_when_tentative_line_overshoots() {
        let children = [
            child(30.0, 10.0, 0.0),
            child(30.0, 12.0, 0.0),
            child(30.0, 10.0, 0.0),
            child(30.0, 10.0, 0.0),
        ];
        let lines = break_lines(Axis::Horizontal, &children, &Edges::ZERO, 0.0, 70.0);
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].start, lines[0].end), (0, 2));
        assert_eq!((lines[1].start, lines[1].end), (2, 4));
        assert_eq!(lines[0].cross, 12.0);
        let (main, cross) = stack_extent(Axis::Horizontal, &lines, &Edges::ZERO, 3.0);
        assert_eq!(main, 60.0);
        assert_eq!(cross, 12.0 + 3.0 + 10.0);
    }

    #[test]
    fn item_spacing_only_separates_neighbors() {
        let children = [
            child(30.0, 10.0, 0.0),
            child(30.0, 10.0, 0.0),
            child(30.0, 10.0, 2.0),
        ];
        // 30 + 10 + 30 fits exactly; a trailing gap would not.
        let lines = break_lines(Axis::Horizontal, &children, &Edges::ZERO, 10.0, 70.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].main, 70.0);
        // Spacing collapses with larger margins.
        assert_eq!(main_extent(Axis::Horizontal, &children[1..], &Edges::ZERO, 1.0), 64.0);
    }

    #[test]
    fn tolerance_keeps_near_fits_on_one_line() {
        let children = [child(35.0, 10.0, 0.0), child(35.005, 10.0, 0.0)];
        let lines = break_lines(Axis::Horizontal, &children, &Edges::ZERO, 0.0, 70.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn oversized_child_gets_its_own_line() {
        let children = [child(100.0, 10.0, 0.0), child(10.0, 10.0, 0.0)];
        let lines = break_lines(Axis::Vertical, &children, &Edges::ZERO, 0.0, 50.0);
        assert_eq!(lines.len(), 1);
        let lines = break_lines(Axis::Horizontal, &children, &Edges::ZERO, 0.0, 50.0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn no_children_means_no_lines() {
        assert!(break_lines(Axis::Horizontal, &[], &Edges::ZERO, 0.0, 10.0).is_empty());
        let (main, cross) = stack_extent(Axis::Vertical, &[], &Edges::symmetric(2.0, 3.0), 5.0);
        assert_eq!((main, cross), (4.0, 6.0));
    }
}
