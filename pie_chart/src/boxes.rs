// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout box tree.
//!
//! A chart and its legend are described as a tree of [`LayoutBox`]es: leaves
//! (text, icons, the pie itself, empty placeholders) and [`Container`]s that
//! own their children. Layout is two explicit passes:
//!
//! - **Measure**: [`LayoutBox::measure`] computes every box's size once for a
//!   given available space and stores it in a [`Measured`] tree.
//! - **Arrange**: [`Measured::arrange`] turns that tree into absolute
//!   [`PlacedBox`]es for a top/start origin and a [`TextDirection`].
//!
//! Trees are rebuilt whenever an input changes; nothing is cached between
//! passes, so arranging the same tree twice gives identical output.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use pie_text::{TextDirection, TextMeasurer, TextMetrics, TextStyle};

use crate::container::{Container, MeasuredContainer};
use crate::geometry::Size;
use crate::icon::IconId;
use crate::style::{Background, Border, Margins};
use crate::symbol::Symbol;

/// Stable identity of a box, echoed in its [`PlacedBox`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub u64);

impl BoxId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns `self + offset`, for deriving ids of generated children.
    pub const fn offset(self, offset: u64) -> Self {
        Self(self.0.wrapping_add(offset))
    }
}

/// A fixed-size placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyBox {
    /// Box id.
    pub id: BoxId,
    /// Size of the placeholder.
    pub size: Size,
    /// Optional margins.
    pub margins: Option<Margins>,
}

/// A single line of text, measured when constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    /// Box id.
    pub id: BoxId,
    /// The text.
    pub text: String,
    /// Style used for measurement and drawing.
    pub style: TextStyle,
    /// Fill color.
    pub color: Color,
    /// Metrics for `text` in `style`.
    pub metrics: TextMetrics,
    /// Optional margins.
    pub margins: Option<Margins>,
}

impl TextBox {
    /// Creates a text box, measuring `text` with `measurer`.
    pub fn new(
        id: BoxId,
        text: impl Into<String>,
        style: TextStyle,
        color: Color,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let text = text.into();
        let metrics = measurer.measure(&text, &style);
        Self {
            id,
            text,
            style,
            color,
            metrics,
            margins: None,
        }
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// The measured size of the text.
    pub fn size(&self) -> Size {
        if self.metrics.is_empty() {
            return Size::ZERO;
        }
        Size::new(self.metrics.advance_width, self.metrics.line_height())
    }
}

/// What an [`IconBox`] shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSource {
    /// A host-provided icon, optionally tinted.
    Resource {
        /// The icon id.
        icon: IconId,
        /// Optional tint.
        tint: Option<Color>,
    },
    /// A built-in shape.
    Symbol {
        /// The shape.
        symbol: Symbol,
        /// Fill color.
        color: Color,
    },
}

/// An icon with a resolved size.
#[derive(Clone, Debug, PartialEq)]
pub struct IconBox {
    /// Box id.
    pub id: BoxId,
    /// The icon.
    pub source: IconSource,
    /// Resolved size (see [`crate::icon::resolve_icon_size`]).
    pub size: Size,
    /// Optional margins.
    pub margins: Option<Margins>,
}

/// The pie itself, as a box of a given size.
#[derive(Clone, Debug, PartialEq)]
pub struct PieBox {
    /// Box id.
    pub id: BoxId,
    /// Size of the pie region.
    pub size: Size,
    /// Optional margins.
    pub margins: Option<Margins>,
}

/// A node in the layout tree.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutBox {
    /// Placeholder.
    Empty(EmptyBox),
    /// Text.
    Text(TextBox),
    /// Icon.
    Icon(IconBox),
    /// The pie region.
    Pie(PieBox),
    /// A composite.
    Container(Container),
}

impl LayoutBox {
    /// The box id.
    pub fn id(&self) -> BoxId {
        match self {
            Self::Empty(b) => b.id,
            Self::Text(b) => b.id,
            Self::Icon(b) => b.id,
            Self::Pie(b) => b.id,
            Self::Container(c) => c.id,
        }
    }

    /// Margins, with unset margins resolved to zero.
    pub fn margins(&self) -> Margins {
        let m = match self {
            Self::Empty(b) => b.margins,
            Self::Text(b) => b.margins,
            Self::Icon(b) => b.margins,
            Self::Pie(b) => b.margins,
            Self::Container(c) => c.margins,
        };
        m.unwrap_or(Margins::ZERO)
    }

    /// Measures this box (and its subtree) against `available`.
    ///
    /// The result never exceeds `available`.
    pub fn measure(&self, available: Size) -> Measured {
        let available = available.non_negative();
        let leaf = |size: Size, content: LeafContent| Measured {
            id: self.id(),
            size: size.clamp_to(available),
            margins: self.margins(),
            content: MeasuredContent::Leaf(content),
        };
        match self {
            Self::Empty(b) => leaf(b.size, LeafContent::Empty),
            Self::Text(b) => leaf(
                b.size(),
                LeafContent::Text {
                    text: b.text.clone(),
                    style: b.style.clone(),
                    color: b.color,
                    ascent: b.metrics.ascent,
                },
            ),
            Self::Icon(b) => leaf(b.size, LeafContent::Icon(b.source)),
            Self::Pie(b) => leaf(b.size, LeafContent::Pie),
            Self::Container(c) => {
                let (size, container) = c.measure(available);
                Measured {
                    id: c.id,
                    size,
                    margins: self.margins(),
                    content: MeasuredContent::Container(container),
                }
            }
        }
    }

    /// Measures and arranges in one call.
    ///
    /// The box's own margins offset it from (`top`, `start`) and shrink `available`.
    pub fn layout(
        &self,
        available: Size,
        top: f64,
        start: f64,
        direction: TextDirection,
    ) -> Vec<PlacedBox> {
        let m = self.margins();
        let measured = self.measure(available.shrink(m.horizontal(), m.vertical()));
        measured.arrange(top + m.top, start + direction.sign() * m.start, direction)
    }
}

impl From<Container> for LayoutBox {
    fn from(c: Container) -> Self {
        Self::Container(c)
    }
}

impl From<TextBox> for LayoutBox {
    fn from(b: TextBox) -> Self {
        Self::Text(b)
    }
}

impl From<IconBox> for LayoutBox {
    fn from(b: IconBox) -> Self {
        Self::Icon(b)
    }
}

impl From<PieBox> for LayoutBox {
    fn from(b: PieBox) -> Self {
        Self::Pie(b)
    }
}

impl From<EmptyBox> for LayoutBox {
    fn from(b: EmptyBox) -> Self {
        Self::Empty(b)
    }
}

/// A box with its size resolved by the measure pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Measured {
    /// Box id.
    pub id: BoxId,
    /// Border-box size (margins excluded).
    pub size: Size,
    /// Resolved margins.
    pub margins: Margins,
    pub(crate) content: MeasuredContent,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MeasuredContent {
    Leaf(LeafContent),
    Container(MeasuredContainer),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LeafContent {
    Empty,
    Text {
        text: String,
        style: TextStyle,
        color: Color,
        ascent: f64,
    },
    Icon(IconSource),
    Pie,
}

impl Measured {
    /// Places this box with its start edge at `start` and its top at `top`.
    ///
    /// For RTL, `start` is the right edge and children progress leftward.
    pub fn arrange(&self, top: f64, start: f64, direction: TextDirection) -> Vec<PlacedBox> {
        let mut out = Vec::new();
        self.arrange_into(top, start, self.size, direction, &mut out);
        out
    }

    /// Places this box at `size`, which a parent may have clamped below the measured size.
    pub(crate) fn arrange_into(
        &self,
        top: f64,
        start: f64,
        size: Size,
        direction: TextDirection,
        out: &mut Vec<PlacedBox>,
    ) {
        let bounds = start_rect(top, start, size, direction);
        match &self.content {
            MeasuredContent::Leaf(leaf) => {
                let content = match leaf {
                    LeafContent::Empty => PlacedContent::Empty,
                    LeafContent::Text {
                        text,
                        style,
                        color,
                        ascent,
                    } => PlacedContent::Text {
                        text: text.clone(),
                        style: style.clone(),
                        color: *color,
                        baseline: top + ascent,
                    },
                    LeafContent::Icon(source) => PlacedContent::Icon(*source),
                    LeafContent::Pie => PlacedContent::Pie,
                };
                out.push(PlacedBox {
                    id: self.id,
                    bounds,
                    content,
                });
            }
            MeasuredContent::Container(c) => {
                out.push(PlacedBox {
                    id: self.id,
                    bounds,
                    content: PlacedContent::Container {
                        border: c.border.clone(),
                        background: c.background,
                    },
                });
                c.arrange_children(top, start, size, direction, out);
            }
        }
    }
}

/// The rectangle of a box whose start edge is at `start`.
fn start_rect(top: f64, start: f64, size: Size, direction: TextDirection) -> Rect {
    match direction {
        TextDirection::Ltr => Rect::new(start, top, start + size.width, top + size.height),
        TextDirection::Rtl => Rect::new(start - size.width, top, start, top + size.height),
    }
}

/// A box with its final position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBox {
    /// Box id.
    pub id: BoxId,
    /// Absolute border-box bounds.
    pub bounds: Rect,
    /// What to draw there.
    pub content: PlacedContent,
}

/// Drawing payload of a [`PlacedBox`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlacedContent {
    /// Nothing to draw.
    Empty,
    /// A line of text.
    Text {
        /// The text.
        text: String,
        /// Text style.
        style: TextStyle,
        /// Fill color.
        color: Color,
        /// Baseline `y`.
        baseline: f64,
    },
    /// An icon filling the bounds.
    Icon(IconSource),
    /// The pie region.
    Pie,
    /// A container's decoration, drawn before its children.
    Container {
        /// Optional border.
        border: Option<Border>,
        /// Optional background.
        background: Option<Background>,
    },
}

/// Finds the first placed box with `id`.
pub fn find_placed(placed: &[PlacedBox], id: BoxId) -> Option<&PlacedBox> {
    placed.iter().find(|p| p.id == id)
}
