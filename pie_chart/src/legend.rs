// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend box construction.
//!
//! A legend is an ordinary [`Container`] tree: an optional title above a
//! container of items, each item an indicator (icon or symbol swatch) next to
//! its label. It is measured and arranged like any other box.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use pie_text::{FontWeight, TextMeasurer, TextStyle};

use crate::boxes::{BoxId, IconBox, IconSource, TextBox};
use crate::container::{Alignment, Arrangement, Container, Wrapping};
use crate::dimension::{Density, Dimension};
use crate::geometry::{Size, non_negative};
use crate::icon::{IconId, IconProvider, resolve_icon_size};
use crate::layout::FIRST_FREE_ID;
use crate::style::{Background, Border, Edges, Margins};
use crate::symbol::Symbol;

/// Where the legend sits relative to the pie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendPosition {
    /// Above the pie.
    Top,
    /// Below the pie.
    #[default]
    Bottom,
    /// Left of the pie, whatever the text direction.
    Left,
    /// Right of the pie, whatever the text direction.
    Right,
    /// Before the pie in reading order.
    Start,
    /// After the pie in reading order.
    End,
    /// Layered over the pie.
    Center,
}

/// What a legend item shows before its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendIndicator {
    /// A built-in shape in the item color.
    Symbol(Symbol),
    /// A host icon.
    Icon(IconId),
}

impl Default for LegendIndicator {
    fn default() -> Self {
        Self::Symbol(Symbol::default())
    }
}

/// One legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Label text.
    pub label: String,
    /// Item color, used for symbol swatches.
    pub color: Color,
    /// Indicator override; `None` uses the legend's default indicator.
    pub indicator: Option<LegendIndicator>,
}

impl LegendItem {
    /// An item with the legend's default indicator.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            indicator: None,
        }
    }

    /// Sets the indicator.
    pub fn with_indicator(mut self, indicator: LegendIndicator) -> Self {
        self.indicator = Some(indicator);
        self
    }
}

/// An unpositioned legend specification.
///
/// Use [`LegendSpec::build`] to turn it into a box tree for a given list of
/// items; the chart layout then measures and arranges that tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec {
    /// Stable-id base; generated boxes use deterministic offsets from it.
    ///
    /// Ids below [`FIRST_FREE_ID`] belong to the chart layout, so smaller
    /// bases are raised to it.
    pub id_base: u64,
    /// Optional title above the items.
    pub title: Option<String>,
    /// Title font size.
    pub title_size: Dimension,
    /// Item label font size.
    pub font_size: Dimension,
    /// Text color for title and labels.
    pub text_color: Color,
    /// How items follow each other.
    pub arrangement: Arrangement,
    /// Cross-axis alignment of the title and item rows.
    pub alignment: Alignment,
    /// Whether items wrap into more lines.
    pub wrapping: Wrapping,
    /// Minimum space between wrapped lines.
    pub line_spacing: Dimension,
    /// Space between neighboring items.
    pub item_spacing: Dimension,
    /// Space between the title and the items.
    pub title_margin: Dimension,
    /// Indicator height.
    pub icon_height: Dimension,
    /// Space between indicator and label.
    pub icon_margin: Dimension,
    /// Indicator used when an item has none.
    pub indicator: LegendIndicator,
    /// Optional border.
    pub border: Option<Border>,
    /// Optional background.
    pub background: Option<Background>,
    /// Optional paddings.
    pub paddings: Option<Edges<Dimension>>,
    /// Optional margins.
    pub margins: Option<Edges<Dimension>>,
    /// Position relative to the pie.
    pub position: LegendPosition,
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            id_base: 1000,
            title: None,
            title_size: Dimension::Sp(16.0),
            font_size: Dimension::Sp(14.0),
            text_color: css::BLACK,
            arrangement: Arrangement::Horizontal,
            alignment: Alignment::Center,
            wrapping: Wrapping::Wrap,
            line_spacing: Dimension::Dp(4.0),
            item_spacing: Dimension::Dp(12.0),
            title_margin: Dimension::Dp(6.0),
            icon_height: Dimension::Dp(12.0),
            icon_margin: Dimension::Dp(6.0),
            indicator: LegendIndicator::default(),
            border: None,
            background: None,
            paddings: None,
            margins: None,
            position: LegendPosition::Bottom,
        }
    }
}

impl LegendSpec {
    /// A legend with the default look.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the position relative to the pie.
    pub fn with_position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the item arrangement.
    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Sets the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Disables wrapping.
    pub fn without_wrapping(mut self) -> Self {
        self.wrapping = Wrapping::Clip;
        self
    }

    /// Sets the space between wrapped lines.
    pub fn with_line_spacing(mut self, spacing: Dimension) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Sets the space between items.
    pub fn with_item_spacing(mut self, spacing: Dimension) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, size: Dimension) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the indicator height.
    pub fn with_icon_height(mut self, height: Dimension) -> Self {
        self.icon_height = height;
        self
    }

    /// Sets the default indicator.
    pub fn with_indicator(mut self, indicator: LegendIndicator) -> Self {
        self.indicator = indicator;
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

    /// Sets the paddings.
    pub fn with_paddings(mut self, paddings: Edges<Dimension>) -> Self {
        self.paddings = Some(paddings);
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Edges<Dimension>) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Id of the legend's root box.
    pub fn root_id(&self) -> BoxId {
        BoxId(self.id_base.max(FIRST_FREE_ID))
    }

    /// Id of the title box.
    pub fn title_id(&self) -> BoxId {
        self.root_id().offset(1)
    }

    /// Id of the items container.
    pub fn items_id(&self) -> BoxId {
        self.root_id().offset(2)
    }

    /// Ids of item `index`: its container, indicator and label.
    pub fn item_ids(&self, index: usize) -> [BoxId; 3] {
        let base = 16 + 3 * index as u64;
        [
            self.root_id().offset(base),
            self.root_id().offset(base + 1),
            self.root_id().offset(base + 2),
        ]
    }

    /// Builds the legend box tree for `items`.
    pub fn build(
        &self,
        items: &[LegendItem],
        density: Density,
        measurer: &dyn TextMeasurer,
        icons: &dyn IconProvider,
    ) -> Container {
        let px = |d: Dimension| non_negative(d.px(density));
        let mut root = Container::new(self.root_id(), Arrangement::Vertical)
            .with_alignment(self.alignment);
        root.paddings = self.paddings.map(|p| p.px(density));
        root.margins = self.margins.map(|m| m.px(density));
        root.border = self.border.clone();
        root.background = self.background;

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            let style = TextStyle::new(px(self.title_size)).with_weight(FontWeight::BOLD);
            let margins = Margins {
                bottom: px(self.title_margin),
                ..Margins::ZERO
            };
            root.push(
                TextBox::new(self.title_id(), title, style, self.text_color, measurer)
                    .with_margins(margins),
            );
        }

        let mut list =
            Container::new(self.items_id(), self.arrangement).with_alignment(self.alignment);
        if self.wrapping == Wrapping::Wrap {
            list = list.with_wrapping(px(self.line_spacing));
        }
        list = list.with_item_spacing(px(self.item_spacing));
        for (i, item) in items.iter().enumerate() {
            list.push(self.item(i, item, density, measurer, icons));
        }
        root.push(list);
        root
    }

    fn item(
        &self,
        index: usize,
        item: &LegendItem,
        density: Density,
        measurer: &dyn TextMeasurer,
        icons: &dyn IconProvider,
    ) -> Container {
        let [id, indicator_id, label_id] = self.item_ids(index);
        let height = non_negative(self.icon_height.px(density));
        let swatch = |symbol: Symbol| {
            (
                IconSource::Symbol {
                    symbol,
                    color: item.color,
                },
                Size::new(height, height),
            )
        };
        let (source, size) = match item.indicator.unwrap_or(self.indicator) {
            LegendIndicator::Symbol(symbol) => swatch(symbol),
            LegendIndicator::Icon(icon) => {
                let size = resolve_icon_size(icons, Some(icon), height);
                if size == Size::ZERO {
                    swatch(Symbol::default())
                } else {
                    (IconSource::Resource { icon, tint: None }, size)
                }
            }
        };
        let label = TextBox::new(
            label_id,
            item.label.as_str(),
            TextStyle::new(non_negative(self.font_size.px(density))),
            self.text_color,
            measurer,
        );
        let indicator_margins = (!item.label.is_empty()).then(|| Margins {
            end: non_negative(self.icon_margin.px(density)),
            ..Margins::ZERO
        });
        Container::new(id, Arrangement::Horizontal)
            .with_alignment(Alignment::Center)
            .with_child(IconBox {
                id: indicator_id,
                source,
                size,
                margins: indicator_margins,
            })
            .with_child(label)
    }
}

/// Builds legend items in slice order.
pub(crate) fn legend_items<'a>(
    entries: impl IntoIterator<Item = (&'a str, Color, Option<IconId>)>,
) -> Vec<LegendItem> {
    entries
        .into_iter()
        .map(|(label, color, icon)| {
            let item = LegendItem::new(label, color);
            match icon {
                Some(icon) => item.with_indicator(LegendIndicator::Icon(icon)),
                None => item,
            }
        })
        .collect()
}
