// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for pie chart layout.
//!
//! Pie charts need text metrics in two places: sizing labels around the pie
//! and sizing legend entries in the box layout. Shaping and glyph rendering stay
//! downstream, so the chart engine only depends on the tiny measurement
//! interface in this crate.
//!
//! The crate also carries [`TextDirection`]. Placement code never reads the
//! direction from ambient locale state; callers pass it explicitly.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by label and legend layout.
///
/// Implementations can be heuristic (like [`HeuristicTextMeasurer`]) or backed
/// by a real shaping engine. Metrics must be locale sensitive where the glyphs
/// are: the same digits in Persian and Latin script can have different widths.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// An empty `text` must yield [`TextMetrics::ZERO`].
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Vazirmatn"`, `"Roboto"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS/SVG-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty string.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Returns `true` if these metrics enclose no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advance_width <= 0.0 || self.line_height() <= 0.0
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// Advances are estimated per character class, so mixed-script strings measure
/// differently from their Latin counterparts. The baseline sits at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    /// Estimated advance of `c`, in ems.
    #[must_use]
    pub fn char_advance_em(c: char) -> f64 {
        match c {
            // Arabic-Indic and extended (Persian) digits are narrower than Latin ones.
            '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}' => 0.48,
            '0'..='9' => 0.56,
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.28,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' => 0.36,
            'm' | 'w' | 'M' | 'W' | '%' | '@' => 0.86,
            ' ' => 0.28,
            '\u{3000}'..='\u{9FFF}' | '\u{AC00}'..='\u{D7AF}' | '\u{FF00}'..='\u{FFEF}' => 1.0,
            _ => 0.6,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let ems: f64 = text.chars().map(Self::char_advance_em).sum();
        let weight_scale = if style.font_weight >= FontWeight::BOLD {
            1.06
        } else {
            1.0
        };
        TextMetrics {
            advance_width: ems * style.font_size * weight_scale,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// Horizontal text direction used to resolve start/end placements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right scripts (Latin, Cyrillic, CJK, ...).
    #[default]
    Ltr,
    /// Right-to-left scripts (Arabic, Persian, Hebrew, ...).
    Rtl,
}

impl TextDirection {
    /// Resolves the direction for a BCP-47 language tag such as `"fa-IR"` or `"en"`.
    ///
    /// Only the primary language subtag is consulted; unknown tags are LTR.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        const RTL: [&str; 10] = ["ar", "fa", "he", "iw", "ur", "ps", "yi", "dv", "sd", "ug"];
        if RTL.iter().any(|lang| primary.eq_ignore_ascii_case(lang)) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// Returns `true` for [`TextDirection::Rtl`].
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// `+1.0` for LTR, `-1.0` for RTL.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Ltr => 1.0,
            Self::Rtl => -1.0,
        }
    }
}
