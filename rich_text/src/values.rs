// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use peniko::kurbo::Vec2;

/// A font family request.
#[derive(Clone, Debug, PartialEq)]
pub enum FontFamily {
    /// A named family, such as "Helvetica Neue".
    Named(String),
    /// A generic family resolved by the rendering collaborator.
    Generic(GenericFamily),
}

impl From<&str> for FontFamily {
    fn from(name: &str) -> Self {
        Self::Named(String::from(name))
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(generic: GenericFamily) -> Self {
        Self::Generic(generic)
    }
}

/// A generic font family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenericFamily {
    /// Glyphs have finishing strokes.
    Serif,
    /// Glyphs have plain stroke endings.
    #[default]
    SansSerif,
    /// All glyphs have the same fixed width.
    Monospace,
    /// Glyphs in cursive fonts generally have joining strokes.
    Cursive,
}

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);
    /// Weight value of 400.
    pub const NORMAL: Self = Self(400.0);
    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);
    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);
    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);
    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight attribute with the given value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Visual style or 'slope' of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// A style that is typically inclined and possibly stylized.
    Italic,
    /// A style that is typically inclined.
    Oblique,
}

/// A single atomic font value: family, size and face selection.
///
/// This intentionally bundles face selection with the family and size, because
/// the font occupies a single slot in an [`Attributes`](crate::Attributes)
/// mapping and is overwritten as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// The font family.
    pub family: FontFamily,
    /// The font size in pixels.
    pub size: f32,
    /// The font weight.
    pub weight: FontWeight,
    /// The font style.
    pub style: FontStyle,
}

impl Font {
    /// Creates a font with the given family and size, with normal weight and
    /// style.
    pub fn new(family: impl Into<FontFamily>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }

    /// Returns this font with the given weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with the given style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// Whether ligature substitution is performed for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ligature {
    /// No ligatures.
    Disabled,
    /// The font's default ligatures.
    #[default]
    Standard,
}

/// The stroke pattern of an underline or strikethrough decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// A single solid line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// A double solid line.
    Double,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
}

/// The writing direction of a run or paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritingDirection {
    /// Direction determined from the content.
    #[default]
    Natural,
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

/// A drop shadow behind a run of text.
///
/// The color is part of the shadow value itself and may be unset, in which
/// case the rendering collaborator picks its default shadow color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the text, in pixels.
    pub offset: Vec2,
    /// Blur radius of the shadow, in pixels.
    pub radius: f64,
    /// Shadow color, if any.
    pub color: Option<Color>,
}

impl Shadow {
    /// Creates a shadow with the given geometry and no explicit color.
    pub fn new(dx: f64, dy: f64, radius: f64) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            radius,
            color: None,
        }
    }

    /// Returns this shadow with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
