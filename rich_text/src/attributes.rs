// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;

use crate::paragraph::ParagraphStyle;
use crate::values::{Font, Ligature, LineStyle, Shadow, WritingDirection};

/// The set of style properties attached to a run of text.
///
/// This is a closed vocabulary: one typed optional field per recognized style,
/// rather than an open keyed map. A field that is `None` is "not set" and
/// defers to the rendering collaborator's defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Text color.
    pub foreground: Option<Color>,
    /// Color painted behind the run.
    pub background: Option<Color>,
    /// The font used for the run.
    pub font: Option<Font>,
    /// Extra space between glyphs, in pixels.
    pub kerning: Option<f32>,
    /// Ligature substitution mode.
    pub ligature: Option<Ligature>,
    /// Vertical offset from the baseline, in pixels.
    pub baseline_offset: Option<f32>,
    /// Log of the horizontal expansion factor applied to glyphs.
    pub expansion: Option<f32>,
    /// Skew applied to glyphs.
    pub obliqueness: Option<f32>,
    /// Drop shadow behind the run.
    pub shadow: Option<Shadow>,
    /// Strikethrough decoration.
    pub strikethrough: Option<LineStyle>,
    /// Color of the strikethrough decoration.
    pub strikethrough_color: Option<Color>,
    /// Width of the stroke drawn around glyph outlines, as a percentage of
    /// the font size. Positive values produce outline-only rendering.
    pub stroke_width: Option<f32>,
    /// Color of the glyph outline stroke.
    pub stroke_color: Option<Color>,
    /// Underline decoration.
    pub underline: Option<LineStyle>,
    /// Color of the underline decoration.
    pub underline_color: Option<Color>,
    /// Writing direction override for the run.
    pub writing_direction: Option<WritingDirection>,
    /// Paragraph-level formatting, stored as one atomic value.
    pub paragraph: Option<ParagraphStyle>,
    /// Hyperlink target for the run.
    pub link: Option<String>,
}

impl Attributes {
    /// The attribute set with nothing set.
    pub const EMPTY: Self = Self {
        foreground: None,
        background: None,
        font: None,
        kerning: None,
        ligature: None,
        baseline_offset: None,
        expansion: None,
        obliqueness: None,
        shadow: None,
        strikethrough: None,
        strikethrough_color: None,
        stroke_width: None,
        stroke_color: None,
        underline: None,
        underline_color: None,
        writing_direction: None,
        paragraph: None,
        link: None,
    };

    /// Creates an attribute set with nothing set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Merges `patch` into this set and returns the result.
    ///
    /// Fields set in `patch` win; fields left unset in `patch` keep their
    /// current value. This is the only combining operation in the model, and
    /// it is what gives successive styling calls last-write-wins semantics
    /// per field while leaving unrelated fields alone.
    pub fn merge(mut self, patch: Self) -> Self {
        macro_rules! take_set {
            ($($field:ident),* $(,)?) => {
                $(
                    if patch.$field.is_some() {
                        self.$field = patch.$field;
                    }
                )*
            };
        }
        take_set!(
            foreground,
            background,
            font,
            kerning,
            ligature,
            baseline_offset,
            expansion,
            obliqueness,
            shadow,
            strikethrough,
            strikethrough_color,
            stroke_width,
            stroke_color,
            underline,
            underline_color,
            writing_direction,
            paragraph,
            link,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn merge_is_last_write_wins_per_field() {
        let first = Attributes {
            foreground: Some(css::RED),
            kerning: Some(1.5),
            ..Attributes::EMPTY
        };
        let second = Attributes {
            foreground: Some(css::BLUE),
            ..Attributes::EMPTY
        };
        let merged = first.merge(second);
        assert_eq!(merged.foreground, Some(css::BLUE));
        assert_eq!(merged.kerning, Some(1.5));
    }

    #[test]
    fn merge_with_empty_changes_nothing() {
        let attrs = Attributes {
            underline: Some(LineStyle::Double),
            ..Attributes::EMPTY
        };
        assert_eq!(attrs.clone().merge(Attributes::EMPTY), attrs);
        assert_eq!(Attributes::EMPTY.merge(attrs.clone()), attrs);
    }

    #[test]
    fn unset_patch_color_preserves_prior_color() {
        let attrs = Attributes {
            underline: Some(LineStyle::Single),
            underline_color: Some(css::REBECCA_PURPLE),
            ..Attributes::EMPTY
        };
        let patch = Attributes {
            underline: Some(LineStyle::Thick),
            ..Attributes::EMPTY
        };
        let merged = attrs.merge(patch);
        assert_eq!(merged.underline, Some(LineStyle::Thick));
        assert_eq!(merged.underline_color, Some(css::REBECCA_PURPLE));
    }
}
