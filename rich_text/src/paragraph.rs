// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::WritingDirection;

/// Horizontal alignment of paragraph content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Leading alignment for the paragraph's writing direction.
    #[default]
    Natural,
    /// Left alignment.
    Left,
    /// Center alignment.
    Center,
    /// Right alignment.
    Right,
    /// Both edges flush, except the last line.
    Justified,
}

/// What happens when a line is too long for its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Clip overflowing content.
    Clip,
    /// Truncate at the start of the line.
    TruncateHead,
    /// Truncate at the end of the line.
    TruncateTail,
    /// Truncate in the middle of the line.
    TruncateMiddle,
}

/// A single tab stop within a paragraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabStop {
    /// Distance of the stop from the leading margin, in pixels.
    pub location: f32,
    /// How text is aligned at this stop.
    pub alignment: Alignment,
}

impl TabStop {
    /// Creates a tab stop at `location` with the given alignment.
    pub fn new(location: f32, alignment: Alignment) -> Self {
        Self {
            location,
            alignment,
        }
    }
}

/// Paragraph-level formatting, stored whole as a single attribute value.
///
/// The record is immutable: every `with_*` setter consumes the style and
/// returns a new one with a single field group changed. Component-level
/// paragraph operations fetch the current record (or a default), apply one
/// setter and re-store the whole record, so the paragraph style behaves as one
/// atomic attribute value even though it is edited field-by-field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment of the paragraph content.
    pub alignment: Alignment,
    /// Indentation of the first line, in pixels.
    pub first_line_head_indent: f32,
    /// Leading indentation of lines other than the first, in pixels.
    pub head_indent: f32,
    /// Trailing indentation; positive values measure from the leading margin.
    pub tail_indent: f32,
    /// Handling of lines that do not fit.
    pub line_break_mode: LineBreakMode,
    /// Multiplier applied to the natural line height. Zero means unset.
    pub line_height_multiple: f32,
    /// Maximum line height in pixels. Zero means no limit.
    pub maximum_line_height: f32,
    /// Minimum line height in pixels.
    pub minimum_line_height: f32,
    /// Extra space between lines, in pixels.
    pub line_spacing: f32,
    /// Space after the paragraph, in pixels.
    pub paragraph_spacing: f32,
    /// Space before the paragraph, in pixels.
    pub paragraph_spacing_before: f32,
    /// Base writing direction of the paragraph.
    pub base_writing_direction: WritingDirection,
    /// Hyphenation threshold from 0.0 (off) to 1.0.
    pub hyphenation_factor: f32,
    /// Whether the renderer may tighten inter-glyph spacing to avoid
    /// truncation.
    pub tighten_for_truncation: bool,
    /// Tab stops, in leading-to-trailing order.
    pub tab_stops: Vec<TabStop>,
    /// Interval of implicit tab stops past the last explicit one. Zero means
    /// unset.
    pub default_tab_interval: f32,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::Natural,
            first_line_head_indent: 0.0,
            head_indent: 0.0,
            tail_indent: 0.0,
            line_break_mode: LineBreakMode::WordWrap,
            line_height_multiple: 0.0,
            maximum_line_height: 0.0,
            minimum_line_height: 0.0,
            line_spacing: 0.0,
            paragraph_spacing: 0.0,
            paragraph_spacing_before: 0.0,
            base_writing_direction: WritingDirection::Natural,
            hyphenation_factor: 0.0,
            tighten_for_truncation: false,
            tab_stops: Vec::new(),
            default_tab_interval: 0.0,
        }
    }
}

impl ParagraphStyle {
    /// Creates a paragraph style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this style with the given alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns this style with the given first line indentation.
    pub fn with_first_line_head_indent(mut self, indent: f32) -> Self {
        self.first_line_head_indent = indent;
        self
    }

    /// Returns this style with the given head indentation.
    pub fn with_head_indent(mut self, indent: f32) -> Self {
        self.head_indent = indent;
        self
    }

    /// Returns this style with the given tail indentation.
    pub fn with_tail_indent(mut self, indent: f32) -> Self {
        self.tail_indent = indent;
        self
    }

    /// Returns this style with the given line break mode.
    pub fn with_line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    /// Returns this style with the given line height bounds.
    pub fn with_line_height(mut self, multiple: f32, maximum: f32, minimum: f32) -> Self {
        self.line_height_multiple = multiple;
        self.maximum_line_height = maximum;
        self.minimum_line_height = minimum;
        self
    }

    /// Returns this style with the given line spacing.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Returns this style with the given inter-paragraph spacing.
    pub fn with_paragraph_spacing(mut self, spacing: f32, before: f32) -> Self {
        self.paragraph_spacing = spacing;
        self.paragraph_spacing_before = before;
        self
    }

    /// Returns this style with the given base writing direction.
    pub fn with_base_writing_direction(mut self, direction: WritingDirection) -> Self {
        self.base_writing_direction = direction;
        self
    }

    /// Returns this style with the given hyphenation factor.
    pub fn with_hyphenation_factor(mut self, factor: f32) -> Self {
        self.hyphenation_factor = factor;
        self
    }

    /// Returns this style with tightening for truncation enabled.
    pub fn with_tightening_for_truncation(mut self) -> Self {
        self.tighten_for_truncation = true;
        self
    }

    /// Returns this style with the given tab stops.
    pub fn with_tab_stops(mut self, stops: Vec<TabStop>, default_interval: f32) -> Self {
        self.tab_stops = stops;
        self.default_tab_interval = default_interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn setters_change_one_field_group() {
        let style = ParagraphStyle::new().with_alignment(Alignment::Center);
        assert_eq!(style.alignment, Alignment::Center);
        assert_eq!(
            ParagraphStyle {
                alignment: Alignment::Natural,
                ..style.clone()
            },
            ParagraphStyle::default()
        );

        let style = style.with_line_height(1.2, 40.0, 12.0);
        assert_eq!(style.line_height_multiple, 1.2);
        assert_eq!(style.maximum_line_height, 40.0);
        assert_eq!(style.minimum_line_height, 12.0);
    }

    #[test]
    fn tab_stops_replace_whole_list() {
        let style = ParagraphStyle::new()
            .with_tab_stops(vec![TabStop::new(10.0, Alignment::Left)], 0.0)
            .with_tab_stops(vec![TabStop::new(20.0, Alignment::Right)], 8.0);
        assert_eq!(style.tab_stops, vec![TabStop::new(20.0, Alignment::Right)]);
        assert_eq!(style.default_tab_interval, 8.0);
    }
}
