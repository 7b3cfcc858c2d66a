// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::{Blob, Color};
use peniko::kurbo::Rect;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::paragraph::{Alignment, LineBreakMode, ParagraphStyle, TabStop};
use crate::values::{Font, Ligature, LineStyle, Shadow, WritingDirection};

use alloc::vec::Vec;

static EMPTY_ATTRIBUTES: Attributes = Attributes::EMPTY;

/// An image placed inline with text.
///
/// The image bytes are opaque to this crate; decoding and painting are owned
/// by the rendering collaborator. An attachment exclusively owns its image
/// value: changing the display bounds rebuilds the attachment rather than
/// mutating it in place.
#[derive(Clone, Debug)]
pub struct Attachment {
    data: Blob<u8>,
    width: u32,
    height: u32,
    bounds: Option<Rect>,
}

impl Attachment {
    /// Creates an attachment over opaque image bytes with the given intrinsic
    /// size in pixels. The display bounds are left unset, so the image
    /// renders at its natural bounds.
    pub fn new(data: Blob<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            bounds: None,
        }
    }

    /// Borrows the image bytes.
    pub fn data(&self) -> &Blob<u8> {
        &self.data
    }

    /// Returns the identity of the underlying image.
    ///
    /// The identity is stable across bounds changes.
    pub fn id(&self) -> u64 {
        self.data.id()
    }

    /// Returns the intrinsic width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the intrinsic height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the explicitly set display bounds, if any.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Returns the rectangle of the image's intrinsic size.
    pub fn natural_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Returns the bounds the image will be displayed at: the explicitly set
    /// bounds, or the natural bounds.
    pub fn display_bounds(&self) -> Rect {
        self.bounds.unwrap_or_else(|| self.natural_bounds())
    }

    /// Returns a new attachment over the same image with the given display
    /// bounds, discarding any bounds set previously.
    pub fn with_bounds(self, bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            ..self
        }
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        // Image bytes compare by identity, not content.
        self.data.id() == other.data.id()
            && self.width == other.width
            && self.height == other.height
            && self.bounds == other.bounds
    }
}

/// One run of content destined for a rich-text result.
///
/// The component family is a closed set: plain styled text, link text and
/// inline images. Components are immutable; every styling operation consumes
/// the component and returns a new one, so chains of operations never alias.
#[derive(Clone, Debug, PartialEq)]
pub enum TextComponent {
    /// A string with an attribute set.
    Plain {
        /// The run's text.
        text: String,
        /// The run's attribute set.
        attributes: Attributes,
    },
    /// A string that is a hyperlink.
    Link {
        /// The run's text.
        text: String,
        /// The hyperlink target. Mirrored into `attributes.link`.
        url: String,
        /// The run's attribute set.
        attributes: Attributes,
    },
    /// An inline image with no visible text of its own.
    Image {
        /// The wrapped image.
        attachment: Attachment,
    },
}

impl TextComponent {
    /// Creates a plain component with no attributes set.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::plain_with(text, Attributes::EMPTY)
    }

    /// Creates a plain component with an initial attribute set.
    pub fn plain_with(text: impl Into<String>, attributes: Attributes) -> Self {
        Self::Plain {
            text: text.into(),
            attributes,
        }
    }

    /// Creates a link component with no further attributes.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::link_with(text, url, Attributes::EMPTY)
    }

    /// Creates a link component with an initial attribute set.
    ///
    /// The `link` field of `attributes` is always overwritten with `url`, so
    /// a caller-supplied link value is silently superseded. The typed `url`
    /// field and the `link` attribute therefore cannot diverge.
    pub fn link_with(
        text: impl Into<String>,
        url: impl Into<String>,
        mut attributes: Attributes,
    ) -> Self {
        let url = url.into();
        attributes.link = Some(url.clone());
        Self::Link {
            text: text.into(),
            url,
            attributes,
        }
    }

    /// Creates an image component from an attachment.
    pub fn image(attachment: Attachment) -> Self {
        Self::Image { attachment }
    }

    /// Creates an image component with explicit display bounds.
    pub fn image_with_bounds(data: Blob<u8>, width: u32, height: u32, bounds: Rect) -> Self {
        Self::Image {
            attachment: Attachment::new(data, width, height).with_bounds(bounds),
        }
    }

    /// Returns the component's source text. Empty for image components.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text, .. } | Self::Link { text, .. } => text,
            Self::Image { .. } => "",
        }
    }

    /// Returns the component's attribute set. Empty for image components.
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Plain { attributes, .. } | Self::Link { attributes, .. } => attributes,
            Self::Image { .. } => &EMPTY_ATTRIBUTES,
        }
    }

    /// Returns the hyperlink target, if this is a link component.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Returns the wrapped attachment, if this is an image component.
    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            Self::Image { attachment } => Some(attachment),
            _ => None,
        }
    }

    /// Renders this component into a fragment.
    ///
    /// Plain and link components pair their text with their attributes; an
    /// image component produces an attachment fragment, ignoring its empty
    /// text and attributes.
    pub fn render(&self) -> Fragment {
        self.clone().into_fragment()
    }

    /// Consumes this component and produces its fragment.
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Plain { text, attributes } | Self::Link { text, attributes, .. } => {
                Fragment::Run { text, attributes }
            }
            Self::Image { attachment } => Fragment::Attachment { attachment },
        }
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<Attachment> for TextComponent {
    fn from(attachment: Attachment) -> Self {
        Self::image(attachment)
    }
}

/// Character-level styling.
///
/// Every operation is sugar over [`styled`](Self::styled) with a one-concern
/// patch.
impl TextComponent {
    /// Merges `patch` into this component's attribute set and returns a new
    /// **plain** component carrying this component's text.
    ///
    /// Fields set in `patch` overwrite fields already set; everything else is
    /// kept. Note that the result is always `Plain`: styling a `Link` drops
    /// the typed `url` field (the `link` attribute inside the mapping
    /// survives, so the rendered hyperlink does too), and styling an `Image`
    /// drops the attachment entirely. This precedence is caller-observable
    /// and intentional.
    pub fn styled(self, patch: Attributes) -> Self {
        let (text, attributes) = match self {
            Self::Plain { text, attributes } | Self::Link { text, attributes, .. } => {
                (text, attributes)
            }
            Self::Image { .. } => (String::new(), Attributes::EMPTY),
        };
        Self::Plain {
            text,
            attributes: attributes.merge(patch),
        }
    }

    /// Sets the text color.
    pub fn foreground(self, color: Color) -> Self {
        self.styled(Attributes {
            foreground: Some(color),
            ..Attributes::EMPTY
        })
    }

    /// Sets the color painted behind the run.
    pub fn background(self, color: Color) -> Self {
        self.styled(Attributes {
            background: Some(color),
            ..Attributes::EMPTY
        })
    }

    /// Sets the font.
    pub fn font(self, font: Font) -> Self {
        self.styled(Attributes {
            font: Some(font),
            ..Attributes::EMPTY
        })
    }

    /// Sets the kerning in pixels.
    pub fn kerning(self, kerning: f32) -> Self {
        self.styled(Attributes {
            kerning: Some(kerning),
            ..Attributes::EMPTY
        })
    }

    /// Sets the ligature mode.
    pub fn ligature(self, ligature: Ligature) -> Self {
        self.styled(Attributes {
            ligature: Some(ligature),
            ..Attributes::EMPTY
        })
    }

    /// Sets the baseline offset in pixels.
    pub fn baseline_offset(self, offset: f32) -> Self {
        self.styled(Attributes {
            baseline_offset: Some(offset),
            ..Attributes::EMPTY
        })
    }

    /// Sets the glyph expansion factor.
    pub fn expansion(self, expansion: f32) -> Self {
        self.styled(Attributes {
            expansion: Some(expansion),
            ..Attributes::EMPTY
        })
    }

    /// Sets the glyph obliqueness.
    pub fn obliqueness(self, obliqueness: f32) -> Self {
        self.styled(Attributes {
            obliqueness: Some(obliqueness),
            ..Attributes::EMPTY
        })
    }

    /// Sets a drop shadow with the given geometry.
    ///
    /// When `color` is `None` the shadow carries no explicit color and the
    /// rendering collaborator picks its default.
    pub fn shadow(self, color: Option<Color>, radius: f64, dx: f64, dy: f64) -> Self {
        let mut shadow = Shadow::new(dx, dy, radius);
        shadow.color = color;
        self.styled(Attributes {
            shadow: Some(shadow),
            ..Attributes::EMPTY
        })
    }

    /// Sets a strikethrough decoration.
    ///
    /// When `color` is `None` only the line style is set; a strikethrough
    /// color applied earlier is left in place, not cleared.
    pub fn strikethrough(self, style: LineStyle, color: Option<Color>) -> Self {
        self.styled(Attributes {
            strikethrough: Some(style),
            strikethrough_color: color,
            ..Attributes::EMPTY
        })
    }

    /// Sets an outline stroke around glyphs.
    ///
    /// When `color` is `None` only the width is set; a stroke color applied
    /// earlier is left in place, not cleared.
    pub fn stroke(self, width: f32, color: Option<Color>) -> Self {
        self.styled(Attributes {
            stroke_width: Some(width),
            stroke_color: color,
            ..Attributes::EMPTY
        })
    }

    /// Sets an underline decoration.
    ///
    /// When `color` is `None` only the line style is set; an underline color
    /// applied earlier is left in place, not cleared.
    pub fn underline(self, style: LineStyle, color: Option<Color>) -> Self {
        self.styled(Attributes {
            underline: Some(style),
            underline_color: color,
            ..Attributes::EMPTY
        })
    }

    /// Sets the writing direction of the run.
    pub fn writing_direction(self, direction: WritingDirection) -> Self {
        self.styled(Attributes {
            writing_direction: Some(direction),
            ..Attributes::EMPTY
        })
    }
}

/// Paragraph-level styling.
///
/// Each operation fetches the component's current paragraph style (or a
/// default), changes one field group, and re-stores the whole record under
/// the paragraph slot. The paragraph style is one atomic attribute value.
impl TextComponent {
    fn current_paragraph(&self) -> ParagraphStyle {
        self.attributes().paragraph.clone().unwrap_or_default()
    }

    /// Re-stores a whole paragraph style.
    pub fn paragraph_style(self, paragraph: ParagraphStyle) -> Self {
        self.styled(Attributes {
            paragraph: Some(paragraph),
            ..Attributes::EMPTY
        })
    }

    /// Sets the paragraph alignment.
    pub fn alignment(self, alignment: Alignment) -> Self {
        let paragraph = self.current_paragraph().with_alignment(alignment);
        self.paragraph_style(paragraph)
    }

    /// Sets the first line indentation in pixels.
    pub fn first_line_head_indent(self, indent: f32) -> Self {
        let paragraph = self.current_paragraph().with_first_line_head_indent(indent);
        self.paragraph_style(paragraph)
    }

    /// Sets the head indentation in pixels.
    pub fn head_indent(self, indent: f32) -> Self {
        let paragraph = self.current_paragraph().with_head_indent(indent);
        self.paragraph_style(paragraph)
    }

    /// Sets the tail indentation in pixels.
    pub fn tail_indent(self, indent: f32) -> Self {
        let paragraph = self.current_paragraph().with_tail_indent(indent);
        self.paragraph_style(paragraph)
    }

    /// Sets the line break mode.
    pub fn line_break_mode(self, mode: LineBreakMode) -> Self {
        let paragraph = self.current_paragraph().with_line_break_mode(mode);
        self.paragraph_style(paragraph)
    }

    /// Sets the line height bounds.
    pub fn line_height(self, multiple: f32, maximum: f32, minimum: f32) -> Self {
        let paragraph = self
            .current_paragraph()
            .with_line_height(multiple, maximum, minimum);
        self.paragraph_style(paragraph)
    }

    /// Sets the line spacing in pixels.
    pub fn line_spacing(self, spacing: f32) -> Self {
        let paragraph = self.current_paragraph().with_line_spacing(spacing);
        self.paragraph_style(paragraph)
    }

    /// Sets the spacing after and before the paragraph, in pixels.
    pub fn paragraph_spacing(self, spacing: f32, before: f32) -> Self {
        let paragraph = self
            .current_paragraph()
            .with_paragraph_spacing(spacing, before);
        self.paragraph_style(paragraph)
    }

    /// Sets the paragraph's base writing direction.
    pub fn base_writing_direction(self, direction: WritingDirection) -> Self {
        let paragraph = self
            .current_paragraph()
            .with_base_writing_direction(direction);
        self.paragraph_style(paragraph)
    }

    /// Sets the hyphenation factor.
    pub fn hyphenation_factor(self, factor: f32) -> Self {
        let paragraph = self.current_paragraph().with_hyphenation_factor(factor);
        self.paragraph_style(paragraph)
    }

    /// Allows the renderer to tighten inter-glyph spacing to avoid
    /// truncation.
    pub fn tighten_for_truncation(self) -> Self {
        let paragraph = self.current_paragraph().with_tightening_for_truncation();
        self.paragraph_style(paragraph)
    }

    /// Sets the paragraph's tab stops.
    pub fn tab_stops(self, stops: Vec<TabStop>, default_interval: f32) -> Self {
        let paragraph = self
            .current_paragraph()
            .with_tab_stops(stops, default_interval);
        self.paragraph_style(paragraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;
    use alloc::vec;
    use peniko::color::palette::css;

    fn attachment() -> Attachment {
        Attachment::new(Blob::new(Arc::new(vec![0_u8; 16])), 2, 2)
    }

    #[test]
    fn link_constructor_wins_over_supplied_link_attribute() {
        let attrs = Attributes {
            link: Some("https://a.invalid".into()),
            ..Attributes::EMPTY
        };
        let component = TextComponent::link_with("here", "https://b.invalid", attrs);
        assert_eq!(component.url(), Some("https://b.invalid"));
        assert_eq!(
            component.attributes().link.as_deref(),
            Some("https://b.invalid")
        );
    }

    #[test]
    fn styling_a_link_downgrades_but_keeps_the_link_attribute() {
        let styled = TextComponent::link("here", "https://b.invalid").foreground(css::RED);
        assert!(matches!(styled, TextComponent::Plain { .. }));
        assert_eq!(styled.url(), None);
        assert_eq!(styled.attributes().link.as_deref(), Some("https://b.invalid"));
        assert_eq!(styled.text(), "here");
    }

    #[test]
    fn styling_an_image_drops_the_attachment() {
        let styled = TextComponent::image(attachment()).foreground(css::RED);
        assert!(matches!(styled, TextComponent::Plain { .. }));
        assert_eq!(styled.text(), "");
        assert_eq!(styled.attachment(), None);
        assert_eq!(styled.attributes().foreground, Some(css::RED));
    }

    #[test]
    fn rebinding_bounds_discards_prior_bounds_and_keeps_identity() {
        let first = Rect::new(0.0, 0.0, 10.0, 10.0);
        let second = Rect::new(0.0, -4.0, 24.0, 20.0);
        let a = attachment();
        let id = a.id();
        let a = a.with_bounds(first).with_bounds(second);
        assert_eq!(a.bounds(), Some(second));
        assert_eq!(a.display_bounds(), second);
        assert_eq!(a.id(), id);
    }

    #[test]
    fn unset_display_bounds_fall_back_to_natural_bounds() {
        let a = attachment();
        assert_eq!(a.bounds(), None);
        assert_eq!(a.display_bounds(), Rect::new(0.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn paragraph_edits_accumulate_in_one_record() {
        let component = TextComponent::plain("p")
            .alignment(Alignment::Center)
            .line_spacing(4.0)
            .hyphenation_factor(0.5);
        let paragraph = component.attributes().paragraph.as_ref().unwrap();
        assert_eq!(paragraph.alignment, Alignment::Center);
        assert_eq!(paragraph.line_spacing, 4.0);
        assert_eq!(paragraph.hyphenation_factor, 0.5);
    }
}
