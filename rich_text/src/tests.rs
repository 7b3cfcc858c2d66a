// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use peniko::Blob;
use peniko::color::palette::css;
use peniko::kurbo::Rect;

use crate::{
    Attachment, Attributes, Font, Fragment, GenericFamily, LineStyle, TextComponent, compose,
    each, if_then, just,
};

fn attachment() -> Attachment {
    Attachment::new(Blob::new(Arc::new(vec![0xAB_u8; 64])), 4, 4)
}

#[test]
fn successive_styles_are_last_write_wins() {
    let component = TextComponent::plain("x")
        .foreground(css::RED)
        .kerning(2.0)
        .foreground(css::BLUE);
    let attrs = component.attributes();
    assert_eq!(attrs.foreground, Some(css::BLUE));
    assert_eq!(attrs.kerning, Some(2.0));
}

#[test]
fn styling_preserves_text_and_unions_attributes() {
    let initial = Attributes {
        kerning: Some(1.0),
        expansion: Some(0.2),
        ..Attributes::EMPTY
    };
    let component = TextComponent::plain_with("stable", initial)
        .kerning(3.0)
        .baseline_offset(2.0);
    assert_eq!(component.text(), "stable");
    let attrs = component.attributes();
    assert_eq!(attrs.kerning, Some(3.0));
    assert_eq!(attrs.expansion, Some(0.2));
    assert_eq!(attrs.baseline_offset, Some(2.0));
}

#[test]
fn composing_two_components_keeps_spans_separate() {
    let a = TextComponent::plain("a").foreground(css::RED);
    let b = TextComponent::plain("b").underline(LineStyle::Single, None);
    let text = compose([just(a.clone()), just(b.clone())]);

    assert_eq!(text.fragments(), &[a.render(), b.render()]);
    let a_attrs = text.fragments()[0].attributes().unwrap();
    let b_attrs = text.fragments()[1].attributes().unwrap();
    assert_eq!(a_attrs.foreground, Some(css::RED));
    assert_eq!(a_attrs.underline, None);
    assert_eq!(b_attrs.underline, Some(LineStyle::Single));
    assert_eq!(b_attrs.foreground, None);
}

#[test]
fn false_condition_composes_as_if_absent() {
    let x = TextComponent::plain("x");
    let y = TextComponent::plain("y");
    let with_skip = compose([
        just(x.clone()),
        if_then(false, || just(TextComponent::plain("skipped"))),
        just(y.clone()),
    ]);
    let without = compose([just(x), just(y)]);
    assert_eq!(with_skip, without);
}

#[test]
fn iteration_flattens_in_order_with_shared_attributes() {
    let font = Font::new(GenericFamily::Monospace, 13.0);
    let text = compose([each(["a", "b", "c"], |s| {
        just(TextComponent::plain(s).font(font.clone()))
    })]);
    assert_eq!(text.text(), "abc");
    assert_eq!(text.len(), 3);
    for fragment in &text {
        assert_eq!(fragment.attributes().unwrap().font, Some(font.clone()));
    }
}

#[test]
fn image_fragment_reflects_only_the_last_bounds() {
    let rect1 = Rect::new(0.0, 0.0, 8.0, 8.0);
    let rect2 = Rect::new(0.0, -2.0, 16.0, 12.0);
    let a = attachment();
    let id = a.id();
    let component = TextComponent::image(a.with_bounds(rect1).with_bounds(rect2));
    match component.render() {
        Fragment::Attachment { attachment } => {
            assert_eq!(attachment.display_bounds(), rect2);
            assert_eq!(attachment.id(), id);
        }
        Fragment::Run { .. } => panic!("expected an attachment fragment"),
    }
}

#[test]
fn rendering_round_trips_text_and_attributes() {
    let attrs = Attributes {
        foreground: Some(css::REBECCA_PURPLE),
        kerning: Some(0.5),
        link: Some(String::from("https://example.invalid")),
        ..Attributes::EMPTY
    };
    let component = TextComponent::plain_with("réglisse", attrs.clone());
    match component.render() {
        Fragment::Run { text, attributes } => {
            assert_eq!(text, "réglisse");
            assert_eq!(attributes, attrs);
        }
        Fragment::Attachment { .. } => panic!("expected a run fragment"),
    }
}

#[test]
fn empty_block_composes_to_empty_rich_text() {
    let text = compose(core::iter::empty::<crate::Sequence>());
    assert!(text.is_empty());
    assert_eq!(text.text(), "");
}

#[test]
fn rich_text_append_preserves_order() {
    let mut head = compose([just("a")]);
    let tail = compose([just("b"), just("c")]);
    head.append(tail);
    let texts: Vec<_> = head.fragments().iter().map(Fragment::text).collect();
    assert_eq!(texts, ["a", "b", "c"]);
}

#[test]
fn link_render_carries_the_hyperlink_attribute() {
    let component = TextComponent::link("docs", "https://docs.invalid");
    match component.render() {
        Fragment::Run { text, attributes } => {
            assert_eq!(text, "docs");
            assert_eq!(attributes.link.as_deref(), Some("https://docs.invalid"));
        }
        Fragment::Attachment { .. } => panic!("expected a run fragment"),
    }
}
