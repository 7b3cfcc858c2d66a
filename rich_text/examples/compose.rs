// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small rich-text value and prints its fragments.
//!
//! The output of composition is a plain value; a real application would hand
//! it to a label or other rendering surface instead of printing it.

use peniko::color::palette::css;
use rich_text::{
    Alignment, Font, GenericFamily, LineStyle, TextComponent, compose, each, if_then, just,
};

fn main() {
    let headline_font = Font::new(GenericFamily::SansSerif, 28.0);
    let body_font = Font::new("Georgia", 16.0);
    let show_credits = true;
    let toppings = ["cocoa", "cinnamon", "nutmeg"];

    let text = compose([
        just(
            TextComponent::plain("Declarative text\n")
                .font(headline_font)
                .foreground(css::REBECCA_PURPLE)
                .alignment(Alignment::Center),
        ),
        just(
            TextComponent::plain("Every run carries its own attributes. ")
                .font(body_font.clone())
                .kerning(0.3),
        ),
        each(toppings, |topping| {
            just(
                TextComponent::plain(topping)
                    .font(body_font.clone())
                    .underline(LineStyle::Dotted, Some(css::DARK_ORANGE)),
            )
        }),
        if_then(show_credits, || {
            just(TextComponent::link(
                "\nsource",
                "https://example.invalid/source",
            ))
        }),
    ]);

    println!("plain text: {:?}", text.text());
    for (index, fragment) in text.fragments().iter().enumerate() {
        println!("fragment {index}: {fragment:?}");
    }
}
