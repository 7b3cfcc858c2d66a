// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small declarative builder for attributed rich text.
//!
//! This crate models runs of text with typed style attributes and combines
//! them, through a block-structured set of combinators, into a single
//! [`RichText`] value: an ordered list of (text-or-attachment, attributes)
//! fragments. Everything downstream of that value — layout, shaping,
//! painting — belongs to a rendering surface outside this crate.
//!
//! ## The component model
//!
//! A [`TextComponent`] is plain styled text, a hyperlink, or an inline image.
//! Components are immutable: every styling call merges a one-concern patch
//! into the component's [`Attributes`] and returns a new component, so chains
//! of calls never alias.
//!
//! ```
//! use peniko::color::palette::css;
//! use rich_text::{Font, GenericFamily, LineStyle, TextComponent};
//!
//! let title = TextComponent::plain("Builders")
//!     .font(Font::new(GenericFamily::SansSerif, 24.0))
//!     .foreground(css::REBECCA_PURPLE)
//!     .underline(LineStyle::Single, None);
//! assert_eq!(title.text(), "Builders");
//! ```
//!
//! Note that styling always produces a *plain* component: styling a link or
//! image component downgrades it (see [`TextComponent::styled`]).
//!
//! ## Composition
//!
//! A block is a list of [`Sequence`]s built with [`just`], [`concat`],
//! [`if_then`], [`if_else`] and [`each`]; [`compose`] flattens the block in
//! source order and renders each component into a fragment of the result.
//!
//! ```
//! use rich_text::{compose, each, if_else, just, TextComponent};
//!
//! let items = ["one", "two"];
//! let text = compose([
//!     if_else(
//!         items.is_empty(),
//!         || just("nothing to show"),
//!         || each(items, |item| just(TextComponent::plain(item))),
//!     ),
//! ]);
//! assert_eq!(text.text(), "onetwo");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): forwards to `peniko/std`.
//! - `libm`: required for `no_std` builds without `std`.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attributes;
mod component;
mod compose;
mod fragment;
mod paragraph;
mod values;

#[cfg(test)]
mod tests;

pub use crate::attributes::Attributes;
pub use crate::component::{Attachment, TextComponent};
pub use crate::compose::{Sequence, compose, concat, each, if_else, if_then, just};
pub use crate::fragment::{Fragment, RichText};
pub use crate::paragraph::{Alignment, LineBreakMode, ParagraphStyle, TabStop};
pub use crate::values::{
    Font, FontFamily, FontStyle, FontWeight, GenericFamily, Ligature, LineStyle, Shadow,
    WritingDirection,
};
