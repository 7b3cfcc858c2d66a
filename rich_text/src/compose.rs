// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::component::TextComponent;
use crate::fragment::RichText;

/// An ordered sequence of components, the unit of declarative composition.
///
/// A block is written as a list of sequences, one per statement; the
/// combinators in this module ([`just`], [`concat`], [`if_then`], [`if_else`],
/// [`each`]) all produce sequences, and [`compose`] flattens a block of them
/// into one [`RichText`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    components: Vec<TextComponent>,
}

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the components in source order.
    pub fn components(&self) -> &[TextComponent] {
        &self.components
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the sequence holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Appends one component.
    pub fn push(&mut self, component: impl Into<TextComponent>) {
        self.components.push(component.into());
    }
}

impl From<TextComponent> for Sequence {
    fn from(component: TextComponent) -> Self {
        Self {
            components: alloc::vec![component],
        }
    }
}

impl FromIterator<TextComponent> for Sequence {
    fn from_iter<I: IntoIterator<Item = TextComponent>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl Extend<TextComponent> for Sequence {
    fn extend<I: IntoIterator<Item = TextComponent>>(&mut self, iter: I) {
        self.components.extend(iter);
    }
}

impl IntoIterator for Sequence {
    type Item = TextComponent;
    type IntoIter = alloc::vec::IntoIter<TextComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a TextComponent;
    type IntoIter = core::slice::Iter<'a, TextComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Wraps a single component expression as a one-element sequence.
pub fn just(component: impl Into<TextComponent>) -> Sequence {
    Sequence::from(component.into())
}

/// Flattens a list of sequences into one, preserving both the order of the
/// groups and the order within each group.
pub fn concat(parts: impl IntoIterator<Item = Sequence>) -> Sequence {
    let mut out = Sequence::new();
    for part in parts {
        out.extend(part);
    }
    out
}

/// Includes `then()` when `condition` holds, and the empty sequence
/// otherwise.
///
/// The absent branch contributes nothing: no error, no placeholder. The
/// closure is only called when the condition holds.
pub fn if_then(condition: bool, then: impl FnOnce() -> Sequence) -> Sequence {
    if condition { then() } else { Sequence::new() }
}

/// Includes exactly one of the two branches. Only the chosen closure is
/// evaluated.
pub fn if_else(
    condition: bool,
    then: impl FnOnce() -> Sequence,
    otherwise: impl FnOnce() -> Sequence,
) -> Sequence {
    if condition { then() } else { otherwise() }
}

/// Maps each item to a sequence and flattens the results in iteration order:
/// every element of the first iteration precedes every element of the second,
/// and so on.
pub fn each<T>(
    items: impl IntoIterator<Item = T>,
    mut f: impl FnMut(T) -> Sequence,
) -> Sequence {
    let mut out = Sequence::new();
    for item in items {
        out.extend(f(item));
    }
    out
}

/// Reduces a block of sequences to one rich-text result.
///
/// The block is flattened in source order and every component is rendered
/// into a fragment, appended to an initially empty accumulator. Each
/// fragment keeps exactly the attributes its component attached; attributes
/// are never merged or deduplicated across fragment boundaries.
///
/// This is the only entry point that produces a finished [`RichText`] from a
/// declarative block.
///
/// ## Example
///
/// ```
/// use rich_text::{compose, each, if_then, just, TextComponent};
///
/// let signed_in = false;
/// let text = compose([
///     just("Hello, "),
///     if_then(signed_in, || just(TextComponent::link("account", "https://example.invalid"))),
///     each(["a", "b", "c"], |s| just(TextComponent::plain(s))),
/// ]);
/// assert_eq!(text.text(), "Hello, abc");
/// assert_eq!(text.fragments().len(), 4);
/// ```
pub fn compose(parts: impl IntoIterator<Item = Sequence>) -> RichText {
    concat(parts)
        .into_iter()
        .map(TextComponent::into_fragment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn concat_flattens_in_order() {
        let seq = concat([
            just("a"),
            vec![TextComponent::plain("b"), TextComponent::plain("c")]
                .into_iter()
                .collect(),
            just("d"),
        ]);
        let texts: Vec<_> = seq.components().iter().map(TextComponent::text).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }

    #[test]
    fn unchosen_branches_are_not_evaluated() {
        let skipped = if_then(false, || unreachable!("branch must not run"));
        assert!(skipped.is_empty());

        let chosen = if_else(
            true,
            || just("yes"),
            || unreachable!("branch must not run"),
        );
        assert_eq!(chosen.len(), 1);
    }

    #[test]
    fn each_preserves_iteration_order() {
        let seq = each(1..=3, |n| {
            concat([just(alloc::format!("{n}")), just("|")])
        });
        let texts: Vec<_> = seq.components().iter().map(TextComponent::text).collect();
        assert_eq!(texts, ["1", "|", "2", "|", "3", "|"]);
    }
}
