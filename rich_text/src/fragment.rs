// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::attributes::Attributes;
use crate::component::Attachment;

/// A renderable unit: a string paired with its attribute set, or an inline
/// attachment.
///
/// Fragments are what a rendering surface consumes. This crate never merges
/// or splits fragments; it only concatenates them in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// A run of text with attributes.
    Run {
        /// The run's text.
        text: String,
        /// The run's attribute set.
        attributes: Attributes,
    },
    /// An inline image.
    Attachment {
        /// The image and its display bounds.
        attachment: Attachment,
    },
}

impl Fragment {
    /// Returns the fragment's text. Empty for attachment fragments.
    pub fn text(&self) -> &str {
        match self {
            Self::Run { text, .. } => text,
            Self::Attachment { .. } => "",
        }
    }

    /// Returns the fragment's attribute set, if it is a run.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Run { attributes, .. } => Some(attributes),
            Self::Attachment { .. } => None,
        }
    }
}

/// A composed rich-text value: an ordered concatenation of fragments.
///
/// This is the final product of composition and the sole interface to a
/// rendering surface. The value is owned by the caller; nothing in this crate
/// retains or mutates it after it is produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    fragments: Vec<Fragment>,
}

impl RichText {
    /// Creates an empty rich-text value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fragments in composition order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends one fragment.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Appends all fragments of `other`, preserving their order.
    pub fn append(&mut self, other: Self) {
        self.fragments.extend(other.fragments);
    }

    /// Returns the concatenated plain text of all runs.
    ///
    /// Attachment fragments contribute nothing to the plain text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            out.push_str(fragment.text());
        }
        out
    }
}

impl FromIterator<Fragment> for RichText {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Fragment> for RichText {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}

impl IntoIterator for RichText {
    type Item = Fragment;
    type IntoIter = alloc::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a RichText {
    type Item = &'a Fragment;
    type IntoIter = core::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
