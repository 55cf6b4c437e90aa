// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use crate::range::validate_range;
use crate::spans::SpanList;
use crate::{Attributes, Error};

/// A block of text paired with the attribute runs covering it.
///
/// This is the sole interchange type crossing the storage boundary: replacements consume it and
/// substring extraction produces it. Runs partition the text, so every location carries a
/// (possibly empty) attribute map, the same shape as a buffer's internal representation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributedContent {
    text: String,
    spans: SpanList,
}

impl AttributedContent {
    /// Creates content with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, Attributes::new())
    }

    /// Creates content with `attrs` applied to the whole text.
    pub fn with_attributes(text: impl Into<String>, attrs: Attributes) -> Self {
        let text = text.into();
        let mut spans = SpanList::new();
        if !text.is_empty() {
            spans.push(text.len(), attrs);
        }
        Self { text, spans }
    }

    pub(crate) fn from_parts(text: String, spans: SpanList) -> Self {
        debug_assert_eq!(spans.len(), text.len(), "runs must partition the text");
        Self { text, spans }
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Applies `attrs` to `range`, overwriting keys already set there.
    ///
    /// The range is validated against the text (bounds and UTF-8 boundaries) before applying.
    pub fn apply_attributes(&mut self, range: Range<usize>, attrs: Attributes) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.spans.apply(range, |existing| existing.merge(&attrs));
        Ok(())
    }

    /// Appends `other`'s text and attribute runs to this content.
    pub fn append(&mut self, other: &Self) {
        self.text.push_str(&other.text);
        for (range, attrs) in other.spans.iter_ranges() {
            self.spans.push(range.len(), attrs.clone());
        }
    }

    /// The attribute map at `index`, with the maximal contiguous range sharing it.
    ///
    /// Returns `None` if `index` is past the end of the text.
    pub fn attributes_at(&self, index: usize) -> Option<(&Attributes, Range<usize>)> {
        self.spans.attrs_at(index)
    }

    /// Iterates over `(range, attributes)` runs in text order.
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> {
        self.spans.iter_ranges()
    }

    pub(crate) fn runs(&self) -> &SpanList {
        &self.spans
    }
}

impl From<&str> for AttributedContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
