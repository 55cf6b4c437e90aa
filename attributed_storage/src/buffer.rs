// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashSet;

use crate::range::{clamp_range, validate_range};
use crate::reconcile::{
    fix_newline_content_type, inherited_attributes, restore_default_attributes,
};
use crate::spans::{Span, SpanList};
use crate::{
    AttributeKey, AttributedContent, Attributes, BuiltinTextFormat, DefaultTextFormat, Error,
};

/// A mutable text buffer whose sub-ranges carry formatting and structural attributes.
///
/// The buffer owns its text and an ordered run list of attribute spans, and reconciles
/// attributes after every replacement so that three invariants always hold:
///
/// - every location carries non-nil font, foreground color, and paragraph style values, either
///   explicitly set or supplied by the installed [`DefaultTextFormat`];
/// - non-inheritable structural attributes (content types, attachment markers, underline) never
///   leak from overwritten text into its replacement;
/// - bare newlines are tagged with [`ContentName::newline`](crate::ContentName::newline).
///
/// All indices and ranges are byte offsets into UTF-8 text and must lie on character
/// boundaries. Operations validate before mutating: a failed edit leaves the buffer unchanged.
///
/// The buffer is not internally synchronized; callers serialize access on a single logical
/// thread of control.
#[derive(Debug)]
pub struct AttributedBuffer {
    text: String,
    spans: SpanList,
    format: Arc<dyn DefaultTextFormat>,
    non_inheritable: HashSet<AttributeKey>,
}

impl AttributedBuffer {
    /// Creates an empty buffer with the built-in fallback format.
    pub fn new() -> Self {
        Self::with_format(Arc::new(BuiltinTextFormat))
    }

    /// Creates an empty buffer with the given format provider installed.
    pub fn with_format(format: Arc<dyn DefaultTextFormat>) -> Self {
        Self {
            text: String::new(),
            spans: SpanList::new(),
            format,
            non_inheritable: [
                AttributeKey::BlockContentType,
                AttributeKey::InlineContentType,
                AttributeKey::IsBlockAttachment,
                AttributeKey::IsInlineAttachment,
                AttributeKey::UnderlineStyle,
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Creates a buffer holding `content`, reconciled as an initial insertion.
    pub fn from_content(content: &AttributedContent) -> Self {
        let mut buffer = Self::new();
        buffer
            .replace_range(0..0, content)
            .expect("inserting into an empty buffer cannot fail");
        buffer
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The range covering the whole buffer, `0..len`.
    pub fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }

    /// Installs a new format provider.
    ///
    /// Existing content is not rewritten; the new provider supplies values for future
    /// restorations only.
    pub fn set_format(&mut self, format: Arc<dyn DefaultTextFormat>) {
        self.format = format;
    }

    /// Adds `key` to the non-inheritable attribute set.
    ///
    /// Non-inheritable attributes never survive a replacement unless the incoming content
    /// explicitly re-supplies them. The set initially contains the structural keys
    /// (block/inline content types, attachment markers, underline style).
    pub fn mark_non_inheritable(&mut self, key: AttributeKey) {
        self.non_inheritable.insert(key);
    }

    /// Returns `true` if `key` is treated as non-inheritable by this buffer.
    pub fn is_non_inheritable(&self, key: &AttributeKey) -> bool {
        self.non_inheritable.contains(key)
    }

    /// Replaces the characters in `range` with `content`, then reconciles the inserted region.
    ///
    /// The attributes present at the start of the replaced range, minus non-inheritable keys,
    /// are inherited by every incoming location that does not explicitly carry the key; explicit
    /// incoming keys always win. Bare newlines in the incoming text are tagged, and missing
    /// default attributes are restored from the installed provider.
    ///
    /// Fails without mutating the buffer if `range` is out of bounds, inverted, or not on
    /// character boundaries.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        content: &AttributedContent,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;

        // Non-inheritable stripping happens here: only the surviving keys of the overwritten
        // text are carried into incoming locations that lack them.
        let inherited = if !range.is_empty() && !content.is_empty() {
            let (outgoing, _) = self
                .spans
                .attrs_at(range.start)
                .expect("non-empty validated range starts inside the buffer");
            inherited_attributes(outgoing, &self.non_inheritable)
        } else {
            Attributes::new()
        };

        let mut incoming: Vec<Span> = content.runs().clone_spans();
        if !inherited.is_empty() {
            for span in &mut incoming {
                span.attrs.merge_missing(&inherited);
            }
        }

        self.text.replace_range(range.clone(), content.as_str());
        self.spans.splice(range.clone(), incoming);

        let new_region = range.start..range.start + content.len();
        fix_newline_content_type(&self.text, &mut self.spans, new_region.clone());
        restore_default_attributes(&mut self.spans, new_region, self.format.as_ref());
        Ok(())
    }

    /// Merges `attrs` into every location of `range`, splitting runs at the boundaries.
    ///
    /// No reconciliation runs: explicit caller intent is authoritative here.
    pub fn add_attributes(&mut self, attrs: &Attributes, range: Range<usize>) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.spans.apply(range, |existing| existing.merge(attrs));
        Ok(())
    }

    /// Removes `key` from every location of `range`.
    ///
    /// If `key` is a default attribute it is immediately restored from the installed provider;
    /// the buffer is never observable with a default attribute missing. Other keys simply
    /// disappear.
    pub fn remove_attribute(&mut self, key: &AttributeKey, range: Range<usize>) -> Result<(), Error> {
        self.remove_attributes(core::slice::from_ref(key), range)
    }

    /// Removes every key in `keys` from every location of `range`, restoring defaults as
    /// [`remove_attribute`](Self::remove_attribute) does.
    pub fn remove_attributes(
        &mut self,
        keys: &[AttributeKey],
        range: Range<usize>,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        self.spans.apply(range.clone(), |attrs| {
            for key in keys {
                attrs.remove(key);
            }
        });
        if keys.iter().any(AttributeKey::is_default) {
            restore_default_attributes(&mut self.spans, range, self.format.as_ref());
        }
        Ok(())
    }

    /// The attribute map at `index`, with the maximal contiguous range sharing it.
    ///
    /// Returns a snapshot of the map. Querying at or past the end of the text is an error,
    /// except index `0` on an empty buffer, which returns empty attributes with range `0..0`.
    pub fn attributes_at(&self, index: usize) -> Result<(Attributes, Range<usize>), Error> {
        if self.text.is_empty() && index == 0 {
            return Ok((Attributes::new(), 0..0));
        }
        match self.spans.attrs_at(index) {
            Some((attrs, range)) => Ok((attrs.clone(), range)),
            None => Err(Error::index_out_of_bounds(index, self.text.len())),
        }
    }

    /// Copies the text and attribute runs in `range`.
    ///
    /// By contract this clamps rather than fails: the range is clamped to the buffer bounds
    /// (and down to character boundaries), so a request extending past the end returns only the
    /// valid prefix. Callers that need to detect truncation compare requested and returned
    /// lengths.
    pub fn attributed_substring(&self, range: Range<usize>) -> AttributedContent {
        let range = clamp_range(&self.text, &range);
        AttributedContent::from_parts(
            String::from(&self.text[range.clone()]),
            self.spans.slice(range),
        )
    }

    /// Iterates over `(range, attributes)` runs in text order.
    ///
    /// Runs are maximal: adjacent runs always differ in at least one attribute.
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> {
        self.spans.iter_ranges()
    }
}

impl Default for AttributedBuffer {
    fn default() -> Self {
        Self::new()
    }
}
