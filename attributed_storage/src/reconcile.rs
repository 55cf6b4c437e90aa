// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute reconciliation, run after every replacement.
//!
//! Three steps, in order: non-inheritable stripping (expressed as [`inherited_attributes`],
//! computed before the splice), special-character injection
//! ([`fix_newline_content_type`]), and default restoration
//! ([`restore_default_attributes`]). The order matters: injected content types must be present
//! before any downstream query, and default restoration must not be short-circuited by
//! stripping.

use core::ops::Range;

use hashbrown::HashSet;

use crate::spans::SpanList;
use crate::{AttributeKey, Attributes, ContentName, DefaultTextFormat};

/// The attributes the text being overwritten may pass on to its replacement: everything present
/// in `outgoing` except keys in the non-inheritable set.
pub(crate) fn inherited_attributes(
    outgoing: &Attributes,
    non_inheritable: &HashSet<AttributeKey>,
) -> Attributes {
    outgoing
        .iter()
        .filter(|(key, _)| !non_inheritable.contains(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Tags every newline in `region` that lacks a block content type with
/// [`ContentName::newline`].
///
/// Fires per character, independent of surrounding context. No analogous rule exists for
/// attachment markers (U+FFFC): their attributes must be supplied explicitly.
pub(crate) fn fix_newline_content_type(text: &str, spans: &mut SpanList, region: Range<usize>) {
    for (offset, ch) in text[region.clone()].char_indices() {
        if ch != '\n' {
            continue;
        }
        let at = region.start + offset;
        spans.apply(at..at + 1, |attrs| {
            if !attrs.contains(&AttributeKey::BlockContentType) {
                attrs.insert(AttributeKey::BlockContentType, ContentName::newline());
            }
        });
    }
}

/// Restores any default attribute (font, foreground color, paragraph style) missing from a
/// location in `region`, fetching values from `defaults`.
pub(crate) fn restore_default_attributes(
    spans: &mut SpanList,
    region: Range<usize>,
    defaults: &dyn DefaultTextFormat,
) {
    let font = defaults.default_font();
    let color = defaults.default_text_color();
    let paragraph = defaults.default_paragraph_style();
    spans.apply(region, |attrs| {
        if !attrs.contains(&AttributeKey::Font) {
            attrs.insert(AttributeKey::Font, font.clone());
        }
        if !attrs.contains(&AttributeKey::ForegroundColor) {
            attrs.insert(AttributeKey::ForegroundColor, color);
        }
        if !attrs.contains(&AttributeKey::ParagraphStyle) {
            attrs.insert(AttributeKey::ParagraphStyle, paragraph.clone());
        }
    });
}
