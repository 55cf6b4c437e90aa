// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range validation and clamping helpers.
//!
//! Every fallible operation validates its range up front via [`validate_range`]; clamping is
//! reserved, by contract, for substring extraction ([`clamp_range`]).

use core::ops::Range;

use crate::Error;

/// Validates a byte range against `text`: ordering, bounds, and UTF-8 boundary alignment.
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, len));
    }
    if range.start > len || range.end > len {
        return Err(Error::invalid_bounds(range.start, range.end, len));
    }
    if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(range.start, range.end, len));
    }
    Ok(())
}

/// Clamps `range` to `[0, text.len()]`, snapping each endpoint down to a character boundary.
///
/// A start past the end of the text produces an empty range at the end.
pub(crate) fn clamp_range(text: &str, range: &Range<usize>) -> Range<usize> {
    let start = floor_char_boundary(text, range.start.min(text.len()));
    let end = floor_char_boundary(text, range.end.min(text.len()));
    start..end.max(start)
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
