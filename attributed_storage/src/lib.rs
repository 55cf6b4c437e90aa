// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mutable text storage model with range-annotated formatting attributes.
//!
//! The centerpiece is [`AttributedBuffer`]: a buffer of UTF-8 text whose sub-ranges carry
//! attribute maps, reconciled after every edit so that a strict set of invariants always holds —
//! default attributes (font, foreground color, paragraph style) are present everywhere,
//! non-inheritable structural markers never leak across an edit, and bare newlines are tagged
//! with a block content type. See the [`AttributedBuffer`] docs for the full contract.
//!
//! Content crosses the storage boundary as [`AttributedContent`]: text plus attribute runs, the
//! same shape as the buffer's internal representation.
//!
//! ```
//! use attributed_storage::{AttributeKey, AttributedBuffer, AttributedContent, Attributes};
//!
//! let mut buffer = AttributedBuffer::new();
//! buffer.replace_range(0..0, &AttributedContent::new("Hello, world!"))?;
//! buffer.add_attributes(&Attributes::new().with(AttributeKey::custom("emphasis"), true), 0..5)?;
//!
//! let (attrs, effective_range) = buffer.attributes_at(0)?;
//! assert!(attrs.contains(&AttributeKey::Font));
//! assert_eq!(effective_range, 0..5);
//! # Ok::<(), attributed_storage::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attribute;
mod buffer;
mod content;
mod defaults;
mod error;
mod range;
mod reconcile;
mod spans;

pub use crate::attribute::{AttributeKey, AttributeValue, Attributes, ContentName};
pub use crate::buffer::AttributedBuffer;
pub use crate::content::AttributedContent;
pub use crate::defaults::{BuiltinTextFormat, DefaultTextFormat};
pub use crate::error::{Error, ErrorKind};
