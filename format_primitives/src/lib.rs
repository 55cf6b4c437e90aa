// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental text formatting property types.
//!
//! This crate is a lightweight, `no_std`-friendly vocabulary layer for attributed text storage:
//! small, typed representations of fonts, paragraph styles, and text decorations, with value
//! equality suitable for use inside attribute maps.
//!
//! Color values come from [`peniko`]; this crate re-exports [`Color`] so downstream crates do not
//! need a direct peniko dependency for the common case.
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

mod decoration;
mod font;
mod paragraph;

pub use decoration::UnderlineStyle;
pub use font::{FontDescriptor, FontFamily, FontStyle, FontWeight, GenericFamily};
pub use paragraph::{Alignment, ParagraphStyle};

/// An RGBA color value.
pub use peniko::Color;

/// The foreground color used when no other color is set: opaque black.
pub const DEFAULT_TEXT_COLOR: Color = peniko::color::palette::css::BLACK;
