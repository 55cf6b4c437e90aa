// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use format_primitives::{Color, FontDescriptor, ParagraphStyle, DEFAULT_TEXT_COLOR};

/// Supplies the default formatting a buffer must exhibit wherever no other values are set.
///
/// Implementations must be side-effect-free and idempotent; a single provider may be shared
/// across multiple buffers. Swapping a buffer's provider does not rewrite existing content, it
/// only affects future restorations.
pub trait DefaultTextFormat: Debug {
    /// The font used where none is set.
    fn default_font(&self) -> FontDescriptor;

    /// The paragraph style used where none is set.
    fn default_paragraph_style(&self) -> ParagraphStyle;

    /// The foreground color used where none is set.
    fn default_text_color(&self) -> Color;
}

/// The built-in fallback format, used when no provider is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTextFormat;

impl DefaultTextFormat for BuiltinTextFormat {
    fn default_font(&self) -> FontDescriptor {
        FontDescriptor::default()
    }

    fn default_paragraph_style(&self) -> ParagraphStyle {
        ParagraphStyle::default()
    }

    fn default_text_color(&self) -> Color {
        DEFAULT_TEXT_COLOR
    }
}
