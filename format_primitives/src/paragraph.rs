// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the leading edge. This is the default value.
    #[default]
    Start,

    /// Center within the available width.
    Center,

    /// Align to the trailing edge.
    End,

    /// Stretch lines to fill the available width.
    Justified,
}

/// Block-level layout properties for a paragraph of text.
///
/// All spacing and indent values are in pixels. The default value has start alignment and no
/// extra spacing or indentation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment of lines.
    pub alignment: Alignment,

    /// Extra space between lines.
    pub line_spacing: f32,

    /// Extra space after the paragraph.
    pub paragraph_spacing: f32,

    /// Indentation of the first line.
    pub first_line_indent: f32,

    /// Indentation of every line after the first.
    pub head_indent: f32,
}
