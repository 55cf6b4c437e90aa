// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The stroke style of an underline decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    /// A single solid line. This is the default value.
    #[default]
    Single,

    /// A single line with a heavier stroke.
    Thick,

    /// Two parallel lines.
    Double,
}
