// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values possible with variable
/// fonts.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Visual style or "slope" of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// An upright or "roman" style. This is the default value.
    #[default]
    Normal,

    /// A cursive style.
    Italic,

    /// A skewed style.
    Oblique,
}

/// Describes a generic font family category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// Glyphs have finishing strokes, flared or tapering ends.
    Serif,

    /// Glyphs have stroke endings that are plain. This is the default value.
    #[default]
    SansSerif,

    /// All glyphs have the same fixed width.
    Monospace,

    /// Glyphs in cursive fonts generally have either joining strokes or other cursive
    /// characteristics.
    Cursive,

    /// The default user interface font on a given platform.
    SystemUi,
}

/// A font family, either a named family or a generic category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A named font family, such as `Arial`.
    Named(Cow<'static, str>),

    /// A generic font family category, resolved by the platform.
    Generic(GenericFamily),
}

impl FontFamily {
    /// Creates a named font family.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::Generic(GenericFamily::default())
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(value: GenericFamily) -> Self {
        Self::Generic(value)
    }
}

/// A description of a font: family, size, weight, and style.
///
/// This is a value type compared by equality; resolution against available fonts is the
/// presentation layer's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// The font family.
    pub family: FontFamily,

    /// The font size in pixels.
    pub size: f32,

    /// The font weight.
    pub weight: FontWeight,

    /// The font style.
    pub style: FontStyle,
}

impl FontDescriptor {
    /// Creates a descriptor for the given family at the given size, with normal weight and style.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(FontFamily::default(), 16.0)
    }
}
