// Copyright 2026 the Attributed Storage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute keys, values, and the per-range attribute map.

use alloc::borrow::Cow;
use alloc::sync::Arc;

use format_primitives::{Color, FontDescriptor, ParagraphStyle, UnderlineStyle};
use hashbrown::HashMap;

/// A key identifying one attribute within an attribute map.
///
/// The well-known keys cover the formatting and structural markers the storage model itself
/// reasons about; arbitrary caller-defined keys use [`AttributeKey::Custom`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// The font used to render the text.
    Font,

    /// The foreground (text) color.
    ForegroundColor,

    /// Block-level layout properties.
    ParagraphStyle,

    /// Marks a location as representing a structural block unit (e.g. a newline or an embedded
    /// block).
    BlockContentType,

    /// Marks a location as representing an inline embedded unit (e.g. an attachment or emoji).
    InlineContentType,

    /// Marks a location as a block-level attachment.
    IsBlockAttachment,

    /// Marks a location as an inline attachment.
    IsInlineAttachment,

    /// Underline decoration.
    UnderlineStyle,

    /// An arbitrary caller-defined key.
    Custom(Arc<str>),
}

impl AttributeKey {
    /// Creates a caller-defined key with the given name.
    pub fn custom(name: &str) -> Self {
        Self::Custom(Arc::from(name))
    }

    /// Returns `true` if this key belongs to the default attribute set.
    ///
    /// Default attributes ([`Font`](Self::Font), [`ForegroundColor`](Self::ForegroundColor),
    /// [`ParagraphStyle`](Self::ParagraphStyle)) are present at every location of a buffer,
    /// always; removing one triggers immediate restoration.
    pub fn is_default(&self) -> bool {
        matches!(
            self,
            Self::Font | Self::ForegroundColor | Self::ParagraphStyle
        )
    }
}

/// A name identifying the kind of content a block or inline marker represents.
///
/// The vocabulary is open: [`ContentName::newline`] and [`ContentName::paragraph`] are the names
/// the storage model itself knows about, and callers may introduce their own with
/// [`ContentName::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentName(Cow<'static, str>);

impl ContentName {
    /// Creates a content name from an arbitrary string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The name given to bare newline characters by the reconciler.
    pub fn newline() -> Self {
        Self(Cow::Borrowed("newline"))
    }

    /// The name for paragraph-level block content.
    pub fn paragraph() -> Self {
        Self(Cow::Borrowed("paragraph"))
    }

    /// The name for content of unknown kind.
    pub fn unknown() -> Self {
        Self(Cow::Borrowed("unknown"))
    }

    /// Returns the underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A typed attribute value, compared by equality per variant.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font descriptor.
    Font(FontDescriptor),

    /// A color value.
    Color(Color),

    /// A paragraph style.
    ParagraphStyle(ParagraphStyle),

    /// A block or inline content type name.
    ContentType(ContentName),

    /// An underline decoration style.
    Underline(UnderlineStyle),

    /// A boolean flag.
    Bool(bool),

    /// An integer payload.
    Int(i64),

    /// A text payload.
    Text(Arc<str>),
}

impl From<FontDescriptor> for AttributeValue {
    fn from(value: FontDescriptor) -> Self {
        Self::Font(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<ParagraphStyle> for AttributeValue {
    fn from(value: ParagraphStyle) -> Self {
        Self::ParagraphStyle(value)
    }
}

impl From<ContentName> for AttributeValue {
    fn from(value: ContentName) -> Self {
        Self::ContentType(value)
    }
}

impl From<UnderlineStyle> for AttributeValue {
    fn from(value: UnderlineStyle) -> Self {
        Self::Underline(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(Arc::from(value))
    }
}

/// The attribute map carried by one span of text.
///
/// Maps are compared by value; span merging relies on this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    map: HashMap<AttributeKey, AttributeValue>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.map.get(key)
    }

    /// Inserts `value` for `key`, returning the previous value if one was present.
    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.map.insert(key, value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.map.remove(key)
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merges every entry of `other` into this map, overwriting existing keys.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.map.insert(key.clone(), value.clone());
        }
    }

    /// Merges only the entries of `other` whose keys are absent from this map.
    pub fn merge_missing(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            if !self.map.contains_key(key) {
                self.map.insert(key.clone(), value.clone());
            }
        }
    }

    /// Iterates over the entries of the map in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.map.iter()
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_compare_by_value() {
        let a = Attributes::new()
            .with(AttributeKey::custom("attr1"), 1_i64)
            .with(AttributeKey::UnderlineStyle, UnderlineStyle::Single);
        let b = Attributes::new()
            .with(AttributeKey::UnderlineStyle, UnderlineStyle::Single)
            .with(AttributeKey::custom("attr1"), 1_i64);
        assert_eq!(a, b);

        let c = Attributes::new().with(AttributeKey::custom("attr1"), 2_i64);
        assert_ne!(a, c);
    }

    #[test]
    fn merge_missing_does_not_overwrite() {
        let mut incoming = Attributes::new().with(AttributeKey::custom("attr1"), 11_i64);
        let inherited = Attributes::new()
            .with(AttributeKey::custom("attr1"), 1_i64)
            .with(AttributeKey::custom("attr2"), 2_i64);

        incoming.merge_missing(&inherited);

        assert_eq!(
            incoming.get(&AttributeKey::custom("attr1")),
            Some(&AttributeValue::Int(11))
        );
        assert_eq!(
            incoming.get(&AttributeKey::custom("attr2")),
            Some(&AttributeValue::Int(2))
        );
    }

    #[test]
    fn default_key_classification() {
        assert!(AttributeKey::Font.is_default());
        assert!(AttributeKey::ForegroundColor.is_default());
        assert!(AttributeKey::ParagraphStyle.is_default());
        assert!(!AttributeKey::UnderlineStyle.is_default());
        assert!(!AttributeKey::custom("attr1").is_default());
    }

    #[test]
    fn content_names() {
        assert_eq!(ContentName::newline().as_str(), "newline");
        assert_eq!(ContentName::new("panel").as_str(), "panel");
        assert_eq!(ContentName::new("newline"), ContentName::newline());
    }
}
