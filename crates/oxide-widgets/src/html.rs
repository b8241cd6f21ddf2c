//! HTML escaping, attribute maps and a minimal tag builder.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, WidgetError};

/// Attributes rendered before all others, in this order.
const PRIORITY: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "for", "title", "alt", "role", "style",
];

/// Elements that have no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// The value of a single HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Rendered as `name="value"`.
    Str(String),
    /// `true` renders the bare name, `false` omits the attribute.
    Bool(bool),
    /// Suppresses the attribute, including any lower-precedence value.
    Null,
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Option<String>> for AttrValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Str)
    }
}

/// Ordered HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, keeping its original position when replacing.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an attribute only when no value exists for it yet.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        if !self.contains(&key) {
            self.entries.push((key, value.into()));
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Gets a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttrValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns whether the attribute would be rendered.
    pub fn is_active(&self, key: &str) -> bool {
        matches!(
            self.get(key),
            Some(AttrValue::Str(_) | AttrValue::Bool(true))
        )
    }

    /// Returns whether any value, including `Null`, is set for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into these attributes; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value.clone());
        }
    }

    /// Appends CSS classes, skipping ones already present.
    pub fn add_class(&mut self, class: &str) {
        let mut classes: Vec<String> = self
            .get_str("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        for token in class.split_whitespace() {
            if !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
        if !classes.is_empty() {
            self.set("class", classes.join(" "));
        }
    }

    /// Renders attributes as an HTML attribute string with a leading
    /// space per attribute.
    pub fn to_html(&self) -> String {
        let mut ordered: Vec<&(String, AttrValue)> = Vec::with_capacity(self.entries.len());
        for key in PRIORITY {
            ordered.extend(self.entries.iter().filter(|(k, _)| k == key));
        }
        ordered.extend(
            self.entries
                .iter()
                .filter(|(k, _)| !PRIORITY.contains(&k.as_str())),
        );

        ordered
            .into_iter()
            .filter_map(|(k, v)| match v {
                AttrValue::Str(s) => Some(format!(r#" {k}="{}""#, html_escape(s))),
                AttrValue::Bool(true) => Some(format!(" {k}")),
                AttrValue::Bool(false) | AttrValue::Null => None,
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of HTML attributes")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Attributes, A::Error> {
                let mut attrs = Attributes::new();
                while let Some((key, value)) = access.next_entry::<String, AttrValue>()? {
                    attrs.set(key, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// A single HTML element.
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    content: String,
}

impl Tag {
    /// Creates a tag, rejecting empty names.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WidgetError::EmptyTagName);
        }
        Ok(Self {
            name: name.to_ascii_lowercase(),
            attributes: Attributes::new(),
            content: String::new(),
        })
    }

    /// Merges attributes into the tag.
    #[must_use]
    pub fn attributes(mut self, attrs: &Attributes) -> Self {
        self.attributes.merge(attrs);
        self
    }

    /// Sets a single attribute.
    #[must_use]
    pub fn attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Appends CSS classes.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    /// Appends escaped text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.content.push_str(&html_escape(text));
        self
    }

    /// Appends raw HTML content.
    #[must_use]
    pub fn raw(mut self, html: &str) -> Self {
        self.content.push_str(html);
        self
    }

    /// Returns whether the element has no closing tag.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    /// Renders the opening tag.
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attributes.to_html())
    }

    /// Renders the closing tag.
    pub fn close(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!("</{}>", self.name)
        }
    }

    /// Renders the whole element.
    pub fn render(&self) -> String {
        if self.is_void() {
            self.open()
        } else {
            format!("{}{}{}", self.open(), self.content, self.close())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attributes_priority_order() {
        let attrs = Attributes::new()
            .with("data-x", "1")
            .with("name", "n")
            .with("type", "text")
            .with("id", "i");
        assert_eq!(
            attrs.to_html(),
            r#" type="text" id="i" name="n" data-x="1""#
        );
    }

    #[test]
    fn test_bool_and_null_attributes() {
        let attrs = Attributes::new()
            .with("disabled", true)
            .with("required", false)
            .with("title", AttrValue::Null);
        assert_eq!(attrs.to_html(), " disabled");
        assert!(attrs.is_active("disabled"));
        assert!(!attrs.is_active("required"));
        assert!(attrs.contains("title"));
    }

    #[test]
    fn test_merge_higher_wins() {
        let mut low = Attributes::new().with("class", "a").with("id", "x");
        let high = Attributes::new().with("id", AttrValue::Null);
        low.merge(&high);
        assert_eq!(low.to_html(), r#" class="a""#);
    }

    #[test]
    fn test_add_class_dedup() {
        let mut attrs = Attributes::new().with("class", "form-control");
        attrs.add_class("is-invalid form-control");
        assert_eq!(attrs.get_str("class"), Some("form-control is-invalid"));
    }

    #[test]
    fn test_tag_render() {
        let tag = Tag::new("div")
            .unwrap()
            .class("mb-3")
            .text("a < b");
        assert_eq!(tag.render(), r#"<div class="mb-3">a &lt; b</div>"#);

        let input = Tag::new("input").unwrap().attr("type", "text");
        assert_eq!(input.render(), r#"<input type="text">"#);
    }

    #[test]
    fn test_tag_empty_name() {
        assert!(matches!(Tag::new(""), Err(WidgetError::EmptyTagName)));
        assert!(matches!(Tag::new("  "), Err(WidgetError::EmptyTagName)));
    }

    #[test]
    fn test_attributes_deserialize_keeps_order() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"data-b": "2", "autofocus": true, "title": null}"#).unwrap();
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["data-b", "autofocus", "title"]);
        assert_eq!(attrs.to_html(), r#" data-b="2" autofocus"#);
    }
}
