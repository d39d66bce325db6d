//! Page data types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Handle to a page inside a [`PageTree`](crate::PageTree).
///
/// A plain arena index. Only meaningful for the tree that issued it: an id
/// from another tree is rejected when its index is out of range, and
/// otherwise refers to whatever page sits at that index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) usize);

impl PageId {
    /// Arena index of the page.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Page attribute value.
///
/// Attributes come either as flags (`Test: true`) or free text
/// (`Help: "Checks login"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag.
    Flag(bool),
    /// Text value.
    Text(String),
}

impl AttributeValue {
    /// Whether the attribute counts as set.
    ///
    /// Every value except `Flag(false)` is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Page data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// Page name (one path segment). Empty only for an unnamed root.
    pub name: String,
    /// Raw page content.
    pub content: String,
    /// Page attributes keyed by name.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Page {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            content: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Check whether the attribute is present and set.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.get(name).is_some_and(AttributeValue::is_set)
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// Validate a page name.
///
/// Names are single path segments: non-empty, no `.` or `/`, no whitespace.
pub(crate) fn validate_name(name: &str) -> Result<(), TreeError> {
    let valid = !name.is_empty()
        && !name
            .chars()
            .any(|c| c == '.' || c == '/' || c.is_whitespace() || c.is_control());

    if valid {
        Ok(())
    } else {
        Err(TreeError::InvalidName(name.to_owned()))
    }
}
