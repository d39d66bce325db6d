//! Full page paths and their text form.
//!
//! A [`PagePath`] is the ordered list of page names from the tree root down
//! to a page. [`PathParser`] converts between paths and their rendered form,
//! e.g. `FrontPage.LoginSuite.SetUp`.

use std::fmt;

use crate::error::TreeError;
use crate::page::validate_name;

/// Ordered sequence of page names, root first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PagePath {
    segments: Vec<String>,
}

impl PagePath {
    /// Create an empty path (the root).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment (the page's own name).
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Return a new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }
}

impl<S: Into<String>> FromIterator<S> for PagePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PathParser::default().render(self))
    }
}

/// Renders and parses page paths using a separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathParser {
    separator: String,
}

impl Default for PathParser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEPARATOR)
    }
}

impl PathParser {
    /// Separator used by wiki paths.
    pub const DEFAULT_SEPARATOR: &'static str = ".";

    /// Create a parser with a custom separator.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator between segments.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Join path segments with the separator.
    #[must_use]
    pub fn render(&self, path: &PagePath) -> String {
        path.segments().join(&self.separator)
    }

    /// Parse a rendered path.
    ///
    /// A single leading separator (absolute form, `.FrontPage.SetUp`) is
    /// accepted. An empty string is the root path.
    pub fn parse(&self, text: &str) -> Result<PagePath, TreeError> {
        let text = text.strip_prefix(self.separator.as_str()).unwrap_or(text);
        if text.is_empty() {
            return Ok(PagePath::new());
        }

        text.split(self.separator.as_str())
            .map(|segment| validate_name(segment).map(|()| segment))
            .collect()
    }
}
