//! Page tree error types.

use std::path::PathBuf;

/// Error returned by tree construction, navigation and loading.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Page name is empty or contains a path separator or whitespace.
    #[error("Invalid page name: {0:?}")]
    InvalidName(String),
    /// Sibling names must be unique.
    #[error("Page {parent:?} already has a child named {name:?}")]
    DuplicateChild {
        /// Name of the parent page.
        parent: String,
        /// Rejected child name.
        name: String,
    },
    /// Page id index is out of range for this tree.
    #[error("Unknown page id: {0}")]
    UnknownPage(usize),
    /// Ancestor walk went past the configured depth bound.
    #[error("Page hierarchy exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// Configured depth bound.
        limit: usize,
    },
    /// Tree source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// I/O error while loading a tree.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
