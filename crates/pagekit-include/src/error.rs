//! Inclusion error types.

use pagekit_tree::TreeError;

/// Error returned when composing a page fails.
///
/// A missing setup or teardown page is not an error; it is simply not
/// included.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    /// Tree navigation failed (foreign page id or depth bound exceeded).
    #[error("{0}")]
    Tree(#[from] TreeError),
}
