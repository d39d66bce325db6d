//! CLI error types.

use pagekit_config::ConfigError;
use pagekit_include::IncludeError;
use pagekit_tree::TreeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Include(#[from] IncludeError),

    #[error("Page not found: {0}")]
    PageNotFound(String),
}
