//! `pagekit render` command implementation.

use clap::Args;
use pagekit_include::{RenderRequest, SetupTeardownIncluder};
use pagekit_tree::{PageCrawler, PathParser};

use super::source::{SourceArgs, includer_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Page path, e.g. `AcceptanceSuite.LoginTest`.
    pub(crate) path: String,

    /// Include suite setup and teardown pages.
    #[arg(long)]
    pub(crate) suite: bool,

    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or tree loading fails, the page
    /// does not exist, or composition fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let rendered = self.compose()?;
        output.content(&rendered);
        Ok(())
    }

    /// Load the tree and compose the requested page.
    fn compose(&self) -> Result<String, CliError> {
        let (config, tree) = self.source.load()?;
        let includer = SetupTeardownIncluder::with_config(includer_config(&config));

        let parser = PathParser::new(config.include.path_separator.clone());
        let path = parser.parse(&self.path)?;
        let target = PageCrawler::new(&tree)
            .with_max_depth(config.include.max_depth)
            .page_at(&path)
            .ok_or_else(|| CliError::PageNotFound(self.path.clone()))?;

        let request = RenderRequest {
            target,
            suite: self.suite,
        };
        let rendered = includer.render_request(&tree, &request)?;

        tracing::info!(page = %self.path, suite = self.suite, "Rendered page");
        Ok(rendered)
    }
}
