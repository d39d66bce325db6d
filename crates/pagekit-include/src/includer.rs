//! Setup and teardown composition.
//!
//! [`SetupTeardownIncluder`] renders a test page by prefixing its content
//! with one `!include` directive per inherited fragment page:
//!
//! ```text
//!
//! !include -setup .Suite.SuiteSetUp
//!
//! !include =setup .Suite.SetUp
//!
//! !include -setup .Suite.SetUp
//!
//! !include -teardown .Suite.TearDown
//!
//! !include -teardown .Suite.SuiteTearDown
//! <page content>
//! ```
//!
//! Pages without the test attribute render as their own content.

use pagekit_tree::{DEFAULT_MAX_DEPTH, Page, PageCrawler, PageId, PageTree, PathParser};

use crate::error::IncludeError;
use crate::fragment::{FragmentKind, FragmentRef};

/// Configuration for [`SetupTeardownIncluder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncluderConfig {
    /// Attribute marking a page as a test page.
    pub test_attribute: String,
    /// Page-level setup page name.
    pub setup_name: String,
    /// Page-level teardown page name.
    pub teardown_name: String,
    /// Suite-level setup page name.
    pub suite_setup_name: String,
    /// Suite-level teardown page name.
    pub suite_teardown_name: String,
    /// Separator used when rendering included page paths.
    pub path_separator: String,
    /// Bound on ancestor walks.
    pub max_depth: usize,
}

impl Default for IncluderConfig {
    fn default() -> Self {
        Self {
            test_attribute: "Test".to_owned(),
            setup_name: "SetUp".to_owned(),
            teardown_name: "TearDown".to_owned(),
            suite_setup_name: "SuiteSetUp".to_owned(),
            suite_teardown_name: "SuiteTearDown".to_owned(),
            path_separator: PathParser::DEFAULT_SEPARATOR.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A single render call: which page, and whether suite fragments apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Page to render.
    pub target: PageId,
    /// Include suite setup and teardown pages.
    pub suite: bool,
}

impl RenderRequest {
    /// Render `target` as a standalone page.
    #[must_use]
    pub fn page(target: PageId) -> Self {
        Self {
            target,
            suite: false,
        }
    }

    /// Render `target` as part of a suite run.
    #[must_use]
    pub fn suite(target: PageId) -> Self {
        Self {
            target,
            suite: true,
        }
    }
}

/// Composes test pages with their inherited setup and teardown pages.
#[derive(Clone, Debug, Default)]
pub struct SetupTeardownIncluder {
    config: IncluderConfig,
    parser: PathParser,
}

impl SetupTeardownIncluder {
    /// Create an includer with default page names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an includer with custom configuration.
    #[must_use]
    pub fn with_config(config: IncluderConfig) -> Self {
        let parser = PathParser::new(config.path_separator.clone());
        Self { config, parser }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &IncluderConfig {
        &self.config
    }

    /// Render a page outside of a suite run.
    pub fn render_page(&self, tree: &PageTree, target: PageId) -> Result<String, IncludeError> {
        self.render(tree, target, false)
    }

    /// Render a [`RenderRequest`].
    pub fn render_request(
        &self,
        tree: &PageTree,
        request: &RenderRequest,
    ) -> Result<String, IncludeError> {
        self.render(tree, request.target, request.suite)
    }

    /// Render `target` with its setup and teardown directives.
    ///
    /// Test pages get one directive line per resolved fragment, in
    /// [`FragmentKind::sequence`] order, followed by their own content.
    /// Other pages render as their content unchanged.
    ///
    /// # Errors
    ///
    /// Returns `IncludeError::Tree` if `target` is not part of `tree` or the
    /// ancestor chain exceeds the configured depth bound.
    pub fn render(
        &self,
        tree: &PageTree,
        target: PageId,
        suite: bool,
    ) -> Result<String, IncludeError> {
        let page = tree.try_page(target)?;
        let mut content = String::new();

        if self.is_test_page(page) {
            let crawler = PageCrawler::new(tree).with_max_depth(self.config.max_depth);
            for kind in FragmentKind::sequence(suite) {
                self.include(&crawler, target, kind.reference(&self.config), &mut content)?;
            }
        }

        content.push_str(&page.content);
        Ok(content)
    }

    /// Render `target` and store the result as its new content.
    pub fn update_page_content(
        &self,
        tree: &mut PageTree,
        target: PageId,
        suite: bool,
    ) -> Result<(), IncludeError> {
        let content = self.render(tree, target, suite)?;
        tree.set_content(target, content)?;
        Ok(())
    }

    fn is_test_page(&self, page: &Page) -> bool {
        page.has_attribute(&self.config.test_attribute)
    }

    /// Append a directive for `fragment` if `target` inherits such a page.
    fn include(
        &self,
        crawler: &PageCrawler<'_>,
        target: PageId,
        fragment: FragmentRef<'_>,
        content: &mut String,
    ) -> Result<(), IncludeError> {
        let Some(inherited) = crawler.inherited_page(fragment.name, target)? else {
            tracing::trace!(name = fragment.name, "No inherited page");
            return Ok(());
        };

        let path_name = self.parser.render(&crawler.full_path(inherited)?);
        tracing::debug!(
            name = fragment.name,
            marker = fragment.marker,
            path = %path_name,
            "Including inherited page"
        );
        build_include_directive(content, &path_name, fragment.marker);
        Ok(())
    }
}

fn build_include_directive(content: &mut String, path_name: &str, marker: &str) {
    content.push_str("\n!include ");
    content.push_str(marker);
    content.push_str(" .");
    content.push_str(path_name);
    content.push('\n');
}
