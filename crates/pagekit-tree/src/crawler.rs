//! Read-only navigation over a [`PageTree`].
//!
//! [`PageCrawler`] computes full paths, walks ancestor chains, and resolves
//! inherited pages: a page named `SetUp` defined anywhere along the chain
//! from a page up to the root applies to that page, with the nearest
//! definition shadowing any further up.
//!
//! Every walk is bounded by `max_depth`. Trees built through [`PageTree`]
//! can't contain cycles, so the bound only trips on hierarchies deeper than
//! configured.

use crate::error::TreeError;
use crate::page::{Page, PageId};
use crate::path::PagePath;
use crate::tree::PageTree;

/// Default bound on ancestor walks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Read-only navigation over a page tree.
#[derive(Clone, Copy, Debug)]
pub struct PageCrawler<'a> {
    tree: &'a PageTree,
    max_depth: usize,
}

impl<'a> PageCrawler<'a> {
    /// Create a crawler with the default depth bound.
    #[must_use]
    pub fn new(tree: &'a PageTree) -> Self {
        Self {
            tree,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum number of parent steps a walk may take.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The tree being crawled.
    #[must_use]
    pub fn tree(&self) -> &'a PageTree {
        self.tree
    }

    /// Iterate from `page` up to the root, `page` included.
    pub fn ancestors(&self, page: PageId) -> Ancestors<'a> {
        Ancestors {
            tree: self.tree,
            next: self.tree.get(page).map(|_| page),
            steps: 0,
            max_depth: self.max_depth,
        }
    }

    /// Full path of a page, root first.
    ///
    /// The root contributes a segment only when it is named.
    pub fn full_path(&self, page: PageId) -> Result<PagePath, TreeError> {
        self.tree.try_page(page)?;

        let mut names = Vec::new();
        for ancestor in self.ancestors(page) {
            let (_, ancestor) = ancestor?;
            if !ancestor.name.is_empty() {
                names.push(ancestor.name.as_str());
            }
        }
        names.reverse();

        Ok(names.into_iter().collect())
    }

    /// Look up a page by full path.
    ///
    /// With a named root, a leading segment equal to the root name always
    /// refers to the root, matching what [`full_path`](Self::full_path)
    /// renders. A child that shares the root's name is reached as
    /// `Root.Root`.
    #[must_use]
    pub fn page_at(&self, path: &PagePath) -> Option<PageId> {
        let root = self.tree.root();
        let mut segments = path.segments().iter().map(String::as_str).peekable();

        // A named root may appear as the first segment.
        let root_name = self.tree.get(root).map_or("", |p| p.name.as_str());
        if !root_name.is_empty() && segments.peek() == Some(&root_name) {
            segments.next();
        }

        segments.try_fold(root, |current, name| self.tree.find_child(current, name))
    }

    /// Find the nearest page named `name` inherited by `from`.
    ///
    /// Checks the children of `from`, then the children of each ancestor in
    /// turn up to the root. The first match wins.
    ///
    /// # Returns
    ///
    /// `None` when no page on the chain has such a child.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::UnknownPage` for a foreign `from` and
    /// `TreeError::DepthExceeded` if the chain is longer than `max_depth`.
    pub fn inherited_page(&self, name: &str, from: PageId) -> Result<Option<PageId>, TreeError> {
        self.tree.try_page(from)?;

        for ancestor in self.ancestors(from) {
            let (scope, _) = ancestor?;
            if let Some(found) = self.tree.find_child(scope, name) {
                tracing::trace!(name, scope = %scope, found = %found, "Resolved inherited page");
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

/// Iterator over a page and its ancestors, nearest first.
///
/// Yields `Err(TreeError::DepthExceeded)` once and then stops if the chain
/// is longer than the crawler's depth bound.
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a PageTree,
    next: Option<PageId>,
    steps: usize,
    max_depth: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Result<(PageId, &'a Page), TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if self.steps > self.max_depth {
            return Some(Err(TreeError::DepthExceeded {
                limit: self.max_depth,
            }));
        }

        let page = self.tree.get(current)?;
        self.steps += 1;
        self.next = self.tree.parent(current);

        Some(Ok((current, page)))
    }
}
