//! Page hierarchy.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` with parent/children relationships
//! tracked by indices. A page owns its children through the index lists; the
//! parent link is a plain index and never owns anything. Index 0 is always
//! the root.
//!
//! Pages are only ever attached to an existing parent, so the parent chain
//! of every page is finite and acyclic by construction.

use crate::error::TreeError;
use crate::page::{AttributeValue, Page, PageId, validate_name};

const ROOT: usize = 0;

/// In-memory page hierarchy.
#[derive(Clone, Debug)]
pub struct PageTree {
    pages: Vec<Page>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
}

impl PageTree {
    /// Create a tree containing only a root page.
    ///
    /// An empty `root_name` gives an unnamed root that contributes no
    /// segment to full paths.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            pages: vec![Page::new(root_name.into())],
            children: vec![Vec::new()],
            parents: vec![None],
        }
    }

    /// The root page.
    #[must_use]
    pub fn root(&self) -> PageId {
        PageId(ROOT)
    }

    /// Number of pages, root included.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a child page under `parent`.
    ///
    /// # Returns
    ///
    /// Id of the added page.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidName` for names that are not a single path
    /// segment, `TreeError::DuplicateChild` if `parent` already has a child
    /// with that name, and `TreeError::UnknownPage` for a foreign `parent`.
    pub fn add_page(
        &mut self,
        parent: PageId,
        name: impl Into<String>,
    ) -> Result<PageId, TreeError> {
        let name = name.into();
        validate_name(&name)?;
        let parent_page = self.get(parent).ok_or(TreeError::UnknownPage(parent.0))?;

        if self.find_child(parent, &name).is_some() {
            return Err(TreeError::DuplicateChild {
                parent: parent_page.name.clone(),
                name,
            });
        }

        let idx = self.pages.len();
        self.pages.push(Page::new(name));
        self.children.push(Vec::new());
        self.parents.push(Some(parent.0));
        self.children[parent.0].push(idx);

        Ok(PageId(idx))
    }

    /// Get a page.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0)
    }

    /// Get a page, failing for ids whose index is out of range.
    pub fn try_page(&self, id: PageId) -> Result<&Page, TreeError> {
        self.get(id).ok_or(TreeError::UnknownPage(id.0))
    }

    /// Parent of a page, `None` for the root.
    #[must_use]
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.parents.get(id.0).copied().flatten().map(PageId)
    }

    /// Children of a page in insertion order.
    pub fn children(&self, id: PageId) -> impl Iterator<Item = PageId> + '_ {
        self.children
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|&i| PageId(i))
    }

    /// Find the child of `parent` named `name`.
    #[must_use]
    pub fn find_child(&self, parent: PageId, name: &str) -> Option<PageId> {
        self.children(parent)
            .find(|&child| self.pages[child.0].name == name)
    }

    /// All page ids, root first, parents before children.
    pub fn ids(&self) -> impl Iterator<Item = PageId> {
        (0..self.pages.len()).map(PageId)
    }

    /// Replace the content of a page.
    pub fn set_content(&mut self, id: PageId, content: impl Into<String>) -> Result<(), TreeError> {
        let page = self
            .pages
            .get_mut(id.0)
            .ok_or(TreeError::UnknownPage(id.0))?;
        page.content = content.into();
        Ok(())
    }

    /// Set an attribute on a page.
    pub fn set_attribute(
        &mut self,
        id: PageId,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), TreeError> {
        let page = self
            .pages
            .get_mut(id.0)
            .ok_or(TreeError::UnknownPage(id.0))?;
        page.attributes.insert(name.into(), value.into());
        Ok(())
    }
}
