//! Page tree, paths and crawler for pagekit.
//!
//! This crate provides:
//! - [`PageTree`]: in-memory page hierarchy with index-based parent links
//! - [`PagePath`] and [`PathParser`]: full page paths and their text form
//! - [`PageCrawler`]: read-only navigation and inherited page lookup
//! - [`TreeLoader`]: builds a tree from a directory hierarchy
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), pagekit_tree::TreeError> {
//! use pagekit_tree::{AttributeValue, PageCrawler, PageTree, PathParser};
//!
//! let mut tree = PageTree::new("");
//! let suite = tree.add_page(tree.root(), "AcceptanceSuite")?;
//! tree.add_page(suite, "SetUp")?;
//! let test = tree.add_page(suite, "LoginTest")?;
//! tree.set_attribute(test, "Test", AttributeValue::Flag(true))?;
//!
//! let crawler = PageCrawler::new(&tree);
//! let setup = crawler.inherited_page("SetUp", test)?.unwrap();
//! let path = crawler.full_path(setup)?;
//! assert_eq!(PathParser::default().render(&path), "AcceptanceSuite.SetUp");
//! # Ok(())
//! # }
//! ```

mod crawler;
mod error;
mod loader;
mod page;
mod path;
mod tree;

pub use crawler::{Ancestors, DEFAULT_MAX_DEPTH, PageCrawler};
pub use error::TreeError;
pub use loader::{LoaderConfig, TreeLoader};
pub use page::{AttributeValue, Page, PageId};
pub use path::{PagePath, PathParser};
pub use tree::PageTree;
