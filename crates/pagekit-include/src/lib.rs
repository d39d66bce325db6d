//! Setup and teardown page inclusion for pagekit.
//!
//! This crate provides:
//! - [`SetupTeardownIncluder`]: prefixes a test page with `!include`
//!   directives for the setup and teardown pages it inherits
//! - [`FragmentKind`]: the fragments a render can include, in order
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pagekit_include::SetupTeardownIncluder;
//! use pagekit_tree::PageTree;
//!
//! let mut tree = PageTree::new("");
//! let suite = tree.add_page(tree.root(), "Suite")?;
//! tree.add_page(suite, "SetUp")?;
//! let test = tree.add_page(suite, "LoginTest")?;
//! tree.set_attribute(test, "Test", true)?;
//! tree.set_content(test, "|check|login|")?;
//!
//! let html = SetupTeardownIncluder::new().render_page(&tree, test)?;
//! assert!(html.starts_with("\n!include =setup .Suite.SetUp\n"));
//! assert!(html.ends_with("|check|login|"));
//! # Ok(())
//! # }
//! ```

mod error;
mod fragment;
mod includer;

pub use error::IncludeError;
pub use fragment::{FragmentKind, FragmentRef};
pub use includer::{IncluderConfig, RenderRequest, SetupTeardownIncluder};
