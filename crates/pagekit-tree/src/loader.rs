//! Directory-backed tree loading.
//!
//! Every directory under the source directory becomes a page named after
//! the directory. Inside a page directory:
//! - `content.txt` holds the raw page content (missing file = empty page)
//! - `meta.yaml` holds page attributes, e.g. `Test: true`
//!
//! Hidden and underscore-prefixed directories are skipped. Children are
//! added in name order so loading the same directory always yields the same
//! tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::crawler::DEFAULT_MAX_DEPTH;
use crate::error::TreeError;
use crate::page::{AttributeValue, PageId, validate_name};
use crate::tree::PageTree;

/// Configuration for [`TreeLoader`].
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    /// File holding page content inside each page directory.
    pub content_file: String,
    /// YAML attribute file inside each page directory.
    pub metadata_file: String,
    /// Name given to the root page.
    pub root_name: String,
    /// Maximum directory nesting below the source directory.
    pub max_depth: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            content_file: "content.txt".to_owned(),
            metadata_file: "meta.yaml".to_owned(),
            root_name: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Builds a [`PageTree`] from a directory hierarchy.
#[derive(Clone, Debug, Default)]
pub struct TreeLoader {
    config: LoaderConfig,
}

impl TreeLoader {
    /// Create a loader.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load the tree rooted at `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::SourceNotFound` if `source_dir` is not a directory,
    /// `TreeError::Io` if a directory or content file can't be read, and
    /// `TreeError::DepthExceeded` for nesting deeper than `max_depth`.
    pub fn load(&self, source_dir: &Path) -> Result<PageTree, TreeError> {
        if !source_dir.is_dir() {
            return Err(TreeError::SourceNotFound(source_dir.to_path_buf()));
        }

        let mut tree = PageTree::new(self.config.root_name.clone());
        let root = tree.root();
        self.load_page(&mut tree, root, source_dir)?;
        self.load_children(&mut tree, root, source_dir, 0)?;

        tracing::debug!(
            source_dir = %source_dir.display(),
            pages = tree.page_count(),
            "Loaded page tree"
        );

        Ok(tree)
    }

    /// Recursively add subdirectories of `dir` as children of `parent`.
    fn load_children(
        &self,
        tree: &mut PageTree,
        parent: PageId,
        dir: &Path,
        depth: usize,
    ) -> Result<(), TreeError> {
        for (name, path) in Self::page_dirs(dir)? {
            if depth >= self.config.max_depth {
                return Err(TreeError::DepthExceeded {
                    limit: self.config.max_depth,
                });
            }

            let page = tree.add_page(parent, name)?;
            self.load_page(tree, page, &path)?;
            self.load_children(tree, page, &path, depth + 1)?;
        }
        Ok(())
    }

    /// Read content and attributes for one page directory.
    fn load_page(&self, tree: &mut PageTree, page: PageId, dir: &Path) -> Result<(), TreeError> {
        let content_path = dir.join(&self.config.content_file);
        if content_path.is_file() {
            let content = fs::read_to_string(&content_path).map_err(|source| TreeError::Io {
                path: content_path.clone(),
                source,
            })?;
            tree.set_content(page, content)?;
        }

        for (name, value) in self.load_attributes(dir) {
            tree.set_attribute(page, name, value)?;
        }

        Ok(())
    }

    /// Load the attribute file, warning and skipping it if unreadable.
    ///
    /// Entries are converted one at a time, so a value that isn't a scalar
    /// only drops that entry.
    fn load_attributes(&self, dir: &Path) -> BTreeMap<String, AttributeValue> {
        let meta_path = dir.join(&self.config.metadata_file);
        if !meta_path.is_file() {
            return BTreeMap::new();
        }

        let parsed: Result<serde_yaml::Mapping, String> = fs::read_to_string(&meta_path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                if text.trim().is_empty() {
                    return Ok(serde_yaml::Mapping::new());
                }
                serde_yaml::from_str(&text).map_err(|e| e.to_string())
            });

        let mapping = match parsed {
            Ok(mapping) => mapping,
            Err(e) => {
                tracing::warn!(
                    path = %meta_path.display(),
                    error = %e,
                    "Failed to load page attributes"
                );
                return BTreeMap::new();
            }
        };

        mapping
            .into_iter()
            .filter_map(|(key, value)| {
                let entry = key.as_str().zip(attribute_from_yaml(&value));
                if entry.is_none() {
                    tracing::warn!(
                        path = %meta_path.display(),
                        key = ?key,
                        "Skipping page attribute that is not a scalar"
                    );
                }
                entry.map(|(name, value)| (name.to_owned(), value))
            })
            .collect()
    }

    /// List child page directories of `dir`, sorted by name.
    fn page_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, TreeError> {
        let entries = fs::read_dir(dir).map_err(|source| TreeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut dirs: Vec<_> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|e| {
                let Some(name) = e.file_name().to_str().map(str::to_owned) else {
                    tracing::warn!(
                        path = %e.path().display(),
                        "Skipping directory with non-UTF-8 name"
                    );
                    return None;
                };
                if name.starts_with('.') || name.starts_with('_') {
                    return None;
                }
                if validate_name(&name).is_err() {
                    tracing::warn!(
                        path = %e.path().display(),
                        "Skipping directory with invalid page name"
                    );
                    return None;
                }
                Some((name, e.path()))
            })
            .collect();

        dirs.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(dirs)
    }
}

/// Convert a YAML scalar to an attribute value.
///
/// A key with no value (`Test:`) marks the attribute as present.
fn attribute_from_yaml(value: &serde_yaml::Value) -> Option<AttributeValue> {
    match value {
        serde_yaml::Value::Null => Some(AttributeValue::Flag(true)),
        serde_yaml::Value::Bool(flag) => Some(AttributeValue::Flag(*flag)),
        serde_yaml::Value::Number(number) => Some(AttributeValue::Text(number.to_string())),
        serde_yaml::Value::String(text) => Some(AttributeValue::Text(text.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::crawler::PageCrawler;
    use crate::path::PathParser;

    fn create_page(root: &Path, rel: &str, content: Option<&str>, meta: Option<&str>) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = content {
            fs::write(dir.join("content.txt"), content).unwrap();
        }
        if let Some(meta) = meta {
            fs::write(dir.join("meta.yaml"), meta).unwrap();
        }
    }

    fn lookup(tree: &PageTree, path: &str) -> PageId {
        let path = PathParser::default().parse(path).unwrap();
        PageCrawler::new(tree).page_at(&path).unwrap()
    }

    #[test]
    fn test_load_missing_dir() {
        let result = TreeLoader::default().load(Path::new("/nonexistent/pages"));

        assert!(matches!(result, Err(TreeError::SourceNotFound(_))));
    }

    #[test]
    fn test_load_empty_dir() {
        let temp_dir = tempfile::tempdir().unwrap();

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        assert_eq!(tree.page_count(), 1);
    }

    #[test]
    fn test_load_nested_pages_with_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "Suite", None, None);
        create_page(temp_dir.path(), "Suite/SetUp", Some("|start|browser|"), None);
        create_page(
            temp_dir.path(),
            "Suite/LoginTest",
            Some("|check|login|"),
            Some("Test: true\n"),
        );

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        assert_eq!(tree.page_count(), 4);
        let setup = tree.try_page(lookup(&tree, "Suite.SetUp")).unwrap();
        assert_eq!(setup.content, "|start|browser|");
        let test = tree.try_page(lookup(&tree, "Suite.LoginTest")).unwrap();
        assert!(test.has_attribute("Test"));
        assert_eq!(test.content, "|check|login|");
    }

    #[test]
    fn test_load_children_sorted_by_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "Zeta", None, None);
        create_page(temp_dir.path(), "Alpha", None, None);
        create_page(temp_dir.path(), "Mid", None, None);

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let names: Vec<_> = tree
            .children(tree.root())
            .map(|id| tree.try_page(id).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_load_skips_hidden_and_invalid_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), ".git", None, None);
        create_page(temp_dir.path(), "_drafts", None, None);
        create_page(temp_dir.path(), "Has Space", None, None);
        create_page(temp_dir.path(), "Visible", None, None);

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        assert_eq!(tree.page_count(), 2);
        assert!(tree.find_child(tree.root(), "Visible").is_some());
    }

    #[test]
    fn test_load_ignores_invalid_metadata() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "Broken", Some("body"), Some("Test: [unclosed\n"));

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "Broken")).unwrap();
        assert!(page.attributes.is_empty());
        assert_eq!(page.content, "body");
    }

    #[test]
    fn test_load_mixed_type_metadata() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(
            temp_dir.path(),
            "LoginTest",
            None,
            Some("Test: true\nPriority: 1\nTimeout: 2.5\nHelp: checks login\n"),
        );

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "LoginTest")).unwrap();
        assert!(page.has_attribute("Test"));
        assert_eq!(page.attribute("Priority"), Some(&AttributeValue::Text("1".to_owned())));
        assert_eq!(page.attribute("Timeout"), Some(&AttributeValue::Text("2.5".to_owned())));
        assert_eq!(
            page.attribute("Help"),
            Some(&AttributeValue::Text("checks login".to_owned()))
        );
    }

    #[test]
    fn test_load_metadata_key_without_value_is_set() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "NullTest", None, Some("Test:\n"));

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "NullTest")).unwrap();
        assert!(page.has_attribute("Test"));
        assert_eq!(page.attribute("Test"), Some(&AttributeValue::Flag(true)));
    }

    #[test]
    fn test_load_metadata_skips_only_nested_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(
            temp_dir.path(),
            "TaggedTest",
            None,
            Some("Test: true\nTags: [smoke, login]\nOwner:\n  team: qa\n"),
        );

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "TaggedTest")).unwrap();
        assert!(page.has_attribute("Test"));
        assert_eq!(page.attributes.len(), 1);
    }

    #[test]
    fn test_load_metadata_false_flag_is_unset() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "Disabled", None, Some("Test: false\n"));

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "Disabled")).unwrap();
        assert!(!page.has_attribute("Test"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_skips_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let bad = temp_dir.path().join(OsStr::from_bytes(b"Bad\xff"));
        if fs::create_dir(&bad).is_err() {
            // Filesystem rejects non-UTF-8 names.
            return;
        }
        create_page(temp_dir.path(), "Visible", None, None);

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        assert_eq!(tree.page_count(), 2);
        assert!(tree.find_child(tree.root(), "Visible").is_some());
    }

    #[test]
    fn test_load_empty_metadata_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "Plain", None, Some(""));

        let tree = TreeLoader::default().load(temp_dir.path()).unwrap();

        assert!(tree.try_page(lookup(&tree, "Plain")).unwrap().attributes.is_empty());
    }

    #[test]
    fn test_load_root_content_and_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("content.txt"), "front page").unwrap();
        let config = LoaderConfig {
            root_name: "FrontPage".to_owned(),
            ..Default::default()
        };

        let tree = TreeLoader::new(config).load(temp_dir.path()).unwrap();

        let root = tree.try_page(tree.root()).unwrap();
        assert_eq!(root.name, "FrontPage");
        assert_eq!(root.content, "front page");
    }

    #[test]
    fn test_load_custom_file_names() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("Page");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("page.wiki"), "wiki text").unwrap();
        fs::write(dir.join("attrs.yml"), "Test: yes please\n").unwrap();
        let config = LoaderConfig {
            content_file: "page.wiki".to_owned(),
            metadata_file: "attrs.yml".to_owned(),
            ..Default::default()
        };

        let tree = TreeLoader::new(config).load(temp_dir.path()).unwrap();

        let page = tree.try_page(lookup(&tree, "Page")).unwrap();
        assert_eq!(page.content, "wiki text");
        assert_eq!(
            page.attribute("Test"),
            Some(&AttributeValue::Text("yes please".to_owned()))
        );
    }

    #[test]
    fn test_load_depth_exceeded() {
        let temp_dir = tempfile::tempdir().unwrap();
        create_page(temp_dir.path(), "A/B/C", None, None);
        let config = LoaderConfig {
            max_depth: 2,
            ..Default::default()
        };

        let result = TreeLoader::new(config).load(temp_dir.path());

        assert!(matches!(result, Err(TreeError::DepthExceeded { limit: 2 })));
    }
}
