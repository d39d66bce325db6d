//! `pagekit tree` command implementation.

use clap::Args;
use pagekit_tree::{PageCrawler, PageTree, PathParser};

use super::source::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args, Debug)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

/// One listed page.
#[derive(Debug, PartialEq, Eq)]
struct TreeEntry {
    path: String,
    is_test: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or tree loading fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (config, tree) = self.source.load()?;
        let parser = PathParser::new(config.include.path_separator.clone());
        let include = &config.include;
        let entries = list_pages(&tree, &parser, include.max_depth, &include.test_attribute)?;

        for entry in &entries {
            let line = format!("{}{}", parser.separator(), entry.path);
            if entry.is_test {
                output.highlight(&format!("{line}  [test]"));
            } else {
                output.line(&line);
            }
        }

        let tests = entries.iter().filter(|e| e.is_test).count();
        output.success(&format!("{} pages, {tests} test pages", entries.len()));
        Ok(())
    }
}

/// Full paths of every page, parents before children.
fn list_pages(
    tree: &PageTree,
    parser: &PathParser,
    max_depth: usize,
    test_attribute: &str,
) -> Result<Vec<TreeEntry>, CliError> {
    let crawler = PageCrawler::new(tree).with_max_depth(max_depth);

    tree.ids()
        .map(|id| -> Result<TreeEntry, CliError> {
            let page = tree.try_page(id)?;
            let path = crawler.full_path(id)?;
            Ok(TreeEntry {
                path: parser.render(&path),
                is_test: page.has_attribute(test_attribute),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_list_pages_marks_tests() {
        let mut tree = PageTree::new("");
        let suite = tree.add_page(tree.root(), "Suite").unwrap();
        tree.add_page(suite, "SetUp").unwrap();
        let test = tree.add_page(suite, "LoginTest").unwrap();
        tree.set_attribute(test, "Test", true).unwrap();

        let entries = list_pages(&tree, &PathParser::default(), 16, "Test").unwrap();

        assert_eq!(
            entries,
            vec![
                TreeEntry { path: String::new(), is_test: false },
                TreeEntry { path: "Suite".to_owned(), is_test: false },
                TreeEntry { path: "Suite.SetUp".to_owned(), is_test: false },
                TreeEntry { path: "Suite.LoginTest".to_owned(), is_test: true },
            ]
        );
    }
}
