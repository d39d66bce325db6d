//! Config and page tree loading shared by all commands.

use std::path::PathBuf;

use clap::Args;
use pagekit_config::{CliSettings, Config};
use pagekit_include::IncluderConfig;
use pagekit_tree::{LoaderConfig, PageTree, TreeLoader};

use crate::error::CliError;

/// Arguments selecting the config file and page tree.
#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover pagekit.toml).
    #[arg(short, long, env = "PAGEKIT_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Page tree source directory (overrides config).
    #[arg(short, long)]
    pub(crate) source_dir: Option<PathBuf>,

    /// Maximum ancestor depth (overrides config).
    #[arg(long)]
    pub(crate) max_depth: Option<usize>,
}

impl SourceArgs {
    /// Load config with CLI overrides, then the page tree it points at.
    pub(crate) fn load(&self) -> Result<(Config, PageTree), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            max_depth: self.max_depth,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::info!(
            source_dir = %config.tree_resolved.source_dir.display(),
            "Loading page tree"
        );
        let tree = TreeLoader::new(loader_config(&config)).load(&config.tree_resolved.source_dir)?;

        Ok((config, tree))
    }
}

/// Map loaded configuration onto the tree loader.
pub(crate) fn loader_config(config: &Config) -> LoaderConfig {
    LoaderConfig {
        content_file: config.tree_resolved.content_file.clone(),
        metadata_file: config.tree_resolved.metadata_file.clone(),
        root_name: config.tree_resolved.root_name.clone(),
        max_depth: config.include.max_depth,
    }
}

/// Map loaded configuration onto the includer.
pub(crate) fn includer_config(config: &Config) -> IncluderConfig {
    let include = &config.include;
    IncluderConfig {
        test_attribute: include.test_attribute.clone(),
        setup_name: include.setup_name.clone(),
        teardown_name: include.teardown_name.clone(),
        suite_setup_name: include.suite_setup_name.clone(),
        suite_teardown_name: include.suite_teardown_name.clone(),
        path_separator: include.path_separator.clone(),
        max_depth: include.max_depth,
    }
}
