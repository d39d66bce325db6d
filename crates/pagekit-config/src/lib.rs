//! Configuration management for pagekit.
//!
//! Parses `pagekit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [tree]
//! source_dir = "pages"
//! content_file = "content.txt"
//! metadata_file = "meta.yaml"
//! root_name = ""
//!
//! [include]
//! test_attribute = "Test"
//! setup_name = "SetUp"
//! teardown_name = "TearDown"
//! suite_setup_name = "SuiteSetUp"
//! suite_teardown_name = "SuiteTearDown"
//! path_separator = "."
//! max_depth = 256
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override page tree source directory.
    pub source_dir: Option<PathBuf>,
    /// Override ancestor walk bound.
    pub max_depth: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagekit.toml";

/// Upper bound accepted for `include.max_depth`.
const MAX_DEPTH_LIMIT: usize = 10_000;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page tree configuration (paths are relative strings from TOML).
    tree: TreeConfigRaw,
    /// Inclusion configuration.
    pub include: IncludeConfig,

    /// Resolved page tree configuration (set after loading).
    #[serde(skip)]
    pub tree_resolved: TreeConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw page tree configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TreeConfigRaw {
    source_dir: Option<String>,
    content_file: Option<String>,
    metadata_file: Option<String>,
    root_name: Option<String>,
}

/// Resolved page tree configuration with absolute paths.
#[derive(Debug)]
pub struct TreeConfig {
    /// Directory holding the page hierarchy.
    pub source_dir: PathBuf,
    /// File holding page content inside each page directory.
    pub content_file: String,
    /// YAML attribute file inside each page directory.
    pub metadata_file: String,
    /// Name of the root page (empty for an unnamed root).
    pub root_name: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("pages"),
            content_file: "content.txt".to_owned(),
            metadata_file: "meta.yaml".to_owned(),
            root_name: String::new(),
        }
    }
}

/// Setup and teardown inclusion configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IncludeConfig {
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
    /// Separator between segments of rendered page paths.
    pub path_separator: String,
    /// Maximum number of ancestor steps when resolving pages.
    pub max_depth: usize,
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            test_attribute: "Test".to_owned(),
            setup_name: "SetUp".to_owned(),
            teardown_name: "TearDown".to_owned(),
            suite_setup_name: "SuiteSetUp".to_owned(),
            suite_teardown_name: "SuiteTearDown".to_owned(),
            path_separator: ".".to_owned(),
            max_depth: 256,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a field to be usable as a single page name.
fn require_page_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value
        .chars()
        .any(|c| c == '.' || c == '/' || c.is_whitespace())
    {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single page name without '.', '/' or spaces"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagekit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.tree_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(max_depth) = settings.max_depth {
            self.include.max_depth = max_depth;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            tree: TreeConfigRaw::default(),
            include: IncludeConfig::default(),
            tree_resolved: TreeConfig {
                source_dir: base.join("pages"),
                ..TreeConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_tree()?;
        self.validate_include()?;
        Ok(())
    }

    /// Validate page tree configuration.
    fn validate_tree(&self) -> Result<(), ConfigError> {
        let tree = &self.tree_resolved;
        require_non_empty(&tree.content_file, "tree.content_file")?;
        require_non_empty(&tree.metadata_file, "tree.metadata_file")?;

        if tree.content_file == tree.metadata_file {
            return Err(ConfigError::Validation(
                "tree.content_file and tree.metadata_file must differ".to_owned(),
            ));
        }

        if !tree.root_name.is_empty() {
            require_page_name(&tree.root_name, "tree.root_name")?;
        }

        Ok(())
    }

    /// Validate inclusion configuration.
    fn validate_include(&self) -> Result<(), ConfigError> {
        let include = &self.include;
        require_non_empty(&include.test_attribute, "include.test_attribute")?;
        require_page_name(&include.setup_name, "include.setup_name")?;
        require_page_name(&include.teardown_name, "include.teardown_name")?;
        require_page_name(&include.suite_setup_name, "include.suite_setup_name")?;
        require_page_name(&include.suite_teardown_name, "include.suite_teardown_name")?;

        if !matches!(include.path_separator.as_str(), "." | "/") {
            return Err(ConfigError::Validation(
                "include.path_separator must be \".\" or \"/\"".to_owned(),
            ));
        }

        if include.max_depth == 0 {
            return Err(ConfigError::Validation(
                "include.max_depth must be greater than 0".to_owned(),
            ));
        }
        if include.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "include.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = TreeConfig::default();

        self.tree_resolved = TreeConfig {
            source_dir: config_dir.join(self.tree.source_dir.as_deref().unwrap_or("pages")),
            content_file: self
                .tree
                .content_file
                .clone()
                .unwrap_or(defaults.content_file),
            metadata_file: self
                .tree
                .metadata_file
                .clone()
                .unwrap_or(defaults.metadata_file),
            root_name: self.tree.root_name.clone().unwrap_or(defaults.root_name),
        };
    }
}
