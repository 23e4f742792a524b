use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::{EmptyPolicy, RenderStyle, VersionParser, DEFAULT_PREFIX};
use crate::error::{BumpError, Result};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gitbump.toml";

/// Name of the configuration file looked up in the user config directory
pub const USER_CONFIG_FILE_NAME: &str = ".gitbump.toml";

/// Represents the complete configuration for git-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub versions: VersionsConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

/// Returns the default list of recognized version prefixes.
fn default_prefixes() -> Vec<String> {
    vec![DEFAULT_PREFIX.to_string()]
}

fn default_bootstrap_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// What to do when the repository has no version tags yet
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnEmpty {
    #[default]
    Fail,
    Bootstrap,
}

/// How tag names are read and written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VersionsConfig {
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    #[serde(default)]
    pub render: RenderStyle,

    #[serde(default)]
    pub on_empty: OnEmpty,

    #[serde(default = "default_bootstrap_prefix")]
    pub bootstrap_prefix: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        VersionsConfig {
            prefixes: default_prefixes(),
            render: RenderStyle::default(),
            on_empty: OnEmpty::default(),
            bootstrap_prefix: default_bootstrap_prefix(),
        }
    }
}

fn default_sign() -> bool {
    true
}

fn default_message() -> String {
    "{version}".to_string()
}

/// How new tags are created.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TagConfig {
    #[serde(default = "default_sign")]
    pub sign: bool,

    /// Annotation message; `{version}` is replaced with the new tag name
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            sign: default_sign(),
            message: default_message(),
        }
    }
}

impl Config {
    /// Build the parser for the configured prefixes.
    ///
    /// When bootstrapping, `bootstrap_prefix` is recognized as well so the
    /// tags it produces are found on the next run.
    pub fn parser(&self) -> Result<VersionParser> {
        let mut prefixes = self.versions.prefixes.clone();
        if self.versions.on_empty == OnEmpty::Bootstrap {
            prefixes.push(self.versions.bootstrap_prefix.clone());
        }
        VersionParser::new(&prefixes)
    }

    /// The policy for a repository without version tags
    pub fn empty_policy(&self) -> EmptyPolicy {
        match self.versions.on_empty {
            OnEmpty::Fail => EmptyPolicy::Fail,
            OnEmpty::Bootstrap => EmptyPolicy::Bootstrap {
                prefix: self.versions.bootstrap_prefix.clone(),
            },
        }
    }

    /// Annotation message for a new tag
    pub fn tag_message(&self, tag: &str) -> String {
        self.tag.message.replace("{version}", tag)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `.gitbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        debug!("no configuration file, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)
        .map_err(|e| BumpError::config(format!("Cannot read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("Cannot parse {}: {}", path.display(), e)))?;

    // reject bad prefixes at load time
    config.parser()?;
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
