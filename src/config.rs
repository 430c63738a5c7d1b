use crate::error::Result;
use crate::version::VersionBump;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "roman-semver.toml";
/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".roman-semver.toml";

/// Represents the complete configuration for the roman-semver command line.
///
/// The codecs themselves take no configuration; these settings only shape
/// how the binary reads its arguments and renders results.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub roman: RomanConfig,

    #[serde(default)]
    pub version: VersionConfig,
}

/// Output settings for roman numerals.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RomanConfig {
    #[serde(default)]
    pub lowercase: bool,
}

/// Returns the default bump used when no part is given.
fn default_bump() -> VersionBump {
    VersionBump::Patch
}

/// Returns the default list of prefixes stripped from version arguments.
fn default_prefixes() -> Vec<String> {
    vec!["v".to_string(), "V".to_string()]
}

/// Settings for the semver commands.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_bump")]
    pub default_bump: VersionBump,

    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            default_bump: default_bump(),
            prefixes: default_prefixes(),
        }
    }
}

impl VersionConfig {
    /// Removes the first configured prefix found at the start of `input`
    /// (e.g. "v1.2.3" -> "1.2.3").
    pub fn strip_prefix<'a>(&self, input: &'a str) -> &'a str {
        self.prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| input.strip_prefix(prefix.as_str()))
            .unwrap_or(input)
    }
}

/// Finds the configuration file to use, if any.
///
/// Looks in the following order:
/// 1. Custom path provided as parameter
/// 2. `roman-semver.toml` in current directory
/// 3. `.roman-semver.toml` in user config directory
fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
