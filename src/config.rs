//! Tool configuration parsing.
//!
//! Configuration lives in an optional `assetprep.toml` next to where the tool
//! is run. Every key has a default, so the file (and every section in it) may
//! be omitted entirely.
//!
//! # Example assetprep.toml
//!
//! ```toml
//! [output]
//! root = "public/images"
//!
//! [network]
//! max_retries = 3
//! timeout_secs = 20
//! user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
//!
//! [font]
//! paths = ["fonts/font.ttf"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_OUTPUT_ROOT: &str = "public/images";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Raw TOML structure.
#[derive(Debug, Default, Deserialize)]
struct ConfigToml {
    #[serde(default)]
    output: OutputToml,
    #[serde(default)]
    network: NetworkToml,
    #[serde(default)]
    font: FontToml,
}

#[derive(Debug, Default, Deserialize)]
struct OutputToml {
    root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct NetworkToml {
    max_retries: Option<u32>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FontToml {
    #[serde(default)]
    paths: Vec<PathBuf>,
}

/// Resolved tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory all relative asset paths are joined onto.
    pub output_root: PathBuf,
    /// Maximum download attempts per image.
    pub max_retries: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-agent header sent with every download request.
    pub user_agent: String,
    /// Font files tried before the system chain.
    pub font_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            font_paths: Vec::new(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Toml(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

impl Config {
    /// Load configuration from a TOML file, applying defaults for any key
    /// the file does not set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let toml: ConfigToml = toml::from_str(&content)?;
        let defaults = Self::default();

        Ok(Self {
            output_root: toml.output.root.unwrap_or(defaults.output_root),
            max_retries: toml.network.max_retries.unwrap_or(defaults.max_retries),
            timeout: toml
                .network
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: toml.network.user_agent.unwrap_or(defaults.user_agent),
            font_paths: toml.font.paths,
        })
    }

    /// Load configuration, falling back to defaults when the file is absent.
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/assetprep.toml")).unwrap();
        assert_eq!(config.output_root, PathBuf::from("public/images"));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.font_paths.is_empty());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetprep.toml");
        fs::write(&path, "[network]\nmax_retries = 5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.output_root, PathBuf::from("public/images"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetprep.toml");
        fs::write(
            &path,
            concat!(
                "[output]\nroot = \"out/images\"\n\n",
                "[network]\nmax_retries = 1\ntimeout_secs = 5\nuser_agent = \"test-agent\"\n\n",
                "[font]\npaths = [\"fonts/a.ttf\", \"fonts/b.ttf\"]\n",
            ),
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_root, PathBuf::from("out/images"));
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.font_paths.len(), 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetprep.toml");
        fs::write(&path, "[network\nmax_retries = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Toml(_))));
    }
}
