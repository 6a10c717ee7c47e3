use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub markdown: MarkdownConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    /// Remove `output_dir` before building.
    pub clean: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            clean: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MarkdownConfig {
    pub ordered_list: ListNumbering,
}

/// How ordered list markers are validated during block classification.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListNumbering {
    /// Markers must read `1. `, `2. `, `3. `, ... in order.
    #[default]
    Strict,
    /// Any `<digits>. ` marker is accepted on every line.
    Lenient,
}

impl Config {
    /// The configuration bundled with the binary.
    ///
    /// # Panics
    ///
    /// Panics if `default_config.toml` does not match [`Config`]; the build
    /// script checks its shape and `embedded_default_deserializes` covers it.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml must deserialize into Config")
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::compiled_default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_default_deserializes() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok(), "{config:?}");
    }

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("[markdown]\nordered_list = \"lenient\"\n").unwrap();
        assert_eq!(config.markdown.ordered_list, ListNumbering::Lenient);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn site_paths_override() {
        let config: Config =
            toml::from_str("[site]\noutput_dir = \"docs\"\nclean = false\n").unwrap();
        assert_eq!(config.site.output_dir, PathBuf::from("docs"));
        assert!(!config.site.clean);
        assert_eq!(config.site.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("site.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[markdown\nordered_list = 3").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_numbering_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[markdown]\nordered_list = \"loose\"\n");
        assert!(result.is_err());
    }
}
