//! Configuration management for the Quantheo viewer.
//!
//! Settings come from three layers, later layers winning:
//! built-in defaults, an optional config file, and CLI flags.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::resolver::Anchors;

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Default height of the embedding region, in CSS pixels.
pub const DEFAULT_EMBED_HEIGHT: u32 = 800;

/// Port used when a bind address names only a host.
pub const DEFAULT_PORT: u16 = 8501;

/// Config file extensions we know how to parse, in lookup order.
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid config value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the app runs from (None = detect from executable).
    pub app_dir: Option<PathBuf>,
    /// Project root (None = parent of the app dir).
    pub project_root: Option<PathBuf>,
    /// Address the web server listens on.
    pub bind: String,
    /// Height of the embedded visualization.
    pub embed_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_dir: None,
            project_root: None,
            bind: DEFAULT_BIND.to_string(),
            embed_height: DEFAULT_EMBED_HEIGHT,
        }
    }
}

impl Settings {
    /// Compute the resolver anchors for these settings.
    pub fn anchors(&self) -> io::Result<Anchors> {
        Anchors::detect(self.app_dir.clone(), self.project_root.clone())
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory the app runs from.
    #[serde(default)]
    pub app_dir: Option<String>,
    /// Project root directory.
    #[serde(default)]
    pub project_root: Option<String>,
    /// Bind address for the web server.
    #[serde(default)]
    pub bind: Option<String>,
    /// Embed region height.
    #[serde(default)]
    pub embed_height: Option<u32>,
    /// Path to the config file this was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// The format is picked from the file extension; unknown extensions are
    /// parsed as TOML.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match ext {
            "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string())),
            "json" => serde_json::from_str(contents).map_err(|e| parse_err(e.to_string())),
            _ => toml::from_str(contents).map_err(|e| parse_err(e.to_string())),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(
        &self,
        settings: &mut Settings,
        base_dir: &Path,
    ) -> Result<(), ConfigError> {
        if let Some(ref app_dir) = self.app_dir {
            settings.app_dir = Some(self.resolve_path(app_dir, base_dir));
        }
        if let Some(ref root) = self.project_root {
            settings.project_root = Some(self.resolve_path(root, base_dir));
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(height) = self.embed_height {
            if height == 0 {
                return Err(ConfigError::Invalid {
                    key: "embed_height",
                    message: "must be greater than zero".to_string(),
                });
            }
            settings.embed_height = height;
        }
        Ok(())
    }
}

/// Options for loading settings, usually from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides discovery).
    pub config_path: Option<PathBuf>,
    pub app_dir: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub bind: Option<String>,
}

/// Look for a config file in the working directory, then the user config dir.
fn discover_config_file(working_dir: &Path) -> Option<PathBuf> {
    let local = CONFIG_EXTENSIONS
        .iter()
        .map(|ext| working_dir.join(format!("quantheo.{}", ext)));

    let user = dirs::config_dir().into_iter().flat_map(|dir| {
        CONFIG_EXTENSIONS
            .iter()
            .map(move |ext| dir.join("quantheo").join(format!("config.{}", ext)))
    });

    local.chain(user).find(|p| p.is_file())
}

/// Load settings with explicit options.
pub async fn load_settings_with_options(options: LoadOptions) -> Result<Settings, ConfigError> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config_path = options
        .config_path
        .clone()
        .or_else(|| discover_config_file(&working_dir));

    let config = match config_path {
        Some(ref path) => {
            tracing::debug!("Loading config from {}", path.display());
            Config::load_from_path(path).await?
        }
        None => Config::default(),
    };

    let mut settings = Settings::default();
    let base_dir = config.base_dir().unwrap_or_else(|| working_dir.clone());
    config.apply_to_settings(&mut settings, &base_dir)?;

    // CLI flags take precedence over the config file
    if let Some(app_dir) = options.app_dir {
        settings.app_dir = Some(app_dir);
    }
    if let Some(root) = options.project_root {
        settings.project_root = Some(root);
    }
    if let Some(bind) = options.bind {
        settings.bind = bind;
    }

    Ok(settings)
}
