//! Shared configuration loader for the wiki toolchain.
//!
//! `defaults/wiki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wiki_babel::diff::DiffStyle;
use wiki_babel::FormatOptions;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/wiki.default.toml");

/// Name of the per-directory configuration file picked up automatically.
pub const LOCAL_CONFIG_FILE: &str = "wiki.toml";

/// Top-level configuration consumed by wiki applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    pub markup: MarkupConfig,
    pub diff: DiffConfig,
    pub search: SearchConfig,
}

/// Mirrors the knobs exposed by the markup formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub allow_file_scheme: bool,
}

impl From<&MarkupConfig> for FormatOptions {
    fn from(config: &MarkupConfig) -> Self {
        FormatOptions::new(config.allow_file_scheme)
    }
}

impl From<MarkupConfig> for FormatOptions {
    fn from(config: MarkupConfig) -> Self {
        FormatOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffConfig {
    pub style: DiffStyle,
    pub width: usize,
}

/// Page discovery and hit presentation for `wiki search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub extensions: Vec<String>,
    pub emphasize: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}
