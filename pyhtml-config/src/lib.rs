//! Configuration loader for the pyhtml compiler.
//!
//! `defaults/pyhtml.default.toml` is embedded into the binary so the documented defaults and
//! runtime behavior cannot drift. A user file and command-line overrides are layered on top
//! with [`Loader`] before deserializing into [`PyhtmlConfig`].
//!
//! The binary looks for a project file named [`PROJECT_FILE`] next to the source document
//! unless a file is passed explicitly.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

/// File name of the optional per-project configuration.
pub const PROJECT_FILE: &str = "pyhtml.toml";

const DEFAULT_TOML: &str = include_str!("../defaults/pyhtml.default.toml");

/// Top-level configuration consumed by the pyhtml binary.
#[derive(Debug, Clone, Deserialize)]
pub struct PyhtmlConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where and how compiled output is written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Extension used to derive the output path from the input path.
    pub extension: String,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. `warn` or `pyhtml=debug`.
    pub level: String,
}

/// Layers user settings over the built-in defaults.
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

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PyhtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
