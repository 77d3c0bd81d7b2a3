//! Settings file for export defaults
//!
//! Settings are read from a small TOML file. Every key is optional; command
//! line flags override whatever the file sets.
//!
//! ```toml
//! [document]
//! background = "assets/background.jpg"
//! compress = true
//! notes = "single-line"
//!
//! [output]
//! dir = "out"
//! filename = "clean"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::export::ExportConfig;
use crate::filename::FilenameStyle;
use crate::layout::NotesMode;
use crate::renderer::BackgroundSource;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Export defaults loaded from a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub document: DocumentSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSettings {
    /// Background JPEG path or `data:` URI
    pub background: Option<String>,
    pub compress: Option<bool>,
    pub notes: Option<NotesMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub dir: Option<PathBuf>,
    pub filename: Option<FilenameStyle>,
}

/// Command-line values that take precedence over the settings file
///
/// Flags can only switch a behaviour on; leaving one unset keeps whatever the
/// file says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub background: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub wrap_notes: bool,
    pub no_compress: bool,
    pub legacy_filename: bool,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build an export configuration, falling back to defaults for unset keys
    pub fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::default();
        if let Some(background) = &self.document.background {
            config.render.background = BackgroundSource::parse(background);
        }
        if let Some(compress) = self.document.compress {
            config.render.pdf.compress = compress;
        }
        if let Some(notes) = self.document.notes {
            config.render.notes = notes;
        }
        if let Some(style) = self.output.filename {
            config.filename_style = style;
        }
        config
    }

    /// Export configuration with command-line overrides applied on top
    pub fn export_config_with(&self, overrides: &Overrides) -> ExportConfig {
        let mut config = self.export_config();
        if let Some(background) = &overrides.background {
            config.render.background = BackgroundSource::parse(background);
        }
        if overrides.wrap_notes {
            config.render.notes = NotesMode::Wrap;
        }
        if overrides.no_compress {
            config.render.pdf.compress = false;
        }
        if overrides.legacy_filename {
            config.filename_style = FilenameStyle::Legacy;
        }
        config
    }

    /// Output directory, defaulting to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Output directory, preferring the command-line value
    pub fn output_dir_with(&self, overrides: &Overrides) -> PathBuf {
        overrides
            .output_dir
            .clone()
            .unwrap_or_else(|| self.output_dir())
    }
}
