//! Handing finished documents to a download sink

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::filename::{derive_filename, FilenameStyle};
use crate::form::FieldSet;
use crate::{render_with_config, ExportedDocument, RenderConfig, RenderError, PDF_MIME};

/// Errors from a download sink
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write document stream: {0}")]
    Stream(#[source] std::io::Error),
}

/// Errors from the full export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not generate document: {0}")]
    Render(#[from] RenderError),

    #[error("could not save document: {0}")]
    Emit(#[from] EmitError),
}

/// What a sink did with the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Saved as a file at this path
    Saved(PathBuf),
    /// Streamed to a writer
    Streamed { bytes: usize },
}

/// Turns a finished byte stream into a user-facing file
pub trait DownloadEmitter {
    fn emit(&mut self, bytes: &[u8], mime: &str, filename: &str)
        -> Result<EmitOutcome, EmitError>;
}

/// Saves documents into a directory under their derived name
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    dir: PathBuf,
}

impl DirectoryEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadEmitter for DirectoryEmitter {
    fn emit(
        &mut self,
        bytes: &[u8],
        mime: &str,
        filename: &str,
    ) -> Result<EmitOutcome, EmitError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| EmitError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(filename);
        std::fs::write(&path, bytes).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), mime, bytes = bytes.len(), "document saved");
        Ok(EmitOutcome::Saved(path))
    }
}

/// Streams document bytes to any writer, such as stdout
#[derive(Debug)]
pub struct WriterEmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DownloadEmitter for WriterEmitter<W> {
    fn emit(
        &mut self,
        bytes: &[u8],
        mime: &str,
        filename: &str,
    ) -> Result<EmitOutcome, EmitError> {
        self.writer.write_all(bytes).map_err(EmitError::Stream)?;
        self.writer.flush().map_err(EmitError::Stream)?;
        info!(filename, mime, bytes = bytes.len(), "document streamed");
        Ok(EmitOutcome::Streamed { bytes: bytes.len() })
    }
}

/// Everything an export needs besides the field values
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub render: RenderConfig,
    pub filename_style: FilenameStyle,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    pub fn with_filename_style(mut self, style: FilenameStyle) -> Self {
        self.filename_style = style;
        self
    }
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub size: usize,
    pub outcome: EmitOutcome,
}

/// Render a snapshot, name it, and hand it to `emitter`
///
/// The emitter is only called after the document rendered completely.
pub fn export(
    fields: FieldSet,
    config: &ExportConfig,
    emitter: &mut dyn DownloadEmitter,
) -> Result<ExportReceipt, ExportError> {
    let document: ExportedDocument = render_with_config(&fields, &config.render)?;
    let filename = derive_filename(&fields, config.filename_style);
    let outcome = emitter.emit(document.as_bytes(), PDF_MIME, &filename)?;
    Ok(ExportReceipt {
        filename,
        size: document.len(),
        outcome,
    })
}
