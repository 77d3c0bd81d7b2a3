//! Endorsement Form - fill a fixed one-page endorsement PDF from eight fields
//!
//! This library holds the form state, lays the values out on a fixed page
//! next to a pre-filled sender block and a notes box, serializes the page to
//! PDF, and names the file from the recipient's name and trace number.
//!
//! # Example
//!
//! ```no_run
//! use endorsement_form::{render, Field, FormState};
//!
//! let mut form = FormState::new();
//! form.set_field(Field::LastName, "Smith");
//! form.set_field(Field::FirstName, "Jane");
//!
//! let document = render(&form.snapshot()).unwrap();
//! assert!(document.as_bytes().starts_with(b"%PDF-"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filename;
pub mod form;
pub mod layout;
pub mod renderer;

pub use config::{ConfigError, Overrides, Settings};
pub use error::InputError;
pub use export::{
    export, DirectoryEmitter, DownloadEmitter, EmitError, EmitOutcome, ExportConfig, ExportError,
    ExportReceipt, WriterEmitter,
};
pub use filename::{derive_filename, FilenameStyle};
pub use form::{Field, FieldSet, FormState};
pub use layout::{LayoutSpec, NotesMode, PageLayout};
pub use renderer::{BackgroundError, BackgroundSource, PdfConfig};

use thiserror::Error;
use tracing::debug;

/// MIME type of every exported document
pub const PDF_MIME: &str = "application/pdf";

/// Errors that can occur during the render pipeline
///
/// Any of these means no document was produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The background image could not be read or decoded
    #[error("background image: {0}")]
    Background(#[from] BackgroundError),

    /// The assembled page could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] std::io::Error),
}

/// A finished PDF, ready for a download sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    bytes: Vec<u8>,
}

impl ExportedDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime(&self) -> &'static str {
        PDF_MIME
    }
}

/// Configuration for the complete render pipeline
///
/// Page geometry is not configurable; every document uses
/// [`LayoutSpec::STANDARD`].
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Where the background JPEG is loaded from
    pub background: BackgroundSource,
    /// How the notes value is placed
    pub notes: NotesMode,
    /// PDF output configuration
    pub pdf: PdfConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background image source
    pub fn with_background(mut self, source: impl Into<BackgroundSource>) -> Self {
        self.background = source.into();
        self
    }

    /// Set the notes mode
    pub fn with_notes_mode(mut self, mode: NotesMode) -> Self {
        self.notes = mode;
        self
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, config: PdfConfig) -> Self {
        self.pdf = config;
        self
    }
}

/// Render a field snapshot to PDF with default configuration
pub fn render(fields: &FieldSet) -> Result<ExportedDocument, RenderError> {
    render_with_config(fields, &RenderConfig::default())
}

/// Render a field snapshot to PDF with custom configuration
///
/// Steps run strictly in order: load the background, lay out the page,
/// serialize. The first failure aborts the render.
pub fn render_with_config(
    fields: &FieldSet,
    config: &RenderConfig,
) -> Result<ExportedDocument, RenderError> {
    debug!(background = %config.background, "loading background");
    let background = config.background.load()?;

    let page = layout::compute(fields, &LayoutSpec::STANDARD, config.notes);

    let bytes = renderer::render_pdf(&page, &background, &config.pdf)?;
    Ok(ExportedDocument { bytes })
}
