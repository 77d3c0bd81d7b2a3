//! PDF renderer for generating output from a page layout
//!
//! This module takes a PageLayout plus the background JPEG and produces a
//! complete single-page PDF using the standard Helvetica faces.

pub mod background;
pub mod config;
pub mod encoding;
pub mod pdf;

pub use background::{BackgroundError, BackgroundSource, JpegImage};
pub use config::PdfConfig;
pub use pdf::{render_pdf, ContentStream};
