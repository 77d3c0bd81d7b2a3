//! Layout engine for the endorsement page
//!
//! This module takes a [`FieldSet`](crate::form::FieldSet) snapshot and the
//! static [`LayoutSpec`], producing a [`PageLayout`]: an ordered list of draw
//! operations that the PDF renderer paints verbatim.

pub mod config;
pub mod engine;
pub mod metrics;
pub mod tables;
pub mod types;

pub use config::{Heading, LayoutSpec, NotesMode};
pub use engine::{compute, recipient_rows, sender_rows, TableRow};
pub use tables::{RecipientRow, SenderEntry, RECIPIENT_ROWS, SENDER_RECORD};
pub use types::*;
