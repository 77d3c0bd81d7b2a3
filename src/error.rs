//! Error types for reading field input

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Field file error at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    #[error("unknown field '{key}'{}", format_suggestions(.suggestions))]
    UnknownField {
        key: String,
        span: Option<Span>,
        suggestions: Vec<String>,
    },

    #[error("malformed assignment '{0}': expected KEY=VALUE")]
    MalformedAssignment(String),

    #[error("failed to read field input: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Create an unknown field error with close-match suggestions
    pub fn unknown_field(key: impl Into<String>, span: Option<Span>) -> Self {
        let key = key.into();
        let suggestions = crate::form::suggest_keys(&key);
        Self::UnknownField {
            key,
            span,
            suggestions,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Syntax { span, .. } => Some(span),
            Self::UnknownField { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain display form.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}\n", self);
        };

        let message = match self {
            Self::Syntax { message, .. } => message.clone(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}

impl From<toml::de::Error> for InputError {
    fn from(err: toml::de::Error) -> Self {
        InputError::Syntax {
            span: err.span().unwrap_or(0..0),
            message: err.message().to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
