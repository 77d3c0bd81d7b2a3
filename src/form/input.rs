//! Field input: TOML field files and `key=value` assignments

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::InputError;

use super::field::{Field, FieldSet};

/// A single `key=value` edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: Field,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = InputError;

    /// Parse `key=value`. The key is trimmed; the value is kept verbatim and
    /// may itself contain `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| InputError::MalformedAssignment(s.to_string()))?;
        let key = key.trim();
        let field = Field::from_key(key).ok_or_else(|| InputError::unknown_field(key, None))?;
        Ok(Assignment {
            field,
            value: value.to_string(),
        })
    }
}

/// Parse a TOML field file
///
/// The file is a flat table of string values keyed by camelCase field name.
/// Missing keys stay empty; unknown keys are rejected.
///
/// ```toml
/// bankName = "First National"
/// lastName = "Smith"
/// ```
pub fn parse_fields(source: &str) -> Result<FieldSet, InputError> {
    let table: BTreeMap<String, toml::Spanned<String>> = toml::from_str(source)?;

    let mut fields = FieldSet::new();
    for (key, value) in table {
        let span = value.span();
        let field =
            Field::from_key(&key).ok_or_else(|| InputError::unknown_field(&key, Some(span)))?;
        fields.set(field, value.into_inner());
    }
    Ok(fields)
}

/// Read and parse a TOML field file from disk
pub fn load_fields(path: &Path) -> Result<FieldSet, InputError> {
    let source = std::fs::read_to_string(path)?;
    parse_fields(&source)
}

/// Where a run's initial field values come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource<'a> {
    /// A TOML field file on disk
    File(&'a Path),
    /// Assignments alone, on top of an empty form
    Empty,
    /// One question per field on the terminal
    Prompt,
    /// A TOML field file piped through stdin
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Pick the input source
    ///
    /// Stdin is only read when nothing else supplies values, so a run with
    /// assignments never blocks on an open pipe.
    pub fn select(file: Option<&'a Path>, has_assignments: bool, stdin_is_terminal: bool) -> Self {
        match file {
            Some(path) => InputSource::File(path),
            None if has_assignments => InputSource::Empty,
            None if stdin_is_terminal => InputSource::Prompt,
            None => InputSource::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_selection() {
        let path = Path::new("fields.toml");
        assert_eq!(InputSource::select(Some(path), true, false), InputSource::File(path));
        assert_eq!(InputSource::select(None, false, true), InputSource::Prompt);
        assert_eq!(InputSource::select(None, false, false), InputSource::Stdin);
    }

    #[test]
    fn test_assignments_never_wait_on_stdin() {
        assert_eq!(InputSource::select(None, true, false), InputSource::Empty);
        assert_eq!(InputSource::select(None, true, true), InputSource::Empty);
    }

    #[test]
    fn test_parse_assignment() {
        let a: Assignment = "lastName=Smith".parse().unwrap();
        assert_eq!(a.field, Field::LastName);
        assert_eq!(a.value, "Smith");
    }

    #[test]
    fn test_parse_assignment_keeps_value_verbatim() {
        let a: Assignment = " notes = a=b ".parse().unwrap();
        assert_eq!(a.field, Field::Notes);
        assert_eq!(a.value, " a=b ");
    }

    #[test]
    fn test_parse_assignment_empty_value() {
        let a: Assignment = "email=".parse().unwrap();
        assert_eq!(a.value, "");
    }

    #[test]
    fn test_parse_assignment_missing_equals() {
        let err = "lastName".parse::<Assignment>().unwrap_err();
        assert!(matches!(err, InputError::MalformedAssignment(_)));
    }

    #[test]
    fn test_parse_assignment_unknown_key_suggests() {
        let err = "firstname=Jane".parse::<Assignment>().unwrap_err();
        match err {
            InputError::UnknownField { key, suggestions, .. } => {
                assert_eq!(key, "firstname");
                assert_eq!(suggestions, vec!["firstName".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_fields_partial() {
        let fields = parse_fields(
            r#"
bankName = "First National"
lastName = "Smith"
"#,
        )
        .unwrap();
        assert_eq!(fields.get(Field::BankName), "First National");
        assert_eq!(fields.get(Field::LastName), "Smith");
        assert_eq!(fields.get(Field::FirstName), "");
    }

    #[test]
    fn test_parse_fields_empty_document() {
        assert_eq!(parse_fields("").unwrap(), FieldSet::new());
    }

    #[test]
    fn test_parse_fields_unknown_key_has_span() {
        let source = "bankName = \"A\"\nbankname = \"B\"\n";
        let err = parse_fields(source).unwrap_err();
        match &err {
            InputError::UnknownField { key, span, suggestions } => {
                assert_eq!(key, "bankname");
                let span = span.clone().expect("span");
                assert!(source[span].contains('B'));
                assert!(suggestions.contains(&"bankName".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_fields_rejects_non_string_values() {
        let err = parse_fields("amount = 250").unwrap_err();
        assert!(matches!(err, InputError::Syntax { .. }));
    }
}
