//! Integration tests for field files, assignments, and form state

use std::path::Path;

use endorsement_form::form::{load_fields, parse_fields, Assignment};
use endorsement_form::{derive_filename, Field, FilenameStyle, FormState, InputError};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_load_complete_field_file() {
    let fields = load_fields(&fixture("fields.toml")).expect("Should load");

    assert_eq!(fields.get(Field::BankName), "First National");
    assert_eq!(fields.get(Field::Amount), "1,250.00");
    assert_eq!(fields.get(Field::Email), "jane@example.com");
    assert!(fields.iter().all(|(_, value)| !value.is_empty()));
}

#[test]
fn test_missing_keys_stay_empty() {
    let fields = load_fields(&fixture("partial.toml")).unwrap();

    assert_eq!(fields.get(Field::LastName), "Smith");
    assert_eq!(fields.get(Field::FirstName), "");
    assert_eq!(
        derive_filename(&fields, FilenameStyle::Clean),
        "Smith_Unknown_T100.pdf"
    );
}

#[test]
fn test_misspelled_key_is_reported_with_suggestion() {
    let err = load_fields(&fixture("typo.toml")).unwrap_err();

    match &err {
        InputError::UnknownField {
            key, suggestions, ..
        } => {
            assert_eq!(key, "lastNme");
            assert!(suggestions.iter().any(|s| s == "lastName"));
        }
        other => panic!("Expected UnknownField, got {other:?}"),
    }
    assert!(err.span().is_some());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_fields(&fixture("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn test_syntax_error_renders_report() {
    let source = "lastName = \"Smith\nfirstName = \"Jane\"\n";
    let err = parse_fields(source).unwrap_err();
    assert!(matches!(err, InputError::Syntax { .. }));

    let report = err.format(source, "fields.toml");
    assert!(report.contains("fields.toml"));
}

#[test]
fn test_assignments_override_file_values() {
    let fields = load_fields(&fixture("fields.toml")).unwrap();
    let mut form = FormState::from_fields(fields);
    let edits: Vec<Assignment> = ["lastName=Doe", "notes=a=b"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    form.apply(&edits);
    let snapshot = form.snapshot();

    assert_eq!(snapshot.get(Field::LastName), "Doe");
    assert_eq!(snapshot.get(Field::Notes), "a=b");
    assert_eq!(snapshot.get(Field::FirstName), "Jane");
}

#[test]
fn test_snapshot_is_detached_from_later_edits() {
    let mut form = FormState::new();
    form.set_field(Field::TraceNumber, "T1");
    let snapshot = form.snapshot();

    form.set_field(Field::TraceNumber, "T2");

    assert_eq!(snapshot.get(Field::TraceNumber), "T1");
    assert_eq!(form.fields().get(Field::TraceNumber), "T2");
}
