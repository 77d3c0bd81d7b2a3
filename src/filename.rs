//! Output filename derivation

use serde::Deserialize;

use crate::form::{Field, FieldSet};

/// Stand-in for an empty name or trace number
pub const UNKNOWN: &str = "Unknown";

/// How the recipient name parts are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameStyle {
    /// `Smith_Jane_T100.pdf`
    #[default]
    Clean,
    /// `Smith," "Jane_T100.pdf`, byte for byte what the web form produced
    Legacy,
}

/// Derive the download filename from the recipient's name and trace number
pub fn derive_filename(fields: &FieldSet, style: FilenameStyle) -> String {
    let last = part(fields, Field::LastName);
    let first = part(fields, Field::FirstName);
    let trace = part(fields, Field::TraceNumber);

    match style {
        FilenameStyle::Clean => format!("{last}_{first}_{trace}.pdf"),
        FilenameStyle::Legacy => format!("{last},\" \"{first}_{trace}.pdf"),
    }
}

fn part(fields: &FieldSet, field: Field) -> String {
    let value = fields.get(field);
    if value.is_empty() {
        return UNKNOWN.to_string();
    }
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '-',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named() -> FieldSet {
        FieldSet::new()
            .with(Field::LastName, "Smith")
            .with(Field::FirstName, "Jane")
            .with(Field::TraceNumber, "T100")
    }

    #[test]
    fn test_clean_style() {
        insta::assert_snapshot!(derive_filename(&named(), FilenameStyle::Clean), @"Smith_Jane_T100.pdf");
    }

    #[test]
    fn test_legacy_style_keeps_quote_artifact() {
        insta::assert_snapshot!(derive_filename(&named(), FilenameStyle::Legacy), @r#"Smith," "Jane_T100.pdf"#);
    }

    #[test]
    fn test_all_empty_defaults_to_unknown() {
        let name = derive_filename(&FieldSet::new(), FilenameStyle::Clean);
        assert_eq!(name, "Unknown_Unknown_Unknown.pdf");
        assert_eq!(name.matches(UNKNOWN).count(), 3);
    }

    #[test]
    fn test_each_part_defaults_independently() {
        let fields = FieldSet::new().with(Field::FirstName, "Jane");
        assert_eq!(
            derive_filename(&fields, FilenameStyle::Clean),
            "Unknown_Jane_Unknown.pdf"
        );
    }

    #[test]
    fn test_other_fields_do_not_affect_name() {
        let fields = named()
            .with(Field::BankName, "Bank")
            .with(Field::Notes, "n");
        assert_eq!(derive_filename(&fields, FilenameStyle::Clean), "Smith_Jane_T100.pdf");
    }

    #[test]
    fn test_path_separators_are_replaced() {
        let fields = named().with(Field::TraceNumber, "../T/1\\0");
        assert_eq!(
            derive_filename(&fields, FilenameStyle::Clean),
            "Smith_Jane_..-T-1-0.pdf"
        );
    }
}
