//! Row definitions for the two two-column tables

use crate::form::Field;

/// One recipient row, bound to its field by key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientRow {
    pub field: Field,
    pub label: &'static str,
}

/// The recipient table, top to bottom
///
/// Follows the declared field order, so row `i` shows field `i`.
pub const RECIPIENT_ROWS: [RecipientRow; 7] = [
    RecipientRow {
        field: Field::BankName,
        label: "DESTINATION BANK NAME",
    },
    RecipientRow {
        field: Field::AccountNumber,
        label: "DESTINATION ACCOUNT NUMBER",
    },
    RecipientRow {
        field: Field::Amount,
        label: "AMOUNT",
    },
    RecipientRow {
        field: Field::TraceNumber,
        label: "TRACE NUMBER",
    },
    RecipientRow {
        field: Field::FirstName,
        label: "RECIPIENT\u{2019}S FIRST NAME",
    },
    RecipientRow {
        field: Field::LastName,
        label: "RECIPIENT\u{2019}S LAST NAME",
    },
    RecipientRow {
        field: Field::Email,
        label: "RECIPIENT\u{2019}S EMAIL ADDRESS",
    },
];

/// A fixed sender row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// The sender identity printed on every document
pub const SENDER_RECORD: [SenderEntry; 3] = [
    SenderEntry {
        label: "SENDER\u{2019}S FIRST NAME",
        value: "Quantum Metal Digital Solutions Inc.",
    },
    SenderEntry {
        label: "SENDER\u{2019}S LAST NAME",
        value: "QMDSI",
    },
    SenderEntry {
        label: "SENDER\u{2019}S EMAIL ADDRESS",
        value: "info@qmdsi.com",
    },
];
