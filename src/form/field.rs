//! Form field keys and the field value set

use std::fmt;
use std::ops::Index;

/// One of the eight form inputs, in declared order
///
/// The declared order is the form order, the prompt order and the order of
/// the recipient table. Keys and labels are spelled out explicitly rather
/// than derived from the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    BankName,
    AccountNumber,
    Amount,
    TraceNumber,
    FirstName,
    LastName,
    Email,
    Notes,
}

impl Field {
    /// Number of fields in a [`FieldSet`]
    pub const COUNT: usize = 8;

    /// All fields in declared order
    pub const ALL: [Field; Field::COUNT] = [
        Field::BankName,
        Field::AccountNumber,
        Field::Amount,
        Field::TraceNumber,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Notes,
    ];

    /// The camelCase key used in field files and `key=value` assignments
    pub fn key(self) -> &'static str {
        match self {
            Field::BankName => "bankName",
            Field::AccountNumber => "accountNumber",
            Field::Amount => "amount",
            Field::TraceNumber => "traceNumber",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Notes => "notes",
        }
    }

    /// The label shown when prompting for this field
    pub fn prompt(self) -> &'static str {
        match self {
            Field::BankName => "BANK NAME",
            Field::AccountNumber => "ACCOUNT NUMBER",
            Field::Amount => "AMOUNT",
            Field::TraceNumber => "TRACE NUMBER",
            Field::FirstName => "FIRST NAME",
            Field::LastName => "LAST NAME",
            Field::Email => "EMAIL",
            Field::Notes => "NOTES",
        }
    }

    /// Look up a field by its camelCase key
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Position of this field in declared order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The complete set of current form values
///
/// Every field is always present; unset fields hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: [String; Field::COUNT],
}

impl FieldSet {
    /// Create a field set with every value empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the updated set
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Iterate `(field, value)` pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

impl Index<Field> for FieldSet {
    type Output = str;

    fn index(&self, field: Field) -> &str {
        self.get(field)
    }
}
