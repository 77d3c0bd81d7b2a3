//! Form state holder

use crate::error::InputError;

use super::field::{Field, FieldSet};
use super::input::Assignment;

/// Holds the live form values between edits
///
/// Renders never read this directly; they receive an owned snapshot.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FieldSet,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of values
    pub fn from_fields(fields: FieldSet) -> Self {
        Self { fields }
    }

    /// Update one field, leaving every other field unchanged
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Update one field by its camelCase key
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<(), InputError> {
        let field = Field::from_key(key).ok_or_else(|| InputError::unknown_field(key, None))?;
        self.set_field(field, value);
        Ok(())
    }

    /// Apply assignments in order; later assignments win
    pub fn apply<'a>(&mut self, assignments: impl IntoIterator<Item = &'a Assignment>) {
        for assignment in assignments {
            self.set_field(assignment.field, assignment.value.clone());
        }
    }

    /// Copy out the current values
    pub fn snapshot(&self) -> FieldSet {
        self.fields.clone()
    }

    /// Borrow the current values without copying
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}
