//! Live form state: raw text and validation error per field.

use crate::schema::{coerce_number, validate_field, FieldError};
use crate::{Field, InvoiceDraft, InvoiceInputs};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldState {
    text: String,
    error: Option<FieldError>,
}

/// Holds what the user typed, possibly incomplete or invalid.
///
/// Errors are only reported for fields the user has touched, so a freshly
/// loaded empty form does not light up with "required" messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: BTreeMap<Field, FieldState>,
}

impl FormState {
    /// Seeds the texts from previously saved inputs, or starts empty.
    pub fn new(initial: Option<&InvoiceInputs>) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let text = initial.map(|i| i.get(field).to_string()).unwrap_or_default();
                (field, FieldState { text, error: None })
            })
            .collect();
        Self { fields }
    }

    /// Stores new text for `field` and re-validates that field only.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) {
        let text = raw.into();
        let error = validate_field(&text).err();
        self.fields.insert(field, FieldState { text, error });
    }

    pub fn text(&self, field: Field) -> &str {
        self.fields.get(&field).map(|f| f.text.as_str()).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.fields.get(&field).and_then(|f| f.error)
    }

    /// Current values as numbers, for derivation and URL serialization.
    pub fn draft(&self) -> InvoiceDraft {
        let mut draft = InvoiceDraft::default();
        for field in Field::ALL {
            draft.set(field, coerce_number(self.text(field)));
        }
        draft
    }
}
