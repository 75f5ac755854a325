use chrono::NaiveDate;
use fostering_protocol::Field;

use crate::scalar::{encode_bool, encode_date, BoolEncoding};

/// Ordered, append-only accumulator of fields produced by one update.
///
/// Nothing is deduplicated: adding a name twice keeps both entries and the
/// store applies them last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBatch {
    fields: Vec<Field>,
}

impl FieldBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Explicit null, used to clear a field rather than blank it.
    pub fn add_null(&mut self, name: impl Into<String>) -> &mut Self {
        self.fields.push(Field::null(name));
        self
    }

    pub fn add_bool(
        &mut self,
        name: impl Into<String>,
        value: Option<bool>,
        encoding: BoolEncoding,
    ) -> &mut Self {
        self.add(name, encode_bool(value, encoding))
    }

    pub fn add_date(&mut self, name: impl Into<String>, value: Option<NaiveDate>) -> &mut Self {
        self.add(name, encode_date(value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Last value queued for `name`; `Some(None)` for an explicit null.
    pub fn latest(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .rev()
            .find(|field| field.name == name)
            .map(|field| field.value.as_deref())
    }

    pub fn build(self) -> Vec<Field> {
        self.fields
    }
}
