use std::collections::HashMap;

use fostering_protocol::Field;

/// Read-side view over a case's custom fields.
///
/// Keeps the store's ordering for scans and indexes names for lookups. When a
/// name repeats, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct FieldBag {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl FieldBag {
    pub fn new(fields: Vec<Field>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(pos, field)| (field.name.clone(), pos))
            .collect();
        Self { fields, index }
    }

    /// Raw value, `None` when the field is missing or null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .and_then(|&pos| self.fields[pos].value.as_deref())
    }

    /// Value or the empty string.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn owned(&self, name: &str) -> String {
        self.value(name).to_string()
    }

    /// The field holds something other than whitespace.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.trim().is_empty())
    }

    /// Set fields in store order, skipping nulls and shadowed duplicates.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(pos, field)| self.index.get(&field.name) == Some(pos))
            .filter_map(|(_, field)| {
                field
                    .value
                    .as_deref()
                    .map(|value| (field.name.as_str(), value))
            })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl FromIterator<Field> for FieldBag {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Field>> for FieldBag {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_and_missing_are_both_unset() {
        let bag = FieldBag::new(vec![Field::null("a"), Field::new("b", "")]);

        assert_eq!(bag.get("a"), None);
        assert_eq!(bag.get("missing"), None);
        assert_eq!(bag.get("b"), Some(""));
        assert!(!bag.has_value("b"));
        assert_eq!(bag.value("a"), "");
    }

    #[test]
    fn last_duplicate_wins() {
        let bag: FieldBag = vec![
            Field::new("name", "first"),
            Field::new("other", "x"),
            Field::new("name", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(bag.get("name"), Some("second"));
        assert_eq!(
            bag.iter().collect::<Vec<_>>(),
            vec![("other", "x"), ("name", "second")]
        );
        assert_eq!(bag.len(), 2);
    }
}
