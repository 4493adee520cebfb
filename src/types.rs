/// One row of the dataset: column names mapped to string values, kept in
/// column order so the file can be rewritten without shuffling fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the named column, if the row has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrites an existing column in place, or appends a new trailing one.
    pub fn set(&mut self, name: &str, value: String) {
        match self.fields.iter_mut().find(|(field, _)| field.as_str() == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_unknown_column() {
        let mut record = Record::new();
        record.set("name", "Acme Towing".to_string());

        assert_eq!(record.get("name"), Some("Acme Towing"));
        assert_eq!(record.get("zip"), None);
    }

    #[test]
    fn set_overwrites_without_duplicating_columns() {
        let mut record = Record::new();
        record.set("city", "Seattle".to_string());
        record.set("city", "Tacoma".to_string());

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("city"), Some("Tacoma"));
    }

    #[test]
    fn new_columns_append_at_the_end() {
        let mut record = Record::new();
        record.set("name", "Acme Towing".to_string());
        record.set("zip", "98101".to_string());
        record.set("lat", "47.707050".to_string());

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["name", "zip", "lat"]);
    }
}
