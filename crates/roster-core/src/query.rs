//! Free-text search over an in-memory collection.

use crate::person::Person;

/// A search term, pre-lowered for the case-insensitive fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    pub fn term(&self) -> &str {
        &self.raw
    }

    /// An empty term matches every record.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Names, email, state and city match case-insensitively; the phone
    /// matches on the term as typed.
    pub fn matches(&self, person: &Person) -> bool {
        [
            &person.first_name,
            &person.last_name,
            &person.email,
            &person.state,
            &person.city,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(&self.lowered))
            || person.phone.contains(&self.raw)
    }

    /// Matching records in their original order.
    pub fn filter<'a>(&self, records: &'a [Person]) -> Vec<&'a Person> {
        records.iter().filter(|person| self.matches(person)).collect()
    }
}

/// Matching records in their original order.
pub fn filter<'a>(records: &'a [Person], term: &str) -> Vec<&'a Person> {
    SearchQuery::new(term).filter(records)
}
