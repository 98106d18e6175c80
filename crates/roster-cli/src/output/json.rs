//! JSON output formatting for persons.

use roster_core::Person;

/// Convert a person to JSON for output, using the stored field names.
pub fn person_json(person: &Person) -> serde_json::Value {
    serde_json::json!({
        "id": person.id,
        "firstName": person.first_name,
        "lastName": person.last_name,
        "email": person.email,
        "phone": person.phone,
        "state": person.state,
        "city": person.city,
    })
}

/// Convert multiple persons to a JSON array for output.
pub fn persons_json(persons: &[&Person]) -> Vec<serde_json::Value> {
    persons.iter().map(|person| person_json(person)).collect()
}
