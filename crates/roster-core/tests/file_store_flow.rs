use std::fs;
use std::path::PathBuf;

use roster_core::{
    filter, Field, FileStorage, KeyValueStorage, MemoryStorage, NewPerson, Person, PersonId,
    RecordStore, RosterError, DEFAULT_SLOT,
};
use tempfile::TempDir;

struct TempData {
    _dir: TempDir,
    path: PathBuf,
}

impl TempData {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("data");
        Self { _dir: dir, path }
    }

    fn store(&self) -> RecordStore<FileStorage> {
        RecordStore::new(FileStorage::new(&self.path))
    }
}

fn ada() -> NewPerson {
    NewPerson::new()
        .with(Field::FirstName, "Ada")
        .with(Field::LastName, "Lovelace")
        .with(Field::Email, "ada@example.com")
        .with(Field::Phone, "9876543210")
        .with(Field::State, "Gujarat")
        .with(Field::City, "Surat")
}

fn grace() -> NewPerson {
    NewPerson::new()
        .with(Field::FirstName, "Grace")
        .with(Field::LastName, "Hopper")
        .with(Field::Email, "grace@navy.mil")
        .with(Field::Phone, "(912) 345-6780")
        .with(Field::State, "Rajasthan")
        .with(Field::City, "Jaipur")
}

fn record(id: &str, candidate: NewPerson) -> Person {
    roster_core::validate(&candidate)
        .expect("fixture should be valid")
        .into_person(PersonId::new(id))
}

#[test]
fn test_add_search_delete_scenario() {
    let temp = TempData::new();
    let mut store = temp.store();

    let added = store.add(&ada()).expect("add should succeed");
    let all = store.load_all();
    assert_eq!(all, vec![added.clone()]);

    for term in ["ada", "Surat", "987654"] {
        let found = filter(&all, term);
        assert_eq!(found, vec![&added], "term {:?}", term);
    }

    assert!(store.delete_by_id(&added.id).expect("delete should succeed"));
    assert!(store.load_all().is_empty());
}

#[test]
fn test_rejected_candidate_leaves_collection_unchanged() {
    let temp = TempData::new();
    let mut store = temp.store();
    store.add(&grace()).expect("add should succeed");
    let before = store.load_all();

    let err = store
        .add(&ada().with(Field::FirstName, "Ada1"))
        .expect_err("digit in name should be rejected");
    assert!(matches!(err, RosterError::Validation(ref e) if e.field == Field::FirstName));
    assert_eq!(store.load_all(), before);
}

#[test]
fn test_append_refuses_record_that_skipped_validation() {
    let temp = TempData::new();
    let mut store = temp.store();
    store.add(&grace()).expect("add should succeed");
    let before = fs::read_to_string(temp.path.join("persons.json")).expect("slot file exists");

    let mut unchecked = record("p2", ada());
    unchecked.phone = "123".to_string();
    let err = store
        .append(unchecked)
        .expect_err("short phone should be rejected");
    assert!(matches!(err, RosterError::Validation(ref e) if e.field == Field::Phone));

    let after = fs::read_to_string(temp.path.join("persons.json")).expect("slot file exists");
    assert_eq!(after, before);
    assert_eq!(store.load_all().len(), 1);
}

#[test]
fn test_collection_survives_reopen() {
    let temp = TempData::new();
    {
        let mut store = temp.store();
        store.add(&ada()).expect("add should succeed");
        store.add(&grace()).expect("add should succeed");
    }

    let reopened = temp.store();
    let names: Vec<String> = reopened.load_all().iter().map(Person::full_name).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
}

#[test]
fn test_persisted_layout_is_camel_case_array() {
    let temp = TempData::new();
    let mut store = temp.store();
    store.append(record("p1", grace())).expect("append should succeed");

    let raw = fs::read_to_string(temp.path.join("persons.json")).expect("slot file exists");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
    let first = &value.as_array().expect("array payload")[0];
    let mut keys: Vec<&str> = first
        .as_object()
        .expect("object record")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["city", "email", "firstName", "id", "lastName", "phone", "state"]
    );
    assert_eq!(first["phone"], "9123456780");
}

#[test]
fn test_corrupt_file_reads_empty_then_recovers_on_write() {
    let temp = TempData::new();
    fs::create_dir_all(&temp.path).expect("create data dir");
    fs::write(temp.path.join("persons.json"), "not json at all").expect("write corrupt");

    let mut store = temp.store();
    assert!(store.load_all().is_empty());

    store.add(&ada()).expect("add should succeed");
    assert_eq!(store.load_all().len(), 1);
}

enum Op {
    Append(&'static str),
    Delete(&'static str),
}

#[test]
fn test_load_all_matches_replayed_operations() {
    let ops = [
        Op::Append("a"),
        Op::Append("b"),
        Op::Delete("missing"),
        Op::Append("c"),
        Op::Delete("b"),
        Op::Delete("b"),
        Op::Append("d"),
        Op::Delete("a"),
    ];

    let temp = TempData::new();
    let mut store = temp.store();
    let mut expected: Vec<Person> = Vec::new();

    for op in &ops {
        match op {
            Op::Append(id) => {
                let person = record(id, ada());
                store.append(person.clone()).expect("append should succeed");
                expected.push(person);
            }
            Op::Delete(id) => {
                let id = PersonId::new(*id);
                store.delete_by_id(&id).expect("delete should succeed");
                if let Some(pos) = expected.iter().position(|p| p.id == id) {
                    expected.remove(pos);
                }
            }
        }
        assert_eq!(store.load_all(), expected);
    }

    let ids: Vec<&str> = expected.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d"]);
}

#[test]
fn test_memory_and_file_backends_agree() {
    let temp = TempData::new();
    let mut on_disk = temp.store();
    let mut in_memory = RecordStore::new(MemoryStorage::new());

    for candidate in [ada(), grace()] {
        let id = candidate.first_name.clone();
        let person = record(&id, candidate);
        on_disk.append(person.clone()).expect("append should succeed");
        in_memory.append(person).expect("append should succeed");
    }
    on_disk
        .delete_by_id(&PersonId::new("Ada"))
        .expect("delete should succeed");
    in_memory
        .delete_by_id(&PersonId::new("Ada"))
        .expect("delete should succeed");

    assert_eq!(on_disk.load_all(), in_memory.load_all());
    assert_eq!(
        on_disk.storage().get(DEFAULT_SLOT).expect("read slot"),
        in_memory.storage().get(DEFAULT_SLOT).expect("read slot"),
    );
}
