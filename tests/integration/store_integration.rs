use inventory::store::persistence::{FlatFileStorage, RecordPersistence};
use inventory::{Record, RecordStore, StorageError};
use tempfile::TempDir;

#[test]
fn scenario_add_then_list() {
    let mut store = RecordStore::new();
    store.add(Record::new(1, "Widget", 9.99, 10));
    assert_eq!(store.list(), &[Record::new(1, "Widget", 9.99, 10)]);
}

#[test]
fn scenario_add_two_remove_first() {
    let mut store = RecordStore::new();
    store.add(Record::new(1, "Widget", 9.99, 10));
    store.add(Record::new(2, "Gadget", 19.5, 3));
    store.remove(1);
    assert_eq!(store.list(), &[Record::new(2, "Gadget", 19.5, 3)]);
}

#[test]
fn scenario_update_existing() {
    let mut store = RecordStore::new();
    store.add(Record::new(1, "Widget", 9.99, 10));
    store.update(1, "Widget2", 12.0, 5);
    assert_eq!(store.list(), &[Record::new(1, "Widget2", 12.0, 5)]);
}

#[test]
fn scenario_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("f.txt");

    let mut store = RecordStore::new();
    store.add(Record::new(1, "Widget", 9.99, 10));
    store.save(&path).unwrap();

    let mut reloaded = RecordStore::new();
    reloaded.load(&path).unwrap();
    assert_eq!(reloaded.list(), &[Record::new(1, "Widget", 9.99, 10)]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 Widget 9.99 10\n");
}

#[test]
fn scenario_remove_from_empty_store() {
    let mut store = RecordStore::new();
    store.remove(99);
    assert!(store.list().is_empty());
}

#[test]
fn hand_edited_file_loads_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("inventory.txt");
    std::fs::write(&path, "5 Hammer 14.25 2\n3 Nail 0.02 900\n5 Hammer 13 1\n").unwrap();

    let mut store = RecordStore::new();
    assert_eq!(store.load(&path).unwrap(), 3);
    let ids: Vec<_> = store.list().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![5, 3, 5]);

    store.update(5, "Mallet", 20.0, 4);
    store.remove(3);
    store.save(&path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "5 Mallet 20 4\n5 Hammer 13 1\n"
    );
}

#[test]
fn storage_trait_round_trip() {
    let temp = TempDir::new().unwrap();
    let storage = FlatFileStorage::new(temp.path().join("inventory.txt"));

    let mut store = RecordStore::new();
    store.add(Record::new(-1, "Returned", 0.5, -7));
    store.save_to(&storage).unwrap();

    let mut reloaded = RecordStore::new();
    reloaded.load_from(&storage).unwrap();
    assert_eq!(reloaded, store);
    assert_eq!(storage.read_all().unwrap().len(), 1);
}

#[test]
fn save_failure_is_reported() {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new();
    let err = store
        .save(&temp.path().join("missing").join("inventory.txt"))
        .unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
    assert!(err.to_string().contains("Failed to write inventory file"));
}
