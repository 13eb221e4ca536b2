use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load("k"), None);
    storage.save("k", "v1");
    assert_eq!(storage.load("k").as_deref(), Some("v1"));
    storage.save("k", "v2");
    assert_eq!(storage.load("k").as_deref(), Some("v2"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::with_slot("k", "v");
    storage.remove("k");
    storage.remove("k");
    assert_eq!(storage.load("k"), None);
}

#[test]
fn memory_storage_keeps_slots_separate() {
    let storage = MemoryStorage::with_slot("a", "1");
    storage.save("b", "2");
    storage.remove("a");
    assert_eq!(storage.load("b").as_deref(), Some("2"));
}

#[test]
fn browser_storage_is_inert_outside_browser() {
    let storage = BrowserStorage;
    storage.save("k", "v");
    assert_eq!(storage.load("k"), None);
    storage.remove("k");
}
