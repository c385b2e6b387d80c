use super::*;
use crate::storage::MemoryStore;
use crate::testing::FailingStore;

fn memory() -> (Arc<MemoryStore>, SessionStore) {
    let backend = Arc::new(MemoryStore::new());
    let store = SessionStore::new(backend.clone());
    (backend, store)
}

#[test]
fn save_then_load_round_trips_per_role() {
    let (_, store) = memory();
    let record = SessionRecord::new("a@x.com", Role::Admin);
    store.save(Role::Admin, &record);
    assert_eq!(store.load(Role::Admin), Some(record));
    assert_eq!(store.load(Role::User), None);
}

#[test]
fn save_writes_documented_layout() {
    let (backend, store) = memory();
    store.save(Role::User, &SessionRecord::new("u@x.com", Role::User));
    let raw = backend.get("userAuth").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "u@x.com", "role": "user" }));
}

#[test]
fn load_swallows_unparsable_value() {
    let (backend, store) = memory();
    backend.set("adminAuth", "{not json").unwrap();
    assert_eq!(store.load(Role::Admin), None);
}

#[test]
fn load_rejects_record_stored_under_other_role() {
    let (backend, store) = memory();
    backend.set("adminAuth", r#"{"email":"u@x.com","role":"user"}"#).unwrap();
    assert_eq!(store.load(Role::Admin), None);
}

#[test]
fn clear_removes_only_that_role() {
    let (_, store) = memory();
    store.save(Role::Admin, &SessionRecord::new("a@x.com", Role::Admin));
    store.save(Role::User, &SessionRecord::new("u@x.com", Role::User));
    store.clear(Role::Admin);
    assert_eq!(store.load(Role::Admin), None);
    assert!(store.load(Role::User).is_some());
}

#[test]
fn failing_backend_degrades_to_no_session() {
    let store = SessionStore::new(Arc::new(FailingStore));
    store.save(Role::Admin, &SessionRecord::new("a@x.com", Role::Admin));
    assert_eq!(store.load(Role::Admin), None);
    store.clear(Role::Admin);
}

#[test]
fn save_recovers_from_truncated_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"adminAuth": "trunc"#).unwrap();
    let store = SessionStore::new(Arc::new(crate::storage::FileStore::new(&path)));
    let record = SessionRecord::new("a@x.com", Role::Admin);

    store.save(Role::Admin, &record);
    store.clear(Role::User);
    store.save(Role::Admin, &record);

    assert_eq!(store.load(Role::Admin), Some(record));
}
