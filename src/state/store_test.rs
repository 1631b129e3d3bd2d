use super::*;
use crate::storage::MemoryStorage;

fn user() -> SessionUser {
    SessionUser {
        id: "user_123".to_owned(),
        email: "test@test.com".to_owned(),
        full_name: "test".to_owned(),
    }
}

fn seeded_store(entries: &[(&str, &str)]) -> SessionStore<MemoryStorage> {
    let mut storage = MemoryStorage::default();
    for (key, value) in entries {
        storage.set(key, value);
    }
    SessionStore::new(storage)
}

fn valid_user_json() -> String {
    serde_json::to_string(&user()).unwrap()
}

// =============================================================
// Restoration
// =============================================================

#[test]
fn new_store_starts_loading() {
    let store = SessionStore::new(MemoryStorage::default());
    assert!(store.session().loading);
    assert!(!store.is_authenticated());
}

#[test]
fn restore_with_empty_storage_ends_anonymous() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.restore();
    assert!(!store.session().loading);
    assert!(!store.is_authenticated());
    assert!(store.session().user.is_none());
}

#[test]
fn restore_with_valid_pair_authenticates() {
    let mut store = seeded_store(&[(TOKEN_KEY, "mock-token-1"), (USER_KEY, &valid_user_json())]);
    store.restore();
    assert!(!store.session().loading);
    assert!(store.is_authenticated());
    assert_eq!(store.session().token.as_deref(), Some("mock-token-1"));
    assert_eq!(store.session().user.as_ref().unwrap().email, "test@test.com");
}

#[test]
fn restore_with_token_only_discards_pair() {
    let mut store = seeded_store(&[(TOKEN_KEY, "mock-token-1")]);
    store.restore();
    assert!(!store.is_authenticated());
    assert_eq!(store.storage.get(TOKEN_KEY), None);
    assert_eq!(store.storage.get(USER_KEY), None);
}

#[test]
fn restore_with_user_only_discards_pair() {
    let mut store = seeded_store(&[(USER_KEY, &valid_user_json())]);
    store.restore();
    assert!(!store.is_authenticated());
    assert_eq!(store.storage.get(USER_KEY), None);
}

#[test]
fn restore_with_empty_token_discards_pair() {
    let mut store = seeded_store(&[(TOKEN_KEY, ""), (USER_KEY, &valid_user_json())]);
    store.restore();
    assert!(!store.is_authenticated());
    assert_eq!(store.storage.get(TOKEN_KEY), None);
    assert_eq!(store.storage.get(USER_KEY), None);
}

#[test]
fn restore_with_malformed_user_discards_pair() {
    let mut store = seeded_store(&[(TOKEN_KEY, "mock-token-1"), (USER_KEY, "{not json")]);
    store.restore();
    assert!(!store.session().loading);
    assert!(!store.is_authenticated());
    assert_eq!(store.storage.get(TOKEN_KEY), None);
    assert_eq!(store.storage.get(USER_KEY), None);
}

// =============================================================
// Establish and logout
// =============================================================

#[test]
fn establish_sets_session_and_persists_both_entries() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.restore();
    store.establish(user(), "mock-token-1".to_owned());

    assert!(store.is_authenticated());
    assert_eq!(store.storage.get(TOKEN_KEY).as_deref(), Some("mock-token-1"));
    let raw = store.storage.get(USER_KEY).unwrap();
    let persisted: SessionUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, user());
}

#[test]
fn logout_clears_session_and_both_entries() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.restore();
    store.establish(user(), "mock-token-1".to_owned());
    store.logout();

    assert!(!store.is_authenticated());
    assert!(store.session().user.is_none());
    assert!(store.session().token.is_none());
    assert_eq!(store.storage.get(TOKEN_KEY), None);
    assert_eq!(store.storage.get(USER_KEY), None);
}

#[test]
fn restore_then_logout_matches_never_restored() {
    let mut restored = seeded_store(&[(TOKEN_KEY, "mock-token-1"), (USER_KEY, &valid_user_json())]);
    restored.restore();
    restored.logout();

    let mut fresh = SessionStore::new(MemoryStorage::default());
    fresh.restore();

    assert_eq!(restored.session(), fresh.session());
    assert_eq!(restored.storage.get(TOKEN_KEY), fresh.storage.get(TOKEN_KEY));
    assert_eq!(restored.storage.get(USER_KEY), fresh.storage.get(USER_KEY));
}

// =============================================================
// Session persists across stores sharing a backend
// =============================================================

#[test]
fn established_session_survives_a_new_store_over_same_storage() {
    let mut first = SessionStore::new(MemoryStorage::default());
    first.restore();
    first.establish(user(), "mock-token-1".to_owned());

    let mut second = SessionStore::new(first.storage.clone());
    second.restore();
    assert!(second.is_authenticated());
    assert_eq!(second.session().user.as_ref().unwrap().full_name, "test");
}
