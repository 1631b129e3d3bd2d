use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_roundtrip() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc");
    assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_owned()));
}

#[test]
fn memory_storage_overwrites() {
    let mut storage = MemoryStorage::default();
    storage.set(USER_KEY, "one");
    storage.set(USER_KEY, "two");
    assert_eq!(storage.get(USER_KEY), Some("two".to_owned()));
}

#[test]
fn memory_storage_remove_clears_entry() {
    let mut storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc");
    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn memory_storage_remove_missing_is_noop() {
    let mut storage = MemoryStorage::default();
    storage.remove("never-set");
    assert_eq!(storage.get("never-set"), None);
}

// =============================================================
// BrowserStorage (native fallback)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_without_a_browser() {
    let mut storage = BrowserStorage;
    storage.set(TOKEN_KEY, "abc");
    assert_eq!(storage.get(TOKEN_KEY), None);
    storage.remove(TOKEN_KEY);
}
