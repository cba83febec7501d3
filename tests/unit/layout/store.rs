use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "advent_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn memory_store_roundtrip() {
    let mut s = MemoryStore::new();
    assert!(s.is_empty());
    s.set_item("k", "v").unwrap();
    assert_eq!(s.get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(s.len(), 1);
    s.remove_item("k").unwrap();
    assert_eq!(s.get_item("k").unwrap(), None);
}

#[test]
fn file_store_roundtrip_and_missing_key() {
    let dir = temp_dir("file_store");
    let mut s = FileStore::new(&dir);
    assert_eq!(s.get_item("calendarLayout").unwrap(), None);
    s.set_item("calendarLayout", "{}").unwrap();
    assert_eq!(s.get_item("calendarLayout").unwrap().as_deref(), Some("{}"));
    assert!(dir.join("calendarLayout.json").is_file());
    s.remove_item("calendarLayout").unwrap();
    s.remove_item("calendarLayout").unwrap();
    assert_eq!(s.get_item("calendarLayout").unwrap(), None);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn file_store_rejects_path_like_keys() {
    let mut s = FileStore::new(temp_dir("file_store_keys"));
    assert!(matches!(
        s.set_item("../escape", "x"),
        Err(CalendarError::Storage(_))
    ));
    assert!(s.get_item("").is_err());
    assert!(s.get_item(".hidden").is_err());
}

#[test]
fn mut_ref_forwards() {
    fn put<S: KeyValueStore>(mut store: S) {
        store.set_item("a", "1").unwrap();
    }
    let mut inner = MemoryStore::new();
    put(&mut inner);
    assert_eq!(inner.get_item("a").unwrap().as_deref(), Some("1"));
}
