use std::collections::HashSet;
use std::fs;
use std::path::Path;

use notes_core::crypto::KdfParams;
use notes_core::storage::{SecureStore, StaticPassword};
use notes_core::{Notes, NotesError};
use tempfile::tempdir;

fn cheap() -> KdfParams {
    KdfParams::new(10, 8, 1).expect("params should be valid")
}

fn open(path: &Path, password: &str) -> SecureStore<StaticPassword> {
    SecureStore::open(path, StaticPassword::new(password))
        .expect("open should succeed")
        .with_kdf_params(cheap())
}

fn save(path: &Path, password: &str, notes: &Notes) {
    open(path, password).save(notes).expect("save should succeed");
}

fn load(path: &Path, password: &str) -> Result<Notes, NotesError> {
    open(path, password).load()
}

fn pairs(notes: &Notes) -> HashSet<(String, String)> {
    notes
        .iter()
        .map(|(title, content)| (title.to_string(), content.to_string()))
        .collect()
}

#[test]
fn test_round_trip_preserves_pairs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("groceries", "milk, eggs").unwrap();
    notes.insert("pipes", "a|b|c").unwrap();
    notes.insert("blank", "").unwrap();
    notes.insert("unicode", "héllo wörld ✓").unwrap();
    for i in 0..50 {
        notes.insert(format!("note {}", i), format!("content {}", i)).unwrap();
    }

    save(&path, "correct-horse", &notes);
    let loaded = load(&path, "correct-horse").expect("load should succeed");

    assert_eq!(pairs(&loaded), pairs(&notes));
}

#[test]
fn test_file_does_not_contain_plaintext() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("marker", "PLAINTEXT_MARKER_123").unwrap();
    save(&path, "correct-horse", &notes);

    let on_disk = fs::read(&path).unwrap();
    let haystack = String::from_utf8_lossy(&on_disk);
    assert!(!haystack.contains("PLAINTEXT_MARKER_123"));
    assert!(!haystack.contains("marker"));
}

#[test]
fn test_wrong_password_fails_closed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("secret", "entry").unwrap();
    save(&path, "correct-horse", &notes);

    let result = load(&path, "battery-staple");
    assert!(matches!(result, Err(NotesError::AuthenticationFailed)));
}

#[test]
fn test_any_flipped_byte_is_detected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("groceries", "milk, eggs").unwrap();
    save(&path, "correct-horse", &notes);
    let original = fs::read(&path).unwrap();

    let mut store = open(&path, "correct-horse");
    for index in 0..original.len() {
        let mut tampered = original.clone();
        tampered[index] ^= 0x01;
        fs::write(&path, &tampered).unwrap();

        let result = store.load();
        assert!(
            matches!(result, Err(NotesError::AuthenticationFailed)),
            "flipping byte {} must be detected",
            index
        );
    }
}

#[test]
fn test_truncated_file_is_detected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("groceries", "milk, eggs").unwrap();
    save(&path, "correct-horse", &notes);
    let original = fs::read(&path).unwrap();

    fs::write(&path, &original[..original.len() - 1]).unwrap();
    let result = load(&path, "correct-horse");
    assert!(matches!(result, Err(NotesError::AuthenticationFailed)));

    fs::write(&path, &original[..5]).unwrap();
    let result = load(&path, "correct-horse");
    assert!(matches!(result, Err(NotesError::AuthenticationFailed)));
}

#[test]
fn test_empty_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");
    fs::write(&path, b"").unwrap();

    let notes = load(&path, "any password").expect("load should succeed");
    assert!(notes.is_empty());
}

#[test]
fn test_idempotent_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    notes.insert("groceries", "milk, eggs").unwrap();

    let mut store = open(&path, "correct-horse");
    store.save(&notes).unwrap();
    let first_bytes = fs::read(&path).unwrap();
    let first = store.load().unwrap();

    store.save(&first).unwrap();
    let second_bytes = fs::read(&path).unwrap();
    let second = store.load().unwrap();

    assert_eq!(first, notes);
    assert_eq!(second, notes);
    // fresh nonce per save
    assert_ne!(first_bytes, second_bytes);
}

#[test]
fn test_separator_in_title_rejected_content_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");

    let mut notes = Notes::new();
    assert!(matches!(
        notes.insert("bad|title", "x"),
        Err(NotesError::InvalidInput(_))
    ));
    notes.insert("prices", "milk|2.99|eggs|3.49").unwrap();

    save(&path, "correct-horse", &notes);
    let loaded = load(&path, "correct-horse").unwrap();
    assert_eq!(loaded.get("prices"), Some("milk|2.99|eggs|3.49"));
}

#[test]
fn test_groceries_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.dat");
    let password = "correct-horse";

    {
        let mut store = open(&path, password);
        let mut notes = store.load().unwrap();
        notes.insert("groceries", "milk, eggs").unwrap();
        store.save(&notes).unwrap();
    }

    {
        let mut store = open(&path, password);
        let mut notes = store.load().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get("groceries"), Some("milk, eggs"));

        notes.remove("groceries");
        store.save(&notes).unwrap();
    }

    let notes = load(&path, password).unwrap();
    assert!(notes.is_empty());
}
