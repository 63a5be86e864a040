//! Unit tests for the transcript store and its durable slot.

use super::*;
use tempfile::tempdir;

fn memory_store() -> ConversationStore {
    ConversationStore::open(Box::new(MemorySlot::new()))
}

#[test]
fn append_user_turn_appends_exactly_one() {
    let mut store = memory_store();
    store.append_user_turn("Hello there").unwrap();

    let transcript = store.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.last(), Some(&Turn::user("Hello there")));
}

#[test]
fn empty_and_whitespace_input_are_no_ops() {
    let mut store = memory_store();
    store.append_user_turn("").unwrap();
    store.append_user_turn("   ").unwrap();
    assert!(store.transcript().is_empty());
}

#[test]
fn round_trip_through_slot() {
    let mut store = memory_store();
    store.append_user_turn("Hello there").unwrap();
    store.append_assistant_turn("Hi, traveler.").unwrap();

    assert_eq!(&store.load_persisted(), store.transcript());
}

#[test]
fn reset_clears_memory_and_slot() {
    let mut store = memory_store();
    store.append_user_turn("Hello there").unwrap();
    store.reset().unwrap();

    assert!(store.transcript().is_empty());
    assert!(store.load_persisted().is_empty());
}

#[test]
fn file_slot_survives_reopen() {
    let dir = tempdir().unwrap();

    let mut store = ConversationStore::open(Box::new(FileSlot::new(dir.path())));
    store.append_user_turn("Hello there").unwrap();
    store.append_assistant_turn("Hi, traveler.").unwrap();
    let before = store.transcript().clone();
    drop(store);

    let reopened = ConversationStore::open(Box::new(FileSlot::new(dir.path())));
    assert_eq!(reopened.transcript(), &before);
}

#[test]
fn corrupt_slot_loads_as_empty() {
    let dir = tempdir().unwrap();
    let mut slot = FileSlot::new(dir.path());
    slot.write("not valid json{{").unwrap();

    let store = ConversationStore::open(Box::new(slot));
    assert!(store.transcript().is_empty());
}

#[test]
fn absent_file_slot_loads_as_empty() {
    let dir = tempdir().unwrap();
    let store = ConversationStore::open(Box::new(FileSlot::new(dir.path())));
    assert!(store.transcript().is_empty());
}

#[test]
fn persisted_value_is_a_bare_array_of_role_text_objects() {
    let mut transcript = Transcript::new();
    transcript.push(Turn::user("Hello there"));
    transcript.push(Turn::assistant("Hi, traveler."));

    let raw = serde_json::to_string(&transcript).unwrap();
    assert_eq!(
        raw,
        r#"[{"role":"user","text":"Hello there"},{"role":"assistant","text":"Hi, traveler."}]"#
    );
}
