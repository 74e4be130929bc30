//! Snapshot Tests
//!
//! Save to disk, restore through the builder, and reject damaged files.

use crate::*;

fn populated() -> (Agenda, CallerSession, CallerSession) {
    let (agenda, _) = create_agenda();
    let a = agenda.session(CallerId::new());
    let b = agenda.session(CallerId::new());
    a.create_event("a0", "first", 10).unwrap();
    b.create_event("b0", "second", 20).unwrap();
    a.create_event("a1", "third", 30).unwrap();
    a.delete_event(EventId::ZERO).unwrap();
    (agenda, a, b)
}

#[test]
fn save_and_restore_roundtrip() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    let (agenda, a, b) = populated();

    agenda.save(&path).unwrap();
    let restored = Agenda::builder().restore_from(&path).build().unwrap();

    assert_eq!(restored.list_events(a.caller()), a.list_events());
    assert_eq!(restored.list_events(b.caller()), b.list_events());
    assert!(restored.get_event(EventId::ZERO).unwrap_err().is_not_found());
}

#[test]
fn restored_ledger_continues_id_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    let (agenda, _, b) = populated();
    agenda.save(&path).unwrap();

    let restored = Agenda::builder().restore_from(&path).build().unwrap();
    let id = restored.create_event(b.caller(), "b1", "", 0).unwrap();
    assert_eq!(id, EventId::new(3));
}

#[test]
fn save_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    let (agenda, _, _) = populated();

    agenda.save(&path).unwrap();
    agenda.save(&path).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["agenda.snapshot".to_string()]);
}

#[test]
fn restore_applies_builder_policy_and_observers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    let (agenda, a, b) = populated();
    agenda.save(&path).unwrap();

    let log = std::sync::Arc::new(NotificationLog::new());
    let restored = Agenda::builder()
        .owner_only()
        .observer(log.clone())
        .restore_from(&path)
        .build()
        .unwrap();
    assert!(log.is_empty());

    let a_event = a.list_events()[0].id;
    let err = restored.delete_event(b.caller(), a_event).unwrap_err();
    assert!(err.is_unauthorized());

    restored.delete_event(a.caller(), a_event).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn garbage_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    std::fs::write(&path, b"definitely not a snapshot").unwrap();

    let result = Agenda::builder().restore_from(&path).build();
    assert!(matches!(result, Err(Error::Serialization(_))));
}

#[test]
fn inconsistent_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.snapshot");
    let (agenda, _, _) = populated();

    let mut snapshot = agenda.snapshot();
    snapshot.owner_index.clear();
    std::fs::write(&path, snapshot.to_bytes().unwrap()).unwrap();

    let result = Agenda::builder().restore_from(&path).build();
    assert!(matches!(result, Err(Error::Storage(_))));
}
