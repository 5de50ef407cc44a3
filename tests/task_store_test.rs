//! Tests for the in-memory task store and request validation

use chrono::{NaiveDate, TimeZone, Utc};
use task_reminders::core::{ReminderError, TaskSource};
use task_reminders::infra::InMemoryTaskStore;
use task_reminders::runtime::{CreateTask, UpdateTask};
use uuid::Uuid;

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 30).unwrap()
}

fn create_req(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: Some("  ".to_string()),
        due_date: due(),
        reminder_at: None,
    }
}

#[test]
fn test_create_trims_and_defaults() {
    let store = InMemoryTaskStore::new();
    let task = store.create(create_req("  Buy milk  ")).unwrap();

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, None);
    assert!(!task.is_done);
    assert!(task.is_active);
    assert_eq!(store.get(task.id), Some(task));
}

#[test]
fn test_create_rejects_blank_title() {
    let store = InMemoryTaskStore::new();
    let err = store.create(create_req("   ")).unwrap_err();
    assert!(matches!(err, ReminderError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn test_update_replaces_fields_and_touches() {
    let store = InMemoryTaskStore::new();
    let task = store.create(create_req("Draft")).unwrap();
    let reminder = Utc.with_ymd_and_hms(2025, 10, 29, 9, 0, 0).unwrap();

    let updated = store
        .update(
            task.id,
            UpdateTask {
                title: "Final".into(),
                description: Some(" send to team ".into()),
                is_done: false,
                due_date: due(),
                reminder_at: Some(reminder),
            },
        )
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description.as_deref(), Some("send to team"));
    assert_eq!(updated.reminder_at, Some(reminder));
    assert!(updated.updated_at.is_some());
}

#[test]
fn test_unknown_id_is_not_found() {
    let store = InMemoryTaskStore::new();
    let id = Uuid::new_v4();
    assert_eq!(store.complete(id).unwrap_err(), ReminderError::NotFound(id));
    assert_eq!(store.delete(id).unwrap_err(), ReminderError::NotFound(id));
}

#[tokio::test]
async fn test_active_undone_listing_hides_done_and_deleted() {
    let store = InMemoryTaskStore::new();
    let open = store.create(create_req("open")).unwrap();
    let done = store.create(create_req("done")).unwrap();
    let gone = store.create(create_req("gone")).unwrap();
    store.complete(done.id).unwrap();
    store.delete(gone.id).unwrap();

    let pending = store.list_active_undone().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, open.id);

    // soft delete keeps the record
    assert_eq!(store.len(), 3);
    assert!(!store.get(gone.id).unwrap().is_active);
}
