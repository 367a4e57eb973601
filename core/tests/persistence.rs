use std::fs;

use tasklist_core::repository::codec::CURRENT_VERSION;
use tasklist_core::repository::file::DEFAULT_FILE_NAME;
use tasklist_core::{FileTaskRepository, Task, TaskId, TaskRepository, TaskStore};

fn sample() -> Vec<Task> {
    let mut tasks = vec![
        Task::new(TaskId(10), "first"),
        Task::new(TaskId(3), "  second, untrimmed  "),
        Task::new(TaskId(42), "third"),
    ];
    tasks[1].completed = true;
    tasks
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();

    assert!(repo.load().is_empty());
    repo.save(&sample()).unwrap();
    assert_eq!(repo.load(), sample());
}

#[test]
fn store_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let (kept, removed) = {
        let repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();
        let mut store = TaskStore::open(repo);
        let kept = store.add("keep me").unwrap().into_value().id;
        let removed = store.add("drop me").unwrap().into_value().id;
        store.toggle_complete(kept).unwrap();
        store.delete(removed).unwrap();
        (kept, removed)
    };

    let repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();
    let mut store = TaskStore::open(repo);
    assert_eq!(store.len(), 1);
    let task = store.get(kept).unwrap();
    assert_eq!(task.text, "keep me");
    assert!(task.completed);
    assert!(store.get(removed).is_none());

    let next = store.add("new").unwrap().into_value().id;
    assert!(next > kept);
}

#[test]
fn legacy_array_is_upgraded_on_next_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(
        &path,
        r#"[{"id":1700000000000,"text":"Buy milk","completed":true},{"id":1700000000001,"text":"Walk dog","completed":false}]"#,
    )
    .unwrap();

    let repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();
    let mut store = TaskStore::open(repo);
    assert_eq!(store.len(), 2);
    assert!(store.all()[0].completed);

    store.add("Water plants").unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], CURRENT_VERSION);
    assert_eq!(value["tasks"].as_array().unwrap().len(), 3);
}

#[test]
fn unreadable_documents_start_empty() {
    for raw in ["", "not json", "{\"version\": 99, \"tasks\": []}", "\"tasks\""] {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_FILE_NAME), raw).unwrap();
        let repo = FileTaskRepository::new(dir.path(), DEFAULT_FILE_NAME).unwrap();
        let store = TaskStore::open(repo);
        assert!(store.is_empty(), "expected empty store for {raw:?}");
    }
}
