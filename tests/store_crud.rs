#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tasq::db::tasks::TaskStore;
    use tasq::libs::task::{TaskFilter, TaskPatch, TaskStatus};
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("tasks.json")
    }

    #[tokio::test]
    async fn test_add_task_stamps_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();

        let task = store.add_task("Write report", TaskStatus::Todo).await.unwrap();
        assert!(!task.id.is_empty());
        assert_eq!(task.description, "Write report");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(store.get_by_id(&task.id), Some(task));
    }

    #[tokio::test]
    async fn test_rapid_adds_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();

        for i in 0..5 {
            store
                .add_task(&format!("Task {}", i), TaskStatus::Todo)
                .await
                .unwrap();
        }
        assert_eq!(store.get_all().len(), 5);
    }

    #[tokio::test]
    async fn test_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = TaskStore::open(path.clone()).await.unwrap();
        for description in ["one", "two", "three"] {
            store.add_task(description, TaskStatus::Todo).await.unwrap();
        }
        let written = store.get_all();

        let reloaded = TaskStore::open(path).await.unwrap();
        assert_eq!(reloaded.get_all(), written);
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();
        store.add_task("alpha", TaskStatus::Todo).await.unwrap();
        store.add_task("beta", TaskStatus::Done).await.unwrap();

        assert_eq!(store.get_all(), store.get_all());
        assert_eq!(
            store.get_by_status(TaskFilter::NotDone),
            store.get_by_status(TaskFilter::NotDone)
        );
    }

    #[tokio::test]
    async fn test_update_merges_only_supplied_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();
        let task = store.add_task("draft", TaskStatus::Todo).await.unwrap();

        let updated = store
            .update_task(
                &task.id,
                TaskPatch {
                    description: Some("final".to_string()),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "final");
        assert_eq!(updated.status, task.status);
        assert_eq!(updated.created_at, task.created_at);
        assert!(updated.updated_at > task.updated_at);

        let marked = store
            .update_task(
                &task.id,
                TaskPatch {
                    status: Some(TaskStatus::InProgress),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(marked.description, "final");
        assert_eq!(marked.status, TaskStatus::InProgress);
        assert!(marked.updated_at > updated.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();

        let err = store
            .update_task("missing", TaskPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Task not found: missing");
    }

    #[tokio::test]
    async fn test_remove_task() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();
        let task = store.add_task("ephemeral", TaskStatus::Todo).await.unwrap();

        assert!(store.remove_task(&task.id).await.unwrap());
        assert_eq!(store.get_by_id(&task.id), None);

        let err = store.remove_task(&task.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_status_filters() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(store_path(&dir)).await.unwrap();
        let todo = store.add_task("todo", TaskStatus::Todo).await.unwrap();
        let doing = store
            .add_task("doing", TaskStatus::InProgress)
            .await
            .unwrap();
        let done = store.add_task("done", TaskStatus::Done).await.unwrap();

        let by_done = store.get_by_status(TaskFilter::Done);
        assert_eq!(by_done, vec![done.clone()]);

        let in_progress = store.get_by_status(TaskFilter::InProgress);
        assert_eq!(in_progress, vec![doing.clone()]);

        let mut not_done = store.get_by_status(TaskFilter::NotDone);
        not_done.sort_by(|a, b| a.description.cmp(&b.description));
        let mut expected = vec![doing, todo];
        expected.sort_by(|a, b| a.description.cmp(&b.description));
        assert_eq!(not_done, expected);

        assert_eq!(store.get_by_status(TaskFilter::All).len(), 3);
    }

    #[tokio::test]
    async fn test_legacy_array_shape_loads_and_upgrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(
            &path,
            r#"[
  {
    "id": "k2x9f1",
    "description": "from the old format",
    "status": "in progress",
    "createdAt": 1700000000000,
    "updatedAt": 1700000000000
  }
]"#,
        )
        .unwrap();

        let mut store = TaskStore::open(path.clone()).await.unwrap();
        let task = store.get_by_id("k2x9f1").unwrap();
        assert_eq!(task.description, "from the old format");
        assert_eq!(task.status, TaskStatus::InProgress);

        // any mutation rewrites the document in the mapping shape
        store.add_task("fresh", TaskStatus::Todo).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert!(raw.contains("\"k2x9f1\""));
    }

    #[tokio::test]
    async fn test_corrupted_file_self_heals_to_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "this is not json").unwrap();

        let store = TaskStore::open(path.clone()).await.unwrap();
        assert!(store.get_all().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.json");

        let store = TaskStore::open(path.clone()).await.unwrap();
        assert!(store.get_all().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_mapping_shape_is_two_space_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = TaskStore::open(path.clone()).await.unwrap();
        let task = store.add_task("pretty", TaskStatus::Todo).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(&format!("  \"{}\": {{", task.id)));
        assert!(raw.contains("    \"description\": \"pretty\""));
    }
}
