use std::path::{Path, PathBuf};

use async_trait::async_trait;

use sip_core::RepoError;
use sip_core::domain::{Task, TaskPatch};
use sip_core::ports::TaskRepository;

use super::JsonFileStore;

const TASKS_FILE: &str = "tasks.json";

/// Tasks stored as one JSON array, in insertion order.
pub struct JsonTaskRepository {
    store: JsonFileStore<Task>,
}

impl JsonTaskRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    /// Repository backed by `tasks.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(TASKS_FILE))
    }
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn list(&self) -> Result<Vec<Task>, RepoError> {
        self.store.load().await
    }

    async fn insert(&self, task: Task) -> Result<Task, RepoError> {
        self.store
            .modify(move |tasks| {
                tasks.push(task.clone());
                Ok(task)
            })
            .await
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, RepoError> {
        self.store
            .modify(move |tasks| {
                let task = tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(RepoError::NotFound)?;
                task.apply(patch);
                Ok(task.clone())
            })
            .await
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        self.store
            .modify(|tasks| {
                let before = tasks.len();
                tasks.retain(|t| t.id != id);
                Ok(tasks.len() != before)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, JsonTaskRepository) {
        let dir = TempDir::new().unwrap();
        let repo = JsonTaskRepository::in_dir(dir.path());
        (dir, repo)
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let (_dir, repo) = repo();
        let task = repo
            .insert(Task::new(Some("Buy milk".to_string()), None, None))
            .await
            .unwrap();

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, task.id);
        assert!(!tasks[0].done);
    }

    #[tokio::test]
    async fn test_update_only_touches_matching_task() {
        let (_dir, repo) = repo();
        let first = repo.insert(Task::new(Some("one".to_string()), None, None)).await.unwrap();
        let second = repo.insert(Task::new(Some("two".to_string()), None, None)).await.unwrap();

        let patch = TaskPatch {
            done: Some(true),
            ..TaskPatch::default()
        };
        let updated = repo.update(&second.id, patch).await.unwrap();
        assert!(updated.done);

        let tasks = repo.list().await.unwrap();
        assert!(!tasks.iter().find(|t| t.id == first.id).unwrap().done);
        assert!(tasks.iter().find(|t| t.id == second.id).unwrap().done);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_dir, repo) = repo();
        let result = repo.update("nope", TaskPatch::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, repo) = repo();
        let task = repo.insert(Task::new(None, None, None)).await.unwrap();

        assert!(repo.delete(&task.id).await.unwrap());
        assert!(!repo.delete(&task.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
