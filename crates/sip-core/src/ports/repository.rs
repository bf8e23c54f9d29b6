use async_trait::async_trait;

use crate::domain::{Task, TaskPatch, User};
use crate::error::RepoError;

/// Ordered task collection.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every task in insertion order.
    async fn list(&self) -> Result<Vec<Task>, RepoError>;

    /// Append a task.
    async fn insert(&self, task: Task) -> Result<Task, RepoError>;

    /// Apply a patch to the task with `id`. `RepoError::NotFound` if absent.
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, RepoError>;

    /// Remove the task with `id`. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}

/// User accounts, unique by case-insensitive email.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Add a user. Fails with `RepoError::Constraint` when the email is taken.
    async fn insert(&self, user: User) -> Result<User, RepoError>;
}
