use std::path::{Path, PathBuf};

use async_trait::async_trait;

use sip_core::RepoError;
use sip_core::domain::User;
use sip_core::ports::UserRepository;

use super::JsonFileStore;

const USERS_FILE: &str = "users.json";

/// Users stored as one JSON array. Lookups are linear scans.
pub struct JsonUserRepository {
    store: JsonFileStore<User>,
}

impl JsonUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    /// Repository backed by `users.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(USERS_FILE))
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError> {
        let users = self.store.load().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.store.load().await?;
        Ok(users.into_iter().find(|u| u.has_email(email)))
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        self.store
            .modify(move |users| {
                if users.iter().any(|u| u.has_email(&user.email)) {
                    return Err(RepoError::Constraint("Email already registered".to_string()));
                }
                users.push(user.clone());
                Ok(user)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_insert_and_find() {
        let dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::in_dir(dir.path());
        let user = repo
            .insert(User::new("ada@example.com", "hash".to_string(), None))
            .await
            .unwrap();

        let by_email = repo.find_by_email("ADA@EXAMPLE.COM").await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id.as_str()), Some(user.id.as_str()));

        let by_id = repo.find_by_id(&user.id).await.unwrap();
        assert_eq!(by_id, Some(user));
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_ignoring_case() {
        let dir = TempDir::new().unwrap();
        let repo = JsonUserRepository::in_dir(dir.path());
        repo.insert(User::new("ada@example.com", "h1".to_string(), None))
            .await
            .unwrap();

        let result = repo
            .insert(User::new("Ada@Example.com", "h2".to_string(), None))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"[{"id":"lq1","email":"old@example.com","password":"$2a$10$abc","name":"old"}]"#,
        )
        .unwrap();

        let repo = JsonUserRepository::new(&path);
        let user = repo.find_by_email("old@example.com").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "$2a$10$abc");
    }
}
