use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;

use sip_core::RepoError;

/// A JSON array of `T` stored in a single file.
///
/// The file and its parent directory are created on first access, seeded
/// with `[]`. Every operation takes the store's mutex, so concurrent
/// modifications within one process apply one after another instead of
/// overwriting each other.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection.
    pub async fn load(&self) -> Result<Vec<T>, RepoError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Read, let `f` mutate, and write back.
    ///
    /// Nothing is written when `f` returns an error.
    pub async fn modify<R, F>(&self, f: F) -> Result<R, RepoError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, RepoError> + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.read().await?;
        let outcome = f(&mut items)?;
        self.write(&items).await?;
        Ok(outcome)
    }

    async fn ensure_exists(&self) -> Result<(), RepoError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        if !fs::try_exists(&self.path).await? {
            tracing::info!(path = %self.path.display(), "Creating empty data file");
            fs::write(&self.path, "[]").await?;
        }
        Ok(())
    }

    async fn read(&self) -> Result<Vec<T>, RepoError> {
        self.ensure_exists().await?;
        let raw = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Data file is not a valid JSON array");
            RepoError::from(e)
        })
    }

    async fn write(&self, items: &[T]) -> Result<(), RepoError> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
