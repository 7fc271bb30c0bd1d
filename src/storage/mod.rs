//! Key-value storage for diagnostics
//!
//! Raw answers the resolver could not use are kept here so a blocked or
//! changed endpoint can be inspected after the run.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Content type of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
}

impl ContentType {
    /// File extension used by [`FileStore`]
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
        }
    }
}

/// A place to persist named values
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn set_value(&self, key: &str, value: &str, content_type: ContentType) -> Result<()>;
}

/// Store writing one file per key into a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a key is written to
    pub fn path_for(&self, key: &str, content_type: ContentType) -> PathBuf {
        self.dir.join(format!("{}.{}", key, content_type.extension()))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn set_value(&self, key: &str, value: &str, content_type: ContentType) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.path_for(key, content_type);
        tokio::fs::write(&path, value)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Key for a diagnostic copy of a raw response
pub fn response_key() -> String {
    format!("RESPONSE-{}", uuid::Uuid::new_v4())
}
