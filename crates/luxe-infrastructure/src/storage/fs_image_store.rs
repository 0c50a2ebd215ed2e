//! Uploaded images written to a local directory

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::error;

use luxe_core::error::DomainError;
use luxe_core::repositories::ImageStore;

pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            error!("Failed to create upload dir {}: {}", self.dir.display(), e);
            DomainError::StorageError(e.to_string())
        })?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            DomainError::StorageError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_dir() {
        let dir = std::env::temp_dir().join(format!("luxe-uploads-{}", std::process::id()));
        let store = FsImageStore::new(&dir);
        store.save("ring.png", vec![1, 2, 3]).await.unwrap();

        let written = tokio::fs::read(dir.join("ring.png")).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
