//! Uploaded image storage (port)

use async_trait::async_trait;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` under `filename`, which is already sanitized.
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<(), DomainError>;
}
