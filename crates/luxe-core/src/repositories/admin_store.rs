//! Admin key-value store trait (port)

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::AdminKey;
use crate::error::DomainError;

/// Holds exactly two rows: the password hash and the current session.
///
/// Implementations must give read-your-writes per key and atomic upserts;
/// the session guard adds no locking of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn get(&self, key: AdminKey) -> Result<Option<Value>, DomainError>;
    async fn set(&self, key: AdminKey, value: Value) -> Result<(), DomainError>;
    async fn delete(&self, key: AdminKey) -> Result<(), DomainError>;
}
