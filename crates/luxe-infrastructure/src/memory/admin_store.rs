use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use luxe_core::domain::AdminKey;
use luxe_core::error::DomainError;
use luxe_core::repositories::AdminStore;

#[derive(Default)]
pub struct MemoryAdminStore {
    map: DashMap<AdminKey, Value>,
}

impl MemoryAdminStore {
    /// Store seeded with an already hashed admin password.
    pub fn with_password_hash(hash: impl Into<String>) -> Self {
        let store = Self::default();
        store.map.insert(AdminKey::Password, Value::String(hash.into()));
        store
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn get(&self, key: AdminKey) -> Result<Option<Value>, DomainError> {
        Ok(self.map.get(&key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: AdminKey, value: Value) -> Result<(), DomainError> {
        self.map.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: AdminKey) -> Result<(), DomainError> {
        self.map.remove(&key);
        Ok(())
    }
}
