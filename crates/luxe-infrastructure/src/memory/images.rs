use async_trait::async_trait;
use dashmap::DashMap;

use luxe_core::error::DomainError;
use luxe_core::repositories::ImageStore;

#[derive(Default)]
pub struct MemoryImageStore {
    files: DashMap<String, Vec<u8>>,
}

impl MemoryImageStore {
    pub fn get(&self, filename: &str) -> Option<Vec<u8>> {
        self.files.get(filename).map(|f| f.value().clone())
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<(), DomainError> {
        self.files.insert(filename.to_string(), bytes);
        Ok(())
    }
}
