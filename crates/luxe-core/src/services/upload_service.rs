// ============================================================================
// Luxe Core - Upload Service
// File: crates/luxe-core/src/services/upload_service.rs
// Description: Admin product image uploads
// ============================================================================

use std::sync::Arc;
use tracing::info;

use crate::domain::upload::{extension_for, stored_filename};
use crate::error::DomainError;
use crate::repositories::ImageStore;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_bytes: usize,
    /// URL prefix the stored file is served under, e.g. `/uploads`.
    pub public_prefix: String,
}

pub struct UploadService {
    images: Arc<dyn ImageStore>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(images: Arc<dyn ImageStore>, policy: UploadPolicy) -> Self {
        Self { images, policy }
    }

    /// Validate and store an image, returning its public URL.
    pub async fn store_image(
        &self,
        content_type: &str,
        original_name: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError> {
        // 1. Type checks
        if !content_type.starts_with("image/") {
            return Err(DomainError::InvalidInput("Only image files are allowed".to_string()));
        }
        let ext = extension_for(content_type)
            .ok_or_else(|| DomainError::InvalidInput("Unsupported image type".to_string()))?;

        // 2. Size checks
        if bytes.is_empty() {
            return Err(DomainError::InvalidInput("Empty file".to_string()));
        }
        if bytes.len() > self.policy.max_bytes {
            return Err(DomainError::InvalidInput(format!(
                "Image too large (max {}MB)",
                self.policy.max_bytes / (1024 * 1024)
            )));
        }

        // 3. Persist under a collision-free name
        let filename = stored_filename(original_name, ext);
        let size = bytes.len();
        self.images.save(&filename, bytes).await?;

        info!("Stored image {} ({} bytes)", filename, size);
        Ok(format!(
            "{}/{}",
            self.policy.public_prefix.trim_end_matches('/'),
            filename
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::image_store::MockImageStore;

    fn service(images: MockImageStore) -> UploadService {
        UploadService::new(
            Arc::new(images),
            UploadPolicy {
                max_bytes: 8 * 1024 * 1024,
                public_prefix: "/uploads".to_string(),
            },
        )
    }

    async fn rejected(content_type: &str, bytes: Vec<u8>) -> String {
        let mut images = MockImageStore::new();
        images.expect_save().never();
        match service(images).store_image(content_type, Some("a.png"), bytes).await {
            Err(DomainError::InvalidInput(message)) => message,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejections() {
        assert_eq!(rejected("text/plain", vec![1]).await, "Only image files are allowed");
        assert_eq!(rejected("image/svg+xml", vec![1]).await, "Unsupported image type");
        assert_eq!(rejected("image/png", Vec::new()).await, "Empty file");
        assert_eq!(
            rejected("image/png", vec![0; 8 * 1024 * 1024 + 1]).await,
            "Image too large (max 8MB)"
        );
    }

    #[tokio::test]
    async fn test_store_returns_public_url() {
        let mut images = MockImageStore::new();
        images
            .expect_save()
            .withf(|name, bytes| name.starts_with("ring_") && name.ends_with(".webp") && bytes.len() == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let url = service(images)
            .store_image("image/webp", Some("ring.webp"), vec![1, 2, 3])
            .await
            .unwrap();
        assert!(url.starts_with("/uploads/ring_"));
        assert!(url.ends_with(".webp"));
    }
}
