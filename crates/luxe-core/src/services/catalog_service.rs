// ============================================================================
// Luxe Core - Catalog Service
// File: crates/luxe-core/src/services/catalog_service.rs
// Description: Products and collections
// ============================================================================

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use luxe_shared::constants::COLLECTION_LIST_LIMIT;
use luxe_shared::{Page, Pagination};

use crate::domain::{Collection, Product, ProductFilter, ProductSort};
use crate::error::DomainError;
use crate::repositories::{CollectionRepository, ProductRepository};

pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    collections: Arc<dyn CollectionRepository>,
}

impl CatalogService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        collections: Arc<dyn CollectionRepository>,
    ) -> Self {
        Self { products, collections }
    }

    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        pagination: Pagination,
    ) -> Result<Page<Product>, DomainError> {
        let items = self
            .products
            .find(filter, sort, pagination.skip(), pagination.limit as usize)
            .await?;
        let total = self.products.count(filter).await?;
        Ok(Page::new(items, total, pagination))
    }

    /// Fetch a product and count the view.
    pub async fn view_product(&self, id: &str) -> Result<Product, DomainError> {
        self.products
            .increment_view_count(id)
            .await?
            .ok_or(DomainError::NotFound("Product"))
    }

    pub async fn create_product(&self, product: Product) -> Result<Product, DomainError> {
        product.validate()?;
        let created = self.products.create(&product).await?;
        info!("Product created: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Full replace. The path id wins over any id in the body.
    pub async fn update_product(&self, id: &str, mut product: Product) -> Result<Product, DomainError> {
        product.validate()?;
        product.id = id.to_string();
        product.touch();

        if !self.products.replace(id, &product).await? {
            return Err(DomainError::NotFound("Product"));
        }
        info!("Product updated: {}", id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), DomainError> {
        if !self.products.delete(id).await? {
            return Err(DomainError::NotFound("Product"));
        }
        info!("Product deleted: {}", id);
        Ok(())
    }

    pub async fn list_collections(&self) -> Result<Vec<Collection>, DomainError> {
        self.collections.list(COLLECTION_LIST_LIMIT).await
    }

    pub async fn create_collection(&self, collection: Collection) -> Result<Collection, DomainError> {
        collection.validate()?;
        let created = self.collections.create(&collection).await?;
        info!("Collection created: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_collection(
        &self,
        id: &str,
        mut collection: Collection,
    ) -> Result<Collection, DomainError> {
        collection.validate()?;
        collection.id = id.to_string();

        if !self.collections.replace(id, &collection).await? {
            return Err(DomainError::NotFound("Collection"));
        }
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::tests::sample_product;
    use crate::repositories::collection_repository::MockCollectionRepository;
    use crate::repositories::product_repository::MockProductRepository;
    use mockall::predicate::eq;

    fn service(products: MockProductRepository) -> CatalogService {
        CatalogService::new(Arc::new(products), Arc::new(MockCollectionRepository::new()))
    }

    fn collection_service(collections: MockCollectionRepository) -> CatalogService {
        CatalogService::new(Arc::new(MockProductRepository::new()), Arc::new(collections))
    }

    fn sample_collection(id: &str, name: &str, display_order: i32) -> Collection {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "slug": name.to_lowercase().replace(' ', "-"),
            "description": "Curated pieces.",
            "displayOrder": display_order,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_products_pages() {
        let mut products = MockProductRepository::new();
        products
            .expect_find()
            .withf(|_, sort, skip, limit| *sort == ProductSort::PriceAsc && *skip == 10 && *limit == 10)
            .returning(|_, _, _, _| Ok(vec![sample_product("p1", "Pendant", 10.0)]));
        products.expect_count().returning(|_| Ok(21));

        let page = service(products)
            .list_products(
                &ProductFilter::default(),
                ProductSort::PriceAsc,
                Pagination::new(Some(2), Some(10)),
            )
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 21);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 3);
    }

    #[tokio::test]
    async fn test_view_missing_product() {
        let mut products = MockProductRepository::new();
        products
            .expect_increment_view_count()
            .with(eq("nope"))
            .returning(|_| Ok(None));

        let err = service(products).view_product("nope").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound("Product")));
    }

    #[tokio::test]
    async fn test_update_keeps_path_id() {
        let mut products = MockProductRepository::new();
        products
            .expect_replace()
            .withf(|id, p| id == "p1" && p.id == "p1")
            .returning(|_, _| Ok(true));

        let body = sample_product("other", "Pendant", 10.0);
        let updated = service(products).update_product("p1", body).await.unwrap();
        assert_eq!(updated.id, "p1");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product() {
        let mut products = MockProductRepository::new();
        products.expect_create().never();

        let mut body = sample_product("p1", "Pendant", 10.0);
        body.name.clear();
        let err = service(products).create_product(body).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_list_collections_capped() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_list()
            .with(eq(COLLECTION_LIST_LIMIT))
            .times(1)
            .returning(|_| Ok(vec![sample_collection("c1", "Bridal", 1)]));

        let listed = collection_service(collections).list_collections().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_create_collection_validates() {
        let mut collections = MockCollectionRepository::new();
        collections.expect_create().never();

        let mut body = sample_collection("c1", "Bridal", 1);
        body.slug.clear();
        let err = collection_service(collections)
            .create_collection(body)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_collection_keeps_path_id() {
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_replace()
            .withf(|id, c| id == "c1" && c.id == "c1")
            .returning(|_, _| Ok(true));

        let body = sample_collection("other", "Bridal", 2);
        let updated = collection_service(collections)
            .update_collection("c1", body)
            .await
            .unwrap();
        assert_eq!(updated.id, "c1");
    }

    #[tokio::test]
    async fn test_update_missing_collection() {
        let mut collections = MockCollectionRepository::new();
        collections.expect_replace().returning(|_, _| Ok(false));

        let err = collection_service(collections)
            .update_collection("nope", sample_collection("nope", "Bridal", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound("Collection")));
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut products = MockProductRepository::new();
        products.expect_delete().returning(|_| Ok(false));
        let err = service(products).delete_product("p1").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound("Product")));
    }
}
