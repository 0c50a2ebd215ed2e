//! Products and collections

use async_trait::async_trait;
use dashmap::DashMap;

use luxe_core::domain::{Collection, Product, ProductFilter, ProductSort, RatingSummary};
use luxe_core::error::DomainError;
use luxe_core::repositories::{CollectionRepository, ProductRepository};

#[derive(Default)]
pub struct MemoryProductRepository {
    map: DashMap<String, Product>,
}

impl MemoryProductRepository {
    fn matching(&self, filter: &ProductFilter) -> Vec<Product> {
        self.map
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, DomainError> {
        let mut products = self.matching(filter);
        products.sort_by(|a, b| sort.compare(a, b));
        Ok(products.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, DomainError> {
        Ok(self.map.iter().filter(|r| filter.matches(r.value())).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.map.get(id).map(|p| p.value().clone()))
    }

    async fn increment_view_count(&self, id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.map.get_mut(id).map(|mut p| {
            p.view_count += 1;
            p.value().clone()
        }))
    }

    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        self.map.insert(product.id.clone(), product.clone());
        Ok(product.clone())
    }

    async fn replace(&self, id: &str, product: &Product) -> Result<bool, DomainError> {
        match self.map.get_mut(id) {
            Some(mut existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.map.remove(id).is_some())
    }

    async fn top_sellers(&self, limit: usize) -> Result<Vec<Product>, DomainError> {
        let mut products: Vec<Product> = self
            .map
            .iter()
            .filter(|r| r.is_active())
            .map(|r| r.value().clone())
            .collect();
        products.sort_by(|a, b| b.total_purchases.cmp(&a.total_purchases));
        products.truncate(limit);
        Ok(products)
    }

    async fn update_rating(&self, id: &str, summary: RatingSummary) -> Result<(), DomainError> {
        if let Some(mut p) = self.map.get_mut(id) {
            p.average_rating = summary.average_rating;
            p.review_count = summary.review_count;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCollectionRepository {
    map: DashMap<String, Collection>,
}

#[async_trait]
impl CollectionRepository for MemoryCollectionRepository {
    async fn list(&self, limit: usize) -> Result<Vec<Collection>, DomainError> {
        let mut collections: Vec<Collection> = self.map.iter().map(|r| r.value().clone()).collect();
        collections.sort_by_key(|c| c.display_order);
        collections.truncate(limit);
        Ok(collections)
    }

    async fn create(&self, collection: &Collection) -> Result<Collection, DomainError> {
        self.map.insert(collection.id.clone(), collection.clone());
        Ok(collection.clone())
    }

    async fn replace(&self, id: &str, collection: &Collection) -> Result<bool, DomainError> {
        match self.map.get_mut(id) {
            Some(mut existing) => {
                *existing = collection.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
