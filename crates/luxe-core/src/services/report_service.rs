//! Analytics tracking and sales reports

use serde_json::{Map, Value};
use std::sync::Arc;

use luxe_shared::constants::MAX_PAGE_SIZE;

use crate::domain::{AnalyticsEvent, DateRange, Product, RevenueReport};
use crate::error::DomainError;
use crate::repositories::{AnalyticsRepository, OrderRepository, ProductRepository};

pub struct ReportService {
    analytics: Arc<dyn AnalyticsRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl ReportService {
    pub fn new(
        analytics: Arc<dyn AnalyticsRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self { analytics, products, orders }
    }

    pub async fn track(&self, fields: Map<String, Value>) -> Result<(), DomainError> {
        let event = AnalyticsEvent::received(fields);
        self.analytics.insert(&event).await
    }

    /// Limit is clamped to `1..=MAX_PAGE_SIZE`.
    pub async fn bestsellers(&self, limit: usize) -> Result<Vec<Product>, DomainError> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE as usize);
        self.products.top_sellers(limit).await
    }

    pub async fn revenue(&self, range: &DateRange) -> Result<RevenueReport, DomainError> {
        let orders = self.orders.find_confirmed(range).await?;
        Ok(RevenueReport::from_orders(orders))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::tests::sample_order;
    use crate::repositories::analytics_repository::MockAnalyticsRepository;
    use crate::repositories::order_repository::MockOrderRepository;
    use crate::repositories::product_repository::MockProductRepository;
    use mockall::predicate::eq;

    fn service(
        analytics: MockAnalyticsRepository,
        orders: MockOrderRepository,
    ) -> ReportService {
        ReportService::new(
            Arc::new(analytics),
            Arc::new(MockProductRepository::new()),
            Arc::new(orders),
        )
    }

    fn bestseller_service(products: MockProductRepository) -> ReportService {
        ReportService::new(
            Arc::new(MockAnalyticsRepository::new()),
            Arc::new(products),
            Arc::new(MockOrderRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_bestsellers_limit_clamped() {
        let mut products = MockProductRepository::new();
        products
            .expect_top_sellers()
            .with(eq(100usize))
            .times(1)
            .returning(|_| Ok(vec![]));
        products
            .expect_top_sellers()
            .with(eq(1usize))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = bestseller_service(products);
        service.bestsellers(usize::MAX).await.unwrap();
        service.bestsellers(0).await.unwrap();
    }

    #[tokio::test]
    async fn test_track_stamps_event() {
        let mut analytics = MockAnalyticsRepository::new();
        analytics
            .expect_insert()
            .withf(|e| e.0.contains_key("timestamp") && e.0["event"] == "view")
            .times(1)
            .returning(|_| Ok(()));

        let mut fields = Map::new();
        fields.insert("event".to_string(), Value::from("view"));
        service(analytics, MockOrderRepository::new())
            .track(fields)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_revenue_sums_confirmed_orders() {
        let mut orders = MockOrderRepository::new();
        orders.expect_find_confirmed().returning(|_| {
            Ok(vec![
                sample_order("o1", 2500.0, "confirmed", "2026-03-01T00:00:00+00:00"),
                sample_order("o2", 500.0, "confirmed", "2026-03-02T00:00:00+00:00"),
            ])
        });

        let report = service(MockAnalyticsRepository::new(), orders)
            .revenue(&DateRange::default())
            .await
            .unwrap();
        assert_eq!(report.total_revenue, 3000.0);
        assert_eq!(report.average_order_value, 1500.0);
    }
}
