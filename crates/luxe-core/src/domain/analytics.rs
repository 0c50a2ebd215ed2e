//! Storefront analytics events and revenue reporting

use serde::Serialize;
use serde_json::{Map, Value};

use luxe_shared::utils::now_iso;

use super::order::Order;

/// Free-form event document; the server stamps `timestamp` on receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnalyticsEvent(pub Map<String, Value>);

impl AnalyticsEvent {
    pub fn received(mut fields: Map<String, Value>) -> Self {
        fields.insert("timestamp".to_string(), Value::String(now_iso()));
        Self(fields)
    }
}

/// Inclusive `createdAt` window, compared as ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn contains(&self, created_at: &str) -> bool {
        self.start.as_deref().map_or(true, |s| created_at >= s)
            && self.end.as_deref().map_or(true, |e| created_at <= e)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub average_order_value: f64,
    pub orders: Vec<Order>,
}

impl RevenueReport {
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let total_revenue: f64 = orders.iter().map(|o| o.total).sum();
        let total_orders = orders.len();
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };
        Self {
            total_revenue,
            total_orders,
            average_order_value,
            orders,
        }
    }
}
