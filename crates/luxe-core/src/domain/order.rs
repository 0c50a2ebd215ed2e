// ============================================================================
// Luxe Core - Order Entity
// File: crates/luxe-core/src/domain/order.rs
// Description: Checkout order and the admin fulfillment update allow-list
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use luxe_shared::utils::{new_id, now_iso};

pub const PAYMENT_CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub variant_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
    #[serde(default)]
    pub gift_wrap: bool,
    pub gift_message: Option<String>,
    #[serde(default)]
    pub gift_receipt: bool,
    #[serde(default)]
    pub is_preorder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid customer email"))]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub is_guest: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub address: String,
    pub city: String,
    pub county: String,
    pub method: String,
    pub cost: f64,
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(default = "default_payment_method")]
    pub method: String,
    #[serde(default = "default_pending")]
    pub status: String,
    pub mpesa_transaction_id: Option<String>,
    pub confirmed_at: Option<String>,
}

impl PaymentInfo {
    pub fn is_confirmed(&self) -> bool {
        self.status == PAYMENT_CONFIRMED
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: String,
    pub timestamp: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default = "new_id")]
    pub id: String,
    #[validate(length(min = 1, message = "Order number is required"))]
    pub order_number: String,
    #[validate(nested)]
    pub customer: CustomerInfo,
    pub delivery: DeliveryInfo,
    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub gift_wrap_total: f64,
    pub discount: f64,
    pub shipping_cost: f64,
    pub total: f64,
    pub payment: PaymentInfo,
    #[serde(default = "default_pending")]
    pub status: String,
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
    pub admin_notes: Option<String>,
    pub courier: Option<String>,
    pub tracking_url: Option<String>,
    pub package_weight: Option<String>,
    #[serde(default = "now_iso")]
    pub created_at: String,
    #[serde(default = "now_iso")]
    pub updated_at: String,
}

fn default_pending() -> String {
    "pending".to_string()
}

fn default_payment_method() -> String {
    "M-Pesa".to_string()
}

/// Fields an admin may change on an existing order. Anything else in the
/// request body is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    pub courier: Option<String>,
    pub tracking_url: Option<String>,
    pub delivery: Option<DeliveryInfo>,
    pub payment: Option<PaymentInfo>,
    pub status_history: Option<Vec<StatusChange>>,
}

impl OrderUpdate {
    pub fn apply(self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(notes) = self.admin_notes {
            order.admin_notes = Some(notes);
        }
        if let Some(courier) = self.courier {
            order.courier = Some(courier);
        }
        if let Some(url) = self.tracking_url {
            order.tracking_url = Some(url);
        }
        if let Some(delivery) = self.delivery {
            order.delivery = delivery;
        }
        if let Some(payment) = self.payment {
            order.payment = payment;
        }
        if let Some(history) = self.status_history {
            order.status_history = history;
        }
        order.updated_at = now_iso();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_order(id: &str, total: f64, payment_status: &str, created_at: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "orderNumber": format!("LL-{}", id),
            "customer": { "name": "Wanjiru", "email": "wanjiru@example.com", "phone": "+254700000000" },
            "delivery": { "address": "Moi Avenue 1", "city": "Nairobi", "county": "Nairobi", "method": "standard", "cost": 300.0 },
            "items": [{ "productId": "p1", "variantId": "v1", "quantity": 1 }],
            "subtotal": total,
            "giftWrapTotal": 0.0,
            "discount": 0.0,
            "shippingCost": 0.0,
            "total": total,
            "payment": { "status": payment_status },
            "createdAt": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_and_validation() {
        let order = sample_order("o1", 1000.0, "pending", "2026-01-01T00:00:00+00:00");
        assert_eq!(order.status, "pending");
        assert_eq!(order.payment.method, "M-Pesa");
        assert!(order.validate().is_ok());

        let mut empty = order.clone();
        empty.items.clear();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let update: OrderUpdate = serde_json::from_value(serde_json::json!({
            "status": "shipped",
            "courier": "G4S",
            "total": 1.0,
            "orderNumber": "HACKED",
        }))
        .unwrap();

        let mut order = sample_order("o1", 1000.0, "pending", "2026-01-01T00:00:00+00:00");
        update.apply(&mut order);

        assert_eq!(order.status, "shipped");
        assert_eq!(order.courier.as_deref(), Some("G4S"));
        assert_eq!(order.total, 1000.0);
        assert_eq!(order.order_number, "LL-o1");
        assert_ne!(order.updated_at, order.created_at);
    }

    #[test]
    fn test_update_replaces_history() {
        let update: OrderUpdate = serde_json::from_value(serde_json::json!({
            "statusHistory": [{ "status": "shipped", "timestamp": "2026-01-02T00:00:00Z", "note": "Shipped via G4S" }]
        }))
        .unwrap();
        let mut order = sample_order("o1", 1000.0, "pending", "2026-01-01T00:00:00+00:00");
        update.apply(&mut order);
        assert_eq!(order.status_history.len(), 1);
        assert_eq!(order.status, "pending");
    }
}
