// ============================================================================
// Luxe Core - Product Entity
// File: crates/luxe-core/src/domain/product.rs
// Description: Catalog product with variants, listing filter and sort order
// ============================================================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use validator::Validate;

use luxe_shared::utils::{new_id, now_iso};

pub const STATUS_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default = "new_id")]
    pub id: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i64,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[serde(default)]
    pub price_adjustment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default = "new_id")]
    pub id: String,

    #[validate(length(min = 1, max = 200, message = "Product name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Slug must be between 1 and 200 characters"))]
    pub slug: String,

    pub short_description: String,
    pub long_description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub base_price: f64,
    pub sale_price: Option<f64>,
    pub discount_percentage: Option<f64>,

    pub category: String,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub variants: Vec<ProductVariant>,

    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub allow_preorder: bool,
    #[serde(default = "default_true")]
    pub gift_wrap_available: bool,
    #[serde(default = "default_gift_wrap_cost")]
    pub gift_wrap_cost: f64,

    pub materials: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,
    pub care_instructions: Option<String>,
    pub size_guide_id: Option<String>,
    #[serde(default)]
    pub related_product_ids: Vec<String>,
    #[serde(default)]
    pub bundle_product_ids: Vec<String>,

    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub add_to_cart_count: i64,
    #[serde(default)]
    pub total_purchases: i64,

    #[serde(default = "now_iso")]
    pub created_at: String,
    #[serde(default = "now_iso")]
    pub updated_at: String,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_gift_wrap_cost() -> f64 {
    500.0
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn touch(&mut self) {
        self.updated_at = now_iso();
    }
}

/// Listing filter for the public catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub status: String,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            status: default_status(),
            category: None,
            search: None,
        }
    }
}

impl ProductFilter {
    /// Search is a case-insensitive substring over name and short description.
    pub fn matches(&self, product: &Product) -> bool {
        if product.status != self.status {
            return false;
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.short_description.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

impl ProductSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSort::Newest => "newest",
            ProductSort::PriceAsc => "price_asc",
            ProductSort::PriceDesc => "price_desc",
            ProductSort::Name => "name",
        }
    }

    /// Unknown values fall back to newest first.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("price_asc") => ProductSort::PriceAsc,
            Some("price_desc") => ProductSort::PriceDesc,
            Some("name") => ProductSort::Name,
            _ => ProductSort::Newest,
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::Newest => b.created_at.cmp(&a.created_at),
            ProductSort::PriceAsc => a.base_price.total_cmp(&b.base_price),
            ProductSort::PriceDesc => b.base_price.total_cmp(&a.base_price),
            ProductSort::Name => a.name.cmp(&b.name),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_product(id: &str, name: &str, price: f64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "slug": name.to_lowercase().replace(' ', "-"),
            "shortDescription": format!("{} in 18K gold", name),
            "longDescription": "Handcrafted.",
            "basePrice": price,
            "category": "Necklaces",
            "variants": [{ "sku": format!("SKU-{}", id), "stock": 3 }],
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let p = sample_product("p1", "Art Deco Pendant", 125000.0);
        assert_eq!(p.status, "active");
        assert!(p.gift_wrap_available);
        assert_eq!(p.gift_wrap_cost, 500.0);
        assert!(!p.variants[0].id.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_sku() {
        let mut p = sample_product("p1", "Pendant", 10.0);
        p.variants[0].sku.clear();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let p = sample_product("p1", "Gatsby Pearl Earrings", 10.0);
        let filter = ProductFilter {
            search: Some("PEARL".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let filter = ProductFilter {
            category: Some("Rings".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn test_sort_parse_and_compare() {
        let cheap = sample_product("a", "Zircon Ring", 10.0);
        let dear = sample_product("b", "Amber Ring", 99.0);
        assert_eq!(ProductSort::parse(Some("price_asc")).compare(&cheap, &dear), Ordering::Less);
        assert_eq!(ProductSort::parse(Some("price_desc")).compare(&cheap, &dear), Ordering::Greater);
        assert_eq!(ProductSort::parse(Some("name")).compare(&cheap, &dear), Ordering::Greater);
        assert_eq!(ProductSort::parse(Some("bogus")), ProductSort::Newest);
    }
}
