//! Curated product collection

use serde::{Deserialize, Serialize};
use validator::Validate;

use luxe_shared::utils::new_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default = "new_id")]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "Collection name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Slug must be between 1 and 100 characters"))]
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub product_ids: Vec<String>,
}
