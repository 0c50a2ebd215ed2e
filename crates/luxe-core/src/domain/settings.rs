//! Store-wide settings document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use luxe_shared::utils::now_iso;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_currency_rates")]
    pub currency_rates: BTreeMap<String, f64>,
    #[serde(default = "now_iso")]
    pub currency_rates_updated: String,
    #[serde(default)]
    pub shipping_methods: Vec<Value>,
    #[serde(default)]
    pub business_info: Map<String, Value>,
    #[serde(default = "default_inventory_threshold")]
    pub inventory_threshold: i64,
    #[serde(default = "default_true")]
    pub allow_preorders: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_rates: default_currency_rates(),
            currency_rates_updated: now_iso(),
            shipping_methods: Vec::new(),
            business_info: Map::new(),
            inventory_threshold: default_inventory_threshold(),
            allow_preorders: true,
        }
    }
}

fn default_currency_rates() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("KES".to_string(), 1.0),
        ("USD".to_string(), 0.0077),
        ("EUR".to_string(), 0.0071),
    ])
}

fn default_inventory_threshold() -> i64 {
    5
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_gets_defaults() {
        let settings: Settings =
            serde_json::from_value(serde_json::json!({ "inventoryThreshold": 2 })).unwrap();
        assert_eq!(settings.inventory_threshold, 2);
        assert_eq!(settings.currency_rates.get("KES"), Some(&1.0));
        assert!(settings.allow_preorders);
    }
}
