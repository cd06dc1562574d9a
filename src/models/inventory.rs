use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct InventoryItem {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub reorder_level: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub supplier_name: Option<String>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct InventoryListResponse {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// Body for add/update; field names match the add-item form.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
    pub unit_price: f64,
    pub supplier_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counts_default_to_zero() {
        let body = r#"{"items":[{"id":7,"item_name":"Flour"}]}"#;
        let response: InventoryListResponse = serde_json::from_str(body).unwrap();
        let item = &response.items[0];
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.reorder_level, 0.0);
        assert!(item.supplier_name.is_none());
    }

    #[test]
    fn low_stock_when_quantity_at_or_below_reorder_level() {
        let item = InventoryItem {
            id: 1,
            item_name: "Sugar".to_string(),
            category: "Dry goods".to_string(),
            quantity: 5.0,
            unit: "kg".to_string(),
            reorder_level: 5.0,
            unit_price: 1.2,
            supplier_name: None,
        };
        assert!(item.is_low_stock());
    }
}
