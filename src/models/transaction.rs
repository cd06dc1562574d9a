use serde::{Deserialize, Serialize};

/// Kind of stock movement being recorded; selects the endpoint to call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransactionType {
    StockIn,
    StockOut,
    Waste,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::StockIn => "stock_in",
            TransactionType::StockOut => "stock_out",
            TransactionType::Waste => "waste",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::StockIn => "Stock IN",
            TransactionType::StockOut => "Stock OUT",
            TransactionType::Waste => "Waste",
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub previous_quantity: f64,
    #[serde(default)]
    pub new_quantity: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub is_flagged: bool,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TransactionListResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewTransaction {
    pub inventory_id: i64,
    pub quantity: f64,
    pub reason: String,
    pub reference_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_defaults_to_false() {
        let body = r#"{"transactions":[{"id":3,"transaction_type":"stock_out"}]}"#;
        let response: TransactionListResponse = serde_json::from_str(body).unwrap();
        assert!(!response.transactions[0].is_flagged);
    }
}
