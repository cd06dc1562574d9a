use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct FraudAlert {
    pub id: i64,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detected_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FraudAlert {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    /// "quantity_mismatch" -> "quantity mismatch" for display.
    pub fn type_label(&self) -> String {
        self.alert_type.replace('_', " ")
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AlertListResponse {
    #[serde(default)]
    pub alerts: Vec<FraudAlert>,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct StatusCounts {
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub resolved: u32,
    #[serde(default)]
    pub dismissed: u32,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct SeverityCounts {
    #[serde(default)]
    pub low: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub high: u32,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct FraudStatistics {
    #[serde(default)]
    pub total_alerts: u32,
    #[serde(default)]
    pub by_status: StatusCounts,
    #[serde(default)]
    pub by_severity: SeverityCounts,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub statistics: FraudStatistics,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PendingCount {
    #[serde(default)]
    pub pending_count: u32,
}

/// Body for PUT /fraud/{id}/review.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ReviewRequest {
    pub status: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_tolerate_missing_buckets() {
        let body = r#"{"statistics":{"total_alerts":4,"by_status":{"pending":2}}}"#;
        let response: StatisticsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.statistics.total_alerts, 4);
        assert_eq!(response.statistics.by_status.pending, 2);
        assert_eq!(response.statistics.by_status.resolved, 0);
        assert_eq!(response.statistics.by_severity.high, 0);
    }

    #[test]
    fn alert_type_label_replaces_underscores() {
        let alert = FraudAlert {
            id: 1,
            alert_type: "rapid_stock_out".to_string(),
            severity: "high".to_string(),
            status: "pending".to_string(),
            description: String::new(),
            detected_at: String::new(),
            notes: None,
        };
        assert_eq!(alert.type_label(), "rapid stock out");
        assert!(alert.is_pending());
    }
}
