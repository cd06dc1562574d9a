use serde::Deserialize;

/// Payload of GET /reports/dashboard-summary. Every count defaults so a
/// partial summary still renders.
#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct DashboardSummary {
    #[serde(default)]
    pub inventory: InventorySummary,
    #[serde(default)]
    pub transactions: TransactionSummary,
    #[serde(default)]
    pub fraud_alerts: FraudAlertSummary,
    #[serde(default)]
    pub generated_at: String,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct InventorySummary {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub low_stock_items: u32,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct TransactionSummary {
    #[serde(default)]
    pub today: u32,
    #[serde(default)]
    pub last_7_days: u32,
}

#[derive(Clone, Default, PartialEq, Deserialize, Debug)]
pub struct FraudAlertSummary {
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub high_severity_pending: u32,
}

/// One generatable report in the Reports screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ReportCard {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const REPORT_CATALOG: &[ReportCard] = &[
    ReportCard {
        id: "daily",
        name: "Daily Inventory Report",
        icon: "📦",
    },
    ReportCard {
        id: "weekly-fraud",
        name: "Weekly Fraud Summary",
        icon: "🚨",
    },
    ReportCard {
        id: "monthly",
        name: "Monthly Analytics",
        icon: "📊",
    },
    ReportCard {
        id: "waste",
        name: "Waste Analysis",
        icon: "🗑️",
    },
    ReportCard {
        id: "low-stock",
        name: "Low Stock Alert",
        icon: "⚠️",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_summary_tolerates_partial_payload() {
        let body = r#"{"inventory":{"total_items":12},"generated_at":"2026-08-06 09:00"}"#;
        let summary: DashboardSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.inventory.total_items, 12);
        assert_eq!(summary.inventory.low_stock_items, 0);
        assert_eq!(summary.transactions.today, 0);
        assert_eq!(summary.fraud_alerts.pending, 0);
        assert_eq!(summary.generated_at, "2026-08-06 09:00");
    }
}
