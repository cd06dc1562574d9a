pub mod auth;
pub mod fraud;
pub mod inventory;
pub mod report;
pub mod transaction;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Role, User};
pub use fraud::{
    AlertListResponse, FraudAlert, FraudStatistics, PendingCount, ReviewRequest, SeverityCounts,
    StatisticsResponse, StatusCounts,
};
pub use inventory::{InventoryItem, InventoryListResponse, NewInventoryItem};
pub use report::{
    DashboardSummary, FraudAlertSummary, InventorySummary, ReportCard, TransactionSummary,
    REPORT_CATALOG,
};
pub use transaction::{NewTransaction, Transaction, TransactionListResponse, TransactionType};
