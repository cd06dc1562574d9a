pub mod dashboard;
pub mod fraud_alerts;
pub mod inventory;
pub mod login;
pub mod register;
pub mod reports;
pub mod transactions;

pub use dashboard::Dashboard;
pub use fraud_alerts::FraudAlerts;
pub use inventory::Inventory;
pub use login::Login;
pub use register::Register;
pub use reports::Reports;
pub use transactions::Transactions;
