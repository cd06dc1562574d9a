// ============================================================================
// API GATEWAY CLIENT - one function per backend endpoint (stateless)
// ============================================================================
// No business logic here, only HTTP. Every request picks up the bearer token
// from the session store when one exists; requests without a token still go
// out and the backend decides what they may do.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    AlertListResponse, DashboardSummary, FraudAlert, InventoryItem, InventoryListResponse,
    LoginRequest, LoginResponse, NewInventoryItem, NewTransaction, PendingCount, RegisterRequest,
    ReviewRequest, StatisticsResponse, TransactionListResponse, User,
};
use crate::services::error::ApiError;
use crate::services::session;
use crate::utils::API_URL;

fn url(path: &str) -> String {
    format!("{}{}", API_URL, path)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::get().token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => None,
    };
    ApiError::Http { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = authorized(Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = authorized(Request::put(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

// ---------------------------------------------------------------- auth

pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_json("/auth/login", credentials).await
}

pub async fn register(user: &RegisterRequest) -> Result<Value, ApiError> {
    post_json("/auth/register", user).await
}

pub async fn get_profile() -> Result<User, ApiError> {
    get_json("/auth/profile").await
}

// ----------------------------------------------------------- inventory

pub async fn get_all_inventory() -> Result<InventoryListResponse, ApiError> {
    get_json("/inventory/").await
}

pub async fn get_inventory_by_id(id: i64) -> Result<InventoryItem, ApiError> {
    get_json(&format!("/inventory/{}", id)).await
}

pub async fn add_inventory(item: &NewInventoryItem) -> Result<Value, ApiError> {
    post_json("/inventory/", item).await
}

pub async fn update_inventory(id: i64, item: &NewInventoryItem) -> Result<Value, ApiError> {
    put_json(&format!("/inventory/{}", id), item).await
}

pub async fn delete_inventory(id: i64) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&url(&format!("/inventory/{}", id))))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

pub async fn search_inventory(query: &str) -> Result<InventoryListResponse, ApiError> {
    get_json(&format!("/inventory/search?q={}", query)).await
}

pub async fn get_low_stock() -> Result<InventoryListResponse, ApiError> {
    get_json("/inventory/low-stock").await
}

// -------------------------------------------------------- transactions

pub async fn get_all_transactions() -> Result<TransactionListResponse, ApiError> {
    get_json("/transactions/").await
}

pub async fn stock_in(transaction: &NewTransaction) -> Result<Value, ApiError> {
    post_json("/transactions/stock-in", transaction).await
}

pub async fn stock_out(transaction: &NewTransaction) -> Result<Value, ApiError> {
    post_json("/transactions/stock-out", transaction).await
}

pub async fn record_waste(transaction: &NewTransaction) -> Result<Value, ApiError> {
    post_json("/transactions/waste", transaction).await
}

pub async fn get_transaction_summary() -> Result<Value, ApiError> {
    get_json("/transactions/summary").await
}

// --------------------------------------------------------------- fraud

pub async fn get_all_alerts() -> Result<AlertListResponse, ApiError> {
    get_json("/fraud/").await
}

pub async fn get_alert_by_id(id: i64) -> Result<FraudAlert, ApiError> {
    get_json(&format!("/fraud/{}", id)).await
}

pub async fn review_alert(id: i64, review: &ReviewRequest) -> Result<Value, ApiError> {
    put_json(&format!("/fraud/{}/review", id), review).await
}

pub async fn get_fraud_statistics() -> Result<StatisticsResponse, ApiError> {
    get_json("/fraud/statistics").await
}

pub async fn get_pending_count() -> Result<PendingCount, ApiError> {
    get_json("/fraud/pending-count").await
}

// ------------------------------------------------------------- reports

pub async fn get_daily_inventory() -> Result<Value, ApiError> {
    get_json("/reports/daily-inventory").await
}

pub async fn get_weekly_fraud() -> Result<Value, ApiError> {
    get_json("/reports/weekly-fraud").await
}

pub async fn get_monthly_analytics() -> Result<Value, ApiError> {
    get_json("/reports/monthly-analytics").await
}

pub async fn get_user_activity() -> Result<Value, ApiError> {
    get_json("/reports/user-activity").await
}

pub async fn get_low_stock_alert() -> Result<Value, ApiError> {
    get_json("/reports/low-stock-alert").await
}

pub async fn get_waste_analysis() -> Result<Value, ApiError> {
    get_json("/reports/waste-analysis").await
}

pub async fn get_dashboard_summary() -> Result<DashboardSummary, ApiError> {
    get_json("/reports/dashboard-summary").await
}
