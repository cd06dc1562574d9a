use yew::prelude::*;

use crate::models::DashboardSummary;
use crate::services::{api, session};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let summary = use_state(|| None::<DashboardSummary>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let user = session::get().user;

    {
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_dashboard_summary().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Failed to load dashboard: {}", e);
                        error.set(Some("Failed to load dashboard summary".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="loading">{ "Loading dashboard..." }</div> };
    }

    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let role_label = user.as_ref().map(|u| u.role.label()).unwrap_or("");

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>{ format!("Welcome back, {}! 👋", username) }</h1>
                <p>{ "Here's what's happening with your inventory today" }</p>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="error-message">{ message }</div>
            }

            if let Some(summary) = (*summary).clone() {
                <div class="stats-grid">
                    <div class="stat-card">
                        <div class="stat-icon inventory">{ "📦" }</div>
                        <div class="stat-content">
                            <h3>{ summary.inventory.total_items }</h3>
                            <p>{ "Total Items" }</p>
                        </div>
                    </div>

                    <div class="stat-card">
                        <div class="stat-icon warning">{ "⚠️" }</div>
                        <div class="stat-content">
                            <h3>{ summary.inventory.low_stock_items }</h3>
                            <p>{ "Low Stock Items" }</p>
                        </div>
                    </div>

                    <div class="stat-card">
                        <div class="stat-icon transactions">{ "💰" }</div>
                        <div class="stat-content">
                            <h3>{ summary.transactions.today }</h3>
                            <p>{ "Transactions Today" }</p>
                        </div>
                    </div>

                    <div class="stat-card">
                        <div class="stat-icon fraud">{ "🚨" }</div>
                        <div class="stat-content">
                            <h3>{ summary.fraud_alerts.pending }</h3>
                            <p>{ "Pending Alerts" }</p>
                            if summary.fraud_alerts.high_severity_pending > 0 {
                                <span class="alert-badge">
                                    { format!("{} High Priority", summary.fraud_alerts.high_severity_pending) }
                                </span>
                            }
                        </div>
                    </div>
                </div>

                <div class="dashboard-info">
                    <h2>{ "Quick Stats" }</h2>
                    <ul>
                        <li>
                            { "Transactions (Last 7 days): " }
                            <strong>{ summary.transactions.last_7_days }</strong>
                        </li>
                        <li>
                            { "Role: " }
                            <strong>{ role_label }</strong>
                        </li>
                        <li>
                            { "Last Updated: " }
                            <strong>{ summary.generated_at.clone() }</strong>
                        </li>
                    </ul>
                </div>
            }
        </div>
    }
}
