use yew::prelude::*;

use crate::components::RoleGate;
use crate::models::{FraudAlert, FraudStatistics, ReviewRequest, Role};
use crate::services::{api, session, ApiError};
use crate::utils::dialog;

/// Roles allowed to review alerts. Inline gate only; the backend makes the
/// real call on the PUT.
const REVIEW_ROLES: &[Role] = &[Role::Admin, Role::Manager];
const STAFF_ONLY: &[Role] = &[Role::Staff];

fn ensure_reviewer(role: Option<Role>) -> Result<(), String> {
    match role {
        Some(role) if REVIEW_ROLES.contains(&role) => Ok(()),
        _ => Err("Access denied: only managers and admins can review alerts.".to_string()),
    }
}

fn validate_notes(notes: &str) -> Result<(), String> {
    if notes.trim().is_empty() {
        return Err("Please provide notes for this review.".to_string());
    }
    Ok(())
}

fn review_error_message(error: &ApiError) -> String {
    if error.is_forbidden() {
        return "Access denied: the server rejected this review.".to_string();
    }
    error
        .server_message()
        .unwrap_or("Failed to review alert")
        .to_string()
}

fn reload(
    alerts: UseStateHandle<Vec<FraudAlert>>,
    statistics: UseStateHandle<Option<FraudStatistics>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        // Alerts and statistics are independent reads
        let (alerts_result, statistics_result) =
            futures::join!(api::get_all_alerts(), api::get_fraud_statistics());

        match alerts_result {
            Ok(response) => {
                alerts.set(response.alerts);
                error.set(None);
            }
            Err(e) => {
                log::error!("❌ Failed to load fraud alerts: {}", e);
                error.set(Some("Failed to load fraud alerts".to_string()));
            }
        }
        match statistics_result {
            Ok(response) => statistics.set(Some(response.statistics)),
            Err(e) => log::error!("❌ Failed to load fraud statistics: {}", e),
        }
        loading.set(false);
    });
}

#[function_component(FraudAlerts)]
pub fn fraud_alerts() -> Html {
    let alerts = use_state(Vec::<FraudAlert>::new);
    let statistics = use_state(|| None::<FraudStatistics>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let alerts = alerts.clone();
        let statistics = statistics.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            reload(alerts, statistics, loading, error);
            || ()
        });
    }

    let on_review = {
        let alerts = alerts.clone();
        let statistics = statistics.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |(alert_id, status): (i64, &'static str)| {
            // Role re-check before anything else; the hidden buttons are
            // only a display hint
            if let Err(message) = ensure_reviewer(session::get().role()) {
                dialog::alert(&message);
                return;
            }

            let Some(notes) = dialog::prompt(&format!("Notes for {}:", status)) else {
                return;
            };
            if let Err(message) = validate_notes(&notes) {
                dialog::alert(&message);
                return;
            }

            let review = ReviewRequest {
                status: status.to_string(),
                notes,
            };
            let alerts = alerts.clone();
            let statistics = statistics.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::review_alert(alert_id, &review).await {
                    Ok(_) => {
                        log::info!("🚨 Alert {} marked as {}", alert_id, review.status);
                        reload(alerts, statistics, loading, error);
                        dialog::alert(&format!("Alert marked as {}!", review.status));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to review alert {}: {}", alert_id, e);
                        dialog::alert(&review_error_message(&e));
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{ "Loading fraud alerts..." }</div> };
    }

    html! {
        <div class="fraud-alerts-page">
            <h1>{ "🚨 Fraud Detection Alerts" }</h1>

            if let Some(message) = (*error).clone() {
                <div class="error-message">{ message }</div>
            }

            <RoleGate allowed_roles={Some(REVIEW_ROLES)}>
                <p class="review-hint">
                    { "Review pending alerts below: resolve confirmed issues, dismiss false positives." }
                </p>
            </RoleGate>
            <RoleGate allowed_roles={Some(STAFF_ONLY)}>
                <p class="review-hint">
                    { "Alerts are reviewed by managers. Contact one if you believe an alert needs attention." }
                </p>
            </RoleGate>

            if let Some(stats) = (*statistics).clone() {
                <div class="stats-summary">
                    <div class="stat-box">
                        <h3>{ stats.total_alerts }</h3>
                        <p>{ "Total Alerts" }</p>
                    </div>
                    <div class="stat-box pending">
                        <h3>{ stats.by_status.pending }</h3>
                        <p>{ "Pending" }</p>
                    </div>
                    <div class="stat-box high">
                        <h3>{ stats.by_severity.high }</h3>
                        <p>{ "High Severity" }</p>
                    </div>
                    <div class="stat-box resolved">
                        <h3>{ stats.by_status.resolved }</h3>
                        <p>{ "Resolved" }</p>
                    </div>
                </div>
            }

            <div class="alerts-list">
                if alerts.is_empty() {
                    <div class="no-alerts">
                        <p>{ "✅ No fraud alerts detected!" }</p>
                    </div>
                } else {
                    { for alerts.iter().map(|alert| {
                        let on_review = on_review.clone();
                        let id = alert.id;
                        html! {
                            <div key={alert.id} class={format!("alert-card severity-{}", alert.severity)}>
                                <div class="alert-header">
                                    <div class="alert-title">
                                        <span>{ "⚠️ " }</span>
                                        <span>{ alert.type_label() }</span>
                                    </div>
                                    <span class={format!("severity-badge {}", alert.severity)}>
                                        { alert.severity.to_uppercase() }
                                    </span>
                                </div>

                                <div class="alert-body">
                                    <p class="alert-description">{ &alert.description }</p>
                                    <div class="alert-meta">
                                        <span>{ format!("Detected: {}", alert.detected_at) }</span>
                                        <span class={format!("status-badge {}", alert.status)}>
                                            { &alert.status }
                                        </span>
                                    </div>

                                    if alert.is_pending() {
                                        <RoleGate allowed_roles={Some(REVIEW_ROLES)}>
                                            <div class="alert-actions">
                                                <button
                                                    class="review-btn resolved"
                                                    onclick={
                                                        let on_review = on_review.clone();
                                                        move |_| on_review.emit((id, "resolved"))
                                                    }
                                                >
                                                    { "✔ Mark Resolved" }
                                                </button>
                                                <button
                                                    class="review-btn dismissed"
                                                    onclick={move |_| on_review.emit((id, "dismissed"))}
                                                >
                                                    { "✖ Dismiss" }
                                                </button>
                                            </div>
                                        </RoleGate>
                                    }

                                    if let Some(notes) = &alert.notes {
                                        <div class="alert-notes">
                                            <strong>{ "Review Notes: " }</strong>{ notes }
                                        </div>
                                    }
                                </div>
                            </div>
                        }
                    }) }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_cannot_review_before_any_call_is_made() {
        assert_eq!(
            ensure_reviewer(Some(Role::Staff)),
            Err("Access denied: only managers and admins can review alerts.".to_string())
        );
        assert!(ensure_reviewer(None).is_err());
    }

    #[test]
    fn managers_and_admins_may_review() {
        assert_eq!(ensure_reviewer(Some(Role::Manager)), Ok(()));
        assert_eq!(ensure_reviewer(Some(Role::Admin)), Ok(()));
    }

    #[test]
    fn empty_notes_are_rejected_before_any_call_is_made() {
        let expected = Err("Please provide notes for this review.".to_string());
        assert_eq!(validate_notes(""), expected);
        assert_eq!(validate_notes("   "), expected);
        assert_eq!(validate_notes("checked against delivery logs"), Ok(()));
    }

    #[test]
    fn server_403_maps_to_a_distinct_access_denied_message() {
        let forbidden = ApiError::Http {
            status: 403,
            message: Some("forbidden".to_string()),
        };
        assert_eq!(
            review_error_message(&forbidden),
            "Access denied: the server rejected this review."
        );

        let other = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(review_error_message(&other), "Failed to review alert");
    }
}
