use chrono::NaiveDate;
use serde_json::Value;
use yew::prelude::*;

use crate::models::REPORT_CATALOG;
use crate::services::api;
use crate::utils::{dialog, download_json};

fn export_file_name(report_id: &str, date: NaiveDate) -> String {
    format!("{}-report-{}.json", report_id, date)
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let selected = use_state(|| None::<&'static str>);
    let report_data = use_state(|| None::<Value>);
    let loading = use_state(|| false);

    let generate = {
        let selected = selected.clone();
        let report_data = report_data.clone();
        let loading = loading.clone();

        Callback::from(move |report_id: &'static str| {
            selected.set(Some(report_id));
            loading.set(true);

            let report_data = report_data.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match report_id {
                    "daily" => api::get_daily_inventory().await,
                    "weekly-fraud" => api::get_weekly_fraud().await,
                    "monthly" => api::get_monthly_analytics().await,
                    "waste" => api::get_waste_analysis().await,
                    "low-stock" => api::get_low_stock_alert().await,
                    _ => {
                        loading.set(false);
                        return;
                    }
                };
                match result {
                    Ok(data) => report_data.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Failed to generate report {}: {}", report_id, e);
                        dialog::alert("Failed to generate report");
                    }
                }
                loading.set(false);
            });
        })
    };

    let download = {
        let selected = selected.clone();
        let report_data = report_data.clone();

        Callback::from(move |_: MouseEvent| {
            let (Some(report_id), Some(data)) = (*selected, report_data.as_ref()) else {
                return;
            };
            let Ok(contents) = serde_json::to_string_pretty(data) else {
                return;
            };
            let filename = export_file_name(report_id, chrono::Local::now().date_naive());
            if let Err(e) = download_json(&filename, &contents) {
                log::error!("❌ Report download failed: {}", e);
                dialog::alert("Failed to download report");
            } else {
                log::info!("📄 Downloaded {}", filename);
            }
        })
    };

    let heading = report_data
        .as_ref()
        .and_then(|data| data.get("report_type"))
        .and_then(Value::as_str)
        .unwrap_or("Report")
        .to_string();

    html! {
        <div class="reports-page">
            <h1>{ "📊 Reports" }</h1>

            <div class="reports-grid">
                { for REPORT_CATALOG.iter().map(|report| {
                    let generate = generate.clone();
                    let id = report.id;
                    html! {
                        <div key={report.id} class="report-card" onclick={move |_| generate.emit(id)}>
                            <div class="report-icon">{ report.icon }</div>
                            <h3>{ report.name }</h3>
                            <button class="generate-btn">{ "Generate Report" }</button>
                        </div>
                    }
                }) }
            </div>

            if *loading {
                <div class="report-loading">{ "Generating report..." }</div>
            }

            if !*loading {
                if let Some(data) = report_data.as_ref() {
                <div class="report-result">
                    <div class="result-header">
                        <h2>{ heading }</h2>
                        <button class="download-btn" onclick={download}>
                            { "⬇ Download JSON" }
                        </button>
                    </div>

                    <div class="report-content">
                        <pre>{ serde_json::to_string_pretty(data).unwrap_or_default() }</pre>
                    </div>
                </div>
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_file_name_carries_report_id_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            export_file_name("weekly-fraud", date),
            "weekly-fraud-report-2026-08-06.json"
        );
    }

    #[test]
    fn export_round_trips_the_fetched_payload() {
        let payload: Value = serde_json::from_str(
            r#"{"report_type":"Daily Inventory Report","items":[{"id":1,"quantity":4.5}]}"#,
        )
        .unwrap();
        let exported = serde_json::to_string_pretty(&payload).unwrap();
        let reparsed: Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(reparsed, payload);
    }
}
