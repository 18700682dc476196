use crate::error::truncate_message;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

/// Static liveness message; no store interaction.
pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "Brokerage backend running" }))
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(value: &Option<String>) -> String {
    if value.is_some() { "set" } else { "not set" }.to_string()
}

/// Connectivity probe. Reports configuration presence (never values) and
/// whether the store answers, folding every failure into the status strings.
/// Always returns 200.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: presence(&state.config.database_url),
        database_name: presence(&state.config.database_name),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.is_enabled() {
        report.database = "available".to_string();

        match state.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(10);
                report.collections = names;
                report.database = "connected and working".to_string();
                report.connection_status = "connected".to_string();
            }
            Err(e) => {
                report.database = format!(
                    "connected but error: {}",
                    truncate_message(&e.to_string(), 80)
                );
            }
        }
    }

    Json(report)
}
