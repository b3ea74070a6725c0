//! Analysis endpoint.
//!
//! `POST /analizar`: free patient text in, `TriageReport` out.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::triage::TriageReport;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing or null is analysed as empty text.
    #[serde(default)]
    pub texto_paciente: Option<String>,
}

/// `POST /analizar`: extract symptoms and decide urgency.
///
/// Runs on the blocking pool: the external classifier call is synchronous.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<TriageReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let text = request.texto_paciente.unwrap_or_default();

    let report = tokio::task::spawn_blocking(move || ctx.analyze(&text)).await?;

    tracing::info!(
        symptoms = report.symptoms.len(),
        urgency = %report.overall_urgency,
        source = %report.urgency_source,
        "Analysis served"
    );

    Ok(Json(report))
}
