//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub sintomas_registrados: usize,
    pub ml_enabled: bool,
    pub ml_min_sintomas: usize,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /`: banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        message: "API de triaje activa",
    })
}

/// `GET /health`: liveness plus the loaded catalog size.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sintomas_registrados: ctx.engine.catalog().len(),
        ml_enabled: ctx.ml_enabled(),
        ml_min_sintomas: ctx.engine.policy().ml_min_symptoms(),
        version: crate::config::APP_VERSION,
    })
}
