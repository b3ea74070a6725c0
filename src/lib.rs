pub mod api;
pub mod config;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::ServiceSettings;
use crate::triage::{
    CatalogError, EngineOptions, HttpUrgencyPredictor, PredictorError, TriageEngine,
    UrgencyPredictor,
};

/// Fatal errors while bringing the service up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Catalog build failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Classifier client setup failed: {0}")]
    Predictor(#[from] PredictorError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("{0}")]
    Server(String),
}

/// Run the HTTP service until Ctrl-C.
pub fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = ServiceSettings::from_env();

    let engine = Arc::new(TriageEngine::builtin(EngineOptions {
        ml_min_symptoms: settings.ml_min_symptoms,
        ..EngineOptions::default()
    })?);

    // The blocking HTTP client owns its own runtime: build it (and drop the
    // last handle) outside the tokio runtime below.
    let predictor: Option<Arc<dyn UrgencyPredictor>> = match &settings.ml_url {
        Some(url) => {
            let client = HttpUrgencyPredictor::new(url, settings.ml_timeout_secs)?;
            tracing::info!(classifier = %client.describe(), "External classifier enabled");
            Some(Arc::new(client))
        }
        None => {
            tracing::info!("No external classifier configured, using rules only");
            None
        }
    };

    let ctx = ApiContext::new(Arc::clone(&engine), predictor.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        let mut server = api::start_server_on(ctx, settings.bind_addr)
            .await
            .map_err(StartupError::Server)?;

        tracing::info!(
            addr = %server.session.server_addr,
            session = %server.session.session_id,
            symptoms = engine.catalog().len(),
            "Listening"
        );

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Cannot listen for shutdown signal: {e}");
        }

        server.shutdown();
        server.stopped().await;
        Ok::<(), StartupError>(())
    });

    drop(runtime);
    drop(predictor);
    result
}
