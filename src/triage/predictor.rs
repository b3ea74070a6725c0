//! External urgency classifier seam.
//!
//! The statistical classifier lives outside this crate. The engine only asks
//! it for a level for the normalized text; every failure mode (unreachable,
//! slow, malformed, out of range) degrades to "no signal".

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from an external urgency classifier.
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Cannot connect to classifier at {0}")]
    Connection(String),

    #[error("Classifier request timed out after {0}s")]
    Timeout(u64),

    #[error("Classifier returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse classifier response: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Produces an urgency level for normalized patient text.
///
/// Implementations may block; callers decide where to run them.
pub trait UrgencyPredictor: Send + Sync {
    /// Raw predicted level. Values outside 1..=3 are discarded by the caller.
    fn predict(&self, normalized_text: &str) -> Result<i64, PredictorError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

// ═══════════════════════════════════════════════════════════
// HTTP classifier
// ═══════════════════════════════════════════════════════════

/// Request body for `POST {base}/predict`.
#[derive(Serialize)]
struct PredictRequest<'a> {
    texto: &'a str,
}

/// Response body from `POST {base}/predict`.
#[derive(Deserialize)]
struct PredictResponse {
    nivel: i64,
}

/// Classifier served over HTTP.
pub struct HttpUrgencyPredictor {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpUrgencyPredictor {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, PredictorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PredictorError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl UrgencyPredictor for HttpUrgencyPredictor {
    fn predict(&self, normalized_text: &str) -> Result<i64, PredictorError> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest {
            texto: normalized_text,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                PredictorError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                PredictorError::Timeout(self.timeout_secs)
            } else {
                PredictorError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PredictorError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PredictResponse = response
            .json()
            .map_err(|e| PredictorError::ResponseParsing(e.to_string()))?;

        Ok(parsed.nivel)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}

// ═══════════════════════════════════════════════════════════
// Fixed classifier
// ═══════════════════════════════════════════════════════════

/// Always answers the same level. Useful for demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedUrgencyPredictor(pub i64);

impl UrgencyPredictor for FixedUrgencyPredictor {
    fn predict(&self, _normalized_text: &str) -> Result<i64, PredictorError> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        format!("fixed:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_predictor_returns_its_level() {
        let predictor = FixedUrgencyPredictor(3);
        assert_eq!(predictor.predict("tengo fiebre").unwrap(), 3);
        assert_eq!(predictor.describe(), "fixed:3");
    }

    #[test]
    fn http_predictor_trims_trailing_slash() {
        let predictor = HttpUrgencyPredictor::new("http://127.0.0.1:9/", 1).unwrap();
        assert_eq!(predictor.base_url(), "http://127.0.0.1:9");
        assert_eq!(predictor.describe(), "http:http://127.0.0.1:9");
    }

    #[test]
    fn unreachable_classifier_is_an_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let predictor = HttpUrgencyPredictor::new("http://127.0.0.1:9", 1).unwrap();
        assert!(predictor.predict("tengo fiebre").is_err());
    }

    #[test]
    fn response_body_shape() {
        let parsed: PredictResponse = serde_json::from_str(r#"{"nivel": 2}"#).unwrap();
        assert_eq!(parsed.nivel, 2);
        let body = serde_json::to_value(PredictRequest { texto: "tos" }).unwrap();
        assert_eq!(body["texto"], "tos");
    }
}
