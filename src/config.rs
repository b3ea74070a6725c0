use std::net::SocketAddr;
use std::str::FromStr;

use crate::triage::urgency::DEFAULT_ML_MIN_SYMPTOMS;

/// Application-level constants
pub const APP_NAME: &str = "Triaje";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_ML_TIMEOUT_SECS: u64 = 5;

const ENV_BIND_ADDR: &str = "TRIAJE_BIND_ADDR";
const ENV_ML_MIN_SYMPTOMS: &str = "TRIAJE_ML_MIN_SINTOMAS";
const ENV_ML_URL: &str = "TRIAJE_ML_URL";
const ENV_ML_TIMEOUT_SECS: &str = "TRIAJE_ML_TIMEOUT_SECS";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "triaje_lib=debug,triaje=debug,tower_http=info"
    } else {
        "triaje_lib=info,triaje=info,tower_http=warn"
    }
}

/// Runtime settings for the HTTP service, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub bind_addr: SocketAddr,
    pub ml_min_symptoms: usize,
    /// Base URL of an external urgency classifier. `None` means rules only.
    pub ml_url: Option<String>,
    pub ml_timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            ml_min_symptoms: DEFAULT_ML_MIN_SYMPTOMS,
            ml_url: None,
            ml_timeout_secs: DEFAULT_ML_TIMEOUT_SECS,
        }
    }
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let ml_url = lookup(ENV_ML_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            bind_addr: parse_or(&lookup, ENV_BIND_ADDR, defaults.bind_addr),
            ml_min_symptoms: parse_or(&lookup, ENV_ML_MIN_SYMPTOMS, defaults.ml_min_symptoms),
            ml_url,
            ml_timeout_secs: parse_or(&lookup, ENV_ML_TIMEOUT_SECS, defaults.ml_timeout_secs),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, %default, "Invalid setting, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = ServiceSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, ServiceSettings::default());
        assert_eq!(settings.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.ml_min_symptoms, 2);
        assert_eq!(settings.ml_url, None);
    }

    #[test]
    fn reads_all_values() {
        let settings = ServiceSettings::from_lookup(lookup(&[
            ("TRIAJE_BIND_ADDR", "0.0.0.0:9000"),
            ("TRIAJE_ML_MIN_SINTOMAS", "3"),
            ("TRIAJE_ML_URL", "http://localhost:7000"),
            ("TRIAJE_ML_TIMEOUT_SECS", "10"),
        ]));
        assert_eq!(settings.bind_addr.port(), 9000);
        assert_eq!(settings.ml_min_symptoms, 3);
        assert_eq!(settings.ml_url.as_deref(), Some("http://localhost:7000"));
        assert_eq!(settings.ml_timeout_secs, 10);
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = ServiceSettings::from_lookup(lookup(&[
            ("TRIAJE_BIND_ADDR", "not an address"),
            ("TRIAJE_ML_MIN_SINTOMAS", "dos"),
            ("TRIAJE_ML_TIMEOUT_SECS", "-1"),
        ]));
        assert_eq!(settings, ServiceSettings::default());
    }

    #[test]
    fn blank_ml_url_disables_classifier() {
        let settings = ServiceSettings::from_lookup(lookup(&[("TRIAJE_ML_URL", "  ")]));
        assert_eq!(settings.ml_url, None);
    }

    #[test]
    fn app_name_is_triaje() {
        assert_eq!(APP_NAME, "Triaje");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.8.0");
    }
}
