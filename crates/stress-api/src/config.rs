//! Server configuration read from the environment
use std::str::FromStr;
use stress_core::StressKind;
use stress_out::ViewLinks;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CONFIG/{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`STRESS_ADDR`)
    pub addr: String,
    /// Category shown next to a rejected code (`STRESS_FALLBACK_CATEGORY`)
    pub fallback: StressKind,
    /// Templates file replacing the built-in one (`STRESS_TEMPLATES`)
    pub templates_path: Option<String>,
    /// `STRESS_RETRY_URL` / `STRESS_HOME_URL`
    pub links: ViewLinks,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            fallback: StressKind::Episodic,
            templates_path: None,
            links: ViewLinks::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let fallback = match get("STRESS_FALLBACK_CATEGORY") {
            Some(raw) => StressKind::from_str(&raw).map_err(|reason| ConfigError::Invalid {
                key: "STRESS_FALLBACK_CATEGORY",
                reason,
            })?,
            None => defaults.fallback,
        };

        Ok(Self {
            addr: get("STRESS_ADDR").unwrap_or(defaults.addr),
            fallback,
            templates_path: get("STRESS_TEMPLATES"),
            links: ViewLinks {
                retry: get("STRESS_RETRY_URL").unwrap_or(defaults.links.retry),
                home: get("STRESS_HOME_URL").unwrap_or(defaults.links.home),
            },
        })
    }
}
