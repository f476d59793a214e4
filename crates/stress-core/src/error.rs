//! Unified Error Model
use serde::Serialize;
use thiserror::Error;

use crate::category::ClassificationCode;

/// Failures resolving a classification code to a category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("Missing stress_level")]
    MissingCode,

    #[error("Invalid stress level: {0}")]
    InvalidCode(String),

    #[error("Unknown stress level: {0}")]
    UnknownCode(ClassificationCode),
}

impl InterpretError {
    /// Stable identifier for machine consumers and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCode => "missing_code",
            Self::InvalidCode(_) => "invalid_code",
            Self::UnknownCode(_) => "unknown_code",
        }
    }
}

/// Soft failure decoding the optional probability payload.
///
/// Never returned from [`crate::interpret`]; it is recorded in the
/// interpretation's diagnostics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "reason", rename_all = "snake_case")]
pub enum ProbabilityDecodeFailure {
    #[error("probability is not valid percent-encoded UTF-8: {0}")]
    UrlDecode(String),

    #[error("probability is not valid JSON: {0}")]
    Json(String),
}
