//! Result Interpreter: classification code + probability payload to category
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::{ClassificationCode, StressCategory, StressKind};
use crate::error::{InterpretError, ProbabilityDecodeFailure};
use crate::probability::decode_probability;

/// Boundary input as it arrives in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultQuery {
    /// Decimal classifier code
    pub stress_level: Option<String>,
    /// Percent-encoded JSON confidence map
    pub probability: Option<String>,
}

impl ResultQuery {
    pub fn interpret(&self) -> Result<Interpretation, InterpretError> {
        interpret(self.stress_level.as_deref(), self.probability.as_deref())
    }
}

/// What became of the probability payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Diagnostics {
    Decoded { probability: Value },
    DecodeFailed { failure: ProbabilityDecodeFailure },
}

/// A resolved classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub code: ClassificationCode,
    pub category: &'static StressCategory,
    /// `None` when no probability payload was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

impl Interpretation {
    pub fn kind(&self) -> StressKind {
        self.category.kind
    }

    /// The decoded probability payload, if it decoded
    pub fn probability(&self) -> Option<&Value> {
        match &self.diagnostics {
            Some(Diagnostics::Decoded { probability }) => Some(probability),
            _ => None,
        }
    }

    pub fn decode_failure(&self) -> Option<&ProbabilityDecodeFailure> {
        match &self.diagnostics {
            Some(Diagnostics::DecodeFailed { failure }) => Some(failure),
            _ => None,
        }
    }
}

/// Resolve a raw classification code to its category.
///
/// An empty code counts as missing, as does an empty probability payload.
/// The payload is decoded only after the code resolves, and a decode
/// failure never fails the call.
pub fn interpret(
    raw_code: Option<&str>,
    raw_probability: Option<&str>,
) -> Result<Interpretation, InterpretError> {
    let raw = match raw_code {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(InterpretError::MissingCode),
    };

    let code: ClassificationCode = raw
        .trim()
        .parse()
        .map_err(|_| InterpretError::InvalidCode(raw.to_string()))?;

    let kind = StressKind::from_code(code).ok_or(InterpretError::UnknownCode(code))?;

    let diagnostics = raw_probability
        .filter(|payload| !payload.is_empty())
        .map(|payload| match decode_probability(payload) {
            Ok(probability) => {
                tracing::debug!(code, probability = %probability, "decoded probability payload");
                Diagnostics::Decoded { probability }
            }
            Err(failure) => {
                tracing::warn!(code, error = %failure, "failed to decode probability payload");
                Diagnostics::DecodeFailed { failure }
            }
        });

    Ok(Interpretation {
        code,
        category: kind.category(),
        diagnostics,
    })
}
