//! Best-effort decoding of the probability payload.
//!
//! The payload arrives percent-encoded JSON, nominally an object of
//! category id to confidence. Only decoding is checked here.
use serde_json::Value;

use crate::error::ProbabilityDecodeFailure;

/// Percent-decode then JSON-decode a raw probability string
pub fn decode_probability(raw: &str) -> Result<Value, ProbabilityDecodeFailure> {
    let decoded = urlencoding::decode(raw)
        .map_err(|e| ProbabilityDecodeFailure::UrlDecode(e.to_string()))?;

    serde_json::from_str(&decoded).map_err(|e| ProbabilityDecodeFailure::Json(e.to_string()))
}
