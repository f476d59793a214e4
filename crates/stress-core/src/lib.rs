//! Stress Core: classification code interpretation
//!
//! Turns the raw `stress_level` / `probability` pair handed over by the
//! prediction front end into one of the fixed stress categories.

pub mod category;
pub mod error;
pub mod interpret;
pub mod probability;

pub use category::{catalog, ClassificationCode, StressCategory, StressKind};
pub use error::{InterpretError, ProbabilityDecodeFailure};
pub use interpret::{interpret, Diagnostics, Interpretation, ResultQuery};
pub use probability::decode_probability;

/// Crate version reported by the API health endpoint
pub const STRESS_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
