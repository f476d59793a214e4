//! Prometheus counters for interpretation outcomes.
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use stress_core::{InterpretError, Interpretation};

pub struct Metrics {
    registry: Registry,
    interpretations: IntCounterVec,
    decode_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let interpretations = IntCounterVec::new(
            Opts::new("stress_interpretations_total", "Interpretations by outcome"),
            &["outcome"],
        )?;
        let decode_failures = IntCounter::new(
            "stress_probability_decode_failures_total",
            "Probability payloads that failed to decode",
        )?;
        registry.register(Box::new(interpretations.clone()))?;
        registry.register(Box::new(decode_failures.clone()))?;

        Ok(Self {
            registry,
            interpretations,
            decode_failures,
        })
    }

    pub fn observe(&self, outcome: &Result<Interpretation, InterpretError>) {
        let label = match outcome {
            Ok(interpretation) => {
                if interpretation.decode_failure().is_some() {
                    self.decode_failures.inc();
                }
                "resolved"
            }
            Err(e) => e.kind(),
        };
        self.interpretations.with_label_values(&[label]).inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
