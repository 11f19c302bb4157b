use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod ports;
pub mod services;

/// Version identifier reported by every model-facing endpoint.
pub const MODEL_VERSION: &str = "nutriguard-v1.2.0";

/// Clinical safety threshold. Confidence below this flags a result for
/// human review; aggregate precision below it signals model drift. The two
/// checks are distinct but the product shares one constant between them.
pub const CLINICAL_SAFETY_THRESHOLD: f64 = 0.85;

/// Assumed precision while no clinician feedback has been collected yet.
/// Sits above the drift threshold: no evidence of drift yet.
pub const BASELINE_PRECISION: f64 = 0.92;

#[derive(Clone, Debug)]
pub struct NutriguardConfig {
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Simulated inference latency of the mock analyzer.
    pub latency: Duration,
}

impl Default for NutriguardConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                latency: Duration::from_millis(1000),
            },
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Round to 4 decimal places, the precision used for confidence scores and
/// aggregate metrics throughout the system.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round4_rounds_to_four_decimals() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(0.75), 0.75);
    }

    #[test]
    fn baseline_sits_above_drift_threshold() {
        assert!(BASELINE_PRECISION >= CLINICAL_SAFETY_THRESHOLD);
    }
}
