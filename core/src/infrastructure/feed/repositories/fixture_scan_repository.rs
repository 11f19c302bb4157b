use crate::domain::{
    common::entities::app_errors::CoreError,
    feed::{entities::ScanRecord, ports::ScanRepository},
};

/// Reference backing set for the simulated live feed.
const RECENT_SCANS: &[(&str, &str, f64)] = &[
    ("PT-8821", "Sockeye Salmon", 0.991),
    ("PT-9932", "Unknown Mixed Bowl", 0.724),
    ("SickKids-004", "Quinoa Salad", 0.968),
    ("PT-7714", "Grilled Chicken Breast", 0.975),
    ("PT-6623", "Mixed Vegetable Stir-fry", 0.942),
    ("SickKids-012", "Blended Smoothie", 0.812),
];

/// Serves a fixed set of scans; a real deployment reads recent scans from
/// storage instead.
#[derive(Debug, Clone, Default)]
pub struct FixtureScanRepository;

impl ScanRepository for FixtureScanRepository {
    async fn fetch_recent(&self) -> Result<Vec<ScanRecord>, CoreError> {
        Ok(RECENT_SCANS
            .iter()
            .map(|&(patient_id, food, confidence)| ScanRecord {
                patient_id: patient_id.to_string(),
                food: food.to_string(),
                confidence,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_holds_six_scans_on_both_sides_of_the_threshold() {
        let records = FixtureScanRepository.fetch_recent().await.unwrap();

        assert_eq!(records.len(), 6);
        assert!(records.iter().any(|r| r.confidence < 0.85));
        assert!(records.iter().any(|r| r.confidence >= 0.85));
    }
}
