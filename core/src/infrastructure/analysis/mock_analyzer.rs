use rand::{Rng, seq::SliceRandom};
use std::time::Duration;

use crate::domain::{
    analysis::{
        ports::FoodAnalyzer,
        value_objects::{AnalyzeFoodInput, Prediction},
    },
    common::{entities::app_errors::CoreError, round4},
};

/// Reference catalog standing in for a real recognition model's label set.
const FOOD_CATALOG: &[(&str, i64)] = &[
    ("Grilled Chicken Breast", 165),
    ("Caesar Salad", 220),
    ("Apple", 95),
    ("Brown Rice Bowl", 340),
    ("Salmon Fillet", 280),
    ("Vegetable Soup", 120),
    ("Greek Yogurt", 150),
    ("Quinoa Salad", 180),
];

/// Randomized stand-in for the inference backend. Picks uniformly from the
/// catalog and draws a confidence in [0.70, 0.99], a range that spans both
/// sides of the review threshold so flagging is exercised by construction.
/// The request input is accepted but not consumed.
#[derive(Debug, Clone)]
pub struct MockFoodAnalyzer {
    latency: Duration,
}

impl MockFoodAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl FoodAnalyzer for MockFoodAnalyzer {
    async fn analyze(&self, _input: AnalyzeFoodInput) -> Result<Prediction, CoreError> {
        // Simulated model inference latency.
        tokio::time::sleep(self.latency).await;

        let mut rng = rand::thread_rng();
        let (food_name, calories) = FOOD_CATALOG
            .choose(&mut rng)
            .copied()
            .ok_or(CoreError::InternalServerError)?;
        let confidence_score = round4(rng.gen_range(0.70..=0.99));

        Ok(Prediction {
            food_name: food_name.to_string(),
            calories,
            confidence_score,
        })
    }
}
