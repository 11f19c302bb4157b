/// Inbound analysis request data. Both fields are optional and currently
/// not consumed by the mock analyzer; a real inference backend would read
/// them.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeFoodInput {
    pub image_base64: Option<String>,
    pub food_description: Option<String>,
}

/// Raw model output, before range validation and review-flag derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub food_name: String,
    pub calories: i64,
    pub confidence_score: f64,
}
