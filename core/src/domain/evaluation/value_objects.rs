/// A validated feedback submission. Field presence is checked at the
/// request boundary before this type is constructed.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub scan_id: String,
    pub is_correct: bool,
    pub actual_food: String,
}
