pub mod get_metrics;
pub mod submit_feedback;
