pub mod in_memory_feedback_repository;

pub use in_memory_feedback_repository::InMemoryFeedbackRepository;
