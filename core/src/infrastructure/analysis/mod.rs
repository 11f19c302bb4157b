pub mod mock_analyzer;

pub use mock_analyzer::MockFoodAnalyzer;
