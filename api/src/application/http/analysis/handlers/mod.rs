pub mod analyze_food;
