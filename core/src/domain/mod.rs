pub mod analysis;
pub mod common;
pub mod evaluation;
pub mod feed;
pub mod health;
