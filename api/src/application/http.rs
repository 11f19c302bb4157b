pub mod analysis;
pub mod evaluation;
pub mod feed;
pub mod health;
pub mod server;
