pub mod analysis;
pub mod clock;
pub mod evaluation;
pub mod feed;
