pub mod repositories;

pub use repositories::FixtureScanRepository;
