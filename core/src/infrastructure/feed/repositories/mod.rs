pub mod fixture_scan_repository;

pub use fixture_scan_repository::FixtureScanRepository;
