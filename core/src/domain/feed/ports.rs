use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feed::entities::{ScanFeed, ScanRecord},
};

/// Source of the feed's backing set. The shipped adapter serves a fixed
/// fixture; a real deployment would read recent scans from storage.
#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn fetch_recent(&self) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}

/// Service trait for the live ingestion feed
#[cfg_attr(test, mockall::automock)]
pub trait LiveFeedService: Send + Sync {
    fn get_live_feed(&self) -> impl Future<Output = Result<ScanFeed, CoreError>> + Send;
}
