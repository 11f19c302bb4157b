use chrono::{DateTime, Utc};

/// Time source for feedback timestamps, injectable so tests can pin time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
