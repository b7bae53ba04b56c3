use std::time::Duration;
use time::{OffsetDateTime, PrimitiveDateTime};

/// A window of wall clock time on the camera
///
/// `start` is expected to be before `end`, this is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Start of the window
    pub start: PrimitiveDateTime,
    /// End of the window
    pub end: PrimitiveDateTime,
}

impl TimeRange {
    /// A window from `start` to `end`
    pub fn new(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Self {
        Self { start, end }
    }

    /// A window of `length` finishing at `end`
    pub fn ending_at(end: PrimitiveDateTime, length: Duration) -> Self {
        Self {
            start: end - length,
            end,
        }
    }

    /// A window of `length` finishing now
    pub fn ending_now(length: Duration) -> Self {
        Self::ending_at(local_now(), length)
    }
}

/// The current local wall clock time
///
/// Falls back to UTC when the local offset cannot be found, which happens on
/// some platforms once threads have been spawned.
pub fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
