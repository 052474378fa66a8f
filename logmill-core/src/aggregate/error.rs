use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// A record was routed to a bucket covering a different minute.
///
/// This is a caller bug, never a data-quality problem: whoever picks the
/// bucket must truncate the record's timestamp first. Callers are expected
/// to treat it as fatal rather than skip the record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("record minute {actual} does not match bucket minute {expected}")]
pub struct MinuteMismatch {
    pub expected: DateTime<FixedOffset>,
    pub actual: DateTime<FixedOffset>,
}

/// Nothing to reduce: every global rate divides by the observed duration or
/// the record count, so an empty store has no meaningful summary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no data to summarise")]
pub struct EmptyStore;
