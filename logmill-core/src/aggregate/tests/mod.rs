
use crate::parse::{RequestRecord, StatusClass};
use chrono::{DateTime, FixedOffset};

pub(crate) fn ts(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

pub(crate) fn record(
    timestamp: &str,
    status: StatusClass,
    bytes: u64,
    time_micros: u64,
) -> RequestRecord {
    RequestRecord {
        timestamp: ts(timestamp),
        status,
        bytes_transferred: bytes,
        time_taken_micros: time_micros,
    }
}
