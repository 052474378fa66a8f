use chrono::{DateTime, FixedOffset};

/// Coarse success/failure classification of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Failure,
}

impl StatusClass {
    /// Success iff the code's leading digit is 2 or 3.
    pub(crate) fn from_status_code(code: &str) -> Self {
        if code.starts_with('2') || code.starts_with('3') {
            StatusClass::Success
        } else {
            StatusClass::Failure
        }
    }
}

/// The fields we keep from one access-log line. The timestamp carries the
/// line's literal UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub status: StatusClass,
    pub bytes_transferred: u64,
    pub time_taken_micros: u64,
}
