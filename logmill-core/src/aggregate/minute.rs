use crate::aggregate::BYTES_PER_MEGABYTE;
use crate::aggregate::error::MinuteMismatch;
use crate::parse::{RequestRecord, StatusClass};
use chrono::{DateTime, FixedOffset, Timelike};

/// Zero the seconds and any sub-second component, keeping the offset
/// unchanged.
pub fn truncate_to_minute(ts: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    ts.with_second(0)
        .and_then(|ts| ts.with_nanosecond(0))
        .expect("zeroing seconds keeps a timestamp valid")
}

/// Accumulates every request observed within one calendar minute.
#[derive(Debug, Clone)]
pub struct MinuteBucket {
    minute: DateTime<FixedOffset>,
    count: u64,
    successful: u64,
    failures: u64,
    total_bytes: u64,
    total_time_micros: u64,
}

/// Per-minute statistics derived from the accumulated sums.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteStats {
    pub successful: u64,
    pub failures: u64,
    pub mean_response_time_micros: u64,
    pub megabytes_sent: f64,
}

impl MinuteBucket {
    pub fn new(minute: DateTime<FixedOffset>) -> Self {
        Self {
            minute,
            count: 0,
            successful: 0,
            failures: 0,
            total_bytes: 0,
            total_time_micros: 0,
        }
    }

    /// The sole mutator. A record whose truncated timestamp differs from
    /// this bucket's minute is rejected with [`MinuteMismatch`].
    pub fn accumulate(&mut self, record: &RequestRecord) -> Result<(), MinuteMismatch> {
        let actual = truncate_to_minute(record.timestamp);
        if actual != self.minute {
            return Err(MinuteMismatch {
                expected: self.minute,
                actual,
            });
        }

        self.count += 1;
        self.total_bytes += record.bytes_transferred;
        self.total_time_micros += record.time_taken_micros;
        match record.status {
            StatusClass::Success => self.successful += 1,
            StatusClass::Failure => self.failures += 1,
        }

        Ok(())
    }

    pub fn minute(&self) -> DateTime<FixedOffset> {
        self.minute
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn successful(&self) -> u64 {
        self.successful
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn total_time_micros(&self) -> u64 {
        self.total_time_micros
    }

    /// Derived statistics, computed on demand since the bucket may still
    /// receive records. `None` until the first record arrives: the mean
    /// divides by the count.
    pub fn stats(&self) -> Option<MinuteStats> {
        if self.count == 0 {
            return None;
        }

        Some(MinuteStats {
            successful: self.successful,
            failures: self.failures,
            mean_response_time_micros: self.total_time_micros / self.count,
            megabytes_sent: self.total_bytes as f64 / BYTES_PER_MEGABYTE,
        })
    }
}
