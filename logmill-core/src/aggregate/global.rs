use crate::aggregate::BYTES_PER_MEGABYTE;
use crate::aggregate::error::EmptyStore;
use crate::aggregate::minute::MinuteBucket;
use chrono::{DateTime, FixedOffset};

/// Reduction of all minute buckets into one report spanning the full
/// observed time range.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSummary {
    earliest: DateTime<FixedOffset>,
    latest: DateTime<FixedOffset>,
    total_successful: u64,
    total_failures: u64,
    total_bytes: u64,
    total_time_micros: u64,
    total_count: u64,
}

impl GlobalSummary {
    /// Single pass over all buckets: five running sums plus the minute
    /// range. Fails with [`EmptyStore`] when there are no buckets, or when
    /// the buckets hold no records at all.
    pub fn reduce<'a, I>(buckets: I) -> Result<Self, EmptyStore>
    where
        I: IntoIterator<Item = &'a MinuteBucket>,
    {
        let mut iter = buckets.into_iter();
        let first = iter.next().ok_or(EmptyStore)?;

        let mut summary = GlobalSummary {
            earliest: first.minute(),
            latest: first.minute(),
            total_successful: first.successful(),
            total_failures: first.failures(),
            total_bytes: first.total_bytes(),
            total_time_micros: first.total_time_micros(),
            total_count: first.count(),
        };

        for bucket in iter {
            summary.total_successful += bucket.successful();
            summary.total_failures += bucket.failures();
            summary.total_bytes += bucket.total_bytes();
            summary.total_time_micros += bucket.total_time_micros();
            summary.total_count += bucket.count();

            let minute = bucket.minute();
            if minute < summary.earliest {
                summary.earliest = minute;
            }
            if minute > summary.latest {
                summary.latest = minute;
            }
        }

        // All derived rates divide by the count or the duration.
        if summary.total_count == 0 {
            return Err(EmptyStore);
        }

        Ok(summary)
    }

    pub fn earliest(&self) -> DateTime<FixedOffset> {
        self.earliest
    }

    pub fn latest(&self) -> DateTime<FixedOffset> {
        self.latest
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whole minutes between the earliest bucket and the end of the latest
    /// one, so a single bucket spans one minute.
    pub fn duration_minutes(&self) -> u64 {
        ((self.latest - self.earliest).num_minutes() + 1) as u64
    }

    pub fn successful_per_minute(&self) -> f64 {
        self.total_successful as f64 / self.duration_minutes() as f64
    }

    pub fn failures_per_minute(&self) -> f64 {
        self.total_failures as f64 / self.duration_minutes() as f64
    }

    pub fn mean_response_time_micros(&self) -> u64 {
        self.total_time_micros / self.total_count
    }

    pub fn time_spent_responding_per_minute(&self) -> u64 {
        self.total_time_micros / self.duration_minutes()
    }

    pub fn megabytes_sent_per_minute(&self) -> f64 {
        self.total_bytes as f64 / (BYTES_PER_MEGABYTE * self.duration_minutes() as f64)
    }
}
