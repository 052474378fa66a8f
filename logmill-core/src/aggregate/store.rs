use crate::aggregate::error::{EmptyStore, MinuteMismatch};
use crate::aggregate::global::GlobalSummary;
use crate::aggregate::minute::{MinuteBucket, truncate_to_minute};
use crate::parse::RequestRecord;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// Central aggregation state: one bucket per distinct truncated minute,
/// created lazily on the first record for that minute.
///
/// Timestamps compare by instant, so lines carrying different UTC offsets
/// that denote the same instant-minute share a bucket.
#[derive(Debug, Clone, Default)]
pub struct BucketStore {
    buckets: BTreeMap<DateTime<FixedOffset>, MinuteBucket>,
}

impl BucketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a record to its minute's bucket, creating the bucket on first
    /// use, and accumulate it there.
    pub fn accumulate(&mut self, record: &RequestRecord) -> Result<(), MinuteMismatch> {
        let minute = truncate_to_minute(record.timestamp);
        self.buckets
            .entry(minute)
            .or_insert_with(|| MinuteBucket::new(minute))
            .accumulate(record)
    }

    /// Buckets in ascending minute order, independent of insertion order.
    pub fn snapshot_ordered(
        &self,
    ) -> impl Iterator<Item = (&DateTime<FixedOffset>, &MinuteBucket)> {
        self.buckets.iter()
    }

    /// Reduce every bucket into one global summary.
    pub fn summary(&self) -> Result<GlobalSummary, EmptyStore> {
        GlobalSummary::reduce(self.buckets.values())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
