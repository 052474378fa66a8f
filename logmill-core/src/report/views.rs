use crate::aggregate::{BucketStore, GlobalSummary};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One row of the per-minute detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub minute: DateTime<FixedOffset>,
    pub successful: u64,
    pub failures: u64,
    pub mean_response_time: u64,
    pub mb_sent: f64,
}

/// The global aggregate block spanning the full observed time range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateView {
    pub duration_in_minutes: u64,
    pub successful_per_minute: f64,
    pub failures_per_minute: f64,
    pub mean_response_time: u64,
    pub time_spent_responding_per_minute: u64,
    pub mb_sent_per_minute: f64,
}

/// The document handed to the serializer: whichever views were requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<DetailRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<AggregateView>,
}

/// Detail rows in ascending minute order. Store-created buckets always hold
/// at least one record, so no row is lost to the empty-bucket guard.
pub fn detail_rows(store: &BucketStore) -> Vec<DetailRow> {
    store
        .snapshot_ordered()
        .filter_map(|(minute, bucket)| {
            bucket.stats().map(|stats| DetailRow {
                minute: *minute,
                successful: stats.successful,
                failures: stats.failures,
                mean_response_time: stats.mean_response_time_micros,
                mb_sent: stats.megabytes_sent,
            })
        })
        .collect()
}

impl From<&GlobalSummary> for AggregateView {
    fn from(summary: &GlobalSummary) -> Self {
        Self {
            duration_in_minutes: summary.duration_minutes(),
            successful_per_minute: summary.successful_per_minute(),
            failures_per_minute: summary.failures_per_minute(),
            mean_response_time: summary.mean_response_time_micros(),
            time_spent_responding_per_minute: summary.time_spent_responding_per_minute(),
            mb_sent_per_minute: summary.megabytes_sent_per_minute(),
        }
    }
}
