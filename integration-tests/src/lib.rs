//! Shared helpers for end-to-end pipeline tests.

use logmill_core::aggregate::BucketStore;
use logmill_core::cli::consume;
use std::io::Cursor;

/// Run raw log text through the full ingest path: line splitting, blank-line
/// skipping, parsing, and minute bucketing.
pub fn store_from_log(text: &str) -> BucketStore {
    let mut store = BucketStore::new();
    consume(Cursor::new(text), &mut store).expect("sample log should stream cleanly");
    store
}
