//! Report documents rendered from a [`BucketStore`](crate::aggregate::BucketStore).
//!
//! Two views: a per-minute detail sequence and a global aggregate block.
//! Either or both may be requested; the result serializes to YAML or JSON.

mod render;
#[cfg(test)]
mod tests;
mod views;

pub use render::{OutputFormat, RenderError, ReportRequest, render};
pub use views::{AggregateView, DetailRow, Report, detail_rows};
