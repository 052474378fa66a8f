use crate::aggregate::BucketStore;
use crate::report::views::{AggregateView, Report, detail_rows};
use clap::ValueEnum;
use thiserror::Error;

/// Printed when the aggregate view is requested but no line produced a
/// bucket. An explicit signal beats an empty-looking document.
const NO_DATA: &str = "No data\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Which views to render, and how.
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest {
    pub detail: bool,
    pub aggregate: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize report to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to serialize report to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the requested views to a complete output document, trailing
/// newline included.
pub fn render(store: &BucketStore, request: ReportRequest) -> Result<String, RenderError> {
    if request.aggregate && store.is_empty() {
        return Ok(NO_DATA.to_string());
    }

    let report = Report {
        detail: request.detail.then(|| detail_rows(store)),
        aggregate: if request.aggregate {
            // is_empty was checked above; reduce over a populated store
            // cannot fail.
            store.summary().ok().map(|s| AggregateView::from(&s))
        } else {
            None
        },
    };

    let out = match request.format {
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            out
        }
    };

    Ok(out)
}
