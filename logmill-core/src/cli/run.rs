use crate::aggregate::BucketStore;
use crate::parse::parse_line;
use crate::report::{OutputFormat, ReportRequest, render};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Resolved invocation options, independent of the argument parser.
#[derive(Debug, Clone)]
pub struct Options {
    /// Input paths; `-` means stdin, an empty list defaults to stdin.
    pub inputs: Vec<PathBuf>,
    pub detail: bool,
    pub aggregate: bool,
    pub format: OutputFormat,
}

pub fn run(options: &Options) -> Result<()> {
    if !options.detail && !options.aggregate {
        bail!("disabling both detail and aggregate output leaves nothing to report");
    }

    let mut store = BucketStore::new();

    if options.inputs.is_empty() {
        tracing::debug!("no input files given, reading from stdin");
        consume(io::stdin().lock(), &mut store)?;
    } else {
        for path in &options.inputs {
            if path.as_os_str() == "-" {
                consume(io::stdin().lock(), &mut store)?;
            } else {
                let file = File::open(path)
                    .with_context(|| format!("failed to open input file {}", path.display()))?;
                consume(BufReader::new(file), &mut store)?;
            }
        }
    }

    tracing::debug!("aggregated {} distinct minutes", store.len());

    let rendered = render(
        &store,
        ReportRequest {
            detail: options.detail,
            aggregate: options.aggregate,
            format: options.format,
        },
    )?;

    io::stdout()
        .write_all(rendered.as_bytes())
        .context("failed to write report")?;

    Ok(())
}

/// Stream one input into the store. Blank lines are skipped; lines that
/// fail to parse are reported and skipped; a routing failure is a bug and
/// aborts the run.
pub fn consume(reader: impl BufRead, store: &mut BucketStore) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(record) => store.accumulate(&record)?,
            Err(err) => tracing::error!("skipping line \"{line}\": {err}"),
        }
    }

    Ok(())
}
