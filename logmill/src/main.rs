use clap::Parser;
use logmill_core::cli::{self, Options};
use logmill_core::logging::init_logging;
use logmill_core::report::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logmill",
    version,
    about = "Summarise web-server access logs into per-minute and global statistics"
)]
struct Cli {
    /// Input log files; '-' (or no files at all) reads from stdin
    files: Vec<PathBuf>,

    /// Skip the per-minute detail view
    #[arg(long)]
    no_detail: bool,

    /// Skip the global aggregate view
    #[arg(long)]
    no_aggregate: bool,

    /// Output serialization format
    #[arg(long, value_enum, default_value = "yaml")]
    format: OutputFormat,

    /// Report skipped lines and progress detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = Options {
        inputs: cli.files,
        detail: !cli.no_detail,
        aggregate: !cli.no_aggregate,
        format: cli.format,
    };

    if let Err(e) = cli::run(&options) {
        eprintln!("logmill: {e:#}");
        std::process::exit(1);
    }
}
