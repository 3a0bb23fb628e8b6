use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fwlog_reporter::config::{DEFAULT_PORT_THRESHOLD, DEFAULT_SOURCE_IP};
use fwlog_reporter::{run, ReportError, ReporterConfig};
use tracing_subscriber::EnvFilter;

/// Scans a gateway firewall/auth log and writes traffic and login reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the log file to investigate
    #[arg(index = 1)]
    log_file: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Minimum hits for a destination port to get its own report
    #[arg(short, long, default_value_t = DEFAULT_PORT_THRESHOLD)]
    threshold: usize,

    /// Source IP to extract into its own log
    #[arg(short, long, default_value = DEFAULT_SOURCE_IP)]
    source_ip: String,

    /// Additional regex filter to run (repeatable)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// Match additional filters case-sensitively
    #[arg(short, long)]
    case_sensitive: bool,

    /// Only print match counts, not the matching records
    #[arg(short, long)]
    quiet: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(args: Args) -> Result<(), ReportError> {
    let log_file = args.log_file.ok_or(ReportError::MissingArgument)?;

    let mut config = ReporterConfig::new(log_file);
    config.output_dir = args.output_dir;
    config.port_threshold = args.threshold;
    config.source_ip = args.source_ip;
    config.extra_patterns = args.patterns;
    config.extra_case_sensitive = args.case_sensitive;
    config.print_records = !args.quiet;

    let summary = run(&config)?;

    if let Some(path) = args.summary_json {
        summary.write_json(&path)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                message.push_str(&format!(": {}", cause));
                source = cause.source();
            }
            eprintln!("Error: {}", message);
            ExitCode::from(e.exit_code())
        }
    }
}
