pub mod config;
pub mod error;
pub mod filter;
pub mod investigate;
pub mod patterns;
pub mod report;
pub mod source;
pub mod tally;

pub use config::ReporterConfig;
pub use error::{FieldError, ReportError};
pub use filter::{filter_log, FilterResult, LineFilter, MatchRecord};
pub use investigate::{run, RunSummary};
pub use tally::{tally_port_traffic, tally_port_traffic_file, PortTally};
