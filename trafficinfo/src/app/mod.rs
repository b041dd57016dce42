mod collect;
mod trafficinfo_cli;

pub use collect::{active_window, run_collection};
pub use trafficinfo_cli::{TrafficInfoCliArguments, TrafficInfoOperation};
