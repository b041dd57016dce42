use std::path::Path;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::config::TrafficInfoConfig;
use crate::TrafficInfoAppError;

/// command line tool sampling commute traffic from a directions api into a table store.
/// meant to be invoked by an external scheduler, e.g. every 30 minutes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TrafficInfoCliArguments {
    /// select the trafficinfo operation to run
    #[command(subcommand)]
    pub op: TrafficInfoOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TrafficInfoOperation {
    /// runs one collection tick: if a commute window is active, fetches the
    /// current routes and appends them to the table store.
    Run {
        /// TOML or JSON configuration file. TRAFFICINFO_* environment variables
        /// override its values.
        #[arg(short, long)]
        config_file: Option<String>,
        /// evaluate the commute window at this RFC 3339 time instead of now
        #[arg(long, value_parser = parse_datetime)]
        at: Option<DateTime<Utc>>,
        /// overrides the configured home location
        #[arg(long)]
        home: Option<String>,
        /// overrides the configured work location
        #[arg(long)]
        work: Option<String>,
    },
    /// reports which commute window, if any, is active. makes no requests.
    Window {
        #[arg(short, long)]
        config_file: Option<String>,
        #[arg(long, value_parser = parse_datetime)]
        at: Option<DateTime<Utc>>,
    },
}

impl TrafficInfoOperation {
    pub fn run(&self) -> Result<(), TrafficInfoAppError> {
        match self {
            TrafficInfoOperation::Run {
                config_file,
                at,
                home,
                work,
            } => {
                let config = TrafficInfoConfig::load(config_file.as_deref().map(Path::new))?
                    .with_locations(home.as_deref(), work.as_deref());
                let now = at.unwrap_or_else(Utc::now);
                let outcome = crate::app::run_collection(&config, &now)?;
                log::info!("{outcome}");
                Ok(())
            }
            TrafficInfoOperation::Window { config_file, at } => {
                let config = TrafficInfoConfig::load(config_file.as_deref().map(Path::new))?;
                let now = at.unwrap_or_else(Utc::now);
                match crate::app::active_window(&config, &now)? {
                    Some(window) => println!("{window}"),
                    None => println!(
                        "no commute window active at {}",
                        config.window_selector()?.local_time(&now)
                    ),
                }
                Ok(())
            }
        }
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid RFC 3339 time '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::{parse_datetime, TrafficInfoCliArguments, TrafficInfoOperation};
    use chrono::{TimeZone, Utc};
    use clap::Parser;

    #[test]
    fn test_parse_datetime_normalizes_to_utc() {
        let t = parse_datetime("2024-01-15T08:00:00-08:00").expect("valid time");
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 15, 16, 0, 0)
            .single()
            .expect("valid utc time");
        assert_eq!(t, expected);
        assert!(parse_datetime("08:00").is_err());
    }

    #[test]
    fn test_run_arguments() {
        let args = TrafficInfoCliArguments::try_parse_from([
            "trafficinfo",
            "run",
            "--config-file",
            "trafficinfo.toml",
            "--at",
            "2024-01-15T08:00:00-08:00",
            "--home",
            "A",
        ])
        .expect("arguments should parse");
        match args.op {
            TrafficInfoOperation::Run {
                config_file,
                at,
                home,
                work,
            } => {
                assert_eq!(config_file.as_deref(), Some("trafficinfo.toml"));
                assert!(at.is_some());
                assert_eq!(home.as_deref(), Some("A"));
                assert_eq!(work, None);
            }
            _ => panic!("expected run operation"),
        }
    }
}
