use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::formatters::{current_date_string, current_time_string};
use crate::core::dst::DstPrecision;
use crate::domain::model::{CustomTimeRequest, Zone};

#[derive(Debug, Clone, Parser)]
#[command(name = "ist-london-clock")]
#[command(about = "Shows India and UK time side by side and converts between them")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Tick both clocks once per interval until Ctrl+C
    Live {
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Override the tick interval from the config file
        #[arg(long)]
        interval_ms: Option<u64>,

        #[command(flatten)]
        custom: OptionalCustomArgs,
    },

    /// Convert one date and time from one zone to the other
    Convert {
        #[command(flatten)]
        custom: CustomArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print how far IST is ahead of London right now
    Offset,

    /// List the quarter-hour time choices
    Times,
}

#[derive(Debug, Clone, Args)]
pub struct CustomArgs {
    /// Date as YYYY-MM-DD; defaults to today in the source zone
    #[arg(long)]
    pub date: Option<String>,

    /// 24-hour time as HH:MM; defaults to the current time in the source zone
    #[arg(long)]
    pub time: Option<String>,

    /// Zone the date and time are in (IST or London); defaults to the config value
    #[arg(long = "from", value_parser = parse_zone)]
    pub from: Option<Zone>,
}

impl CustomArgs {
    /// Fills missing fields the way the input form prefills them.
    pub fn into_request(
        self,
        default_zone: Zone,
        now: DateTime<Utc>,
        precision: DstPrecision,
    ) -> CustomTimeRequest {
        let zone = self.from.unwrap_or(default_zone);
        CustomTimeRequest::new(
            self.date
                .unwrap_or_else(|| current_date_string(zone, now, precision)),
            self.time
                .unwrap_or_else(|| current_time_string(zone, now, precision)),
            zone,
        )
    }
}

/// Pins a custom time instead of the live clock.
#[derive(Debug, Clone, Args)]
pub struct OptionalCustomArgs {
    #[arg(long, requires = "time")]
    pub date: Option<String>,

    #[arg(long, requires = "date")]
    pub time: Option<String>,

    #[arg(long = "from", value_parser = parse_zone)]
    pub from: Option<Zone>,
}

impl OptionalCustomArgs {
    pub fn into_request(self, default_zone: Zone) -> Option<CustomTimeRequest> {
        match (self.date, self.time) {
            (Some(date), Some(time)) => Some(CustomTimeRequest::new(
                date,
                time,
                self.from.unwrap_or(default_zone),
            )),
            _ => None,
        }
    }
}

fn parse_zone(value: &str) -> Result<Zone, String> {
    value.parse::<Zone>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_convert_command() {
        let config = CliConfig::try_parse_from([
            "ist-london-clock",
            "convert",
            "--date",
            "2026-06-15",
            "--time",
            "12:00",
            "--from",
            "ist",
            "--json",
        ])
        .unwrap();

        match config.command {
            Command::Convert { custom, json } => {
                assert!(json);
                let now = Utc::now();
                let request = custom.into_request(Zone::London, now, DstPrecision::CalendarDay);
                assert_eq!(request.source_zone, Zone::Ist);
                assert_eq!(request.date, "2026-06-15");
                assert_eq!(request.time, "12:00");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_convert_prefills_missing_fields() {
        let config = CliConfig::try_parse_from(["ist-london-clock", "convert", "--from", "london"])
            .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 7, 4, 23, 30, 0).unwrap();

        match config.command {
            Command::Convert { custom, json } => {
                assert!(!json);
                let request = custom.into_request(Zone::Ist, now, DstPrecision::CalendarDay);
                assert_eq!(request.date, "2026-07-05");
                assert_eq!(request.time, "00:30");
                assert_eq!(request.source_zone, Zone::London);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_live_defaults_and_global_flags() {
        let config =
            CliConfig::try_parse_from(["ist-london-clock", "live", "--ticks", "3", "-v"]).unwrap();
        assert!(config.verbose);
        match config.command {
            Command::Live { ticks, custom, .. } => {
                assert_eq!(ticks, Some(3));
                assert!(custom.into_request(Zone::Ist).is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_live_custom_needs_both_fields() {
        assert!(CliConfig::try_parse_from(["ist-london-clock", "live", "--date", "2026-01-01"])
            .is_err());
    }

    #[test]
    fn test_rejects_unknown_zone() {
        assert!(CliConfig::try_parse_from([
            "ist-london-clock",
            "convert",
            "--date",
            "2026-06-15",
            "--time",
            "12:00",
            "--from",
            "Paris",
        ])
        .is_err());
    }
}
