use crate::app::{AppConfig, DEFAULT_STORAGE_KEY, DEFAULT_ZOOM};
use crate::types::{Coords, WorkoutKind};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DB: &str = "mapty.sqlite3";

#[derive(Parser, Debug)]
#[command(
    name = "mapty",
    about = "Log running and cycling workouts on a map, kept in a local SQLite slot"
)]
pub struct Cli {
    /// SQLite file holding the workouts slot.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB, global = true)]
    pub db: PathBuf,

    /// Current position as LAT,LNG. Without it the location lookup fails and
    /// the map never loads.
    #[arg(long, value_name = "LAT,LNG", global = true, allow_hyphen_values = true)]
    pub home: Option<Coords>,

    /// Map zoom level used when loading the map and recentering on a workout.
    #[arg(long, default_value_t = DEFAULT_ZOOM, global = true)]
    pub zoom: u8,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            zoom: self.zoom,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show saved workouts (the default).
    List,

    /// Click the map at a point and submit the workout form.
    Add {
        #[arg(value_enum)]
        kind: WorkoutKind,

        /// Where the workout happened.
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        at: Coords,

        /// Kilometers.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        distance: String,

        /// Minutes.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        duration: String,

        /// Steps per minute (running).
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        cadence: String,

        /// Meters climbed (cycling).
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        elevation: String,
    },

    /// Click a list entry: recenter the map on that workout.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "mapty", "--home", "48.39,-4.49", "add", "cycling", "--at", "-33.9,18.4",
            "--distance", "20", "--duration", "60", "--elevation", "-5",
        ])
        .unwrap();

        assert_eq!(cli.home, Some(Coords::new(48.39, -4.49)));
        assert_eq!(cli.zoom, DEFAULT_ZOOM);
        let Some(Cmd::Add { kind, at, elevation, cadence, .. }) = cli.cmd else {
            panic!("expected add");
        };
        assert_eq!(kind, WorkoutKind::Cycling);
        assert_eq!(at, Coords::new(-33.9, 18.4));
        assert_eq!(elevation, "-5");
        assert_eq!(cadence, "");
    }

    #[test]
    fn defaults_to_listing() {
        let cli = Cli::try_parse_from(["mapty"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(cli.home.is_none());
        assert_eq!(cli.db, PathBuf::from(DEFAULT_DB));
        assert_eq!(cli.config(), AppConfig::default());
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(Cli::try_parse_from(["mapty", "--home", "48.39"]).is_err());
        assert!(Cli::try_parse_from(["mapty", "--home", "91,0"]).is_err());
    }
}
