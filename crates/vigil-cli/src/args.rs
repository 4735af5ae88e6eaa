//! Command-line interface definitions using clap
//!
//! Argument structs here carry clap derives only; each converts into the
//! matching interface-agnostic parameter struct of `vigil_core::params`,
//! which does the validation.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Calendar / Composer
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use vigil_core::params::{BuildDay, BuildDevotion, CheckDate, ClassifyDate, ShowYear};

/// Liturgical calendar and daily office
///
/// Vigil classifies dates into liturgical seasons and composes morning,
/// midday, evening and family prayer from a lectionary and prayer texts in
/// your language. With no command it shows today's season.
#[derive(Parser)]
#[command(version, about, name = "vigil")]
pub struct Args {
    /// Directory holding lectionary.json, prayers/ and locales/. Defaults to
    /// $XDG_DATA_HOME/vigil
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Language for prayers and titles (e.g. en, tl, et)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Vigil CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the liturgical season and color of a date
    #[command(alias = "s")]
    Season(SeasonArgs),
    /// Show the season boundaries of a year
    #[command(alias = "y")]
    Year(YearArgs),
    /// Compose the office for a date
    #[command(alias = "o")]
    Office(OfficeArgs),
    /// Compose all four offices for a date
    #[command(alias = "d")]
    Day(DayArgs),
    /// List every date with a lectionary entry
    Dates,
    /// Check whether a date has a lectionary entry
    Has(HasArgs),
}

#[derive(ClapArgs)]
pub struct SeasonArgs {
    /// Date in YYYY-MM-DD form; defaults to today
    pub date: Option<String>,
}

impl From<SeasonArgs> for ClassifyDate {
    fn from(val: SeasonArgs) -> Self {
        ClassifyDate { date: val.date }
    }
}

#[derive(ClapArgs)]
pub struct YearArgs {
    /// Calendar year
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

impl From<YearArgs> for ShowYear {
    fn from(val: YearArgs) -> Self {
        ShowYear { year: val.year }
    }
}

#[derive(ClapArgs)]
pub struct OfficeArgs {
    /// Date in YYYY-MM-DD form
    pub date: String,
    /// Hour of prayer: morning, noon, evening or family
    #[arg(short, long)]
    pub time: Option<String>,
}

impl OfficeArgs {
    pub fn into_params(self, language: Option<String>) -> BuildDevotion {
        BuildDevotion {
            date: self.date,
            time_of_day: self.time,
            language,
        }
    }
}

#[derive(ClapArgs)]
pub struct DayArgs {
    /// Date in YYYY-MM-DD form
    pub date: String,
}

impl DayArgs {
    pub fn into_params(self, language: Option<String>) -> BuildDay {
        BuildDay {
            date: self.date,
            language,
        }
    }
}

#[derive(ClapArgs)]
pub struct HasArgs {
    /// Date in YYYY-MM-DD form
    pub date: String,
}

impl From<HasArgs> for CheckDate {
    fn from(val: HasArgs) -> Self {
        CheckDate { date: val.date }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "vigil", "office", "2025-11-30", "--time", "evening", "--lang", "tl", "--json",
        ])
        .unwrap();
        assert_eq!(args.lang.as_deref(), Some("tl"));
        assert!(args.json);
        match args.command {
            Some(Commands::Office(office)) => {
                let params = office.into_params(args.lang);
                assert_eq!(params.date, "2025-11-30");
                assert_eq!(params.time_of_day.as_deref(), Some("evening"));
            }
            _ => panic!("Expected office command"),
        }
    }

    #[test]
    fn test_negative_year() {
        let args = Args::try_parse_from(["vigil", "year", "-44"]).unwrap();
        match args.command {
            Some(Commands::Year(year)) => assert_eq!(ShowYear::from(year).year, -44),
            _ => panic!("Expected year command"),
        }
    }
}
