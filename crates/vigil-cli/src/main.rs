//! Vigil CLI Application
//!
//! Command-line interface for the liturgical calendar and daily office.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use vigil_core::{params::ClassifyDate, DataDir, DevotionComposerBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        lang,
        no_color,
        json,
        command,
    } = Args::parse();

    let explicit_data_dir = data_dir.is_some();
    let composer = DevotionComposerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .context("Failed to load devotion data")?;

    if !explicit_data_dir && composer.all_dates().is_empty() {
        match DataDir::user_default() {
            Ok(dir) => warn!(
                "No lectionary found; place lectionary.json in {}",
                dir.root().display()
            ),
            Err(e) => warn!("No lectionary found: {e}"),
        }
    }

    info!("Vigil started");

    let cli = Cli::new(composer, !no_color, json);
    match command {
        Some(Season(args)) => cli.season(&args.into()),
        Some(Year(args)) => cli.year(&args.into()),
        Some(Office(args)) => cli.office(&args.into_params(lang)),
        Some(Day(args)) => cli.day(&args.into_params(lang)),
        Some(Dates) => cli.dates(),
        Some(Has(args)) => cli.has(&args.into()),
        None => cli.season(&ClassifyDate::default()),
    }
}
