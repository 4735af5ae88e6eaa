//! Command handlers.
//!
//! Each handler validates its core parameters, calls the calendar or the
//! composer and prints either rendered markdown or JSON.

use std::fmt::Display;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use vigil_core::{
    calendar::{classify, YearBoundaries},
    params::{BuildDay, BuildDevotion, CheckDate, ClassifyDate, ShowYear},
    DevotionComposer, EntryCheck, EntryDates, LiturgicalColor, SeasonReport,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    composer: DevotionComposer,
    rich: bool,
    json: bool,
}

impl Cli {
    pub fn new(composer: DevotionComposer, rich: bool, json: bool) -> Self {
        Self {
            composer,
            rich,
            json,
        }
    }

    fn emit<T>(&self, value: &T, accent: Option<LiturgicalColor>) -> Result<()>
    where
        T: Display + Serialize + ?Sized,
    {
        if self.json {
            return self.emit_json(value);
        }

        let mut renderer = TerminalRenderer::new(self.rich);
        if let Some(color) = accent {
            renderer = renderer.with_accent(color);
        }
        renderer.render(&value.to_string())
    }

    pub fn season(&self, params: &ClassifyDate) -> Result<()> {
        let date = params.validate()?;
        let report = SeasonReport::new(date, classify(date));
        self.emit(&report, Some(report.color))
    }

    pub fn year(&self, params: &ShowYear) -> Result<()> {
        let year = params.validate()?;
        self.emit(&YearBoundaries::for_year(year), None)
    }

    pub fn office(&self, params: &BuildDevotion) -> Result<()> {
        let (date, time_of_day, language) = params.validate()?;
        let Some(devotion) = self.composer.build_devotion(date, time_of_day, &language) else {
            bail!("No lectionary entry for {date}");
        };
        self.emit(&devotion, Some(devotion.liturgical_color()))
    }

    pub fn day(&self, params: &BuildDay) -> Result<()> {
        let (date, language) = params.validate()?;
        let Some(day) = self.composer.build_devotion_day(date, &language) else {
            bail!("No lectionary entry for {date}");
        };
        let accent = day.offices().next().map(|office| office.liturgical_color());
        self.emit(&day, accent)
    }

    pub fn dates(&self) -> Result<()> {
        let dates = self.composer.all_dates();
        if self.json {
            return self.emit_json(&dates);
        }
        self.render(&EntryDates(dates).to_string())
    }

    pub fn has(&self, params: &CheckDate) -> Result<()> {
        let date = params.validate()?;
        self.emit(&EntryCheck::new(date, self.composer.has_entry(date)), None)
    }

    fn emit_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }

    fn render(&self, markdown: &str) -> Result<()> {
        TerminalRenderer::new(self.rich).render(markdown)
    }
}
