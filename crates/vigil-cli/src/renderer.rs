//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for inline markdown styling, with headers tinted by the
//! liturgical color of what is being shown. Plain output passes markdown
//! through untouched.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{
    crossterm::style::{style, Color, Stylize},
    MadSkin,
};
use vigil_core::LiturgicalColor;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    accent: Color,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self {
            rich_enabled,
            accent: Color::Blue,
            skin,
        }
    }

    /// Tints headers with the terminal color closest to a liturgical color.
    pub fn with_accent(mut self, color: LiturgicalColor) -> Self {
        self.accent = accent_for(color);
        self
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{}", style(line).with(self.accent).bold())?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

fn accent_for(color: LiturgicalColor) -> Color {
    match color {
        LiturgicalColor::Purple => Color::Magenta,
        LiturgicalColor::Gold => Color::Yellow,
        LiturgicalColor::Green => Color::Green,
        LiturgicalColor::Red => Color::Red,
        LiturgicalColor::White => Color::White,
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
