//! Liturgical season and color enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five seasons of the church year handled by the calendar.
///
/// Every date belongs to exactly one of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalSeason {
    /// From the fourth Sunday before Christmas until Christmas Eve
    Advent,
    /// From Christmas Day until the eve of Epiphany
    Christmas,
    /// From Ash Wednesday until Holy Saturday
    Lent,
    /// From Easter Sunday until the eve of Pentecost
    Easter,
    /// Everything else
    Ordinary,
}

impl LiturgicalSeason {
    /// All seasons in calendar order starting from Advent.
    pub const ALL: [LiturgicalSeason; 5] = [
        LiturgicalSeason::Advent,
        LiturgicalSeason::Christmas,
        LiturgicalSeason::Lent,
        LiturgicalSeason::Easter,
        LiturgicalSeason::Ordinary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "advent",
            LiturgicalSeason::Christmas => "christmas",
            LiturgicalSeason::Lent => "lent",
            LiturgicalSeason::Easter => "easter",
            LiturgicalSeason::Ordinary => "ordinary",
        }
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "Advent",
            LiturgicalSeason::Christmas => "Christmas",
            LiturgicalSeason::Lent => "Lent",
            LiturgicalSeason::Easter => "Easter",
            LiturgicalSeason::Ordinary => "Ordinary Time",
        }
    }

    /// Liturgical color worn during the season.
    pub fn color(&self) -> LiturgicalColor {
        match self {
            LiturgicalSeason::Advent | LiturgicalSeason::Lent => LiturgicalColor::Purple,
            LiturgicalSeason::Christmas | LiturgicalSeason::Easter => LiturgicalColor::Gold,
            LiturgicalSeason::Ordinary => LiturgicalColor::Green,
        }
    }
}

impl FromStr for LiturgicalSeason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advent" => Ok(LiturgicalSeason::Advent),
            "christmas" | "christmastide" => Ok(LiturgicalSeason::Christmas),
            "lent" => Ok(LiturgicalSeason::Lent),
            "easter" | "eastertide" => Ok(LiturgicalSeason::Easter),
            "ordinary" | "ordinary time" => Ok(LiturgicalSeason::Ordinary),
            _ => Err(format!("Invalid liturgical season: {s}")),
        }
    }
}

/// Liturgical color keyword.
///
/// `Red` and `White` belong to feast days, which this calendar does not
/// rank, so no season currently maps to them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalColor {
    Purple,
    Gold,
    Green,
    Red,
    White,
}

impl LiturgicalColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalColor::Purple => "purple",
            LiturgicalColor::Gold => "gold",
            LiturgicalColor::Green => "green",
            LiturgicalColor::Red => "red",
            LiturgicalColor::White => "white",
        }
    }
}

impl FromStr for LiturgicalColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "purple" | "violet" => Ok(LiturgicalColor::Purple),
            "gold" => Ok(LiturgicalColor::Gold),
            "green" => Ok(LiturgicalColor::Green),
            "red" => Ok(LiturgicalColor::Red),
            "white" => Ok(LiturgicalColor::White),
            _ => Err(format!("Invalid liturgical color: {s}")),
        }
    }
}
