//! Display wrapper types for formatting different contexts.
//!
//! Domain models implement `Display` in [`models`]; values that only exist
//! for presentation (date lists, lookup results, long-form dates) get
//! wrapper types here. Everything renders as markdown so the CLI can pass
//! it straight to a terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (DailyDevotion) │───▶│    Types        │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`EntryDates`]: Formats the dates a lectionary covers
//! - [`SeasonReport`]: Formats the season and color of a date
//! - [`EntryCheck`]: Formats whether a date has a lectionary entry
//! - [`LongDate`]: Formats a date as `Sunday, March 31, 2024`

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::EntryDates;
pub use datetime::LongDate;
pub use results::{EntryCheck, SeasonReport};
