pub mod calendar;
pub mod config;
pub mod plan;
pub mod playlist;
pub mod progress;

use anyhow::{Context, Result};
use chrono::NaiveDate;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", s))
}
