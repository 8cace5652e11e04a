use crate::error::PlanError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month (1-based), navigable without touching the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, PlanError> {
        if !(1..=12).contains(&month) {
            return Err(PlanError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> Result<NaiveDate, PlanError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(PlanError::InvalidDate {
            year: self.year,
            month: self.month,
            day: 1,
        })
    }

    pub fn day_count(self) -> Result<u32, PlanError> {
        let first = self.first_day()?;
        let next = self.succ().first_day()?;
        Ok(next.signed_duration_since(first).num_days() as u32)
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

/// Display summary for one calendar day, rebuilt on demand from the
/// schedule and progress data (never mutated in place).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub completed: bool,
    pub minutes_learned: u32,
    pub label: Option<String>,
}

/// One grid cell. Placeholder cells before day 1 are `None` in the
/// grid vector.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub status: Option<DayStatus>,
}

/// Project a month into calendar-grid cells: leading placeholders up
/// to the weekday of day 1 (weeks start on Sunday), then one cell per
/// day. `today` is supplied by the caller so the projection stays
/// deterministic.
pub fn build_month_grid(
    month: Month,
    statuses: &[DayStatus],
    today: NaiveDate,
) -> Result<Vec<Option<DayCell>>, PlanError> {
    let first = month.first_day()?;
    let day_count = month.day_count()?;
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(offset + day_count as usize);
    cells.resize(offset, None);

    for day in 1..=day_count {
        let date = NaiveDate::from_ymd_opt(month.year, month.month, day).ok_or(
            PlanError::InvalidDate {
                year: month.year,
                month: month.month,
                day,
            },
        )?;
        let status = statuses.iter().find(|s| s.date == date).cloned();
        cells.push(Some(DayCell {
            date,
            day,
            is_today: date == today,
            status,
        }));
    }

    Ok(cells)
}
