use thiserror::Error;

/// Typed failures from the planning core. Command code wraps these in
/// `anyhow` at the CLI boundary.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("daily watch time must be a positive number of minutes (got {0})")]
    InvalidBudget(f64),

    #[error("month must be between 1 and 12 (got {0})")]
    InvalidMonth(u32),

    #[error("no such calendar day: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("schedule ran past the supported calendar range")]
    DateOverflow,

    #[error("completed count {completed} exceeds playlist size {total}")]
    InvalidProgress { completed: u32, total: u32 },
}
