use crate::calendar::grid::{build_month_grid, DayCell, DayStatus, Month};
use crate::config::Config;
use crate::state;
use anyhow::{Context, Result};
use chrono::Local;

/// Render a month of the watch plan as a calendar grid. With no
/// explicit month, the first scheduled month is shown (falling back to
/// today's month).
pub fn show(config: &Config, month: Option<String>, today: Option<String>) -> Result<()> {
    let today = match today {
        Some(s) => super::parse_date(&s)?,
        None => Local::now().date_naive(),
    };

    let st = state::read(config)?;
    let statuses = st
        .plan
        .as_ref()
        .map(|plan| plan.day_statuses(st.completed_videos))
        .unwrap_or_default();

    let month = match month {
        Some(s) => parse_month(&s)?,
        None => statuses
            .first()
            .map(|s| Month::of(s.date))
            .unwrap_or_else(|| Month::of(today)),
    };

    let grid = build_month_grid(month, &statuses, today)?;
    render(month, &grid);

    let in_month: Vec<&DayStatus> = statuses
        .iter()
        .filter(|s| Month::of(s.date) == month)
        .collect();
    if !in_month.is_empty() {
        println!();
        println!("Scheduled days:");
        for status in in_month {
            println!(
                "  {}  {:<12} {:>4}m{}",
                status.date.format("%Y-%m-%d"),
                status.label.as_deref().unwrap_or(""),
                status.minutes_learned,
                if status.completed { "  ✓" } else { "" }
            );
        }
    }

    Ok(())
}

fn parse_month(s: &str) -> Result<Month> {
    let (year, month) = s
        .split_once('-')
        .with_context(|| format!("Invalid month '{}'. Use YYYY-MM", s))?;
    let year: i32 = year.parse().context("Invalid year")?;
    let month: u32 = month.parse().context("Invalid month number")?;
    Ok(Month::new(year, month)?)
}

fn render(month: Month, grid: &[Option<DayCell>]) {
    println!("{} {}", month.name(), month.year);
    println!("  Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid.chunks(7) {
        let row: Vec<String> = week.iter().map(cell_label).collect();
        println!("{}", row.join(""));
    }
    println!();
    println!("  [n] today   n* completed   n+ scheduled");
}

fn cell_label(cell: &Option<DayCell>) -> String {
    let label = match cell {
        None => String::new(),
        Some(cell) => {
            let mut label = cell.day.to_string();
            match &cell.status {
                Some(status) if status.completed => label.push('*'),
                Some(_) => label.push('+'),
                None => {}
            }
            if cell.is_today {
                label = format!("[{}]", label);
            }
            label
        }
    };
    format!("{:>5}", label)
}
