use chrono::NaiveDate;
use watchplan::calendar::grid::{build_month_grid, DayStatus, Month};
use watchplan::plan::scheduler::compute_schedule;
use watchplan::playlist::models::Video;
use watchplan::state::SavedPlan;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn video(id: &str, duration: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {}", id),
        duration: duration.to_string(),
    }
}

#[test]
fn test_january_2024_layout() {
    // January 2024 starts on a Monday: one Sunday placeholder, then 31 days
    let month = Month::new(2024, 1).unwrap();
    let grid = build_month_grid(month, &[], date("2024-01-15")).unwrap();

    assert_eq!(grid.len(), 32);
    assert!(grid[0].is_none());
    assert_eq!(grid.iter().flatten().count(), 31);

    let today: Vec<u32> = grid
        .iter()
        .flatten()
        .filter(|cell| cell.is_today)
        .map(|cell| cell.day)
        .collect();
    assert_eq!(today, vec![15]);
}

#[test]
fn test_schedule_statuses_flow_into_grid() {
    let videos = vec![
        video("a", "PT10M"),
        video("b", "PT10M"),
        video("c", "PT30M"),
        video("d", "PT5M"),
    ];
    let schedule = compute_schedule(&videos, 15.0, date("2024-01-30")).unwrap();
    let plan = SavedPlan::from_schedule(&schedule, 15.0, date("2024-01-30"));

    // Two days land in January, two roll into February
    let statuses = plan.day_statuses(1);
    let january = Month::new(2024, 1).unwrap();
    let grid = build_month_grid(january, &statuses, date("2024-01-30")).unwrap();

    let day30 = grid
        .iter()
        .flatten()
        .find(|cell| cell.day == 30)
        .unwrap();
    let status = day30.status.as_ref().unwrap();
    assert!(status.completed);
    assert_eq!(status.minutes_learned, 10);
    assert_eq!(status.label.as_deref(), Some("1 videos"));
    assert!(day30.is_today);

    let day31 = grid
        .iter()
        .flatten()
        .find(|cell| cell.day == 31)
        .unwrap();
    assert!(!day31.status.as_ref().unwrap().completed);

    let february = january.succ();
    let feb_grid = build_month_grid(february, &statuses, date("2024-01-30")).unwrap();
    let feb1 = feb_grid
        .iter()
        .flatten()
        .find(|cell| cell.day == 1)
        .unwrap();
    assert_eq!(feb1.status.as_ref().unwrap().minutes_learned, 30);
    assert!(!feb1.is_today);
}

#[test]
fn test_empty_schedule_produces_plain_grid() {
    let schedule = compute_schedule(&[], 15.0, date("2024-01-01")).unwrap();
    let statuses = schedule.day_statuses(0);
    assert!(statuses.is_empty());

    let grid = build_month_grid(Month::new(2024, 1).unwrap(), &statuses, date("2024-01-01")).unwrap();
    assert!(grid.iter().flatten().all(|cell| cell.status.is_none()));
}

#[test]
fn test_month_navigation_round_trip() {
    let month = Month::new(2024, 6).unwrap();
    assert_eq!(month.succ().pred(), month);
    assert_eq!(Month::new(2024, 1).unwrap().pred().succ(), Month::new(2024, 1).unwrap());
}

#[test]
fn test_statuses_outside_month_are_ignored() {
    let statuses = vec![DayStatus {
        date: date("2024-02-10"),
        completed: false,
        minutes_learned: 12,
        label: None,
    }];
    let grid = build_month_grid(Month::new(2024, 1).unwrap(), &statuses, date("2024-01-01")).unwrap();
    assert!(grid.iter().flatten().all(|cell| cell.status.is_none()));
}
