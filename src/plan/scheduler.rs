use crate::calendar::grid::DayStatus;
use crate::error::PlanError;
use crate::playlist::models::Video;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A generated watch plan: date-ordered map from calendar day to the
/// videos assigned to it. Videos are borrowed from the playlist that
/// produced the plan; concatenating the buckets in date order yields
/// the playlist order back.
#[derive(Debug, Default)]
pub struct Schedule<'a> {
    days: BTreeMap<NaiveDate, Vec<&'a Video>>,
}

/// Distribute `videos` across consecutive days starting at `anchor`,
/// keeping each day's accumulated watch time within `daily_minutes`.
///
/// Single left-to-right pass, no reordering:
/// - a video that fits joins the current day;
/// - a video that would overflow a non-empty day opens the next day;
/// - a video that overflows an *empty* day is scheduled alone on that
///   day, and the day is closed to further videos.
///
/// Only days that receive at least one video appear in the result, so
/// an empty playlist yields an empty schedule.
pub fn compute_schedule<'a>(
    videos: &'a [Video],
    daily_minutes: f64,
    anchor: NaiveDate,
) -> Result<Schedule<'a>, PlanError> {
    if !(daily_minutes > 0.0) {
        return Err(PlanError::InvalidBudget(daily_minutes));
    }

    let mut days: BTreeMap<NaiveDate, Vec<&Video>> = BTreeMap::new();
    let mut current = anchor;
    let mut accumulated = 0.0f64;

    for video in videos {
        let minutes = f64::from(video.duration_secs()) / 60.0;

        if accumulated + minutes > daily_minutes {
            if accumulated == 0.0 {
                // The video alone exceeds the budget: it gets the day
                // to itself and the day is closed immediately.
                days.entry(current).or_default().push(video);
                current = current.succ_opt().ok_or(PlanError::DateOverflow)?;
            } else {
                current = current.succ_opt().ok_or(PlanError::DateOverflow)?;
                days.entry(current).or_default().push(video);
                accumulated = minutes;
            }
        } else {
            days.entry(current).or_default().push(video);
            accumulated += minutes;
        }
    }

    Ok(Schedule { days })
}

impl<'a> Schedule<'a> {
    /// Rebuild a schedule from already-partitioned days (used when
    /// re-projecting a persisted plan).
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Vec<&'a Video>)>,
    {
        Self {
            days: days.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of scheduled days ("estimated days required").
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Date-ordered iteration over the daily buckets.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[&'a Video])> {
        self.days.iter().map(|(date, videos)| (*date, videos.as_slice()))
    }

    pub fn videos_for(&self, date: NaiveDate) -> Option<&[&'a Video]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Total watch time for a day, rounded to whole minutes.
    pub fn minutes_for(&self, date: NaiveDate) -> u32 {
        let secs = self
            .days
            .get(&date)
            .map(|videos| day_secs(videos))
            .unwrap_or(0);
        round_minutes(secs)
    }

    /// Project the schedule into per-day calendar statuses. A day is
    /// complete once the running video count up to and including it
    /// fits within `completed_videos` (videos are watched in schedule
    /// order, so completion covers a prefix of days).
    pub fn day_statuses(&self, completed_videos: u32) -> Vec<DayStatus> {
        let mut watched = 0u32;
        self.days
            .iter()
            .map(|(date, videos)| {
                watched = watched.saturating_add(videos.len() as u32);
                DayStatus {
                    date: *date,
                    completed: watched <= completed_videos,
                    minutes_learned: round_minutes(day_secs(videos)),
                    label: Some(format!("{} videos", videos.len())),
                }
            })
            .collect()
    }
}

fn day_secs(videos: &[&Video]) -> u32 {
    videos
        .iter()
        .fold(0u32, |total, video| total.saturating_add(video.duration_secs()))
}

fn round_minutes(secs: u32) -> u32 {
    (f64::from(secs) / 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, duration: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {}", id),
            duration: duration.to_string(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ids(schedule: &Schedule, day: &str) -> Vec<String> {
        schedule
            .videos_for(date(day))
            .unwrap_or_default()
            .iter()
            .map(|v| v.id.clone())
            .collect()
    }

    #[test]
    fn test_videos_fill_a_day_up_to_budget() {
        let videos = vec![video("a", "PT5M"), video("b", "PT5M"), video("c", "PT5M")];
        let schedule = compute_schedule(&videos, 15.0, date("2024-01-01")).unwrap();

        assert_eq!(schedule.day_count(), 1);
        assert_eq!(ids(&schedule, "2024-01-01"), vec!["a", "b", "c"]);
        assert_eq!(schedule.minutes_for(date("2024-01-01")), 15);
    }

    #[test]
    fn test_overflow_opens_next_day() {
        let videos = vec![video("a", "PT10M"), video("b", "PT10M")];
        let schedule = compute_schedule(&videos, 15.0, date("2024-01-01")).unwrap();

        assert_eq!(ids(&schedule, "2024-01-01"), vec!["a"]);
        assert_eq!(ids(&schedule, "2024-01-02"), vec!["b"]);
    }

    #[test]
    fn test_greedy_packing_scenario() {
        let videos = vec![
            video("a", "PT10M"),
            video("b", "PT10M"),
            video("c", "PT30M"),
            video("d", "PT5M"),
        ];
        let schedule = compute_schedule(&videos, 15.0, date("2024-01-01")).unwrap();

        assert_eq!(schedule.day_count(), 4);
        assert_eq!(ids(&schedule, "2024-01-01"), vec!["a"]);
        assert_eq!(ids(&schedule, "2024-01-02"), vec!["b"]);
        assert_eq!(ids(&schedule, "2024-01-03"), vec!["c"]);
        assert_eq!(ids(&schedule, "2024-01-04"), vec!["d"]);
    }

    #[test]
    fn test_oversized_first_video_stays_on_anchor() {
        let videos = vec![video("big", "PT1H"), video("small", "PT5M")];
        let schedule = compute_schedule(&videos, 15.0, date("2024-03-31")).unwrap();

        assert_eq!(ids(&schedule, "2024-03-31"), vec!["big"]);
        // The oversized day is closed; the next video starts a new day
        assert_eq!(ids(&schedule, "2024-04-01"), vec!["small"]);
    }

    #[test]
    fn test_exact_fit_does_not_advance() {
        let videos = vec![video("a", "PT15M"), video("b", "PT1M")];
        let schedule = compute_schedule(&videos, 15.0, date("2024-01-01")).unwrap();

        assert_eq!(ids(&schedule, "2024-01-01"), vec!["a"]);
        assert_eq!(ids(&schedule, "2024-01-02"), vec!["b"]);
    }

    #[test]
    fn test_zero_duration_videos_pack_normally() {
        let videos = vec![video("a", "PT0S"), video("b", "PT0S"), video("c", "PT15M")];
        let schedule = compute_schedule(&videos, 15.0, date("2024-01-01")).unwrap();

        assert_eq!(schedule.day_count(), 1);
        assert_eq!(ids(&schedule, "2024-01-01"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_playlist_yields_empty_schedule() {
        let schedule = compute_schedule(&[], 15.0, date("2024-01-01")).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.first_date(), None);
    }

    #[test]
    fn test_invalid_budget_is_rejected() {
        let videos = vec![video("a", "PT5M")];
        let err = compute_schedule(&videos, 0.0, date("2024-01-01")).unwrap_err();
        assert_eq!(err, PlanError::InvalidBudget(0.0));

        let err = compute_schedule(&videos, -3.0, date("2024-01-01")).unwrap_err();
        assert_eq!(err, PlanError::InvalidBudget(-3.0));

        assert!(compute_schedule(&videos, f64::NAN, date("2024-01-01")).is_err());
    }

    #[test]
    fn test_partition_preserves_order() {
        let videos: Vec<Video> = (0..20)
            .map(|i| video(&format!("v{}", i), &format!("PT{}M", (i * 7) % 23)))
            .collect();
        let schedule = compute_schedule(&videos, 25.0, date("2024-01-01")).unwrap();

        let flattened: Vec<&str> = schedule
            .days()
            .flat_map(|(_, bucket)| bucket.iter().map(|v| v.id.as_str()))
            .collect();
        let original: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(flattened, original);
    }

    #[test]
    fn test_multi_video_days_respect_budget() {
        let videos: Vec<Video> = (0..12)
            .map(|i| video(&format!("v{}", i), &format!("PT{}M{}S", 3 + i % 5, 30)))
            .collect();
        let budget = 10.0;
        let schedule = compute_schedule(&videos, budget, date("2024-01-01")).unwrap();

        for (day, bucket) in schedule.days() {
            let minutes: f64 = bucket
                .iter()
                .map(|v| f64::from(v.duration_secs()) / 60.0)
                .sum();
            if bucket.len() > 1 {
                assert!(minutes <= budget, "{} holds {}m", day, minutes);
            }
        }
    }

    #[test]
    fn test_day_statuses_cover_completed_prefix() {
        let videos = vec![
            video("a", "PT5M"),
            video("b", "PT5M"),
            video("c", "PT10M"),
            video("d", "PT10M"),
        ];
        // day1: a+b, day2: c, day3: d
        let schedule = compute_schedule(&videos, 10.0, date("2024-01-01")).unwrap();
        let statuses = schedule.day_statuses(3);

        assert_eq!(statuses.len(), 3);
        assert!(statuses[0].completed);
        assert!(statuses[1].completed);
        assert!(!statuses[2].completed);
        assert_eq!(statuses[0].minutes_learned, 10);
        assert_eq!(statuses[0].label.as_deref(), Some("2 videos"));
    }
}
