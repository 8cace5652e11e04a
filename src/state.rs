use crate::calendar::grid::DayStatus;
use crate::config::Config;
use crate::plan::scheduler::Schedule;
use crate::playlist::models::{Playlist, Video};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Everything the tool remembers between runs: the loaded playlist
/// snapshot, the watch-progress counter and the generated plan.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct State {
    pub version: String,
    pub playlist: Option<Playlist>,
    #[serde(default)]
    pub completed_videos: u32,
    #[serde(default)]
    pub plan: Option<SavedPlan>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            playlist: None,
            completed_videos: 0,
            plan: None,
        }
    }
}

/// A materialized schedule, persisted with the inputs that produced it
/// so it can be re-displayed without recomputation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SavedPlan {
    pub daily_minutes: f64,
    pub generated_on: NaiveDate,
    pub days: Vec<PlanDay>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanDay {
    pub date: NaiveDate,
    pub videos: Vec<Video>,
}

impl SavedPlan {
    pub fn from_schedule(schedule: &Schedule, daily_minutes: f64, generated_on: NaiveDate) -> Self {
        Self {
            daily_minutes,
            generated_on,
            days: schedule
                .days()
                .map(|(date, videos)| PlanDay {
                    date,
                    videos: videos.iter().map(|v| (*v).clone()).collect(),
                })
                .collect(),
        }
    }

    /// Re-borrow the stored days as a `Schedule` so display logic has
    /// a single home.
    pub fn to_schedule(&self) -> Schedule<'_> {
        Schedule::from_days(
            self.days
                .iter()
                .map(|day| (day.date, day.videos.iter().collect())),
        )
    }

    pub fn day_statuses(&self, completed_videos: u32) -> Vec<DayStatus> {
        self.to_schedule().day_statuses(completed_videos)
    }

    pub fn videos_for(&self, date: NaiveDate) -> Option<&[Video]> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.videos.as_slice())
    }
}

impl State {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).context("Failed to read state file")?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).context("Failed to parse state JSON")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize state")?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: temp file then rename, so a crash mid-write
        // never leaves a truncated state file behind
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

pub fn with_state_lock<F, R>(lock_path: &Path, state_path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&mut State) -> Result<R>,
{
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(lock_path)
        .context("Failed to open lock file")?;

    file.lock_exclusive().context("Failed to acquire lock")?;

    let mut state = State::load(state_path)?;
    let result = f(&mut state);

    // Persist only when the closure succeeded
    if result.is_ok() {
        state.save(state_path)?;
    }

    FileExt::unlock(&file).context("Failed to unlock")?;

    result
}

/// Read the current state without taking the lock (display-only paths).
pub fn read(config: &Config) -> Result<State> {
    let (_lock, state_path) = crate::platform::state_paths(config.state.state_dir_override.as_ref())?;
    State::load(&state_path)
}

/// Run a read-modify-write cycle under the state lock.
pub fn update<F, R>(config: &Config, f: F) -> Result<R>
where
    F: FnOnce(&mut State) -> Result<R>,
{
    let (lock_path, state_path) =
        crate::platform::state_paths(config.state.state_dir_override.as_ref())?;
    with_state_lock(&lock_path, &state_path, f)
}
