use crate::error::PlanError;
use crate::playlist::models::Playlist;
use serde::Serialize;

/// Derived progress figures over a playlist. Recomputed on demand;
/// only the completed count itself is persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressSummary {
    pub completed_videos: u32,
    pub total_videos: u32,
    pub percent: u32,
    pub remaining_videos: u32,
    pub remaining_secs: u32,
}

/// Summarize progress after `completed` videos of the playlist have
/// been watched. Remaining time is estimated proportionally from the
/// playlist total rather than summed per video, since completion order
/// is not tracked.
pub fn summarize(playlist: &Playlist, completed: u32) -> Result<ProgressSummary, PlanError> {
    let total = playlist.total_videos();
    if completed > total {
        return Err(PlanError::InvalidProgress { completed, total });
    }

    let remaining = total - completed;
    let total_secs = playlist.total_duration_secs();

    let (percent, remaining_secs) = if total == 0 {
        (0, 0)
    } else {
        (
            (f64::from(completed) / f64::from(total) * 100.0).round() as u32,
            (f64::from(remaining) / f64::from(total) * f64::from(total_secs)).round() as u32,
        )
    };

    Ok(ProgressSummary {
        completed_videos: completed,
        total_videos: total,
        percent,
        remaining_videos: remaining,
        remaining_secs,
    })
}
