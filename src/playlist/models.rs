use crate::plan::duration::parse_duration;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry of a playlist export. `duration` keeps the raw broadcast
/// token exactly as the metadata API emitted it; seconds are derived
/// on demand through the codec.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub duration: String,
}

impl Video {
    pub fn duration_secs(&self) -> u32 {
        parse_duration(&self.duration)
    }
}

/// A playlist snapshot as produced by the (external) metadata fetcher:
/// a title plus the ordered video list.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Playlist {
    pub title: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Playlist {
    /// Read a playlist export file (JSON).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read playlist export: {}", path.display()))?;
        serde_json::from_str(&content).context("Failed to parse playlist JSON")
    }

    pub fn total_videos(&self) -> u32 {
        self.videos.len() as u32
    }

    pub fn total_duration_secs(&self) -> u32 {
        self.videos
            .iter()
            .fold(0u32, |total, video| total.saturating_add(video.duration_secs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_playlist() -> Playlist {
        serde_json::from_value(json!({
            "title": "Rust from scratch",
            "videos": [
                { "id": "a1", "title": "Intro", "duration": "PT2M30S" },
                { "id": "b2", "title": "Ownership", "duration": "PT1H" },
                { "id": "c3", "title": "Outro", "duration": "PT45S" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_export() {
        let playlist = sample_playlist();
        assert_eq!(playlist.title, "Rust from scratch");
        assert_eq!(playlist.total_videos(), 3);
        assert_eq!(playlist.videos[1].duration_secs(), 3600);
    }

    #[test]
    fn test_total_duration_sums_tokens() {
        assert_eq!(sample_playlist().total_duration_secs(), 150 + 3600 + 45);
    }

    #[test]
    fn test_malformed_duration_counts_as_zero() {
        let playlist: Playlist = serde_json::from_value(json!({
            "title": "Partial metadata",
            "videos": [
                { "id": "a", "title": "Broken", "duration": "n/a" },
                { "id": "b", "title": "Fine", "duration": "PT10M" }
            ]
        }))
        .unwrap();
        assert_eq!(playlist.total_duration_secs(), 600);
    }

    #[test]
    fn test_videos_field_defaults_to_empty() {
        let playlist: Playlist = serde_json::from_value(json!({ "title": "Empty" })).unwrap();
        assert!(playlist.videos.is_empty());
        assert_eq!(playlist.total_duration_secs(), 0);
    }
}
