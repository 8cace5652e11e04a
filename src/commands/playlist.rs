use crate::config::Config;
use crate::plan::duration::format_duration;
use crate::playlist::models::Playlist;
use crate::playlist::url::extract_playlist_id;
use crate::state;
use crate::OutputFormat;
use anyhow::{bail, Result};
use serde_json::json;
use std::path::PathBuf;

/// Load a playlist export file and store its snapshot in state.
pub fn load(config: &Config, file: PathBuf) -> Result<()> {
    let playlist = Playlist::load(&file)?;

    if playlist.videos.is_empty() {
        eprintln!("⚠ Playlist '{}' has no videos.", playlist.title);
    }

    let stored = playlist.clone();
    state::update(config, move |st| {
        st.playlist = Some(stored);
        // A new playlist invalidates the old progress and plan
        st.completed_videos = 0;
        st.plan = None;
        Ok(())
    })?;

    println!("✓ Playlist loaded");
    print_summary(&playlist);

    Ok(())
}

pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let st = state::read(config)?;
    let Some(playlist) = st.playlist else {
        bail!("No playlist loaded. Run 'wplan playlist load <file>' first.");
    };

    match format {
        OutputFormat::Json => {
            let summary = json!({
                "title": playlist.title,
                "totalVideos": playlist.total_videos(),
                "totalDurationSecs": playlist.total_duration_secs(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_summary(&playlist),
    }

    Ok(())
}

/// Print the playlist ID embedded in a pasted URL.
pub fn id(url: &str) -> Result<()> {
    match extract_playlist_id(url) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => bail!("No playlist ID found in URL: {}", url),
    }
}

fn print_summary(playlist: &Playlist) {
    println!("  Title: {}", playlist.title);
    println!("  Videos: {}", playlist.total_videos());
    println!(
        "  Total duration: {}",
        format_duration(playlist.total_duration_secs())
    );
}
