use crate::config::Config;
use crate::plan::duration::format_duration;
use crate::plan::progress::summarize;
use crate::state;
use crate::OutputFormat;
use anyhow::{bail, Result};

/// Record how many videos of the playlist have been watched.
pub fn set(config: &Config, count: u32) -> Result<()> {
    let summary = state::update(config, |st| {
        let Some(playlist) = st.playlist.as_ref() else {
            anyhow::bail!("No playlist loaded. Run 'wplan playlist load <file>' first.");
        };
        let summary = summarize(playlist, count)?;
        st.completed_videos = count;
        Ok(summary)
    })?;

    println!(
        "✓ Progress updated: {}/{} videos ({}%)",
        summary.completed_videos, summary.total_videos, summary.percent
    );

    Ok(())
}

pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let st = state::read(config)?;
    let Some(playlist) = st.playlist.as_ref() else {
        bail!("No playlist loaded. Run 'wplan playlist load <file>' first.");
    };
    let summary = summarize(playlist, st.completed_videos)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            println!(
                "Progress: {}/{} videos ({}%)",
                summary.completed_videos, summary.total_videos, summary.percent
            );
            println!("  Videos left: {}", summary.remaining_videos);
            println!("  Time left: {}", format_duration(summary.remaining_secs));
        }
    }

    Ok(())
}
