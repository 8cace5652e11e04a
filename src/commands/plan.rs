use crate::config::Config;
use crate::plan::duration::format_duration;
use crate::plan::scheduler::compute_schedule;
use crate::state::{self, SavedPlan};
use crate::utils::markdown;
use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use termtree::Tree;

/// Compute the daily schedule from the stored playlist and persist it
/// (unless `--dry-run`).
pub fn generate(
    config: &Config,
    daily_minutes: Option<f64>,
    start: Option<String>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let budget = daily_minutes.unwrap_or(config.schedule.daily_minutes);
    let anchor = match start {
        Some(s) => super::parse_date(&s)?,
        None => Local::now().date_naive(),
    };

    let st = state::read(config)?;
    let Some(playlist) = st.playlist else {
        bail!("No playlist loaded. Run 'wplan playlist load <file>' first.");
    };

    let schedule = compute_schedule(&playlist.videos, budget, anchor)?;
    if schedule.is_empty() {
        eprintln!("⚠ Playlist has no videos; the plan is empty.");
    }
    let plan = SavedPlan::from_schedule(&schedule, budget, anchor);

    if !dry_run {
        let saved = plan.clone();
        state::update(config, move |st| {
            st.plan = Some(saved);
            Ok(())
        })?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => {
            print_plan_tree(&playlist.title, &plan);
            println!("Estimated days required: {}", plan.days.len());
            if dry_run {
                println!("✓ [DRY RUN] Plan not saved");
            } else {
                println!("✓ Plan saved");
            }
        }
    }

    Ok(())
}

/// Show the saved plan, or a single day of it.
pub fn show(config: &Config, date: Option<String>, format: OutputFormat) -> Result<()> {
    let st = state::read(config)?;
    let Some(plan) = st.plan else {
        bail!("No plan generated yet. Run 'wplan plan generate' first.");
    };

    match date {
        Some(s) => {
            let day = super::parse_date(&s)?;
            let Some(videos) = plan.videos_for(day) else {
                println!("No videos scheduled for {}", day.format("%Y-%m-%d"));
                return Ok(());
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(videos)?),
                OutputFormat::Text => {
                    println!("Videos for {}:", day.format("%Y-%m-%d"));
                    for video in videos {
                        println!(
                            "  {} ({})",
                            video.title,
                            format_duration(video.duration_secs())
                        );
                    }
                }
            }
        }
        None => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            OutputFormat::Text => {
                let title = st
                    .playlist
                    .map(|p| p.title)
                    .unwrap_or_else(|| "playlist".to_string());
                print_plan_tree(&title, &plan);
                println!("Estimated days required: {}", plan.days.len());
            }
        },
    }

    Ok(())
}

/// Export the saved plan as a Markdown checklist.
pub fn export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let st = state::read(config)?;
    let Some(plan) = st.plan else {
        bail!("No plan generated yet. Run 'wplan plan generate' first.");
    };
    let title = st
        .playlist
        .as_ref()
        .map(|p| p.title.as_str())
        .unwrap_or("playlist");

    let md = markdown::plan_to_markdown(title, &plan, st.completed_videos);

    match output {
        Some(path) => {
            fs::write(&path, md)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Plan exported to {}", path.display());
        }
        None => print!("{}", md),
    }

    Ok(())
}

/// Read back a checked-off Markdown plan and update the completed
/// count accordingly.
pub fn import(config: &Config, file: PathBuf, dry_run: bool) -> Result<()> {
    let content = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let parsed = markdown::parse_progress(&content);
    if parsed.total == 0 {
        bail!("No checklist items found in {}", file.display());
    }

    let st = state::read(config)?;
    let Some(playlist) = st.playlist.as_ref() else {
        bail!("No playlist loaded. Run 'wplan playlist load <file>' first.");
    };
    if parsed.total != playlist.total_videos() {
        eprintln!(
            "⚠ Checklist has {} items but the playlist has {} videos.",
            parsed.total,
            playlist.total_videos()
        );
    }
    let completed = parsed.checked.min(playlist.total_videos());

    if dry_run {
        println!("✓ [DRY RUN] Would set completed videos to {}", completed);
        return Ok(());
    }

    state::update(config, |st| {
        st.completed_videos = completed;
        Ok(())
    })?;
    println!("✓ Completed videos set to {}", completed);

    Ok(())
}

fn print_plan_tree(title: &str, plan: &SavedPlan) {
    let schedule = plan.to_schedule();
    let mut root = Tree::new(format!(
        "Watch plan: {} ({} min/day)",
        title, plan.daily_minutes
    ));
    for (date, videos) in schedule.days() {
        let mut day = Tree::new(format!(
            "{} ({} videos, {}m)",
            date.format("%Y-%m-%d"),
            videos.len(),
            schedule.minutes_for(date)
        ));
        for video in videos {
            day.push(Tree::new(format!(
                "{} ({})",
                video.title,
                format_duration(video.duration_secs())
            )));
        }
        root.push(day);
    }
    println!("{}", root);
}
