use crate::plan::duration::format_duration;
use crate::state::SavedPlan;
use pulldown_cmark::{Event, Options, Parser};

// # Watch plan: Title
// **Daily budget:** ... | **Generated:** ... | **Days:** ...
//
// ## 2024-01-01
// - [ ] Video title (2m 30s)

/// Render a saved plan as a Markdown checklist grouped by date. The
/// first `completed_videos` boxes come out pre-checked so an export
/// reflects current progress.
pub fn plan_to_markdown(playlist_title: &str, plan: &SavedPlan, completed_videos: u32) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Watch plan: {}\n\n", playlist_title));
    md.push_str(&format!(
        "**Daily budget:** {} min | **Generated:** {} | **Days:** {}\n",
        plan.daily_minutes,
        plan.generated_on.format("%Y-%m-%d"),
        plan.days.len()
    ));

    let mut seen = 0u32;
    for day in &plan.days {
        md.push_str(&format!("\n## {}\n\n", day.date.format("%Y-%m-%d")));
        for video in &day.videos {
            seen += 1;
            let mark = if seen <= completed_videos { 'x' } else { ' ' };
            md.push_str(&format!(
                "- [{}] {} ({})\n",
                mark,
                video.title,
                format_duration(video.duration_secs())
            ));
        }
    }

    md
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedProgress {
    pub checked: u32,
    pub total: u32,
}

/// Count task-list checkboxes in an exported plan. Checked boxes are
/// watched videos; callers validate the counts against the stored
/// playlist.
pub fn parse_progress(content: &str) -> ParsedProgress {
    let parser = Parser::new_ext(content, Options::ENABLE_TASKLISTS);

    let mut checked = 0u32;
    let mut total = 0u32;
    for event in parser {
        if let Event::TaskListMarker(is_checked) = event {
            total += 1;
            if is_checked {
                checked += 1;
            }
        }
    }

    ParsedProgress { checked, total }
}
