use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use watchplan::commands;
use watchplan::config;
use watchplan::OutputFormat;

#[derive(Parser)]
#[command(name = "wplan")]
#[command(about = "Daily watch-time planner for learning playlists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Playlist snapshot operations
    Playlist(PlaylistArgs),
    /// Generate and inspect the daily watch plan
    Plan(PlanArgs),
    /// Track watch progress
    Progress(ProgressArgs),
    /// Render the plan as a month calendar
    Calendar {
        #[arg(long, help = "Month to render (YYYY-MM, defaults to the first scheduled month)")]
        month: Option<String>,
        #[arg(long, help = "Override today's date (YYYY-MM-DD)")]
        today: Option<String>,
    },
    /// List configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct PlaylistArgs {
    #[command(subcommand)]
    action: PlaylistAction,
}

#[derive(Subcommand)]
enum PlaylistAction {
    /// Load a playlist export file (JSON)
    Load {
        #[arg(help = "Path to the playlist export")]
        file: PathBuf,
    },
    /// Show the stored playlist summary
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Extract the playlist ID from a pasted URL
    Id {
        #[arg(help = "Playlist or watch URL")]
        url: String,
    },
}

#[derive(Args)]
struct PlanArgs {
    #[command(subcommand)]
    action: PlanAction,
}

#[derive(Subcommand)]
enum PlanAction {
    /// Compute the daily schedule from the stored playlist
    Generate {
        #[arg(long, help = "Daily watch budget in minutes (defaults to config)")]
        daily_minutes: Option<f64>,
        #[arg(long, help = "First day of the plan (YYYY-MM-DD, defaults to today)")]
        start: Option<String>,
        #[arg(long, help = "Preview without saving")]
        dry_run: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the saved plan
    Show {
        #[arg(long, help = "Show a single day (YYYY-MM-DD)")]
        date: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Export the plan as a Markdown checklist
    Export {
        #[arg(long, help = "Output file path (defaults to stdout)")]
        output: Option<PathBuf>,
    },
    /// Update progress from a checked-off Markdown plan
    Import {
        #[arg(help = "Path to the checked-off export")]
        file: PathBuf,
        #[arg(long, help = "Preview without updating progress")]
        dry_run: bool,
    },
}

#[derive(Args)]
struct ProgressArgs {
    #[command(subcommand)]
    action: ProgressAction,
}

#[derive(Subcommand)]
enum ProgressAction {
    /// Record how many videos are watched
    Set {
        #[arg(help = "Completed video count")]
        count: u32,
    },
    /// Show the progress summary
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load()?;

    match &cli.command {
        Commands::Playlist(args) => match &args.action {
            PlaylistAction::Load { file } => {
                commands::playlist::load(&config, file.clone())?;
            }
            PlaylistAction::Show { format } => {
                commands::playlist::show(&config, *format)?;
            }
            PlaylistAction::Id { url } => {
                commands::playlist::id(url)?;
            }
        },
        Commands::Plan(args) => match &args.action {
            PlanAction::Generate {
                daily_minutes,
                start,
                dry_run,
                format,
            } => {
                commands::plan::generate(&config, *daily_minutes, start.clone(), *dry_run, *format)?;
            }
            PlanAction::Show { date, format } => {
                commands::plan::show(&config, date.clone(), *format)?;
            }
            PlanAction::Export { output } => {
                commands::plan::export(&config, output.clone())?;
            }
            PlanAction::Import { file, dry_run } => {
                commands::plan::import(&config, file.clone(), *dry_run)?;
            }
        },
        Commands::Progress(args) => match &args.action {
            ProgressAction::Set { count } => {
                commands::progress::set(&config, *count)?;
            }
            ProgressAction::Show { format } => {
                commands::progress::show(&config, *format)?;
            }
        },
        Commands::Calendar { month, today } => {
            commands::calendar::show(&config, month.clone(), today.clone())?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
