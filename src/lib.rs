pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod plan;
pub mod platform;
pub mod playlist;
pub mod state;
pub mod utils;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
