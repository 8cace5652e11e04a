use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// Default daily watch budget in minutes, used when
    /// `plan generate` is run without `--daily-minutes`.
    pub daily_minutes: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { daily_minutes: 20.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for the state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.daily_minutes > 0.0) {
            anyhow::bail!(
                "schedule.daily_minutes must be greater than 0 (got {})",
                self.daily_minutes
            );
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".watchplan");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    // Missing config is not an error; every key has a default
    let config = if config_path.exists() {
        load_from_path(&config_path)?
    } else {
        Config::default()
    };

    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}
