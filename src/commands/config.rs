use crate::config::{self, Config};
use anyhow::{Context, Result};
use toml::Value;

pub fn list(config: &Config) -> Result<()> {
    // Config derives Serialize, so pretty TOML is the natural listing
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Support dot notation: "schedule.daily_minutes"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config::config_path()?;
    let mut root: Value = if path.exists() {
        let raw = std::fs::read_to_string(&path).context("Failed to read config file")?;
        raw.parse().context("Failed to parse config file")?
    } else {
        Value::Table(Default::default())
    };

    let parts: Vec<&str> = key.split('.').collect();
    let (last, parents) = parts.split_last().context("Empty key")?;

    let mut current = &mut root;
    for part in parents {
        let table = current
            .as_table_mut()
            .with_context(|| format!("Key does not address a table: {}", part))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| Value::Table(Default::default()));
    }
    let table = current
        .as_table_mut()
        .with_context(|| format!("Key does not address a table: {}", key))?;
    table.insert(last.to_string(), parse_value(value));

    // Round-trip through the typed config so bad keys and values are
    // rejected before anything is written
    let config: Config = root.try_into().context("Resulting config is invalid")?;
    config.validate()?;

    config::save_to_path(&config, &path)?;
    println!("✓ {} = {}", key, value);

    Ok(())
}

/// Interpret a raw CLI value as bool, integer, float, or string.
fn parse_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Boolean(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Float(f);
    }
    Value::String(raw.to_string())
}
