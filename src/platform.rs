//! Cross-platform resolution of the directory holding state.json.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Resolve the state directory, falling back through:
/// 1. explicit override (testing/CI)
/// 2. `~/.watchplan`
/// 3. the platform data directory (XDG on Linux, AppData on Windows)
/// 4. the current working directory
///
/// Each candidate is checked for write access before being selected.
pub fn get_state_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        ensure_writable(dir)?;
        return Ok(dir.clone());
    }

    if let Some(home) = home::home_dir() {
        let dir = home.join(".watchplan");
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
        eprintln!(
            "Warning: Cannot write to {}. Trying fallback locations.",
            dir.display()
        );
    }

    if let Some(data) = dirs::data_local_dir() {
        let dir = data.join("watchplan");
        if ensure_writable(&dir).is_ok() {
            return Ok(dir);
        }
    }

    let dir = PathBuf::from(".watchplan");
    ensure_writable(&dir).context(
        "Cannot create state directory in any location. \
         Check file permissions or set state_dir_override in config.",
    )?;
    Ok(dir)
}

/// Create `dir` if needed and verify the current user can write to it.
pub fn ensure_writable(dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let probe = dir.join(".write_test");
    fs::write(&probe, b"test")
        .with_context(|| format!("Directory {} is not writable", dir.display()))?;
    // Removal can fail while a scanner holds the probe open; harmless
    let _ = fs::remove_file(&probe);

    Ok(())
}

/// Canonical lock-file and state-file paths, honoring the config
/// override.
pub fn state_paths(state_dir_override: Option<&PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let state_dir = get_state_dir(state_dir_override)?;
    Ok((state_dir.join("state.lock"), state_dir.join("state.json")))
}
