use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Stats, WordBank};

/// Load the word bank, synthesizing and persisting the starter dictionary
/// when the file does not exist yet.
pub fn load_bank(path: &Path) -> Result<WordBank> {
    if !path.exists() {
        println!("No word bank at {}, creating a starter dictionary...", path.display());
        let bank = WordBank::starter();
        save_bank(path, &bank)?;
        return Ok(bank);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Overwrite the word bank file with pretty-printed JSON.
pub fn save_bank(path: &Path, bank: &WordBank) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(bank)?)?;
    Ok(())
}

/// Load the statistics, persisting a zero state when the file does not exist.
pub fn load_stats(path: &Path) -> Result<Stats> {
    if !path.exists() {
        let stats = Stats::default();
        save_stats(path, &stats)?;
        return Ok(stats);
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_stats(path: &Path, stats: &Stats) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(stats)?)?;
    Ok(())
}
