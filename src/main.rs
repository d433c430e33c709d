mod error;
mod models;
mod quiz;
mod storage;
mod ui;

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::storage::{load_bank, load_stats};
use crate::ui::App;
use crate::ui::state::{BANK_FILE, STATS_FILE};

/// Resolve and create the data directory (~/.local/share/wordmaster/).
fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(Error::DataDir)?.join("wordmaster");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn main() -> Result<()> {
    let dir = data_dir()?;

    let bank = load_bank(&dir.join(BANK_FILE))?;
    let stats = load_stats(&dir.join(STATS_FILE))?;

    let mut app = App::new(bank, stats, dir);
    ui::run(&mut app)
}
