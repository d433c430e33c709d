//! Application state shared by every screen.

use std::path::PathBuf;

use crate::models::{Stats, WordBank};

/// File names inside the data directory.
pub const BANK_FILE: &str = "words.json";
pub const STATS_FILE: &str = "stats.json";

/// The two stores plus the directory they live in. Built once in `main`
/// and passed explicitly into every screen; nothing is global.
pub struct App {
    pub bank: WordBank,
    pub stats: Stats,
    pub data_dir: PathBuf,
}

impl App {
    pub fn new(bank: WordBank, stats: Stats, data_dir: PathBuf) -> Self {
        Self {
            bank,
            stats,
            data_dir,
        }
    }

    pub fn bank_path(&self) -> PathBuf {
        self.data_dir.join(BANK_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }
}
