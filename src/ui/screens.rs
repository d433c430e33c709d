//! The non-quiz screens: dictionary, add-word, statistics, leaderboard.

use crossterm::style::Stylize;

use super::console;
use super::session;
use super::state::App;
use crate::error::Result;
use crate::models::WordEntry;
use crate::storage;

/// How many entries the all-levels dictionary shows per level.
const PREVIEW_LEN: usize = 5;

/// Dictionary view: one level in full, or every level's first few entries.
pub fn show_dictionary(app: &App) -> Result<()> {
    let level = console::read_line("Enter a level (or Enter for all): ")?.to_lowercase();
    console::section("YOUR DICTIONARY");

    if level.is_empty() {
        for name in app.bank.level_names() {
            let entries = app.bank.entries(name).unwrap_or(&[]);
            println!("\n{} ({} words):", name.to_uppercase(), entries.len());
            let (shown, rest) = preview(entries);
            for entry in shown {
                println!("  • {} - {}", entry.en, entry.ru);
            }
            if rest > 0 {
                println!("  ... and {rest} more");
            }
        }
    } else if let Some(entries) = app.bank.entries(&level) {
        println!("\nLevel: {}", level.to_uppercase());
        for (i, entry) in entries.iter().enumerate() {
            println!("{}. {} - {}", i + 1, entry.en, entry.ru);
            println!("   Example: {}", entry.example);
        }
    } else {
        println!("No such level.");
    }

    console::wait_enter("\nPress Enter to continue...")
}

/// The first few entries of a level plus how many were left out.
fn preview(entries: &[WordEntry]) -> (&[WordEntry], usize) {
    let shown = PREVIEW_LEN.min(entries.len());
    (&entries[..shown], entries.len() - shown)
}

/// Interactive add-word flow: choose a level, type the three fields,
/// persist the whole bank.
pub fn add_word(app: &mut App) -> Result<()> {
    console::section("ADD A NEW WORD");
    let level = session::choose_level(&app.bank)?;

    let en = console::read_line("English word: ")?;
    let ru = console::read_line("Russian translation: ")?;
    let example = console::read_line("Example sentence: ")?;

    app.bank.add_word(&level, WordEntry::new(&en, &ru, &example));
    storage::save_bank(&app.bank_path(), &app.bank)?;

    println!(
        "\n{}",
        format!("✓ Added '{en}' to the {level} level!").green()
    );
    console::wait_enter("\nPress Enter to continue...")
}

/// Cumulative statistics plus the most recently learned words.
pub fn show_stats(app: &App) -> Result<()> {
    console::section("YOUR STATISTICS");
    println!("Games played: {}", app.stats.games_played);
    println!("Total score: {}", app.stats.total_score);
    println!("Best score: {}", app.stats.best_score);
    println!("Words learned: {}", app.stats.learned_count());

    let recent = app.stats.recently_learned(5);
    if !recent.is_empty() {
        println!("\nRecently learned words:");
        for word in recent {
            println!("  • {word}");
        }
    }

    console::wait_enter("\nPress Enter to continue...")
}

/// Best-score board and per-level learning progress.
pub fn show_leaderboard(app: &App) -> Result<()> {
    console::section("LEADERBOARD");
    println!("Your best score: {} points", app.stats.best_score);
    println!("Words learned in total: {}", app.stats.learned_count());
    println!("Games played: {}", app.stats.games_played);

    println!("\nProgress by level:");
    for name in app.bank.level_names() {
        let entries = app.bank.entries(name).unwrap_or(&[]);
        println!(
            "{}: {}/{} words ({:.1}%)",
            name.to_uppercase(),
            app.stats.learned_in_level(entries),
            entries.len(),
            app.stats.level_progress(entries)
        );
    }

    console::wait_enter("\nPress Enter to continue...")
}
