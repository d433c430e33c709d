//! One quiz session, from level choice to the results banner.
//!
//! `quiz` prepares the questions; this module owns the interactive loop
//! around them, folds the outcome into the stats store, and persists it.

use crossterm::style::Stylize;
use rand::Rng;

use super::console;
use super::state::App;
use crate::error::Result;
use crate::models::{Stats, WordBank};
use crate::quiz::{self, Kind, Mode, Question};
use crate::storage;

/// Run one full session: choose, quiz, record, show the results.
pub fn play<R: Rng>(app: &mut App, rng: &mut R) -> Result<()> {
    console::clear_screen()?;
    console::title_banner();

    if app.bank.is_empty() {
        println!("\nThe word bank has no levels yet. Add a word first.");
        return console::wait_enter("\nPress Enter to return to the menu...");
    }

    let level = choose_level(&app.bank)?;
    let mode = choose_mode()?;
    let entries = app.bank.entries(&level).unwrap_or(&[]);

    if choice_needs_more_words(mode, entries.len()) {
        println!("\nMultiple choice needs a level with at least 4 words.");
        return console::wait_enter("\nPress Enter to return to the menu...");
    }

    println!("\nHere we go!");
    console::section(&format!("MODE: {}", mode.label()));
    if !mode.instruction().is_empty() {
        println!("{}", mode.instruction());
    }

    let questions = quiz::build_questions(mode, entries, rng);
    let score = run_questions(&questions, mode, &mut app.stats)?;

    app.stats.record_session(score);
    storage::save_stats(&app.stats_path(), &app.stats)?;

    results_banner(score, max_possible(mode, questions.len()))
}

/// Numbered level menu over the bank's levels; returns the chosen name.
pub fn choose_level(bank: &WordBank) -> Result<String> {
    console::section("CHOOSE A DIFFICULTY LEVEL:");
    let names = bank.level_names();
    for (i, name) in names.iter().enumerate() {
        let count = bank.entries(name).map_or(0, |entries| entries.len());
        println!("{}. {} ({} words)", i + 1, name.to_uppercase(), count);
    }

    let prompt = format!("\nChoose a level (1-{}): ", names.len());
    let choice = console::read_index(&prompt, names.len())?;
    Ok(names[choice - 1].to_string())
}

/// Numbered menu over the six modes.
fn choose_mode() -> Result<Mode> {
    console::section("GAME MODES:");
    for (i, mode) in Mode::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, mode.label());
    }

    let prompt = format!("\nChoose a mode (1-{}): ", Mode::ALL.len());
    let choice = console::read_index(&prompt, Mode::ALL.len())?;
    Ok(Mode::ALL[choice - 1])
}

/// Multiple choice draws the quizzed word plus three distractors from the
/// same level, so it cannot run on fewer than four entries.
fn choice_needs_more_words(mode: Mode, word_count: usize) -> bool {
    mode == Mode::Choice && word_count < 4
}

/// Drive the prepared questions and return the points earned.
fn run_questions(questions: &[Question], mode: Mode, stats: &mut Stats) -> Result<u32> {
    let mut score = 0;
    for (i, question) in questions.iter().enumerate() {
        println!("\nQuestion {}/{}", i + 1, questions.len());
        if ask(question)? {
            score += question.points();
            stats.mark_learned(&question.entry.en);
        }
        if mode == Mode::Mixed {
            console::pause();
        }
    }
    Ok(score)
}

/// Present one question, judge the answer, echo the feedback lines.
fn ask(question: &Question) -> Result<bool> {
    let entry = &question.entry;
    let correct = match &question.kind {
        Kind::TranslateToEn => {
            println!("Word: {}", entry.ru.to_uppercase());
            question.check_text(&console::read_line("Your translation: ")?)
        }
        Kind::TranslateToRu => {
            println!("Word: {}", entry.en.to_uppercase());
            question.check_text(&console::read_line("Your translation: ")?)
        }
        Kind::Choice { options, .. } => {
            println!("Word: {}", entry.en.to_uppercase());
            println!("\nOptions:");
            for (i, option) in options.iter().enumerate() {
                println!("{}. {}", i + 1, option);
            }
            question.check_choice(console::read_index("\nYour choice (1-4): ", options.len())?)
        }
        Kind::FillBlank { sentence } => {
            println!("Sentence: {sentence}");
            println!("Missing word translation: {}", entry.ru);
            question.check_text(&console::read_line("Fill in the word: ")?)
        }
        Kind::Spell => {
            println!("Translation: {}", entry.ru);
            question.check_text(&console::read_line("Spell it in English: ")?)
        }
    };

    if correct {
        println!("{}", format!("✓ Correct! {} - {}", entry.en, entry.ru).green());
    } else {
        println!(
            "{}",
            format!("✗ Wrong. The answer is: {}", revealed_answer(question)).red()
        );
    }
    match question.kind {
        Kind::FillBlank { .. } => println!("Full sentence: {}", entry.example),
        _ => println!("Example: {}", entry.example),
    }
    Ok(correct)
}

/// What the feedback line reveals on a miss.
fn revealed_answer(question: &Question) -> &str {
    match question.kind {
        Kind::TranslateToRu | Kind::Choice { .. } => &question.entry.ru,
        _ => &question.entry.en,
    }
}

/// The score ceiling shown on the results banner. Mixed rounds advertise
/// their full ten-question ceiling even when a small level cuts the round
/// short; the other modes use the number of questions actually asked.
fn max_possible(mode: Mode, asked: usize) -> f64 {
    match mode {
        Mode::Mixed => mode.max_score(mode.requested_questions()),
        _ => mode.max_score(asked),
    }
}

fn results_banner(score: u32, max: f64) -> Result<()> {
    console::section("GAME OVER!");
    println!("Your score: {score} out of {max} points");
    println!("{}", verdict(percentage(score, max)));
    console::wait_enter("\nPress Enter to return to the menu...")
}

/// Score as a share of the maximum, guarded for empty runs.
fn percentage(score: u32, max: f64) -> f64 {
    if max > 0.0 {
        score as f64 / max * 100.0
    } else {
        0.0
    }
}

/// Four feedback tiers on the final percentage.
fn verdict(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "🎉 Excellent! You are a true word master!"
    } else if percentage >= 70.0 {
        "👍 Good job!"
    } else if percentage >= 50.0 {
        "😊 Not bad, but there is room to grow!"
    } else {
        "💪 Keep practicing!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordEntry;

    fn question(kind: Kind) -> Question {
        Question {
            entry: WordEntry::new("hello", "привет", "Say hello to everyone."),
            kind,
        }
    }

    #[test]
    fn test_choice_mode_requires_four_words() {
        assert!(choice_needs_more_words(Mode::Choice, 0));
        assert!(choice_needs_more_words(Mode::Choice, 3));
        assert!(!choice_needs_more_words(Mode::Choice, 4));
        assert!(!choice_needs_more_words(Mode::Mixed, 1));
        assert!(!choice_needs_more_words(Mode::RuToEn, 2));
    }

    #[test]
    fn test_wrong_answers_reveal_the_expected_side() {
        assert_eq!(revealed_answer(&question(Kind::TranslateToEn)), "hello");
        assert_eq!(revealed_answer(&question(Kind::Spell)), "hello");
        assert_eq!(
            revealed_answer(&question(Kind::FillBlank {
                sentence: String::new()
            })),
            "hello"
        );
        assert_eq!(revealed_answer(&question(Kind::TranslateToRu)), "привет");
        assert_eq!(
            revealed_answer(&question(Kind::Choice {
                options: Vec::new(),
                correct: 0
            })),
            "привет"
        );
    }

    #[test]
    fn test_results_percentage_is_guarded_for_empty_runs() {
        assert_eq!(percentage(20, 25.0), 80.0);
        assert_eq!(percentage(0, 0.0), 0.0);
    }

    #[test]
    fn test_verdict_tiers() {
        assert_eq!(verdict(100.0), "🎉 Excellent! You are a true word master!");
        assert_eq!(verdict(90.0), "🎉 Excellent! You are a true word master!");
        assert_eq!(verdict(89.9), "👍 Good job!");
        assert_eq!(verdict(70.0), "👍 Good job!");
        assert_eq!(verdict(69.9), "😊 Not bad, but there is room to grow!");
        assert_eq!(verdict(50.0), "😊 Not bad, but there is room to grow!");
        assert_eq!(verdict(49.9), "💪 Keep practicing!");
        assert_eq!(verdict(0.0), "💪 Keep practicing!");
    }

    #[test]
    fn test_mixed_banner_uses_the_full_requested_count() {
        assert_eq!(max_possible(Mode::Mixed, 3), 25.0);
        assert_eq!(max_possible(Mode::Dictation, 3), 9.0);
        assert_eq!(max_possible(Mode::RuToEn, 8), 16.0);
        assert_eq!(max_possible(Mode::Choice, 0), 0.0);
    }
}
