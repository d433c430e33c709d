use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One vocabulary word: English form, Russian translation(s), example sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub en: String,
    /// May hold several comma-separated synonyms ("привет, здравствуйте").
    pub ru: String,
    pub example: String,
}

impl WordEntry {
    pub fn new(en: &str, ru: &str, example: &str) -> Self {
        Self {
            en: en.to_string(),
            ru: ru.to_string(),
            example: example.to_string(),
        }
    }

    /// Case-insensitive match against the English form.
    pub fn matches_en(&self, answer: &str) -> bool {
        normalize(answer) == normalize(&self.en)
    }

    /// Case-insensitive match against any comma-separated Russian alternative.
    pub fn matches_ru(&self, answer: &str) -> bool {
        let answer = normalize(answer);
        self.ru.split(',').any(|alt| normalize(alt) == answer)
    }

    /// The example sentence with the first occurrence of the word blanked out.
    pub fn gapped_example(&self) -> String {
        self.example.replacen(&self.en, "______", 1)
    }
}

/// Trimmed, Unicode-lowercased form used for every answer comparison.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The word bank: difficulty level name → ordered list of entries.
///
/// Serializes transparently, so the file is exactly a JSON object keyed by
/// level name. The BTreeMap keeps level listings in a stable name order
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    pub levels: BTreeMap<String, Vec<WordEntry>>,
}

impl WordBank {
    /// Starter dictionary written on first run.
    pub fn starter() -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(
            "beginner".to_string(),
            vec![
                WordEntry::new("hello", "привет", "Hello, how are you?"),
                WordEntry::new("goodbye", "до свидания", "Goodbye, see you tomorrow!"),
                WordEntry::new("thank you", "спасибо", "Thank you for your help."),
            ],
        );
        Self { levels }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level names in listing order.
    pub fn level_names(&self) -> Vec<&str> {
        self.levels.keys().map(String::as_str).collect()
    }

    pub fn entries(&self, level: &str) -> Option<&[WordEntry]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Append a new entry to a level. The caller persists the bank afterwards.
    pub fn add_word(&mut self, level: &str, entry: WordEntry) {
        self.levels.entry(level.to_string()).or_default().push(entry);
    }
}

/// Cumulative player statistics, persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub total_score: u32,
    pub best_score: u32,
    /// Every English key ever answered correctly, in first-learned order.
    #[serde(default)]
    pub words_learned: Vec<String>,
}

impl Stats {
    /// Fold one finished session into the counters.
    pub fn record_session(&mut self, score: u32) {
        self.games_played += 1;
        self.total_score += score;
        if score > self.best_score {
            self.best_score = score;
        }
    }

    /// Remember a word as learned. Keeps first-learned order, ignores repeats.
    pub fn mark_learned(&mut self, en: &str) {
        if !self.is_learned(en) {
            self.words_learned.push(en.to_string());
        }
    }

    pub fn is_learned(&self, en: &str) -> bool {
        self.words_learned.iter().any(|w| w == en)
    }

    pub fn learned_count(&self) -> usize {
        self.words_learned.len()
    }

    /// The most recently learned words, oldest first.
    pub fn recently_learned(&self, count: usize) -> &[String] {
        let start = self.words_learned.len().saturating_sub(count);
        &self.words_learned[start..]
    }

    /// How many of the given entries have been answered correctly, ever.
    pub fn learned_in_level(&self, entries: &[WordEntry]) -> usize {
        entries.iter().filter(|e| self.is_learned(&e.en)).count()
    }

    /// Share of a level's words learned, as a percentage.
    pub fn level_progress(&self, entries: &[WordEntry]) -> f64 {
        if entries.is_empty() {
            0.0
        } else {
            self.learned_in_level(entries) as f64 / entries.len() as f64 * 100.0
        }
    }
}
