//! Quiz construction and scoring rules.
//!
//! Pure logic, no I/O: the session controller hands over a level's entries
//! and a random source and gets back the prepared question list. Tests drive
//! the same functions with a seeded generator.

use rand::Rng;
use rand::seq::{SliceRandom, index};

use crate::models::WordEntry;

/// The six quiz modes offered by the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    RuToEn,
    EnToRu,
    Choice,
    FillBlank,
    Dictation,
    Mixed,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::RuToEn,
        Mode::EnToRu,
        Mode::Choice,
        Mode::FillBlank,
        Mode::Dictation,
        Mode::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::RuToEn => "Quick translation (Russian → English)",
            Mode::EnToRu => "Quick translation (English → Russian)",
            Mode::Choice => "Pick the right translation",
            Mode::FillBlank => "Fill the gap in a sentence",
            Mode::Dictation => "Dictation (type the English word)",
            Mode::Mixed => "Mixed round (every kind of task)",
        }
    }

    /// One-line instruction printed under the round banner.
    pub fn instruction(self) -> &'static str {
        match self {
            Mode::RuToEn => "Type the English translation of each word.",
            Mode::EnToRu => "Type the Russian translation of each word.",
            Mode::Choice => "Choose the correct translation of each word.",
            Mode::FillBlank => "Type the word missing from each sentence.",
            Mode::Dictation => "Write each word from its translation alone.",
            Mode::Mixed => "",
        }
    }

    /// How many questions a session asks for, before clamping to level size.
    pub fn requested_questions(self) -> usize {
        match self {
            Mode::Mixed => 10,
            _ => 8,
        }
    }

    /// The highest score a run of `count` questions can reach. Mixed rounds
    /// use the 2.5 average of their per-kind values.
    pub fn max_score(self, count: usize) -> f64 {
        match self {
            Mode::Choice => count as f64,
            Mode::Dictation => 3.0 * count as f64,
            Mode::Mixed => 2.5 * count as f64,
            _ => 2.0 * count as f64,
        }
    }
}

/// The interaction shape of a single question.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// Show the Russian word, expect the English form typed back.
    TranslateToEn,
    /// Show the English word, accept any Russian alternative.
    TranslateToRu,
    /// Show the English word and four numbered translations.
    Choice { options: Vec<String>, correct: usize },
    /// Show the gapped example plus the translation hint, expect the word.
    FillBlank { sentence: String },
    /// Show only the translation, expect the English spelling.
    Spell,
}

/// One prepared interaction: the word, how to present it, what it pays.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub entry: WordEntry,
    pub kind: Kind,
}

impl Question {
    /// Points a correct answer earns.
    pub fn points(&self) -> u32 {
        match self.kind {
            Kind::Choice { .. } => 1,
            Kind::Spell => 3,
            _ => 2,
        }
    }

    /// Judge a free-text answer. Choice questions are judged by index.
    pub fn check_text(&self, answer: &str) -> bool {
        match &self.kind {
            Kind::TranslateToRu => self.entry.matches_ru(answer),
            Kind::Choice { .. } => false,
            _ => self.entry.matches_en(answer),
        }
    }

    /// Judge a one-based menu selection for a choice question.
    pub fn check_choice(&self, selected: usize) -> bool {
        matches!(&self.kind, Kind::Choice { correct, .. } if selected == correct + 1)
    }
}

/// Pick `requested` words without replacement (clamped to the level size)
/// and prepare one question per word. Choice mode needs a level of at least
/// four entries; the session controller guards that before dispatching.
pub fn build_questions<R: Rng>(mode: Mode, entries: &[WordEntry], rng: &mut R) -> Vec<Question> {
    let count = mode.requested_questions().min(entries.len());
    index::sample(rng, entries.len(), count)
        .into_iter()
        .map(|word| {
            let kind = match mode {
                Mode::RuToEn => Kind::TranslateToEn,
                Mode::EnToRu => Kind::TranslateToRu,
                Mode::Choice => choice_kind(entries, word, rng),
                Mode::FillBlank => Kind::FillBlank {
                    sentence: entries[word].gapped_example(),
                },
                Mode::Dictation => Kind::Spell,
                Mode::Mixed => mixed_kind(&entries[word], rng),
            };
            Question {
                entry: entries[word].clone(),
                kind,
            }
        })
        .collect()
}

/// Three distractor entries drawn without replacement from the rest of the
/// level, shuffled in with the right translation.
fn choice_kind<R: Rng>(entries: &[WordEntry], word: usize, rng: &mut R) -> Kind {
    // Sample positions from the slice with the quizzed word skipped, then
    // map them back past it.
    let mut option_indices: Vec<usize> = index::sample(rng, entries.len() - 1, 3)
        .into_iter()
        .map(|i| if i >= word { i + 1 } else { i })
        .collect();
    option_indices.push(word);
    option_indices.shuffle(rng);

    let correct = option_indices.iter().position(|&i| i == word).unwrap();
    let options = option_indices
        .into_iter()
        .map(|i| entries[i].ru.clone())
        .collect();
    Kind::Choice { options, correct }
}

/// Mixed rounds draw one of four task kinds per question, uniformly.
fn mixed_kind<R: Rng>(entry: &WordEntry, rng: &mut R) -> Kind {
    match rng.gen_range(0..4) {
        0 => Kind::TranslateToEn,
        1 => Kind::TranslateToRu,
        2 => Kind::FillBlank {
            sentence: entry.gapped_example(),
        },
        _ => Kind::Spell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeSet;

    fn level() -> Vec<WordEntry> {
        vec![
            WordEntry::new("hello", "привет, здравствуйте", "Say hello to your neighbours."),
            WordEntry::new("goodbye", "до свидания", "They said goodbye at the station."),
            WordEntry::new("cat", "кошка", "The cat sleeps on the cat tree."),
            WordEntry::new("dog", "собака", "The dog barks."),
            WordEntry::new("house", "дом", "The house is warm."),
            WordEntry::new("water", "вода", "I drink water."),
        ]
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_sessions_request_ten_mixed_questions_and_eight_otherwise() {
        assert_eq!(Mode::Mixed.requested_questions(), 10);
        for mode in Mode::ALL.into_iter().filter(|mode| *mode != Mode::Mixed) {
            assert_eq!(mode.requested_questions(), 8, "mode {mode:?}");
        }
    }

    #[test]
    fn test_requested_count_is_clamped_to_level_size() {
        let entries = level();
        let questions = build_questions(Mode::RuToEn, &entries, &mut rng(1));
        assert_eq!(questions.len(), 6);

        let two = &entries[..2];
        assert_eq!(build_questions(Mode::Dictation, two, &mut rng(1)).len(), 2);
        assert_eq!(build_questions(Mode::Mixed, &entries, &mut rng(1)).len(), 6);
    }

    #[test]
    fn test_no_word_repeats_within_a_session() {
        let entries = level();
        for seed in 0..20 {
            let questions = build_questions(Mode::Mixed, &entries, &mut rng(seed));
            let seen: BTreeSet<&str> = questions.iter().map(|q| q.entry.en.as_str()).collect();
            assert_eq!(seen.len(), questions.len());
        }
    }

    #[test]
    fn test_fixed_modes_carry_their_point_value() {
        let entries = level();
        let expectations = [
            (Mode::RuToEn, 2),
            (Mode::EnToRu, 2),
            (Mode::Choice, 1),
            (Mode::FillBlank, 2),
            (Mode::Dictation, 3),
        ];
        for (mode, points) in expectations {
            for question in build_questions(mode, &entries, &mut rng(7)) {
                assert_eq!(question.points(), points, "mode {mode:?}");
            }
        }
    }

    #[test]
    fn test_run_score_is_correct_count_times_value() {
        let entries = level();
        let questions = build_questions(Mode::Dictation, &entries, &mut rng(3));

        // Answer every other question correctly, the rest with nonsense.
        let mut score = 0;
        let mut correct = 0;
        for (i, question) in questions.iter().enumerate() {
            let answer = if i % 2 == 0 {
                question.entry.en.to_uppercase()
            } else {
                "nonsense".to_string()
            };
            if question.check_text(&answer) {
                score += question.points();
                correct += 1;
            }
        }
        assert_eq!(correct, 3);
        assert_eq!(score, correct * 3);
    }

    #[test]
    fn test_choice_offers_four_distinct_options_with_one_match() {
        let entries: Vec<WordEntry> = level().into_iter().take(4).collect();
        for seed in 0..20 {
            for question in build_questions(Mode::Choice, &entries, &mut rng(seed)) {
                let Kind::Choice { options, correct } = &question.kind else {
                    panic!("choice mode must build choice questions");
                };
                assert_eq!(options.len(), 4);
                let distinct: BTreeSet<&String> = options.iter().collect();
                assert_eq!(distinct.len(), 4);
                assert_eq!(options[*correct], question.entry.ru);

                assert!(question.check_choice(correct + 1));
                for wrong in (1..=4).filter(|i| i != &(correct + 1)) {
                    assert!(!question.check_choice(wrong));
                }
            }
        }
    }

    #[test]
    fn test_mixed_draws_only_the_four_allowed_kinds() {
        let entries = level();
        for seed in 0..20 {
            for question in build_questions(Mode::Mixed, &entries, &mut rng(seed)) {
                match &question.kind {
                    Kind::TranslateToEn | Kind::TranslateToRu => {
                        assert_eq!(question.points(), 2)
                    }
                    Kind::FillBlank { sentence } => {
                        assert!(sentence.contains("______"));
                        assert_eq!(question.points(), 2);
                    }
                    Kind::Spell => assert_eq!(question.points(), 3),
                    Kind::Choice { .. } => panic!("mixed rounds never build choice questions"),
                }
            }
        }
    }

    #[test]
    fn test_max_score_per_mode() {
        assert_eq!(Mode::RuToEn.max_score(8), 16.0);
        assert_eq!(Mode::Choice.max_score(8), 8.0);
        assert_eq!(Mode::Dictation.max_score(8), 24.0);
        assert_eq!(Mode::Mixed.max_score(10), 25.0);
    }

    #[test]
    fn test_same_seed_builds_the_same_round() {
        let entries = level();
        let first = build_questions(Mode::Mixed, &entries, &mut rng(42));
        let second = build_questions(Mode::Mixed, &entries, &mut rng(42));
        assert_eq!(first, second);
    }
}
