use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;

mod cli;
mod lexicon;

pub mod prelude {
    pub use crate::analyze::cli::{analyze_root, AnalyzeArgs};
    pub use crate::analyze::lexicon::{EmotionCategory, Lexicon};
    pub use crate::analyze::{DreamAnalysis, DreamAnalyzer, DreamType, KeywordCount};
}

use crate::analyze::lexicon::{EmotionCategory, Lexicon};

lazy_static! {
    static ref WORD_TOKEN_REGEX: Regex = Regex::new(r"\w+").unwrap();
}

const MAX_KEYWORDS: usize = 5;
// tokens must be strictly longer than this to count as a keyword
const MIN_KEYWORD_CHARS: usize = 4;

/// Classification of a dream entry, based on which indicator table matched
/// more keywords.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DreamType {
    Future,
    Nocturnal,
    Undefined,
}

/// A word from the entry and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Everything derived from a single entry.
#[derive(Debug, Clone)]
pub struct DreamAnalysis {
    pub dream_type: DreamType,
    /// Emotion categories found in the entry. Only categories with at least
    /// one keyword hit are present.
    pub emotions: BTreeMap<EmotionCategory, usize>,
    /// The most frequent words, capped at five. Ties keep the order the
    /// words first appeared in.
    pub keywords: Vec<KeywordCount>,
    /// 0 to 100, where 50 is neutral.
    pub positivity_score: u8,
    pub word_count: usize,
    pub analyzed_at: DateTime<Local>,
}

/// Stateless-per-call scorer over a fixed [`Lexicon`]. Once built, the
/// analyzer is read-only and safe to share across threads.
#[derive(Debug, Default)]
pub struct DreamAnalyzer {
    lexicon: Lexicon,
}

impl DreamAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyze one entry. Keyword matching is case-insensitive substring
    /// containment against the lexicon tables, not token matching, so
    /// "luzes" hits "luz" while "voando" misses "voar".
    pub fn analyze(&self, content: &str) -> DreamAnalysis {
        let normalized = content.to_lowercase();

        DreamAnalysis {
            dream_type: self.detect_dream_type(&normalized),
            emotions: self.analyze_emotions(&normalized),
            keywords: extract_keywords(&normalized),
            positivity_score: self.calculate_positivity(&normalized),
            word_count: normalized.split_whitespace().count(),
            analyzed_at: Local::now(),
        }
    }

    fn detect_dream_type(&self, content: &str) -> DreamType {
        let future_count = count_keyword_hits(&self.lexicon.future_indicators, content);
        let night_count = count_keyword_hits(&self.lexicon.night_indicators, content);

        match future_count.cmp(&night_count) {
            Ordering::Greater => DreamType::Future,
            Ordering::Less => DreamType::Nocturnal,
            Ordering::Equal => DreamType::Undefined,
        }
    }

    fn analyze_emotions(&self, content: &str) -> BTreeMap<EmotionCategory, usize> {
        let mut scores = BTreeMap::new();
        for (category, keywords) in &self.lexicon.emotions {
            let score = count_keyword_hits(keywords, content);
            if score > 0 {
                scores.insert(*category, score);
            }
        }
        scores
    }

    fn calculate_positivity(&self, content: &str) -> u8 {
        // a blank entry is neutral, keyword hits can't move it
        if content.split_whitespace().next().is_none() {
            return 50;
        }

        let positive = count_keyword_hits(self.lexicon.positive_keywords(), content) as i64;
        let negative = count_keyword_hits(&self.lexicon.negative_indicators, content) as i64;

        (50 + positive * 10 - negative * 5).clamp(0, 100) as u8
    }
}

/// Number of distinct keywords that appear somewhere in the content.
fn count_keyword_hits(keywords: &[String], content: &str) -> usize {
    keywords
        .iter()
        .filter(|keyword| content.contains(keyword.as_str()))
        .count()
}

/// Top words by frequency. Tokens are unicode word-character runs, so
/// accented letters count as part of a word.
fn extract_keywords(content: &str) -> Vec<KeywordCount> {
    let mut frequencies: Vec<KeywordCount> = Vec::new();
    for token in WORD_TOKEN_REGEX.find_iter(content) {
        let word = token.as_str();
        if word.chars().count() <= MIN_KEYWORD_CHARS {
            continue;
        }
        match frequencies.iter_mut().find(|keyword| keyword.word == word) {
            Some(existing) => existing.count += 1,
            None => frequencies.push(KeywordCount {
                word: word.to_string(),
                count: 1,
            }),
        }
    }

    // stable sort, so equal frequencies keep first-appearance order
    frequencies.sort_by(|left, right| right.count.cmp(&left.count));
    frequencies.truncate(MAX_KEYWORDS);
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> DreamAnalyzer {
        DreamAnalyzer::default()
    }

    #[test]
    fn analyze_empty_content_returns_neutral_analysis() {
        let analysis = analyzer().analyze("");

        assert_eq!(DreamType::Undefined, analysis.dream_type);
        assert!(analysis.emotions.is_empty());
        assert!(analysis.keywords.is_empty());
        assert_eq!(50, analysis.positivity_score);
        assert_eq!(0, analysis.word_count);
    }

    #[test]
    fn whitespace_only_content_is_neutral() {
        let analysis = analyzer().analyze("  \t   ");

        assert_eq!(50, analysis.positivity_score);
        assert_eq!(0, analysis.word_count);
    }

    #[test]
    fn future_indicators_win_when_more_frequent() {
        let analysis = analyzer().analyze("Espero que amanhã o futuro seja melhor");

        assert_eq!(DreamType::Future, analysis.dream_type);
    }

    #[test]
    fn night_indicators_win_when_more_frequent() {
        let analysis = analyzer().analyze("Acordei de um pesadelo no meio da noite");

        assert_eq!(DreamType::Nocturnal, analysis.dream_type);
    }

    #[test]
    fn indicator_tie_is_undefined() {
        // "sonhei" (night) and "futuro" (future) tie one to one
        let analysis = analyzer().analyze("Sonhei que estava voando sobre uma cidade do futuro");

        assert_eq!(DreamType::Undefined, analysis.dream_type);
    }

    #[test]
    fn matching_is_substring_not_stem() {
        // "voando" does not contain "voar", so the positive table misses it
        let flying = analyzer().analyze("voando alto");
        assert!(!flying.emotions.contains_key(&EmotionCategory::Positive));

        // "amorosa" does contain "amor"
        let loving = analyzer().analyze("uma pessoa amorosa");
        assert_eq!(Some(&1), loving.emotions.get(&EmotionCategory::Positive));
    }

    #[test]
    fn emotions_only_include_matched_categories() {
        let analysis = analyzer().analyze("senti medo ao cair na sombra");

        assert_eq!(Some(&2), analysis.emotions.get(&EmotionCategory::Anxious));
        assert_eq!(
            Some(&1),
            analysis.emotions.get(&EmotionCategory::Mysterious)
        );
        assert!(!analysis.emotions.contains_key(&EmotionCategory::Positive));
        assert!(analysis.emotions.values().all(|score| *score > 0));
    }

    #[test]
    fn keywords_skip_short_words_and_cap_at_five() {
        let analysis = analyzer()
            .analyze("castelo castelo castelo jardim jardim floresta montanha rio estrela oceano");

        let words: Vec<_> = analysis
            .keywords
            .iter()
            .map(|keyword| keyword.word.as_str())
            .collect();
        assert_eq!(
            vec!["castelo", "jardim", "floresta", "montanha", "estrela"],
            words
        );
        assert_eq!(3, analysis.keywords[0].count);
        assert!(analysis
            .keywords
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn keyword_length_counts_characters_not_bytes() {
        // "maçã" is four characters but more than four bytes
        let analysis = analyzer().analyze("memória maçã");

        let words: Vec<_> = analysis
            .keywords
            .iter()
            .map(|keyword| keyword.word.as_str())
            .collect();
        assert_eq!(vec!["memória"], words);
    }

    #[test]
    fn positivity_rewards_positive_words_and_penalizes_negative() {
        // paz (+10) against medo (-5)
        let analysis = analyzer().analyze("um sonho de paz mas com medo");

        assert_eq!(55, analysis.positivity_score);
    }

    #[test]
    fn positivity_caps_at_one_hundred() {
        // eight positive hits would score 130 without the clamp
        let analysis = analyzer().analyze("feliz alegre esperança amor paz luz voar liberdade");

        assert_eq!(100, analysis.positivity_score);
    }

    #[test]
    fn positivity_floors_at_zero_with_a_harsher_lexicon() {
        let content = "um dia de chuva forte vento frio cinza triste fim mau";
        let mut lexicon = Lexicon::default();
        lexicon.negative_indicators = content.split_whitespace().map(String::from).collect();

        let analysis = DreamAnalyzer::new(lexicon).analyze(content);

        assert_eq!(0, analysis.positivity_score);
    }

    #[test]
    fn distinct_keywords_count_once_each() {
        // repeating a keyword is still a single distinct hit
        let analysis = analyzer().analyze("medo medo medo");

        assert_eq!(Some(&1), analysis.emotions.get(&EmotionCategory::Anxious));
        assert_eq!(45, analysis.positivity_score);
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        let analysis = analyzer().analyze("uma  cidade\tdo futuro");

        assert_eq!(4, analysis.word_count);
    }
}
