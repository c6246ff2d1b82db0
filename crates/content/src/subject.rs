//! Email subject-line heuristic scoring.
//!
//! Starts from a perfect score and applies length, spam-signal, and
//! clarity heuristics, each leaving a human-readable note. The score is
//! a rough prioritization aid, not a deliverability prediction.

use campaign_kit_core::config::SubjectConfig;
use serde::{Deserialize, Serialize};

const SHORT_SUBJECT_CHARS: usize = 25;
const LONG_SUBJECT_CHARS: usize = 70;
const MIN_WORDS: usize = 4;

const SHORT_PENALTY: i32 = 15;
const LONG_PENALTY: i32 = 20;
const SPAM_TERM_PENALTY: i32 = 10;
const EXCLAMATION_PENALTY: i32 = 10;
const FEW_WORDS_PENALTY: i32 = 10;
const DIGIT_BONUS: i32 = 5;

/// Score and explanatory notes for a subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// Heuristic score from 0 to 100.
    pub score: u8,
    /// One note per heuristic that fired.
    pub notes: Vec<String>,
}

/// Scores a subject line against length, spam, and clarity heuristics.
///
/// An empty (or all-whitespace) subject scores 0 with a single prompt
/// note. Otherwise the score starts at 100, each firing heuristic
/// adjusts it and appends a note, and the result is clamped to [0, 100].
///
/// # Examples
/// ```
/// use campaign_kit_content::score_subject;
/// use campaign_kit_core::config::SubjectConfig;
///
/// let scored = score_subject("3 onboarding fixes worth shipping this week", &SubjectConfig::default());
/// assert_eq!(scored.score, 100);
/// ```
#[must_use]
pub fn score_subject(subject: &str, config: &SubjectConfig) -> SubjectScore {
    let s = subject.trim();
    if s.is_empty() {
        return SubjectScore {
            score: 0,
            notes: vec!["Enter a subject line.".to_string()],
        };
    }

    let mut score: i32 = 100;
    let mut notes = Vec::new();
    let len = s.chars().count();

    if len < SHORT_SUBJECT_CHARS {
        score -= SHORT_PENALTY;
        notes.push("A bit short; consider adding specificity.".to_string());
    }
    if len > LONG_SUBJECT_CHARS {
        score -= LONG_PENALTY;
        notes.push("Long; may truncate on mobile.".to_string());
    }

    let lower = s.to_lowercase();
    let spam_hits: Vec<&str> = config
        .spam_terms
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .map(String::as_str)
        .collect();
    if !spam_hits.is_empty() {
        score -= SPAM_TERM_PENALTY * spam_hits.len() as i32;
        notes.push(format!("Spammy terms detected: {}.", spam_hits.join(", ")));
    }

    let exclamations = s.matches('!').count();
    if exclamations >= 2 {
        score -= EXCLAMATION_PENALTY;
        notes.push("Too many exclamation points.".to_string());
    }

    if s.chars().any(|c| c.is_ascii_digit()) {
        score += DIGIT_BONUS;
        notes.push("Good: numbers often improve clarity.".to_string());
    }
    if s.split_whitespace().count() < MIN_WORDS {
        score -= FEW_WORDS_PENALTY;
        notes.push("Very few words; may be vague.".to_string());
    }

    SubjectScore {
        score: score.clamp(0, 100) as u8,
        notes,
    }
}
