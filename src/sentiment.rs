//! Lexicon-based sentiment scoring.
//!
//! # Algorithm
//!
//! 1. Lowercase, split on whitespace, strip `.,!?;:` from each token.
//! 2. A negator (`not`, `don't`, …) arms a negation flag.
//! 3. An intensifier (`very`, `really`, …) sets the boost to 1.5.
//! 4. A positive or negative word adds `-1` to its polarity's count when
//!    negated, otherwise the current boost; flag and boost then reset.
//! 5. `score = positive / (|positive| + |negative|)`, or 0.
//! 6. Polarity is positive above `0.2`, negative below `-0.2`.
//!
//! Only the positive count enters the numerator, so plain negative words
//! pull the score toward 0 and a score goes negative only through negated
//! positive words.
//!
//! Score and confidence are rounded to two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "glad", "great", "awesome", "wonderful", "excellent", "love", "amazing",
    "brilliant", "fantastic", "good", "nice", "perfect", "beautiful", "lovely", "enjoyed",
    "thanks", "thank", "please", "grateful", "appreciative", "blessed",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "upset", "frustrated", "hate", "terrible", "awful", "horrible", "bad",
    "worse", "worst", "disappointing", "disappointed", "anxious", "worried", "stressed",
    "tired", "sick", "ill", "struggling", "difficult", "hard", "pain", "hurt", "suffering",
    "lonely", "alone", "depressed",
];

const INTENSIFIERS: &[&str] = &[
    "really", "very", "so", "extremely", "absolutely", "totally", "completely",
];

const NEGATORS: &[&str] = &["not", "no", "never", "don't", "didn't", "won't", "can't"];

const INTENSIFIER_BOOST: f64 = 1.5;
const POLARITY_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    /// Score in `[-1.0, 1.0]`.
    pub score: f64,
    /// `|score|` clamped to `[0.0, 1.0]`.
    pub confidence: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn analyze_sentiment(text: &str) -> SentimentScore {
    let lower = text.to_lowercase();

    let mut positive = 0.0_f64;
    let mut negative = 0.0_f64;
    let mut boost = 1.0_f64;
    let mut negated = false;

    for raw in lower.split_whitespace() {
        let word: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
            .collect();
        let word = word.as_str();

        if NEGATORS.contains(&word) {
            negated = true;
            continue;
        }
        if INTENSIFIERS.contains(&word) {
            boost = INTENSIFIER_BOOST;
            continue;
        }

        let delta = if negated { -1.0 } else { boost };
        if POSITIVE_WORDS.contains(&word) {
            positive += delta;
        } else if NEGATIVE_WORDS.contains(&word) {
            negative += delta;
        } else {
            continue;
        }
        negated = false;
        boost = 1.0;
    }

    let total = positive.abs() + negative.abs();
    let score = if total > 0.0 { positive / total } else { 0.0 };

    let sentiment = if score > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if score < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentScore {
        sentiment,
        score: round2(score),
        confidence: round2(score.abs().min(1.0)),
    }
}

const NEGATIVE_RESPONSES: &[&str] = &[
    "I hear you're going through something difficult. I'm here to help.",
    "That sounds challenging. Let me assist you with what you need.",
    "I understand you're feeling down. How can I make things better?",
    "It sounds like you're struggling. I'm here for you.",
];

const POSITIVE_RESPONSES: &[&str] = &[
    "That's wonderful! I'm glad to help you with that.",
    "I love your energy! Let's get that done for you.",
    "Fantastic! I'm excited to assist you.",
    "That's great! Let's make it happen.",
];

const NEUTRAL_RESPONSE: &str = "How can I assist you?";

/// A canned opener matching the user's mood.
///
/// `pick` selects among the variants (taken modulo their count), letting
/// callers supply randomness or a fixed index in tests.
pub fn empathetic_response(sentiment: Sentiment, pick: usize) -> &'static str {
    match sentiment {
        Sentiment::Negative => NEGATIVE_RESPONSES[pick % NEGATIVE_RESPONSES.len()],
        Sentiment::Positive => POSITIVE_RESPONSES[pick % POSITIVE_RESPONSES.len()],
        Sentiment::Neutral => NEUTRAL_RESPONSE,
    }
}
