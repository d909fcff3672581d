//! Response modes and text templates.
//!
//! The assistant answers in one of four [`ResponseMode`]s chosen from words
//! in the question. Each builder renders a header, a blank line, and then
//! labelled lines joined with `\n`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::knowledge::{ConceptCard, KnowledgeCard};

/// Which fields of a matched card get rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Full,
    Summary,
    Moral,
    Practice,
}

static SUMMARY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(summary|summarize|short|brief|in short|gist)\b").unwrap()
});
static MORAL_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(moral|lesson|teaching|takeaway)\b").unwrap());
static PRACTICE_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(practice|practical|apply|implementation|daily step|how to apply)\b")
        .unwrap()
});

/// Pick the response mode; summary beats moral beats practice.
pub fn detect_response_mode(question: &str) -> ResponseMode {
    if SUMMARY_WORDS.is_match(question) {
        ResponseMode::Summary
    } else if MORAL_WORDS.is_match(question) {
        ResponseMode::Moral
    } else if PRACTICE_WORDS.is_match(question) {
        ResponseMode::Practice
    } else {
        ResponseMode::Full
    }
}

const CARD_PRACTICAL_STEP: &str =
    "Practical step: Reflect for 2 minutes and choose one action today based on this teaching.";

const SEARCH_DEFAULT_MORAL: &str = "Choose patience, clarity, and compassion in action.";

pub fn build_card_response(card: &KnowledgeCard, mode: ResponseMode) -> String {
    let header = card.citation();
    let lines: Vec<String> = match mode {
        ResponseMode::Summary => vec![header, String::new(), format!("Summary: {}", card.summary)],
        ResponseMode::Moral => vec![header, String::new(), format!("Moral: {}", card.moral)],
        ResponseMode::Practice => vec![
            header,
            String::new(),
            format!("Summary: {}", card.summary),
            CARD_PRACTICAL_STEP.to_string(),
            format!("Moral: {}", card.moral),
        ],
        ResponseMode::Full => vec![
            header,
            String::new(),
            format!("Summary: {}", card.summary),
            format!("Explanation: {}", card.idea),
            format!("Moral: {}", card.moral),
        ],
    };
    lines.join("\n")
}

pub fn build_concept_response(concept: &ConceptCard, mode: ResponseMode) -> String {
    let header = concept.title.to_string();
    let related = format!("Related reference: {}", concept.related_reference);
    let lines: Vec<String> = match mode {
        ResponseMode::Summary => vec![
            header,
            String::new(),
            format!("Summary: {}", concept.summary),
            related,
        ],
        ResponseMode::Moral => vec![
            header,
            String::new(),
            format!("Moral: {}", concept.moral),
            related,
        ],
        ResponseMode::Practice => vec![
            header,
            String::new(),
            format!("Practical step: {}", concept.practice),
            format!("Moral: {}", concept.moral),
            related,
        ],
        ResponseMode::Full => vec![
            header,
            String::new(),
            format!("Summary: {}", concept.summary),
            format!("Explanation: {}", concept.explanation),
            format!("Moral: {}", concept.moral),
            format!("Practical step: {}", concept.practice),
            related,
        ],
    };
    lines.join("\n")
}

/// Numbered list of topic hits, closed by the first hit's moral.
pub fn build_search_response(matches: &[&KnowledgeCard], topic: &str) -> String {
    let list = matches
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}. {} - {}", i + 1, card.citation(), card.summary))
        .collect::<Vec<_>>()
        .join("\n");

    let moral = matches
        .first()
        .map(|card| card.moral)
        .unwrap_or(SEARCH_DEFAULT_MORAL);

    [
        format!(
            "I found {} relevant verse ideas for \"{}\":",
            matches.len(),
            topic
        ),
        String::new(),
        list,
        String::new(),
        format!("Moral: {}", moral),
    ]
    .join("\n")
}

pub fn build_compare_response(first: &ConceptCard, second: &ConceptCard) -> String {
    [
        format!("Comparison: {} vs {}", first.title, second.title),
        String::new(),
        format!("{}: {}", first.title, first.summary),
        format!("Moral: {}", first.moral),
        String::new(),
        format!("{}: {}", second.title, second.summary),
        format!("Moral: {}", second.moral),
        String::new(),
        format!("Practical synthesis: {}", first.practice),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{CONCEPT_CARDS, KNOWLEDGE_CARDS};

    #[test]
    fn test_detect_modes() {
        assert_eq!(detect_response_mode("summarize james 1:5"), ResponseMode::Summary);
        assert_eq!(detect_response_mode("give me the gist"), ResponseMode::Summary);
        assert_eq!(detect_response_mode("what is the lesson here"), ResponseMode::Moral);
        assert_eq!(detect_response_mode("how to apply this"), ResponseMode::Practice);
        assert_eq!(detect_response_mode("explain karma"), ResponseMode::Full);
    }

    #[test]
    fn test_detect_mode_priority_and_boundaries() {
        // Summary wins when several mode words are present.
        assert_eq!(
            detect_response_mode("brief moral and practice"),
            ResponseMode::Summary
        );
        // Word boundaries: "shortcut" and "morality" do not count.
        assert_eq!(detect_response_mode("a shortcut to morality"), ResponseMode::Full);
    }

    #[test]
    fn test_card_full_layout() {
        let card = &KNOWLEDGE_CARDS[0];
        let text = build_card_response(card, ResponseMode::Full);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Gita 2:47");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Summary: "));
        assert!(lines[3].starts_with("Explanation: "));
        assert!(lines[4].starts_with("Moral: "));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_card_practice_uses_generic_step() {
        let text = build_card_response(&KNOWLEDGE_CARDS[0], ResponseMode::Practice);
        assert!(text.contains(CARD_PRACTICAL_STEP));
    }

    #[test]
    fn test_concept_modes_always_cite_reference() {
        let concept = &CONCEPT_CARDS[0];
        for mode in [
            ResponseMode::Full,
            ResponseMode::Summary,
            ResponseMode::Moral,
            ResponseMode::Practice,
        ] {
            let text = build_concept_response(concept, mode);
            assert!(text.starts_with("Karma Yoga\n\n"));
            assert!(text.ends_with("Related reference: Gita 2:47"));
        }
    }

    #[test]
    fn test_search_response_lists_hits() {
        let hits = vec![&KNOWLEDGE_CARDS[2], &KNOWLEDGE_CARDS[12]];
        let text = build_search_response(&hits, "peace");
        assert!(text.starts_with("I found 2 relevant verse ideas for \"peace\":"));
        assert!(text.contains("1. Gita 2:70 - "));
        assert!(text.contains("2. Bible Matthew 5:9 - "));
        assert!(text.ends_with(&format!("Moral: {}", KNOWLEDGE_CARDS[2].moral)));
    }

    #[test]
    fn test_compare_response() {
        let text = build_compare_response(&CONCEPT_CARDS[9], &CONCEPT_CARDS[10]);
        assert!(text.starts_with(
            "Comparison: Sabr (Patient Endurance) vs Tawakkul (Reliance on God)"
        ));
        assert!(text.ends_with(&format!("Practical synthesis: {}", CONCEPT_CARDS[9].practice)));
    }
}
