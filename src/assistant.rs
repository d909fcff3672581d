//! Offline assistant: turns a free-text question into a reply.
//!
//! # Pipeline
//!
//! The first step that produces an answer wins:
//!
//! 1. Empty input → prompt to type a question.
//! 2. Greeting → greeting.
//! 3. Help request → usage examples.
//! 4. Scripture citation with a known card → card in the detected mode.
//! 5. Comparison request naming two concepts → side-by-side comparison.
//! 6. Concept keywords → concept in the detected mode.
//! 7. Topic overlap → up to three verse ideas.
//! 8. Fallback guidance.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::matcher::{find_best_concept, find_by_reference, find_top_concepts, search_by_topic};
use crate::respond::{
    build_card_response, build_compare_response, build_concept_response, build_search_response,
    detect_response_mode, ResponseMode,
};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "namaste", "salam"];

const EMPTY_PROMPT: &str =
    "Please type your question. I can explain concepts, summaries, morals, and verse ideas.";

const GREETING_REPLY: &str =
    "Hello. Ask me about Gita, Bible, or Quran concepts and I will explain with summary and moral.";

const HELP_REPLY: &str = "I can answer with local AI logic (offline mode).

Try:
- Explain karma yoga
- Give moral from Gita 2:47
- Summarize Bible James 1:5
- Search verses about peace";

const FALLBACK_REPLY: &str = "I did not find a strong match yet, but here is a helpful guidance:

Summary: Live with clarity, compassion, and disciplined action.
Moral: Do your duty sincerely, stay humble, and keep faith during difficulty.
Try asking with a topic or reference, like \"Gita 2:47\" or \"peace and patience\".";

static HELP_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)help|how to use|commands|what can you do").unwrap());
static COMPARE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(compare|difference|vs)\b").unwrap());

/// Which pipeline step produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Empty,
    Greeting,
    Help,
    Reference,
    Comparison,
    Concept,
    TopicSearch,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub mode: ResponseMode,
    pub text: String,
}

fn is_greeting(lower: &str) -> bool {
    GREETINGS.iter().any(|greet| {
        lower == *greet
            || lower
                .strip_prefix(greet)
                .is_some_and(|rest| rest.starts_with(' '))
    })
}

/// Run the full pipeline and report which step answered.
pub fn answer(question: &str) -> Reply {
    let clean = question.trim();
    let lower = clean.to_lowercase();
    let mode = detect_response_mode(&lower);

    let (kind, text) = if clean.is_empty() {
        (ReplyKind::Empty, EMPTY_PROMPT.to_string())
    } else if is_greeting(&lower) {
        (ReplyKind::Greeting, GREETING_REPLY.to_string())
    } else if HELP_WORDS.is_match(&lower) {
        (ReplyKind::Help, HELP_REPLY.to_string())
    } else if let Some(card) = find_by_reference(clean) {
        (ReplyKind::Reference, build_card_response(card, mode))
    } else if let Some(text) = compare(clean, &lower) {
        (ReplyKind::Comparison, text)
    } else if let Some(concept) = find_best_concept(clean) {
        (ReplyKind::Concept, build_concept_response(concept, mode))
    } else {
        let hits = search_by_topic(clean);
        if hits.is_empty() {
            (ReplyKind::Fallback, FALLBACK_REPLY.to_string())
        } else {
            (ReplyKind::TopicSearch, build_search_response(&hits, clean))
        }
    };

    tracing::debug!(?kind, ?mode, "assistant reply");
    Reply { kind, mode, text }
}

fn compare(clean: &str, lower: &str) -> Option<String> {
    if !COMPARE_WORDS.is_match(lower) {
        return None;
    }
    match find_top_concepts(clean, 2).as_slice() {
        [first, second] => Some(build_compare_response(first, second)),
        _ => None,
    }
}

/// Reply text for `question`.
pub fn generate_reply(question: &str) -> String {
    answer(question).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(generate_reply("   "), EMPTY_PROMPT);
        assert_eq!(answer("").kind, ReplyKind::Empty);
    }

    #[test]
    fn test_greetings() {
        assert_eq!(answer("Namaste").kind, ReplyKind::Greeting);
        assert_eq!(answer("hello there").kind, ReplyKind::Greeting);
        // "history" starts with "hi" but not "hi ".
        assert_ne!(answer("history of dharma").kind, ReplyKind::Greeting);
    }

    #[test]
    fn test_help() {
        assert_eq!(generate_reply("what can you do?"), HELP_REPLY);
    }

    #[test]
    fn test_reference_in_moral_mode() {
        let reply = answer("Give moral from Gita 2:47");
        assert_eq!(reply.kind, ReplyKind::Reference);
        assert_eq!(reply.mode, ResponseMode::Moral);
        assert_eq!(
            reply.text,
            "Gita 2:47\n\nMoral: Effort is your responsibility; outcome is not always in your control."
        );
    }

    #[test]
    fn test_bible_summary() {
        let text = generate_reply("Summarize Bible James 1:5");
        assert_eq!(
            text,
            "Bible James 1:5\n\nSummary: Wisdom grows through prayer, humility, and learning."
        );
    }

    #[test]
    fn test_unknown_reference_falls_through_to_concepts() {
        // Gita 1:1 is not in the table; "duty" still matches a concept.
        let reply = answer("Gita 1:1 on duty");
        assert_eq!(reply.kind, ReplyKind::Concept);
    }

    #[test]
    fn test_comparison() {
        let reply = answer("Compare sabr vs tawakkul");
        assert_eq!(reply.kind, ReplyKind::Comparison);
        assert!(reply
            .text
            .starts_with("Comparison: Sabr (Patient Endurance) vs Tawakkul (Reliance on God)"));
    }

    #[test]
    fn test_comparison_needs_two_concepts() {
        let reply = answer("compare karma yoga");
        assert_eq!(reply.kind, ReplyKind::Concept);
        assert!(reply.text.starts_with("Karma Yoga\n\n"));
    }

    #[test]
    fn test_concept_full_mode() {
        let text = generate_reply("Explain karma yoga");
        assert!(text.starts_with("Karma Yoga\n\nSummary: "));
        assert!(text.contains("\nPractical step: "));
        assert!(text.ends_with("Related reference: Gita 2:47"));
    }

    #[test]
    fn test_topic_search() {
        let reply = answer("Tell me about diversity");
        assert_eq!(reply.kind, ReplyKind::TopicSearch);
        assert!(reply
            .text
            .starts_with("I found 1 relevant verse ideas for \"Tell me about diversity\":"));
        assert!(reply.text.contains("1. Quran 49:13 - "));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(generate_reply("qwerty zxcv"), FALLBACK_REPLY);
    }
}
