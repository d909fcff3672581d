//! Keyword matching against the knowledge base.
//!
//! Three lookups feed the assistant:
//!
//! 1. **Reference**: a parsed citation selects one card of its tradition.
//! 2. **Concept**: count concept keywords occurring in the question.
//! 3. **Topic**: token-level overlap with knowledge-card keywords.
//!
//! Rankings sort by score descending with a stable sort, so equal scores
//! keep table order.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::knowledge::{ConceptCard, KnowledgeCard, CONCEPT_CARDS, KNOWLEDGE_CARDS};
use crate::reference::{
    parse_bible_reference, parse_gita_reference, parse_quran_reference, Tradition,
};

/// Maximum number of cards returned by [`search_by_topic`].
pub const TOPIC_RESULT_LIMIT: usize = 3;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "is", "a", "an", "and", "or", "to", "of", "for", "in", "on", "with", "about",
        "what", "how", "please", "me", "my", "i", "you", "explain", "search", "find", "give",
        "tell", "show", "provide", "from", "this", "that", "its", "it", "verse", "verses",
        "summary", "moral", "meaning",
    ]
    .into_iter()
    .collect()
});

/// Split a question into lowercase content tokens.
///
/// Characters outside `[a-z0-9:]` and whitespace become separators. Tokens
/// of a single character and stop words are dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    let cleaned: String = input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ':' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 1 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Number of `keywords` that occur as substrings of the lowercased query.
pub fn score_keywords(query: &str, keywords: &[&str]) -> usize {
    let lower = query.to_lowercase();
    keywords.iter().filter(|kw| lower.contains(*kw)).count()
}

fn ranked_concepts(question: &str) -> Vec<(&'static ConceptCard, usize)> {
    let mut ranked: Vec<(&'static ConceptCard, usize)> = CONCEPT_CARDS
        .iter()
        .map(|concept| (concept, score_keywords(question, concept.keywords)))
        .filter(|(_, score)| *score > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The highest-scoring concept, or `None` when no keyword matches.
pub fn find_best_concept(question: &str) -> Option<&'static ConceptCard> {
    ranked_concepts(question).first().map(|(concept, _)| *concept)
}

/// Up to `limit` concepts ranked by keyword score.
pub fn find_top_concepts(question: &str, limit: usize) -> Vec<&'static ConceptCard> {
    ranked_concepts(question)
        .into_iter()
        .take(limit)
        .map(|(concept, _)| concept)
        .collect()
}

fn card_with_reference(tradition: Tradition, reference: &str) -> Option<&'static KnowledgeCard> {
    KNOWLEDGE_CARDS
        .iter()
        .find(|card| card.tradition == tradition && card.reference == reference)
}

/// Resolve a citation in the question to a knowledge card.
///
/// The first grammar that parses decides the tradition: a Gita citation
/// with no matching card returns `None` even if the text also looks like a
/// Bible citation. Bible cards match when their reference is contained in
/// the parsed citation, which tolerates leading words captured as the book.
pub fn find_by_reference(question: &str) -> Option<&'static KnowledgeCard> {
    if let Some(reference) = parse_gita_reference(question) {
        return card_with_reference(Tradition::Gita, &reference);
    }

    if let Some(reference) = parse_quran_reference(question) {
        return card_with_reference(Tradition::Quran, &reference);
    }

    let bible = parse_bible_reference(question)?;
    KNOWLEDGE_CARDS
        .iter()
        .find(|card| card.tradition == Tradition::Bible && bible.contains(card.reference))
}

/// Rank knowledge cards by how many question tokens overlap their keywords.
///
/// A token counts once per card when any keyword contains it or it contains
/// a keyword. Returns at most [`TOPIC_RESULT_LIMIT`] cards.
pub fn search_by_topic(question: &str) -> Vec<&'static KnowledgeCard> {
    let tokens = tokenize(question);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(&'static KnowledgeCard, usize)> = KNOWLEDGE_CARDS
        .iter()
        .map(|card| {
            let score = tokens
                .iter()
                .filter(|token| {
                    card.keywords
                        .iter()
                        .any(|kw| kw.contains(token.as_str()) || token.contains(kw))
                })
                .count();
            (card, score)
        })
        .filter(|(_, score)| *score > 0)
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOPIC_RESULT_LIMIT)
        .map(|(card, _)| card)
        .collect()
}
