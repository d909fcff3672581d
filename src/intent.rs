//! Voice-assistant intent matching.
//!
//! Intents are checked in a fixed order; the first intent with a pattern
//! occurring as a substring of the lowercased input handles it. Handlers
//! pull details (search term, chapter, verse, book, genre, location) out of
//! the input as typed.

use chrono::{Local, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Outcome of [`match_intent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentResult {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<&'static str>,
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntentKind {
    SearchVerse,
    GitaVerse,
    BibleVerse,
    Music,
    Weather,
    News,
    Time,
    Help,
}

impl IntentKind {
    fn name(self) -> &'static str {
        match self {
            IntentKind::SearchVerse => "search_verse",
            IntentKind::GitaVerse => "gita_verse",
            IntentKind::BibleVerse => "bible_verse",
            IntentKind::Music => "music",
            IntentKind::Weather => "weather",
            IntentKind::News => "news",
            IntentKind::Time => "time",
            IntentKind::Help => "help",
        }
    }

    fn patterns(self) -> &'static [&'static str] {
        match self {
            IntentKind::SearchVerse => &["search", "find", "look for", "show me", "get me"],
            IntentKind::GitaVerse => &["gita", "bhagavad", "sloka"],
            IntentKind::BibleVerse => {
                &["bible", "genesis", "john", "psalm", "matthew", "luke", "mark"]
            }
            IntentKind::Music => &["play", "music", "song", "audio", "listen", "hear"],
            IntentKind::Weather => &["weather", "forecast", "temperature", "rain", "sunny"],
            IntentKind::News => &["news", "headlines", "latest", "update"],
            IntentKind::Time => &["time", "what time", "tell me", "what is the"],
            IntentKind::Help => &["help", "assist", "support", "guide", "tutorial"],
        }
    }
}

const INTENT_ORDER: [IntentKind; 8] = [
    IntentKind::SearchVerse,
    IntentKind::GitaVerse,
    IntentKind::BibleVerse,
    IntentKind::Music,
    IntentKind::Weather,
    IntentKind::News,
    IntentKind::Time,
    IntentKind::Help,
];

static SEARCH_VERBS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)search|find|look for|show me|get me").unwrap());
static CHAPTER_NUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)chapter\s+([0-9]+)").unwrap());
static VERSE_NUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)verse\s+([0-9]+)").unwrap());
static BIBLE_BOOK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(genesis|john|psalm|matthew|luke|mark)").unwrap());
static MUSIC_GENRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(meditation|calming|peaceful|relaxing|uplifting|spiritual)\b").unwrap()
});
static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:in|at|around)\s+(\w+)").unwrap());

const UNMATCHED_RESPONSE: &str = "I'm not sure I understood that. Could you rephrase? You can ask me about verses, music, weather, news, or say 'help' for more options.";

const HELP_RESPONSE: &str = "I'm Roko, your AI voice assistant. I can help you search verses from the Bhagavad Gita and Bible, play music, get weather updates, and much more. Just ask me!";

fn handle(kind: IntentKind, input: &str, now: NaiveTime) -> String {
    match kind {
        IntentKind::SearchVerse => {
            let term = SEARCH_VERBS.replace_all(input, "");
            format!(
                "I'll search for verses about \"{}\". Let me find the most relevant passages for you.",
                term.trim()
            )
        }
        IntentKind::GitaVerse => {
            match (CHAPTER_NUM.captures(input), VERSE_NUM.captures(input)) {
                (Some(chapter), Some(verse)) => format!(
                    "Loading Bhagavad Gita Chapter {}, Verse {}.",
                    &chapter[1], &verse[1]
                ),
                _ => "To access a specific Gita verse, please mention the chapter and verse number."
                    .to_string(),
            }
        }
        IntentKind::BibleVerse => {
            match (
                BIBLE_BOOK.find(input),
                CHAPTER_NUM.captures(input),
                VERSE_NUM.captures(input),
            ) {
                (Some(book), Some(chapter), Some(verse)) => format!(
                    "Opening {} {}:{} for you.",
                    book.as_str(),
                    &chapter[1],
                    &verse[1]
                ),
                _ => "To access a specific Bible verse, please mention the book, chapter, and verse."
                    .to_string(),
            }
        }
        IntentKind::Music => {
            let genre = MUSIC_GENRE
                .find(input)
                .map(|m| m.as_str())
                .unwrap_or("meditation");
            format!("Playing {} music for you. Enjoy!", genre)
        }
        IntentKind::Weather => {
            let location = LOCATION
                .captures(input)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or("your area");
            format!(
                "Fetching weather information for {}. One moment please.",
                location
            )
        }
        IntentKind::News => "Fetching the latest news headlines for you.".to_string(),
        IntentKind::Time => format!("It's currently {}.", now.format("%-I:%M:%S %p")),
        IntentKind::Help => HELP_RESPONSE.to_string(),
    }
}

/// Match `input` against the intent table using the current local time.
pub fn match_intent(input: &str) -> IntentResult {
    match_intent_at(input, Local::now().time())
}

/// Match `input` with an explicit clock for the `time` intent.
pub fn match_intent_at(input: &str, now: NaiveTime) -> IntentResult {
    let lower = input.to_lowercase();

    for kind in INTENT_ORDER {
        if kind.patterns().iter().any(|p| lower.contains(p)) {
            tracing::debug!(intent = kind.name(), "intent matched");
            return IntentResult {
                matched: true,
                intent: Some(kind.name()),
                response: handle(kind, input, now),
            };
        }
    }

    IntentResult {
        matched: false,
        intent: None,
        response: UNMATCHED_RESPONSE.to_string(),
    }
}
