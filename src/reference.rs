//! Scripture citation parsing.
//!
//! Each tradition cites verses differently, so each gets its own grammar:
//!
//! | Tradition | Accepted forms |
//! |-----------|----------------|
//! | Gita  | `Gita 2:47`, `bhagavad gita 2.47`, `gita chapter 2 verse 47` |
//! | Quran | `Quran 2:153`, `surah 94.5`, `quran 2 ayah 286` |
//! | Bible | `James 1:5`, `Bible 1 corinthians 13:4` |
//!
//! All parsers are case-insensitive and return the first match in the text.
//! Chapter and verse numbers are rendered without leading zeros.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three supported scriptures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tradition {
    Gita,
    Bible,
    Quran,
}

impl Tradition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tradition::Gita => "Gita",
            Tradition::Bible => "Bible",
            Tradition::Quran => "Quran",
        }
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed citation: the tradition and its canonical reference string.
///
/// Gita and Quran references look like `2:47`; Bible references carry the
/// normalized book name, e.g. `1 Corinthians 13:4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptureRef {
    pub tradition: Tradition,
    pub reference: String,
}

impl fmt::Display for ScriptureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tradition, self.reference)
    }
}

static GITA_COMPACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:gita|bhagavad\s*gita).*?([0-9]+)\s*[:.]\s*([0-9]+)").unwrap()
});
static GITA_LONG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:gita|bhagavad\s*gita).*?chapter\s*([0-9]+)[^0-9]+verse\s*([0-9]+)")
        .unwrap()
});
static QURAN_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:quran|surah)\s*([0-9]+)\s*[:.]\s*([0-9]+)").unwrap());
static QURAN_LONG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:quran|surah)\s*([0-9]+)[^0-9]+(?:ayah|verse)\s*([0-9]+)").unwrap()
});
static BIBLE_DIRECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:bible\s+)?([1-3]?\s*[a-z]+(?:\s+[a-z]+)*)\s+([0-9]+)\s*[:.]\s*([0-9]+)",
    )
    .unwrap()
});

/// The digits of `caps[idx]` without leading zeros.
///
/// Kept as text so a citation of any length still counts as parsed.
fn number_at<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    let digits = caps.get(idx)?.as_str().trim_start_matches('0');
    Some(if digits.is_empty() { "0" } else { digits })
}

fn chapter_verse(caps: &Captures<'_>) -> Option<String> {
    let chapter = number_at(caps, 1)?;
    let verse = number_at(caps, 2)?;
    Some(format!("{}:{}", chapter, verse))
}

/// Extract a Bhagavad Gita `chapter:verse` reference.
///
/// The text must mention the Gita before the numbers.
pub fn parse_gita_reference(input: &str) -> Option<String> {
    if let Some(caps) = GITA_COMPACT.captures(input) {
        return chapter_verse(&caps);
    }
    GITA_LONG.captures(input).and_then(|caps| chapter_verse(&caps))
}

/// Extract a Quran `surah:ayah` reference.
pub fn parse_quran_reference(input: &str) -> Option<String> {
    if let Some(caps) = QURAN_COMPACT.captures(input) {
        return chapter_verse(&caps);
    }
    QURAN_LONG.captures(input).and_then(|caps| chapter_verse(&caps))
}

/// Title-case a book name, leaving numeric parts untouched.
///
/// `"1   corinthians"` becomes `"1 Corinthians"`.
pub fn normalize_book_name(book: &str) -> String {
    book.split_whitespace()
        .map(|part| {
            if part.chars().all(|c| c.is_ascii_digit()) {
                return part.to_string();
            }
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract a Bible `Book chapter:verse` reference.
///
/// The book group is greedy over preceding words, so `"summarize bible james
/// 1:5"` yields `"Summarize Bible James 1:5"`. Card lookup therefore checks
/// containment rather than equality.
pub fn parse_bible_reference(input: &str) -> Option<String> {
    let caps = BIBLE_DIRECT.captures(input)?;
    let book = normalize_book_name(caps.get(1)?.as_str());
    let chapter = number_at(&caps, 2)?;
    let verse = number_at(&caps, 3)?;
    Some(format!("{} {}:{}", book, chapter, verse))
}

/// Try each grammar in priority order: Gita, Quran, then Bible.
pub fn parse_reference(input: &str) -> Option<ScriptureRef> {
    if let Some(reference) = parse_gita_reference(input) {
        return Some(ScriptureRef {
            tradition: Tradition::Gita,
            reference,
        });
    }
    if let Some(reference) = parse_quran_reference(input) {
        return Some(ScriptureRef {
            tradition: Tradition::Quran,
            reference,
        });
    }
    parse_bible_reference(input).map(|reference| ScriptureRef {
        tradition: Tradition::Bible,
        reference,
    })
}
