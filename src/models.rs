//! Library records: verses, quiz questions and daily selections.
//!
//! Field names follow the JSON library file, so these types deserialize
//! straight from it and serialize back out unchanged over HTTP.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which scripture collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerseKind {
    Gita,
    Bible,
    Quran,
}

impl VerseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerseKind::Gita => "gita",
            VerseKind::Bible => "bible",
            VerseKind::Quran => "quran",
        }
    }
}

impl fmt::Display for VerseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gita" => Ok(VerseKind::Gita),
            "bible" => Ok(VerseKind::Bible),
            "quran" => Ok(VerseKind::Quran),
            other => Err(format!(
                "unknown collection '{}': expected gita, bible, or quran",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitaVerse {
    pub id: String,
    pub chapter: u32,
    pub verse: u32,
    pub sanskrit: String,
    pub transliteration: String,
    pub translation_en: String,
    pub translation_hi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_te: Option<String>,
    #[serde(default)]
    pub commentary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVerse {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub testament: Testament,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuranAyah {
    pub id: u64,
    pub surah_no: u32,
    pub surah_name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah_name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah_name_roman: Option<String>,
    pub ayah_no_surah: u32,
    pub ayah_ar: String,
    pub ayah_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub juz_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_revelation: Option<String>,
}

/// A multiple-choice question. `correct_answer` is one of `A`–`D`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub religion: VerseKind,
    #[serde(default)]
    pub category: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    pub difficulty: String,
}

impl QuizQuestion {
    /// `(key, text)` pairs in display order.
    pub fn options(&self) -> [(&'static str, &str); 4] {
        [
            ("A", self.option_a.as_str()),
            ("B", self.option_b.as_str()),
            ("C", self.option_c.as_str()),
            ("D", self.option_d.as_str()),
        ]
    }
}

/// A curated verse pinned to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVerse {
    pub date: NaiveDate,
    pub verse_type: VerseKind,
    pub verse_id: String,
}
