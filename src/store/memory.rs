//! In-memory [`VerseStore`] backed by a JSON library file.
//!
//! The file holds one array per collection; every array is optional:
//!
//! ```json
//! {
//!   "gita_verses": [...],
//!   "bible_verses": [...],
//!   "quran_ayahs": [...],
//!   "quiz_questions": [...],
//!   "daily_verses": [...]
//! }
//! ```
//!
//! Records are immutable once loaded.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{BibleVerse, DailyVerse, GitaVerse, QuizQuestion, QuranAyah, VerseKind};

use super::VerseStore;

/// Parsed contents of a library file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryData {
    #[serde(default)]
    pub gita_verses: Vec<GitaVerse>,
    #[serde(default)]
    pub bible_verses: Vec<BibleVerse>,
    #[serde(default)]
    pub quran_ayahs: Vec<QuranAyah>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub daily_verses: Vec<DailyVerse>,
}

pub struct MemoryVerseStore {
    data: LibraryData,
    /// Position in the sorted `gita_verses` of each sloka, in load order.
    gita_load_order: Vec<usize>,
}

impl MemoryVerseStore {
    pub fn new(mut data: LibraryData) -> Self {
        let mut indexed: Vec<(usize, GitaVerse)> =
            data.gita_verses.drain(..).enumerate().collect();
        indexed.sort_by_key(|(_, v)| (v.chapter, v.verse));

        let mut gita_load_order = vec![0; indexed.len()];
        for (sorted_pos, (loaded_pos, _)) in indexed.iter().enumerate() {
            gita_load_order[*loaded_pos] = sorted_pos;
        }
        data.gita_verses = indexed.into_iter().map(|(_, v)| v).collect();
        data.quran_ayahs.sort_by_key(|a| (a.surah_no, a.ayah_no_surah));
        Self {
            data,
            gita_load_order,
        }
    }

    /// Load a library file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read library file: {}", path.display()))?;
        let data: LibraryData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse library file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            gita = data.gita_verses.len(),
            bible = data.bible_verses.len(),
            quran = data.quran_ayahs.len(),
            quiz = data.quiz_questions.len(),
            "library loaded"
        );
        Ok(Self::new(data))
    }
}

impl Default for MemoryVerseStore {
    fn default() -> Self {
        Self::new(LibraryData::default())
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl VerseStore for MemoryVerseStore {
    async fn gita_verse(&self, chapter: u32, verse: u32) -> Result<Option<GitaVerse>> {
        Ok(self
            .data
            .gita_verses
            .iter()
            .find(|v| v.chapter == chapter && v.verse == verse)
            .cloned())
    }

    async fn gita_by_id(&self, id: &str) -> Result<Option<GitaVerse>> {
        Ok(self.data.gita_verses.iter().find(|v| v.id == id).cloned())
    }

    async fn gita_chapter(&self, chapter: u32) -> Result<Vec<GitaVerse>> {
        Ok(self
            .data
            .gita_verses
            .iter()
            .filter(|v| v.chapter == chapter)
            .cloned()
            .collect())
    }

    async fn gita_verses(&self, limit: Option<usize>) -> Result<Vec<GitaVerse>> {
        let take = limit.unwrap_or(usize::MAX);
        Ok(self.data.gita_verses.iter().take(take).cloned().collect())
    }

    async fn gita_verses_loaded(&self) -> Result<Vec<GitaVerse>> {
        Ok(self
            .gita_load_order
            .iter()
            .filter_map(|&pos| self.data.gita_verses.get(pos))
            .cloned()
            .collect())
    }

    async fn search_gita(&self, term: &str, limit: usize) -> Result<Vec<GitaVerse>> {
        let needle = term.to_lowercase();
        Ok(self
            .data
            .gita_verses
            .iter()
            .filter(|v| {
                contains_ignore_case(&v.translation_en, &needle)
                    || contains_ignore_case(&v.translation_hi, &needle)
                    || contains_ignore_case(&v.commentary, &needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn bible_by_id(&self, id: &str) -> Result<Option<BibleVerse>> {
        Ok(self.data.bible_verses.iter().find(|v| v.id == id).cloned())
    }

    async fn bible_verses(&self) -> Result<Vec<BibleVerse>> {
        Ok(self.data.bible_verses.clone())
    }

    async fn quran_ayahs(&self, surah: Option<u32>) -> Result<Vec<QuranAyah>> {
        Ok(self
            .data
            .quran_ayahs
            .iter()
            .filter(|a| surah.map_or(true, |s| a.surah_no == s))
            .cloned()
            .collect())
    }

    async fn daily_entry(&self, date: NaiveDate) -> Result<Option<DailyVerse>> {
        Ok(self
            .data
            .daily_verses
            .iter()
            .find(|d| d.date == date)
            .cloned())
    }

    async fn quiz_questions(
        &self,
        religion: VerseKind,
        difficulty: Option<&str>,
    ) -> Result<Vec<QuizQuestion>> {
        Ok(self
            .data
            .quiz_questions
            .iter()
            .filter(|q| q.religion == religion)
            .filter(|q| difficulty.map_or(true, |d| q.difficulty.eq_ignore_ascii_case(d)))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::models::Testament;

    pub fn gita(chapter: u32, verse: u32, english: &str) -> GitaVerse {
        GitaVerse {
            id: format!("g-{}-{}", chapter, verse),
            chapter,
            verse,
            sanskrit: format!("sanskrit {}.{}", chapter, verse),
            transliteration: format!("translit {}.{}", chapter, verse),
            translation_en: english.to_string(),
            translation_hi: format!("hindi {}.{}", chapter, verse),
            translation_te: None,
            commentary: String::new(),
            audio_url: None,
        }
    }

    pub fn bible(id: &str, book: &str, chapter: u32, verse: u32, text: &str) -> BibleVerse {
        BibleVerse {
            id: id.to_string(),
            book: book.to_string(),
            chapter,
            verse,
            text: text.to_string(),
            testament: Testament::New,
            audio_url: None,
        }
    }

    pub fn question(id: &str, religion: VerseKind, difficulty: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            religion,
            category: "general".to_string(),
            question: format!("Question {}?", id),
            option_a: "a".to_string(),
            option_b: "b".to_string(),
            option_c: "c".to_string(),
            option_d: "d".to_string(),
            correct_answer: answer.to_string(),
            explanation: String::new(),
            difficulty: difficulty.to_string(),
        }
    }

    /// Four Gita slokas (loaded out of order) and three Bible verses.
    pub fn sample() -> LibraryData {
        let mut commented = gita(2, 47, "You have a right to perform your prescribed duty.");
        commented.commentary = "Focus on action, not the fruits.".to_string();
        LibraryData {
            gita_verses: vec![
                gita(3, 19, "Therefore, without attachment, perform your duty."),
                commented,
                gita(2, 14, "Heat and cold, pleasure and pain, are temporary."),
                gita(1, 1, "Dhritarashtra said: O Sanjaya, what did my sons do?"),
            ],
            bible_verses: vec![
                bible("b1", "John", 3, 16, "For God so loved the world"),
                bible("b2", "Psalm", 23, 1, "The Lord is my shepherd"),
                bible("b3", "Matthew", 6, 34, "Therefore do not worry about tomorrow"),
            ],
            ..LibraryData::default()
        }
    }
}
