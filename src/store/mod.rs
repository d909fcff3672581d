//! Storage abstraction for the verse library.
//!
//! The [`VerseStore`] trait is the seam between the query layer in
//! [`crate::library`], [`crate::daily`] and [`crate::quiz`] and whatever
//! holds the records. The crate ships [`memory::MemoryVerseStore`], which
//! serves a JSON library file from memory; a hosted relational backend
//! would implement the same trait.
//!
//! Implementations must be `Send + Sync` to sit behind an `Arc` in the
//! HTTP server state.
//!
//! # Operations
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`gita_verse`](VerseStore::gita_verse) | One sloka by chapter and verse |
//! | [`gita_chapter`](VerseStore::gita_chapter) | All slokas of a chapter, by verse |
//! | [`gita_verses`](VerseStore::gita_verses) | Every sloka by chapter and verse |
//! | [`gita_verses_loaded`](VerseStore::gita_verses_loaded) | Every sloka in insertion order |
//! | [`search_gita`](VerseStore::search_gita) | Case-insensitive text search |
//! | [`bible_verses`](VerseStore::bible_verses) | Bible verses in insertion order |
//! | [`quran_ayahs`](VerseStore::quran_ayahs) | Quran ayahs, optionally one surah |
//! | [`daily_entry`](VerseStore::daily_entry) | Curated verse for a date |
//! | [`quiz_questions`](VerseStore::quiz_questions) | Quiz questions for a collection |

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{BibleVerse, DailyVerse, GitaVerse, QuizQuestion, QuranAyah, VerseKind};

#[async_trait]
pub trait VerseStore: Send + Sync {
    async fn gita_verse(&self, chapter: u32, verse: u32) -> Result<Option<GitaVerse>>;

    async fn gita_by_id(&self, id: &str) -> Result<Option<GitaVerse>>;

    /// Slokas of one chapter ordered by verse number.
    async fn gita_chapter(&self, chapter: u32) -> Result<Vec<GitaVerse>>;

    /// Slokas ordered by chapter then verse, truncated to `limit` if given.
    async fn gita_verses(&self, limit: Option<usize>) -> Result<Vec<GitaVerse>>;

    /// Slokas in the order they were loaded.
    async fn gita_verses_loaded(&self) -> Result<Vec<GitaVerse>>;

    /// Slokas whose English or Hindi translation or commentary contains
    /// `term`, ignoring case. At most `limit` results in table order.
    async fn search_gita(&self, term: &str, limit: usize) -> Result<Vec<GitaVerse>>;

    async fn bible_by_id(&self, id: &str) -> Result<Option<BibleVerse>>;

    /// Bible verses in the order they were loaded.
    async fn bible_verses(&self) -> Result<Vec<BibleVerse>>;

    /// Ayahs of one surah, or all ayahs when `surah` is `None`.
    async fn quran_ayahs(&self, surah: Option<u32>) -> Result<Vec<QuranAyah>>;

    async fn daily_entry(&self, date: NaiveDate) -> Result<Option<DailyVerse>>;

    /// Questions for `religion`, restricted to `difficulty` when given.
    async fn quiz_questions(
        &self,
        religion: VerseKind,
        difficulty: Option<&str>,
    ) -> Result<Vec<QuizQuestion>>;
}
