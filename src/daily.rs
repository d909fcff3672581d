//! Verse of the day.
//!
//! A curated entry for the date wins. Without one, the date picks a verse
//! deterministically: the seed is the date read as the number `YYYYMMDD`,
//! its parity orders the collections (even: Bible first, odd: Gita first),
//! and the first non-empty collection yields `verses[seed % count]`.
//! Both collections are indexed in the order the library loaded them.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{BibleVerse, GitaVerse, VerseKind};
use crate::store::VerseStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "verse", rename_all = "lowercase")]
pub enum DailyPick {
    Gita(GitaVerse),
    Bible(BibleVerse),
}

impl DailyPick {
    pub fn kind(&self) -> VerseKind {
        match self {
            DailyPick::Gita(_) => VerseKind::Gita,
            DailyPick::Bible(_) => VerseKind::Bible,
        }
    }

    /// One-line heading, e.g. `Bhagavad Gita 2:47` or `John 3:16`.
    pub fn heading(&self) -> String {
        match self {
            DailyPick::Gita(v) => format!("Bhagavad Gita {}:{}", v.chapter, v.verse),
            DailyPick::Bible(v) => format!("{} {}:{}", v.book, v.chapter, v.verse),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DailyPick::Gita(v) => &v.translation_en,
            DailyPick::Bible(v) => &v.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVerseState {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub pick: DailyPick,
    /// True when no curated entry existed and the date seed chose the verse.
    pub is_fallback: bool,
}

/// `2024-03-15` becomes `20240315`.
pub fn date_seed(date: NaiveDate) -> u64 {
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Collection order for the fallback pick.
pub fn source_priority(seed: u64) -> [VerseKind; 2] {
    if seed % 2 == 0 {
        [VerseKind::Bible, VerseKind::Gita]
    } else {
        [VerseKind::Gita, VerseKind::Bible]
    }
}

fn pick_index(seed: u64, count: usize) -> usize {
    // count > 0 is checked by the caller; the result is below count.
    (seed % count as u64) as usize
}

async fn curated(store: &dyn VerseStore, date: NaiveDate) -> Result<Option<DailyPick>> {
    let Some(entry) = store.daily_entry(date).await? else {
        return Ok(None);
    };
    let pick = match entry.verse_type {
        VerseKind::Gita => store.gita_by_id(&entry.verse_id).await?.map(DailyPick::Gita),
        VerseKind::Bible => store
            .bible_by_id(&entry.verse_id)
            .await?
            .map(DailyPick::Bible),
        VerseKind::Quran => None,
    };
    if pick.is_none() {
        tracing::warn!(%date, verse_id = %entry.verse_id, "daily entry points at a missing verse");
    }
    Ok(pick)
}

async fn fallback(store: &dyn VerseStore, seed: u64) -> Result<Option<DailyPick>> {
    for kind in source_priority(seed) {
        let pick = match kind {
            VerseKind::Gita => {
                let mut verses = store.gita_verses_loaded().await?;
                if verses.is_empty() {
                    continue;
                }
                DailyPick::Gita(verses.swap_remove(pick_index(seed, verses.len())))
            }
            VerseKind::Bible => {
                let mut verses = store.bible_verses().await?;
                if verses.is_empty() {
                    continue;
                }
                DailyPick::Bible(verses.swap_remove(pick_index(seed, verses.len())))
            }
            VerseKind::Quran => continue,
        };
        return Ok(Some(pick));
    }
    Ok(None)
}

/// Resolve the verse for `date`, or `None` when the library holds neither
/// Gita nor Bible verses.
pub async fn verse_of_the_day(
    store: &dyn VerseStore,
    date: NaiveDate,
) -> Result<Option<DailyVerseState>> {
    if let Some(pick) = curated(store, date).await? {
        return Ok(Some(DailyVerseState {
            date,
            pick,
            is_fallback: false,
        }));
    }

    let seed = date_seed(date);
    let state = fallback(store, seed).await?.map(|pick| DailyVerseState {
        date,
        pick,
        is_fallback: true,
    });
    if let Some(s) = &state {
        tracing::debug!(seed, kind = %s.pick.kind(), "daily verse from date seed");
    }
    Ok(state)
}
