//! Verse lookups with input validation.
//!
//! Used by both the `roko verse` CLI commands and the `GET /gita` HTTP
//! endpoint. Every function validates its arguments before touching the
//! store and reports failures as a [`LibraryError`], which the server maps
//! onto HTTP status codes.

use serde::Serialize;
use thiserror::Error;

use crate::models::{BibleVerse, GitaVerse, QuranAyah};
use crate::reference::normalize_book_name;
use crate::store::VerseStore;

/// Highest Bhagavad Gita chapter.
pub const MAX_GITA_CHAPTER: u32 = 18;
/// Shortest accepted search term, in characters, after trimming.
pub const MIN_SEARCH_LEN: usize = 2;
/// Cap on Gita search results.
pub const SEARCH_LIMIT: usize = 20;

const QURAN_BROWSE_LIMIT: usize = 300;
const QURAN_FILTERED_LIMIT: usize = 1200;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Invalid chapter or verse number. Chapter must be 1-18, verse must be positive.")]
    InvalidReference,

    #[error("Invalid chapter number. Must be 1-18.")]
    InvalidChapter,

    #[error("Search term must be at least 2 characters")]
    SearchTermTooShort,

    #[error("Sloka not found for Chapter {chapter}, Verse {verse}")]
    SlokaNotFound { chapter: u32, verse: u32 },

    #[error("No verses found for Chapter {0}")]
    EmptyChapter(u32),

    #[error("No verses found in database")]
    EmptyLibrary,

    #[error("Verse not found: {0}")]
    NotFound(String),

    #[error("Database error: {0:#}")]
    Store(anyhow::Error),
}

impl From<anyhow::Error> for LibraryError {
    fn from(err: anyhow::Error) -> Self {
        LibraryError::Store(err)
    }
}

impl LibraryError {
    /// Stable machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            LibraryError::InvalidReference
            | LibraryError::InvalidChapter
            | LibraryError::SearchTermTooShort => "bad_request",
            LibraryError::SlokaNotFound { .. }
            | LibraryError::EmptyChapter(_)
            | LibraryError::EmptyLibrary
            | LibraryError::NotFound(_) => "not_found",
            LibraryError::Store(_) => "internal",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SlokaTranslation {
    pub english: String,
    pub hindi: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlokaMeaning {
    pub word_by_word: String,
    pub commentary: String,
}

/// A single sloka shaped for display: Sanskrit, transliteration, both
/// translations and the commentary.
#[derive(Debug, Clone, Serialize)]
pub struct Sloka {
    pub chapter: u32,
    pub verse: u32,
    pub sloka: String,
    pub transliteration: String,
    pub translation: SlokaTranslation,
    pub meaning: SlokaMeaning,
    pub audio: Option<String>,
}

impl From<GitaVerse> for Sloka {
    fn from(v: GitaVerse) -> Self {
        Sloka {
            chapter: v.chapter,
            verse: v.verse,
            sloka: v.sanskrit,
            transliteration: v.transliteration,
            translation: SlokaTranslation {
                english: v.translation_en,
                hindi: v.translation_hi,
            },
            // No word-by-word gloss is stored; the commentary stands in.
            meaning: SlokaMeaning {
                word_by_word: v.commentary.clone(),
                commentary: v.commentary,
            },
            audio: v.audio_url.filter(|url| !url.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterListing {
    pub chapter: u32,
    pub total_verses: usize,
    pub verses: Vec<GitaVerse>,
}

fn valid_chapter(chapter: u32) -> bool {
    (1..=MAX_GITA_CHAPTER).contains(&chapter)
}

pub async fn get_sloka(
    store: &dyn VerseStore,
    chapter: u32,
    verse: u32,
) -> Result<Sloka, LibraryError> {
    if !valid_chapter(chapter) || verse < 1 {
        return Err(LibraryError::InvalidReference);
    }
    match store.gita_verse(chapter, verse).await? {
        Some(v) => Ok(v.into()),
        None => Err(LibraryError::SlokaNotFound { chapter, verse }),
    }
}

pub async fn get_chapter(
    store: &dyn VerseStore,
    chapter: u32,
) -> Result<ChapterListing, LibraryError> {
    if !valid_chapter(chapter) {
        return Err(LibraryError::InvalidChapter);
    }
    let verses = store.gita_chapter(chapter).await?;
    if verses.is_empty() {
        return Err(LibraryError::EmptyChapter(chapter));
    }
    Ok(ChapterListing {
        chapter,
        total_verses: verses.len(),
        verses,
    })
}

/// All slokas by chapter and verse. A `limit` of zero means no limit.
pub async fn get_all(
    store: &dyn VerseStore,
    limit: Option<usize>,
) -> Result<Vec<GitaVerse>, LibraryError> {
    let verses = store.gita_verses(limit.filter(|n| *n > 0)).await?;
    if verses.is_empty() {
        return Err(LibraryError::EmptyLibrary);
    }
    Ok(verses)
}

/// Case-insensitive search over translations and commentary.
///
/// An empty result is not an error.
pub async fn search_slokas(
    store: &dyn VerseStore,
    term: &str,
) -> Result<Vec<GitaVerse>, LibraryError> {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_LEN {
        return Err(LibraryError::SearchTermTooShort);
    }
    let hits = store.search_gita(term, SEARCH_LIMIT).await?;
    tracing::debug!(term, hits = hits.len(), "gita search");
    Ok(hits)
}

/// Look up a Bible verse. Book names compare after normalization, so
/// `"1 john"` finds `"1 John"`.
pub async fn get_bible_verse(
    store: &dyn VerseStore,
    book: &str,
    chapter: u32,
    verse: u32,
) -> Result<BibleVerse, LibraryError> {
    let wanted = normalize_book_name(book);
    store
        .bible_verses()
        .await?
        .into_iter()
        .find(|v| {
            v.chapter == chapter && v.verse == verse && normalize_book_name(&v.book) == wanted
        })
        .ok_or_else(|| LibraryError::NotFound(format!("{} {}:{}", wanted, chapter, verse)))
}

pub async fn get_quran_ayah(
    store: &dyn VerseStore,
    surah: u32,
    ayah: u32,
) -> Result<QuranAyah, LibraryError> {
    store
        .quran_ayahs(Some(surah))
        .await?
        .into_iter()
        .find(|a| a.ayah_no_surah == ayah)
        .ok_or_else(|| LibraryError::NotFound(format!("Quran {}:{}", surah, ayah)))
}

/// Browse or search the Quran.
///
/// `query` matches the English and Arabic text and the surah names,
/// ignoring case. Unfiltered browsing returns at most 300 ayahs; a surah
/// or text filter raises the cap to 1200.
pub async fn search_quran(
    store: &dyn VerseStore,
    query: Option<&str>,
    surah: Option<u32>,
) -> Result<Vec<QuranAyah>, LibraryError> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());
    let limit = if surah.is_none() && needle.is_none() {
        QURAN_BROWSE_LIMIT
    } else {
        QURAN_FILTERED_LIMIT
    };

    let ayahs = store.quran_ayahs(surah).await?;
    Ok(ayahs
        .into_iter()
        .filter(|a| match &needle {
            None => true,
            Some(n) => {
                a.ayah_en.to_lowercase().contains(n)
                    || a.ayah_ar.to_lowercase().contains(n)
                    || a.surah_name_en.to_lowercase().contains(n)
                    || a
                        .surah_name_roman
                        .as_deref()
                        .is_some_and(|r| r.to_lowercase().contains(n))
            }
        })
        .take(limit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample;
    use crate::store::memory::{LibraryData, MemoryVerseStore};

    fn store() -> MemoryVerseStore {
        MemoryVerseStore::new(sample())
    }

    #[tokio::test]
    async fn test_get_sloka_shapes_response() {
        let sloka = get_sloka(&store(), 2, 47).await.unwrap();
        assert_eq!(sloka.sloka, "sanskrit 2.47");
        assert_eq!(sloka.meaning.word_by_word, sloka.meaning.commentary);
        assert_eq!(sloka.audio, None);

        let json = serde_json::to_value(&sloka).unwrap();
        assert!(json["meaning"]["wordByWord"].is_string());
        assert_eq!(json["translation"]["english"], sloka.translation.english);
    }

    #[tokio::test]
    async fn test_get_sloka_validation() {
        for (c, v) in [(0, 1), (19, 1), (2, 0)] {
            let err = get_sloka(&store(), c, v).await.unwrap_err();
            assert!(matches!(err, LibraryError::InvalidReference), "{}:{}", c, v);
        }
        let err = get_sloka(&store(), 18, 78).await.unwrap_err();
        assert_eq!(err.to_string(), "Sloka not found for Chapter 18, Verse 78");
        assert_eq!(err.code(), "not_found");
    }

    #[tokio::test]
    async fn test_get_chapter() {
        let listing = get_chapter(&store(), 2).await.unwrap();
        assert_eq!(listing.total_verses, 2);
        assert_eq!(listing.verses[0].verse, 14);

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["totalVerses"], 2);

        assert!(matches!(
            get_chapter(&store(), 0).await,
            Err(LibraryError::InvalidChapter)
        ));
        let err = get_chapter(&store(), 5).await.unwrap_err();
        assert_eq!(err.to_string(), "No verses found for Chapter 5");
    }

    #[tokio::test]
    async fn test_get_all_limit_and_empty() {
        assert_eq!(get_all(&store(), Some(3)).await.unwrap().len(), 3);
        assert_eq!(get_all(&store(), Some(0)).await.unwrap().len(), 4);

        let empty = MemoryVerseStore::new(LibraryData::default());
        let err = get_all(&empty, None).await.unwrap_err();
        assert_eq!(err.to_string(), "No verses found in database");
    }

    #[tokio::test]
    async fn test_search_term_length() {
        let err = search_slokas(&store(), "  d ").await.unwrap_err();
        assert_eq!(err.to_string(), "Search term must be at least 2 characters");
        assert_eq!(err.code(), "bad_request");

        let hits = search_slokas(&store(), " Duty ").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(search_slokas(&store(), "zz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bible_lookup_normalizes_book() {
        let v = get_bible_verse(&store(), "JOHN", 3, 16).await.unwrap();
        assert_eq!(v.id, "b1");
        let err = get_bible_verse(&store(), "john", 3, 17).await.unwrap_err();
        assert_eq!(err.to_string(), "Verse not found: John 3:17");
    }

    #[tokio::test]
    async fn test_quran_lookup_and_search() {
        let ayah = |surah_no: u32, n: u32, en: &str| {
            let (name, roman) = match surah_no {
                1 => ("The Opening", "Al-Fatiha"),
                _ => ("The Cow", "Al-Baqarah"),
            };
            QuranAyah {
                id: u64::from(surah_no * 1000 + n),
                surah_no,
                surah_name_en: name.to_string(),
                surah_name_ar: None,
                surah_name_roman: Some(roman.to_string()),
                ayah_no_surah: n,
                ayah_ar: String::new(),
                ayah_en: en.to_string(),
                juz_no: None,
                place_of_revelation: None,
            }
        };
        let data = LibraryData {
            quran_ayahs: vec![
                ayah(2, 153, "Seek help through patience and prayer."),
                ayah(1, 1, "In the name of Allah, the Merciful."),
                ayah(2, 286, "Allah does not burden a soul beyond that it can bear."),
            ],
            ..LibraryData::default()
        };
        let store = MemoryVerseStore::new(data);

        let a = get_quran_ayah(&store, 2, 153).await.unwrap();
        assert!(a.ayah_en.contains("patience"));
        assert!(matches!(
            get_quran_ayah(&store, 1, 7).await,
            Err(LibraryError::NotFound(_))
        ));

        assert_eq!(search_quran(&store, None, None).await.unwrap().len(), 3);
        assert_eq!(search_quran(&store, None, Some(2)).await.unwrap().len(), 2);
        let hits = search_quran(&store, Some("fatiha"), None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].surah_no, 1);
    }
}
