//! `roko verse …` and `roko daily`: print library lookups to stdout.

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::Config;
use crate::daily::{verse_of_the_day, DailyPick};
use crate::library;
use crate::models::GitaVerse;
use crate::store::memory::MemoryVerseStore;

fn open_store(config: &Config) -> Result<MemoryVerseStore> {
    MemoryVerseStore::open(&config.library.path)
}

fn print_verse_line(v: &GitaVerse) {
    println!("{:>2}.{:<3} {}", v.chapter, v.verse, v.translation_en);
}

pub async fn run_get(config: &Config, chapter: u32, verse: u32) -> Result<()> {
    let store = open_store(config)?;
    let sloka = library::get_sloka(&store, chapter, verse).await?;

    println!("Bhagavad Gita {}:{}", sloka.chapter, sloka.verse);
    println!();
    println!("{}", sloka.sloka);
    println!("{}", sloka.transliteration);
    println!();
    println!("English:    {}", sloka.translation.english);
    println!("Hindi:      {}", sloka.translation.hindi);
    if !sloka.meaning.commentary.is_empty() {
        println!("Commentary: {}", sloka.meaning.commentary);
    }
    if let Some(url) = &sloka.audio {
        println!("Audio:      {}", url);
    }
    Ok(())
}

pub async fn run_chapter(config: &Config, chapter: u32) -> Result<()> {
    let store = open_store(config)?;
    let listing = library::get_chapter(&store, chapter).await?;

    println!("Chapter {} ({} verses)", listing.chapter, listing.total_verses);
    for v in &listing.verses {
        print_verse_line(v);
    }
    Ok(())
}

pub async fn run_all(config: &Config, limit: Option<usize>) -> Result<()> {
    let store = open_store(config)?;
    for v in &library::get_all(&store, limit).await? {
        print_verse_line(v);
    }
    Ok(())
}

pub async fn run_search(config: &Config, term: &str) -> Result<()> {
    let store = open_store(config)?;
    let hits = library::search_slokas(&store, term).await?;
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    println!("{} result(s) for \"{}\":", hits.len(), term.trim());
    for v in &hits {
        print_verse_line(v);
    }
    Ok(())
}

pub async fn run_bible(config: &Config, book: &str, chapter: u32, verse: u32) -> Result<()> {
    let store = open_store(config)?;
    let v = library::get_bible_verse(&store, book, chapter, verse).await?;
    println!("{} {}:{} ({:?} Testament)", v.book, v.chapter, v.verse, v.testament);
    println!("{}", v.text);
    Ok(())
}

pub async fn run_quran(config: &Config, surah: u32, ayah: u32) -> Result<()> {
    let store = open_store(config)?;
    let a = library::get_quran_ayah(&store, surah, ayah).await?;
    match &a.surah_name_roman {
        Some(roman) => println!(
            "Quran {}:{} ({}, {})",
            a.surah_no, a.ayah_no_surah, roman, a.surah_name_en
        ),
        None => println!("Quran {}:{} ({})", a.surah_no, a.ayah_no_surah, a.surah_name_en),
    }
    if !a.ayah_ar.is_empty() {
        println!("{}", a.ayah_ar);
    }
    println!("{}", a.ayah_en);
    Ok(())
}

pub async fn run_quran_search(
    config: &Config,
    query: Option<&str>,
    surah: Option<u32>,
) -> Result<()> {
    let store = open_store(config)?;
    let ayahs = library::search_quran(&store, query, surah).await?;
    if ayahs.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for a in &ayahs {
        println!("{:>3}:{:<3} {}", a.surah_no, a.ayah_no_surah, a.ayah_en);
    }
    Ok(())
}

pub async fn run_daily(config: &Config, date: NaiveDate) -> Result<()> {
    let store = open_store(config)?;
    let Some(state) = verse_of_the_day(&store, date).await? else {
        println!("No verses available for {}.", date);
        return Ok(());
    };

    println!("Verse of the day for {}", state.date);
    if state.is_fallback {
        println!("(chosen by date; no curated verse for today)");
    }
    println!();
    println!("{}", state.pick.heading());
    if let DailyPick::Gita(v) = &state.pick {
        println!("{}", v.sanskrit);
    }
    println!("{}", state.pick.text());
    Ok(())
}
