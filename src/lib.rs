//! # Roko
//!
//! Offline scripture reflection for the Bhagavad Gita, the Bible and the
//! Quran.
//!
//! At the core sits a rule-based text pipeline: citations are parsed out of
//! free text, questions are matched against a hand-written knowledge base
//! of verse cards and concept cards, and replies are rendered in one of
//! four response modes. Around it sit a lexicon sentiment scorer, a
//! voice-assistant intent matcher with a wake-word session, a verse
//! library with daily picks and quizzes, a CLI and a JSON HTTP API.
//!
//! ## Architecture
//!
//! ```text
//!  question ─▶ reference ─┐
//!              matcher  ──┼─▶ respond ─▶ assistant ─┐
//!              knowledge ─┘                         │
//!  utterance ─▶ sentiment + intent ─▶ session ──────┤
//!                                                   ├─▶ CLI (roko)
//!  library.json ─▶ store ─▶ library / daily / quiz ─┤
//!                                                   └─▶ HTTP server
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! roko ask "Give moral from Gita 2:47"
//! roko sentiment "I am really happy today"
//! roko verse get 2 47 --config ./config/roko.toml
//! roko serve --config ./config/roko.toml
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`reference`] | Gita, Quran and Bible citation parsing |
//! | [`knowledge`] | Static verse and concept cards |
//! | [`matcher`] | Reference, concept and topic matching |
//! | [`respond`] | Response modes and reply templates |
//! | [`assistant`] | Offline question-answering pipeline |
//! | [`sentiment`] | Lexicon sentiment scoring |
//! | [`intent`] | Voice-assistant intent matching |
//! | [`session`] | Wake-word conversation session |
//! | [`translate`] | Telugu explanations with provider fallback and cache |
//! | [`models`] | Library record types |
//! | [`store`] | Verse storage abstraction and in-memory backend |
//! | [`library`] | Validated verse lookups |
//! | [`daily`] | Verse of the day |
//! | [`quiz`] | Quiz selection and scoring |
//! | [`config`] | TOML configuration parsing |
//! | [`verse_cmd`] | `roko verse` and `roko daily` output |
//! | [`interactive`] | Line-driven `converse` and `quiz` loops |
//! | [`server`] | JSON HTTP API |

pub mod assistant;
pub mod config;
pub mod daily;
pub mod interactive;
pub mod intent;
pub mod knowledge;
pub mod library;
pub mod matcher;
pub mod models;
pub mod quiz;
pub mod reference;
pub mod respond;
pub mod sentiment;
pub mod server;
pub mod session;
pub mod store;
pub mod translate;
pub mod verse_cmd;
