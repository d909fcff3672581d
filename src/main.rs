//! # Roko CLI (`roko`)
//!
//! ## Usage
//!
//! ```bash
//! roko --config ./config/roko.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `roko ask "<question>"` | Offline assistant reply |
//! | `roko sentiment "<text>"` | Lexicon sentiment score |
//! | `roko intent "<text>"` | Voice-assistant intent match |
//! | `roko parse-ref "<text>"` | Extract a scripture citation |
//! | `roko converse` | Wake-word conversation on stdin |
//! | `roko verse get <chapter> <verse>` | One Gita sloka |
//! | `roko verse chapter <chapter>` | All slokas of a chapter |
//! | `roko verse all` | Every sloka, optionally limited |
//! | `roko verse search "<term>"` | Search translations and commentary |
//! | `roko verse bible <book> <chapter> <verse>` | One Bible verse |
//! | `roko verse quran <surah> <ayah>` | One Quran ayah |
//! | `roko verse quran-search [query]` | Browse or search the Quran |
//! | `roko daily` | Verse of the day |
//! | `roko quiz` | Interactive quiz on stdin |
//! | `roko serve` | Start the JSON HTTP server |
//!
//! `ask`, `sentiment`, `intent`, `parse-ref` and `converse` fall back to
//! built-in defaults when the config file is missing. Everything else
//! needs `[library].path` from the config.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roko::assistant::answer;
use roko::config::{self, Config};
use roko::daily::date_seed;
use roko::intent::match_intent;
use roko::interactive;
use roko::models::VerseKind;
use roko::quiz::Difficulty;
use roko::reference::parse_reference;
use roko::sentiment::analyze_sentiment;
use roko::server;
use roko::verse_cmd;

/// Offline scripture reflection for the Gita, the Bible and the Quran.
///
/// Library commands read the TOML file given by `--config`. See
/// `config/roko.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "roko",
    about = "Roko: offline scripture reflection for the Gita, the Bible and the Quran",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/roko.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the offline assistant a question.
    ///
    /// Understands references ("Gita 2:47", "Bible James 1:5"), concepts
    /// ("karma yoga"), comparisons and topics, and answers in full,
    /// summary, moral or practice mode depending on the wording.
    Ask {
        question: String,

        /// Print the reply, pipeline step and mode as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Score the sentiment of a piece of text.
    Sentiment {
        text: String,

        /// Print the score as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Match text against the voice-assistant intents.
    Intent { text: String },

    /// Extract a Gita, Quran or Bible reference from text.
    ParseRef { text: String },

    /// Talk to the wake-word assistant, one utterance per line.
    ///
    /// Say a wake word first; the next line is answered. Type `/reset` to
    /// clear the conversation.
    Converse,

    /// Look up verses in the library.
    Verse {
        #[command(subcommand)]
        action: VerseAction,
    },

    /// Show the verse of the day.
    Daily {
        /// Date to resolve (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },

    /// Take a multiple-choice quiz.
    Quiz {
        /// Question bank: gita, bible, or quran.
        #[arg(long, default_value = "gita")]
        religion: VerseKind,

        /// all, easy, medium, or hard.
        #[arg(long, default_value = "all")]
        difficulty: Difficulty,

        /// Number of questions (5-20). Defaults to `[quiz].default_questions`.
        #[arg(long)]
        count: Option<usize>,

        /// Selection seed. Defaults to the current time.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the JSON HTTP server on `[server].bind`.
    Serve,
}

#[derive(Subcommand)]
enum VerseAction {
    /// One Gita sloka by chapter and verse.
    Get { chapter: u32, verse: u32 },

    /// All slokas of a Gita chapter.
    Chapter { chapter: u32 },

    /// Every Gita sloka by chapter and verse.
    All {
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search Gita translations and commentary.
    Search { term: String },

    /// One Bible verse.
    Bible {
        book: String,
        chapter: u32,
        verse: u32,
    },

    /// One Quran ayah.
    Quran { surah: u32, ayah: u32 },

    /// Browse or search Quran ayahs by text or surah name.
    QuranSearch {
        query: Option<String>,

        /// Only ayahs of this surah.
        #[arg(long)]
        surah: Option<u32>,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.command {
        Commands::Ask { .. }
        | Commands::Sentiment { .. }
        | Commands::Intent { .. }
        | Commands::ParseRef { .. }
        | Commands::Converse => {
            // Use config if available, otherwise a minimal default
            config::load_config(&cli.config).unwrap_or_else(|_| Config::minimal())
        }
        _ => config::load_config(&cli.config)?,
    };
    init_tracing(&cfg.logging.filter);

    match cli.command {
        Commands::Ask { question, json } => {
            let reply = answer(&question);
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.text);
            }
        }
        Commands::Sentiment { text, json } => {
            let score = analyze_sentiment(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
            } else {
                println!(
                    "{} (score: {:.2}, confidence: {:.2})",
                    score.sentiment, score.score, score.confidence
                );
            }
        }
        Commands::Intent { text } => {
            let result = match_intent(&text);
            println!("intent: {}", result.intent.unwrap_or("none"));
            println!("{}", result.response);
        }
        Commands::ParseRef { text } => match parse_reference(&text) {
            Some(reference) => println!("{}", reference),
            None => println!("No reference found."),
        },
        Commands::Converse => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run_converse(&cfg, stdin.lock(), stdout.lock())?;
        }
        Commands::Verse { action } => match action {
            VerseAction::Get { chapter, verse } => {
                verse_cmd::run_get(&cfg, chapter, verse).await?;
            }
            VerseAction::Chapter { chapter } => {
                verse_cmd::run_chapter(&cfg, chapter).await?;
            }
            VerseAction::All { limit } => {
                verse_cmd::run_all(&cfg, limit).await?;
            }
            VerseAction::Search { term } => {
                verse_cmd::run_search(&cfg, &term).await?;
            }
            VerseAction::Bible {
                book,
                chapter,
                verse,
            } => {
                verse_cmd::run_bible(&cfg, &book, chapter, verse).await?;
            }
            VerseAction::Quran { surah, ayah } => {
                verse_cmd::run_quran(&cfg, surah, ayah).await?;
            }
            VerseAction::QuranSearch { query, surah } => {
                verse_cmd::run_quran_search(&cfg, query.as_deref(), surah).await?;
            }
        },
        Commands::Daily { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            verse_cmd::run_daily(&cfg, date).await?;
        }
        Commands::Quiz {
            religion,
            difficulty,
            count,
            seed,
        } => {
            let seed = seed.unwrap_or_else(|| {
                let now = chrono::Local::now();
                date_seed(now.date_naive()) ^ u64::from(now.timestamp_subsec_nanos())
            });
            interactive::run_quiz_cmd(&cfg, religion, difficulty, count, seed).await?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
