//! Line-driven terminal loops: `roko converse` and `roko quiz`.
//!
//! Both loops take a reader and a writer so they run the same against
//! stdin/stdout and against in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;

use crate::config::Config;
use crate::models::VerseKind;
use crate::quiz::{start_quiz, Difficulty, QuizSession};
use crate::session::VoiceSession;
use crate::store::memory::MemoryVerseStore;

/// Typed in place of an utterance to clear the transcript.
const RESET_COMMAND: &str = "/reset";

/// Feed each input line to a wake-word session and print the replies.
pub fn run_converse<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> Result<()> {
    let mut session = VoiceSession::new(&config.assistant.wake_words);
    if let Some(wake) = config.assistant.wake_words.first() {
        writeln!(out, "Say \"{}\" to begin. End input to quit.", wake)?;
    }

    for (turn, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == RESET_COMMAND {
            session.reset();
            writeln!(out, "(session reset)")?;
            continue;
        }
        match session.handle_utterance(text, Local::now().time(), turn) {
            Some(reply) => writeln!(out, "{}: {}", config.assistant.name, reply)?,
            None => tracing::debug!(text, "ignored: no wake word"),
        }
    }
    Ok(())
}

/// Ask every question of `session`, reading one answer per prompt.
///
/// Input that is not `A`–`D` is re-prompted. Running out of input
/// abandons the quiz without a score.
pub fn run_quiz<R: BufRead, W: Write>(
    mut session: QuizSession,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        let question = session.current();
        writeln!(out)?;
        writeln!(
            out,
            "Question {} of {} (score {})",
            session.position() + 1,
            session.total(),
            session.score()
        )?;
        writeln!(out, "{}", question.question)?;
        for (key, text) in question.options() {
            writeln!(out, "  {}) {}", key, text)?;
        }

        let key = loop {
            write!(out, "Your answer [A-D]: ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                writeln!(out, "Quiz abandoned.")?;
                return Ok(());
            };
            let key = line?.trim().to_ascii_uppercase();
            if matches!(key.as_str(), "A" | "B" | "C" | "D") {
                break key;
            }
            writeln!(out, "Please answer A, B, C, or D.")?;
        };

        if let Some(outcome) = session.answer(&key) {
            if outcome.correct {
                writeln!(out, "Correct!")?;
            } else {
                writeln!(out, "Not quite right! The answer is {}.", outcome.correct_answer)?;
            }
            if !outcome.explanation.is_empty() {
                writeln!(out, "{}", outcome.explanation)?;
            }
        }

        if !session.next() {
            break;
        }
    }

    writeln!(out)?;
    writeln!(out, "Quiz Complete! {}%", session.percentage())?;
    writeln!(
        out,
        "You answered {} out of {} questions correctly.",
        session.score(),
        session.total()
    )?;
    writeln!(out, "{}", session.verdict())?;
    Ok(())
}

/// `roko quiz`: load questions from the library and quiz on stdin/stdout.
pub async fn run_quiz_cmd(
    config: &Config,
    religion: VerseKind,
    difficulty: Difficulty,
    count: Option<usize>,
    seed: u64,
) -> Result<()> {
    let store = MemoryVerseStore::open(&config.library.path)?;
    let count = count.unwrap_or(config.quiz.default_questions);
    let Some(session) = start_quiz(&store, religion, difficulty, count, seed).await? else {
        println!("No {} questions found (difficulty: {:?}).", religion, difficulty);
        return Ok(());
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_quiz(session, stdin.lock(), stdout.lock())
}
