//! Multiple-choice quiz over the library's question bank.
//!
//! [`start_quiz`] filters the bank by collection and difficulty, rotates
//! the pool by a caller-supplied seed and keeps between 5 and 20
//! questions. A [`QuizSession`] then walks them in order:
//!
//! ```text
//!   question ──answer──▶ answered ──next──▶ question …
//!                           │
//!                           └─ last question answered ──▶ complete
//! ```
//!
//! Each question takes one answer; later answers are ignored.

use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{QuizQuestion, VerseKind};
use crate::store::VerseStore;

pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The stored difficulty to match, or `None` for no filter.
    pub fn filter(self) -> Option<&'static str> {
        match self {
            Difficulty::All => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Difficulty::All),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}': expected all, easy, medium, or hard",
                other
            )),
        }
    }
}

/// Clamp a requested question count to the supported range.
pub fn clamp_count(requested: usize) -> usize {
    requested.clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}

/// Rotate `pool` left by `seed % len` and keep the first `count` (clamped)
/// questions.
pub fn select_questions(
    mut pool: Vec<QuizQuestion>,
    count: usize,
    seed: u64,
) -> Vec<QuizQuestion> {
    if pool.is_empty() {
        return pool;
    }
    let shift = (seed % pool.len() as u64) as usize;
    pool.rotate_left(shift);
    pool.truncate(clamp_count(count));
    pool
}

/// Load questions and begin a session. Returns `None` when nothing
/// matches the filters.
pub async fn start_quiz(
    store: &dyn VerseStore,
    religion: VerseKind,
    difficulty: Difficulty,
    count: usize,
    seed: u64,
) -> Result<Option<QuizSession>> {
    let pool = store.quiz_questions(religion, difficulty.filter()).await?;
    let questions = select_questions(pool, count, seed);
    tracing::debug!(
        %religion,
        ?difficulty,
        selected = questions.len(),
        "quiz started"
    );
    Ok(QuizSession::new(questions))
}

/// Feedback for one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<String>,
    score: usize,
}

impl QuizSession {
    /// `None` for an empty question list.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
        })
    }

    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Record an answer (`A`–`D`, any case) for the current question.
    ///
    /// Returns `None` if the question was already answered.
    pub fn answer(&mut self, key: &str) -> Option<AnswerOutcome> {
        if self.selected.is_some() {
            return None;
        }
        let key = key.trim().to_ascii_uppercase();
        let question = &self.questions[self.current];
        let correct = key == question.correct_answer;
        if correct {
            self.score += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        };
        self.selected = Some(key);
        Some(outcome)
    }

    /// Move to the next question. Returns `false` on the last one.
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.questions.len() {
            return false;
        }
        self.current += 1;
        self.selected = None;
        true
    }

    /// The last question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current + 1 == self.questions.len() && self.selected.is_some()
    }

    /// `round(score / total * 100)`.
    pub fn percentage(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        (self.score as f64 / total as f64 * 100.0).round() as u32
    }

    /// Closing remark for the final score.
    pub fn verdict(&self) -> &'static str {
        match self.percentage() {
            p if p >= 80 => "Excellent! You have strong knowledge of these scriptures.",
            p if p >= 60 => "Good effort! Keep exploring to deepen your understanding.",
            _ => "Keep learning! Try exploring the verses and taking the quiz again.",
        }
    }

    /// Start over on the same questions with a zero score.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.score = 0;
    }
}
