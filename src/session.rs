//! Wake-word conversation session for the voice assistant.
//!
//! A session alternates between two states. While **awaiting** it ignores
//! everything except a wake word; once **active** it answers exactly one
//! utterance and goes back to awaiting.
//!
//! ```text
//!   awaiting ──wake word──▶ active ──utterance──▶ awaiting
//! ```

use serde::Serialize;

use crate::intent::{match_intent_at, IntentResult};
use crate::sentiment::{analyze_sentiment, empathetic_response, Sentiment};

pub const WAKE_REPLY: &str = "Roko here! How can I help you today?";

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Roko,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// The assistant's answer to one processed utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantTurn {
    pub reply: String,
    pub sentiment: Sentiment,
    pub intent: IntentResult,
}

/// Sentiment-aware reply: the intent response, prefixed with an
/// empathetic opener unless the text is neutral.
pub fn respond_to(text: &str, now: chrono::NaiveTime, pick: usize) -> AssistantTurn {
    let sentiment = analyze_sentiment(text).sentiment;
    let intent = match_intent_at(text, now);
    let reply = if sentiment == Sentiment::Neutral {
        intent.response.clone()
    } else {
        format!("{} {}", empathetic_response(sentiment, pick), intent.response)
    };
    AssistantTurn {
        reply,
        sentiment,
        intent,
    }
}

#[derive(Debug, Clone)]
pub struct VoiceSession {
    wake_words: Vec<String>,
    active: bool,
    transcript: Vec<Message>,
}

impl VoiceSession {
    pub fn new(wake_words: &[String]) -> Self {
        Self {
            wake_words: wake_words.iter().map(|w| w.to_lowercase()).collect(),
            active: false,
            transcript: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Feed one recognised utterance.
    ///
    /// Returns the assistant's reply text, or `None` when the session is
    /// awaiting and the utterance holds no wake word.
    pub fn handle_utterance(
        &mut self,
        text: &str,
        now: chrono::NaiveTime,
        pick: usize,
    ) -> Option<String> {
        if !self.active {
            let lower = text.to_lowercase();
            if !self.wake_words.iter().any(|w| lower.contains(w.as_str())) {
                return None;
            }
            tracing::debug!("wake word heard");
            self.push(Speaker::Roko, WAKE_REPLY.to_string(), None);
            self.active = true;
            return Some(WAKE_REPLY.to_string());
        }

        self.push(Speaker::User, text.to_string(), None);
        let turn = respond_to(text, now, pick);
        self.push(Speaker::Roko, turn.reply.clone(), Some(turn.sentiment));
        self.active = false;
        Some(turn.reply)
    }

    /// Clear the transcript and return to awaiting the wake word.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.active = false;
    }

    fn push(&mut self, speaker: Speaker, text: String, sentiment: Option<Sentiment>) {
        self.transcript.push(Message {
            speaker,
            text,
            sentiment,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn session() -> VoiceSession {
        VoiceSession::new(&["hey roko".to_string(), "roko".to_string()])
    }

    fn t() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_ignores_speech_before_wake_word() {
        let mut s = session();
        assert_eq!(s.handle_utterance("play music", t(), 0), None);
        assert!(!s.is_active());
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_wake_then_answer_then_sleep() {
        let mut s = session();
        assert_eq!(
            s.handle_utterance("Hey Roko", t(), 0).as_deref(),
            Some(WAKE_REPLY)
        );
        assert!(s.is_active());

        let reply = s.handle_utterance("play relaxing music", t(), 0).unwrap();
        assert_eq!(reply, "Playing relaxing music for you. Enjoy!");
        assert!(!s.is_active());

        let lines: Vec<_> = s.transcript().iter().map(|m| m.speaker).collect();
        assert_eq!(lines, vec![Speaker::Roko, Speaker::User, Speaker::Roko]);
        assert_eq!(s.transcript()[2].sentiment, Some(Sentiment::Neutral));
    }

    #[test]
    fn test_negative_mood_gets_empathetic_prefix() {
        let turn = respond_to("I am not happy, play calming music", t(), 1);
        assert_eq!(turn.sentiment, Sentiment::Negative);
        assert_eq!(
            turn.reply,
            "That sounds challenging. Let me assist you with what you need. Playing calming music for you. Enjoy!"
        );
    }

    #[test]
    fn test_plain_negative_words_get_no_prefix() {
        let turn = respond_to("I am so stressed, play calming music", t(), 1);
        assert_eq!(turn.sentiment, Sentiment::Neutral);
        assert_eq!(turn.reply, "Playing calming music for you. Enjoy!");
    }

    #[test]
    fn test_positive_mood_gets_empathetic_prefix() {
        let turn = respond_to("I am so happy, play calming music", t(), 0);
        assert_eq!(turn.sentiment, Sentiment::Positive);
        assert_eq!(
            turn.reply,
            "That's wonderful! I'm glad to help you with that. Playing calming music for you. Enjoy!"
        );
    }

    #[test]
    fn test_reset_returns_to_awaiting() {
        let mut s = session();
        s.handle_utterance("roko", t(), 0);
        s.reset();
        assert!(!s.is_active());
        assert!(s.transcript().is_empty());
    }
}
