use crate::error::MatchError;
use crate::model::{ChatReply, Decision, FaqEntry, MatchSource};
use crate::retrieval::Matcher;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_FALLBACK_MESSAGE: &str = "I'm sorry, I don't have enough information to answer that question. Please contact our Tesa expert team at support@tesa.com or call us at +91-1234567890, Monday to Saturday, 9 AM to 6 PM.";

/// Applies the confidence threshold on top of a [`Matcher`].
#[derive(Debug, Clone)]
pub struct Responder {
    matcher: Matcher,
    threshold: f64,
    fallback_message: String,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Matcher::default(), DEFAULT_THRESHOLD)
    }
}

impl Responder {
    pub fn new(matcher: Matcher, threshold: f64) -> Self {
        Self {
            matcher,
            threshold,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn reply(&self, question: &str, entries: &[FaqEntry]) -> ChatReply {
        // A blank question is answered with a prompt, not the support message.
        if question.trim().is_empty() {
            return ChatReply {
                answer: MatchError::EmptyQuery.fallback_answer().to_string(),
                confidence: 0.0,
                decision: Decision::Miss,
                source: MatchSource::Fallback,
            };
        }

        let result = self.matcher.best_answer(question, entries);

        // Strictly above the threshold; a score equal to it is a miss.
        if !result.answer.is_empty() && result.confidence > self.threshold {
            ChatReply {
                answer: result.answer,
                confidence: result.confidence,
                decision: Decision::Hit,
                source: result.source,
            }
        } else {
            ChatReply {
                answer: self.fallback_message.clone(),
                confidence: result.confidence,
                decision: Decision::Miss,
                source: result.source,
            }
        }
    }
}
