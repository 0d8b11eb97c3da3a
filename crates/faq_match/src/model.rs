use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            material: None,
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum MatchSource {
    /// Index into the candidate slice of the best-scoring entry.
    Faq(usize),
    Comparison,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub answer: String,
    pub confidence: f64,
    pub source: MatchSource,
}

impl MatchResult {
    pub fn entry_index(&self) -> Option<usize> {
        match self.source {
            MatchSource::Faq(index) => Some(index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Hit,
    Miss,
}

/// Final user-visible reply after the confidence threshold was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    pub confidence: f64,
    pub decision: Decision,
    pub source: MatchSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLogEntry {
    pub user_question: String,
    pub bot_answer: String,
    pub confidence_score: f64,
    pub timestamp: DateTime<Utc>,
}

impl ChatLogEntry {
    pub fn new(user_question: &str, reply: &ChatReply) -> Self {
        Self {
            user_question: user_question.to_string(),
            bot_answer: reply.answer.clone(),
            confidence_score: reply.confidence,
            timestamp: Utc::now(),
        }
    }
}
