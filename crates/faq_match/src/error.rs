use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const NO_DATA_ANSWER: &str = "I don't have any information in my database yet.";
pub const EMPTY_QUESTION_ANSWER: &str = "Please ask a question.";
pub const PROCESSING_ERROR_ANSWER: &str =
    "I'm sorry, I encountered an error while processing your question.";

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("no FAQ entries available")]
    EmptyCandidateSet,

    #[error("question is empty")]
    EmptyQuery,

    #[error("scoring failed for candidate {index}: {reason}")]
    Scoring { index: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{path}: missing Question/Answer columns (found {found:?})")]
    MissingColumns { path: PathBuf, found: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MatchError {
    /// Zero-confidence answer shown in place of a match when this error occurs.
    pub fn fallback_answer(&self) -> &'static str {
        match self {
            MatchError::EmptyCandidateSet => NO_DATA_ANSWER,
            MatchError::EmptyQuery => EMPTY_QUESTION_ANSWER,
            _ => PROCESSING_ERROR_ANSWER,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
