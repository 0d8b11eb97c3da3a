//! FAQ matching: pick the stored answer whose question best matches a
//! free-text user question, with a confidence score in `[0, 1]`.

pub mod comparison;
pub mod config;
pub mod error;
pub mod eval;
pub mod materials;
pub mod model;
pub mod normalize;
pub mod responder;
pub mod retrieval;
pub mod scoring;
pub mod sequence;
pub mod storage;

pub use comparison::is_comparison_question;
pub use config::{KeywordBoost, LengthPenalty, MatcherConfig, ScoreWeights, ScoringVariant};
pub use error::{MatchError, Result};
pub use eval::{
    evaluate_cases, load_eval_cases, EvalCase, EvalOutcome, EvalSummary,
    DEFAULT_REQUIRED_PASS_RATE,
};
pub use materials::{comparison_response, MaterialDefinition, MATERIAL_DEFINITIONS};
pub use model::{ChatLogEntry, ChatReply, Decision, FaqEntry, MatchResult, MatchSource};
pub use normalize::{normalize, normalize_basic, normalize_with};
pub use responder::{Responder, DEFAULT_FALLBACK_MESSAGE, DEFAULT_THRESHOLD};
pub use retrieval::{get_best_answer, Matcher};
pub use scoring::{score, PreparedText, Scorer};
pub use sequence::sequence_ratio;
pub use storage::{
    append_chat_log, default_entries, load_chat_log, load_entries_csv, load_entries_jsonl,
    load_faq_dir, load_faqs, load_faqs_or_default, save_entries_jsonl,
};
