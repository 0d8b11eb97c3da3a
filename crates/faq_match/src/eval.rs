use std::fs::File;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Decision, FaqEntry, MatchSource};
use crate::responder::Responder;

pub const DEFAULT_REQUIRED_PASS_RATE: f64 = 0.85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub case_id: String,
    pub question: String,
    pub expected_decision: Decision,
    /// When set, a hit must return exactly this answer.
    #[serde(default)]
    pub expected_answer: Option<String>,
    #[serde(default)]
    pub min_similarity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub case_id: String,
    pub passed: bool,
    pub actual_decision: Decision,
    pub actual_answer: String,
    pub source: MatchSource,
    pub score: f64,
    pub latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
    pub outcomes: Vec<EvalOutcome>,
}

impl EvalSummary {
    pub fn meets(&self, required_pass_rate: f64) -> bool {
        self.pass_rate >= required_pass_rate
    }
}

pub fn load_eval_cases(path: &Path) -> Result<Vec<EvalCase>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

impl EvalCase {
    pub fn matches(&self, decision: Decision, answer: &str, score: f64) -> bool {
        if self.expected_decision != decision {
            return false;
        }

        if decision == Decision::Hit {
            if let Some(expected) = &self.expected_answer {
                if expected != answer {
                    return false;
                }
            }
        }

        if let Some(min_sim) = self.min_similarity {
            if score < min_sim {
                return false;
            }
        }

        true
    }
}

pub fn evaluate_cases(
    responder: &Responder,
    entries: &[FaqEntry],
    cases: &[EvalCase],
) -> EvalSummary {
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let start = Instant::now();
        let reply = responder.reply(&case.question, entries);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        outcomes.push(EvalOutcome {
            case_id: case.case_id.clone(),
            passed: case.matches(reply.decision, &reply.answer, reply.confidence),
            actual_decision: reply.decision,
            actual_answer: reply.answer,
            source: reply.source,
            score: reply.confidence,
            latency_ms,
        });
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total.saturating_sub(passed);
    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64
    };

    EvalSummary {
        total,
        passed,
        failed,
        pass_rate,
        outcomes,
    }
}
