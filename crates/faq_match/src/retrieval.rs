use std::sync::LazyLock;

use rayon::prelude::*;
use tracing::{debug, error, warn};

use crate::comparison::is_comparison_question;
use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::materials::comparison_response;
use crate::model::{FaqEntry, MatchResult, MatchSource};
use crate::scoring::{PreparedText, Scorer};

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    scorer: Scorer,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: Scorer::new(config),
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        self.scorer.config()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Best stored answer for `question`, or the error that prevented one.
    pub fn try_best_answer(&self, question: &str, entries: &[FaqEntry]) -> Result<MatchResult> {
        if entries.is_empty() {
            return Err(MatchError::EmptyCandidateSet);
        }
        if question.trim().is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        let config = self.config();
        if config.detect_comparisons && is_comparison_question(question) {
            debug!(question, "answering as material comparison");
            return Ok(MatchResult {
                answer: comparison_response().to_string(),
                confidence: config.comparison_confidence,
                source: MatchSource::Comparison,
            });
        }

        let query = self.scorer.prepare(question);
        let (index, score) = self.top_match(&query, entries)?;
        let entry = &entries[index];

        debug!(
            score,
            index,
            matched_question = %entry.question,
            "best match"
        );

        Ok(MatchResult {
            answer: entry.answer.clone(),
            confidence: score,
            source: MatchSource::Faq(index),
        })
    }

    /// Like [`Matcher::try_best_answer`], with errors turned into
    /// zero-confidence fallback answers.
    pub fn best_answer(&self, question: &str, entries: &[FaqEntry]) -> MatchResult {
        match self.try_best_answer(question, entries) {
            Ok(result) => result,
            Err(err) => {
                match &err {
                    MatchError::EmptyCandidateSet => warn!("no FAQ data available"),
                    MatchError::EmptyQuery => {}
                    other => error!(error = %other, "error finding best answer"),
                }
                MatchResult {
                    answer: err.fallback_answer().to_string(),
                    confidence: 0.0,
                    source: MatchSource::Fallback,
                }
            }
        }
    }

    /// Highest score and the first index reaching it.
    fn top_match(&self, query: &PreparedText, entries: &[FaqEntry]) -> Result<(usize, f64)> {
        let scored = |(index, entry): (usize, &FaqEntry)| -> Result<(usize, f64)> {
            let candidate = self.scorer.prepare(&entry.question);
            let score = self.scorer.score_prepared(query, &candidate);
            if score.is_finite() {
                Ok((index, score))
            } else {
                Err(MatchError::Scoring {
                    index,
                    reason: format!("non-finite score {score}"),
                })
            }
        };

        let best = if entries.len() >= self.config().parallel_min_candidates {
            // Reduction keeps input order, so ties still resolve to the
            // earliest entry.
            entries
                .par_iter()
                .enumerate()
                .map(scored)
                .try_reduce_with(|left, right| Ok(prefer_first(left, right)))
                .transpose()?
        } else {
            let mut best: Option<(usize, f64)> = None;
            for item in entries.iter().enumerate() {
                let candidate = scored(item)?;
                best = Some(match best {
                    Some(current) => prefer_first(current, candidate),
                    None => candidate,
                });
            }
            best
        };

        best.ok_or(MatchError::EmptyCandidateSet)
    }
}

fn prefer_first(left: (usize, f64), right: (usize, f64)) -> (usize, f64) {
    if right.1 > left.1 { right } else { left }
}

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(Matcher::default);

/// Best answer and confidence using the default blended configuration.
pub fn get_best_answer(question: &str, entries: &[FaqEntry]) -> MatchResult {
    DEFAULT_MATCHER.best_answer(question, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreWeights;
    use crate::error::{EMPTY_QUESTION_ANSWER, NO_DATA_ANSWER, PROCESSING_ERROR_ANSWER};

    fn mdf_entries() -> Vec<FaqEntry> {
        vec![FaqEntry::new("What is MDF?", "MDF is...").with_material("MDF")]
    }

    #[test]
    fn empty_candidates_return_no_data() {
        let result = get_best_answer("What is MDF?", &[]);
        assert_eq!(result.answer, NO_DATA_ANSWER);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.source, MatchSource::Fallback);

        let result = get_best_answer("", &[]);
        assert_eq!(result.answer, NO_DATA_ANSWER);
    }

    #[test]
    fn empty_question_asks_for_input() {
        let result = get_best_answer("", &mdf_entries());
        assert_eq!(result.answer, EMPTY_QUESTION_ANSWER);
        assert_eq!(result.confidence, 0.0);

        assert!(matches!(
            Matcher::default().try_best_answer("   ", &mdf_entries()),
            Err(MatchError::EmptyQuery)
        ));
    }

    #[test]
    fn paraphrase_finds_stored_answer() {
        let result = get_best_answer("what's mdf", &mdf_entries());
        assert_eq!(result.entry_index(), Some(0));
        assert_eq!(result.answer, "MDF is...");
        assert!(result.confidence > 0.3);
    }

    #[test]
    fn unrelated_question_has_low_confidence() {
        let result = get_best_answer("how do I bake a cake", &mdf_entries());
        assert!(result.confidence < 0.3);
    }

    #[test]
    fn comparison_bypasses_scoring() {
        let entries = vec![FaqEntry::new("Opening hours?", "9 to 6")];
        let result = get_best_answer("MDF vs HDHMR", &entries);
        assert_eq!(result.answer, comparison_response());
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.source, MatchSource::Comparison);
    }

    #[test]
    fn comparison_detection_can_be_disabled() {
        let matcher = Matcher::new(MatcherConfig::legacy()).expect("matcher");
        let result = matcher.best_answer("MDF vs HDHMR", &mdf_entries());
        assert_eq!(result.source, MatchSource::Faq(0));
    }

    #[test]
    fn picks_highest_scoring_entry() {
        let entries = vec![
            FaqEntry::new("What is MDF?", "mdf"),
            FaqEntry::new("What is the price of MDF?", "price"),
            FaqEntry::new("How do I clean HDHMR?", "clean"),
        ];
        let result = get_best_answer("what mdf price", &entries);
        assert_eq!(result.entry_index(), Some(1));
        assert!((result.confidence - 0.964_285_714_285_714_4).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        let entries = vec![
            FaqEntry::new("What is MDF?", "first"),
            FaqEntry::new("What is MDF?", "second"),
        ];
        for _ in 0..10 {
            let result = get_best_answer("what's mdf", &entries);
            assert_eq!(result.answer, "first");
        }
    }

    #[test]
    fn parallel_scan_keeps_first_of_ties() {
        let mut entries: Vec<FaqEntry> = (0..600)
            .map(|i| FaqEntry::new(format!("unrelated topic {i}"), format!("a{i}")))
            .collect();
        entries[317] = FaqEntry::new("What is MDF?", "winner");
        entries[450] = FaqEntry::new("What is MDF?", "late twin");

        let matcher = Matcher::new(MatcherConfig {
            parallel_min_candidates: 1,
            ..MatcherConfig::default()
        })
        .expect("matcher");
        for _ in 0..10 {
            let result = matcher.best_answer("what's mdf", &entries);
            assert_eq!(result.entry_index(), Some(317));
        }
        assert_eq!(
            matcher.best_answer("what's mdf", &entries),
            Matcher::default().best_answer("what's mdf", &entries)
        );
    }

    #[test]
    fn non_finite_score_becomes_processing_error() {
        // Validation rejects this, so build the scorer directly.
        let matcher = Matcher {
            scorer: Scorer::new(MatcherConfig {
                weights: ScoreWeights {
                    sequence: f64::NAN,
                    jaccard: 0.5,
                    coverage: 0.2,
                },
                ..MatcherConfig::default()
            }),
        };
        let err = matcher
            .try_best_answer("what's mdf", &mdf_entries())
            .expect_err("nan score");
        assert!(matches!(err, MatchError::Scoring { index: 0, .. }));

        let result = matcher.best_answer("what's mdf", &mdf_entries());
        assert_eq!(result.answer, PROCESSING_ERROR_ANSWER);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = MatcherConfig {
            comparison_confidence: 2.0,
            ..MatcherConfig::default()
        };
        assert!(Matcher::new(config).is_err());
    }
}
