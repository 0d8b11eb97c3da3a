use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::{MatcherConfig, ScoringVariant};
use crate::materials::is_material_keyword;
use crate::normalize::normalize_with;
use crate::sequence::SequenceMatcher;

/// Normalized text with the views the scorer needs, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedText {
    pub normalized: String,
    chars: Vec<char>,
    words: HashSet<String>,
}

impl PreparedText {
    pub fn new(text: &str, remove_stop_words: bool) -> Self {
        let normalized = normalize_with(text, remove_stop_words);
        let chars = normalized.chars().collect();
        let words = normalized.split_whitespace().map(str::to_string).collect();
        Self {
            normalized,
            chars,
            words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: MatcherConfig,
}

impl Scorer {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn prepare(&self, text: &str) -> PreparedText {
        PreparedText::new(text, self.config.remove_stop_words)
    }

    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        self.score_prepared(&self.prepare(query), &self.prepare(candidate))
    }

    /// Similarity in [0, 1] between two prepared texts.
    ///
    /// NaN only comes out of a non-finite configuration and is passed
    /// through; callers treat it as a scoring failure.
    pub fn score_prepared(&self, query: &PreparedText, candidate: &PreparedText) -> f64 {
        if query.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        let sequence = SequenceMatcher::new(&query.chars, &candidate.chars).ratio();
        if self.config.variant == ScoringVariant::SequenceRatio {
            return sequence;
        }
        if query.words.is_empty() || candidate.words.is_empty() {
            return sequence;
        }

        let shared = query.words.intersection(&candidate.words).count() as f64;
        let (q_len, c_len) = (query.word_count() as f64, candidate.word_count() as f64);
        let shorter = q_len.min(c_len);
        let longer = q_len.max(c_len);

        let jaccard = shared / (q_len + c_len - shared);
        let coverage = shared / shorter;

        let weights = &self.config.weights;
        let mut weighted =
            sequence * weights.sequence + jaccard * weights.jaccard + coverage * weights.coverage;

        let penalty = &self.config.length_penalty;
        if shorter / longer < penalty.min_ratio {
            weighted *= penalty.factor;
        }

        let keywords = query
            .words
            .iter()
            .filter(|w| is_material_keyword(w) && candidate.words.contains(*w))
            .count();
        if keywords > 0 {
            let boost = self.config.keyword_boost;
            weighted += (boost.per_keyword * keywords as f64).min(boost.max);
        }

        // clamp keeps NaN, unlike min/max.
        weighted.clamp(0.0, 1.0)
    }
}

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Blended similarity with the default configuration.
pub fn score(query: &str, candidate: &str) -> f64 {
    DEFAULT_SCORER.score(query, candidate)
}
