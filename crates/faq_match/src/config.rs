use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

pub const DEFAULT_COMPARISON_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_PARALLEL_MIN_CANDIDATES: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringVariant {
    /// Sequence ratio blended with word overlap, length penalty and keyword boost.
    #[default]
    Blended,
    /// Plain sequence ratio of the normalized strings.
    SequenceRatio,
}

impl std::str::FromStr for ScoringVariant {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blended" => Ok(ScoringVariant::Blended),
            "sequence_ratio" | "sequence-ratio" => Ok(ScoringVariant::SequenceRatio),
            other => Err(MatchError::InvalidConfig(format!(
                "unknown scoring variant: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub sequence: f64,
    pub jaccard: f64,
    pub coverage: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sequence: 0.3,
            jaccard: 0.5,
            coverage: 0.2,
        }
    }
}

/// Applied when the shorter word set is less than `min_ratio` of the longer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthPenalty {
    pub min_ratio: f64,
    pub factor: f64,
}

impl Default for LengthPenalty {
    fn default() -> Self {
        Self {
            min_ratio: 0.5,
            factor: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordBoost {
    pub per_keyword: f64,
    pub max: f64,
}

impl Default for KeywordBoost {
    fn default() -> Self {
        Self {
            per_keyword: 0.05,
            max: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub variant: ScoringVariant,
    pub remove_stop_words: bool,
    pub detect_comparisons: bool,
    pub weights: ScoreWeights,
    pub length_penalty: LengthPenalty,
    pub keyword_boost: KeywordBoost,
    pub comparison_confidence: f64,
    pub parallel_min_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            variant: ScoringVariant::Blended,
            remove_stop_words: true,
            detect_comparisons: true,
            weights: ScoreWeights::default(),
            length_penalty: LengthPenalty::default(),
            keyword_boost: KeywordBoost::default(),
            comparison_confidence: DEFAULT_COMPARISON_CONFIDENCE,
            parallel_min_candidates: DEFAULT_PARALLEL_MIN_CANDIDATES,
        }
    }
}

impl MatcherConfig {
    /// Single-ratio scoring without stop words or comparison answers.
    pub fn legacy() -> Self {
        Self {
            variant: ScoringVariant::SequenceRatio,
            remove_stop_words: false,
            detect_comparisons: false,
            ..Self::default()
        }
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: MatcherConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("weights.sequence", self.weights.sequence),
            ("weights.jaccard", self.weights.jaccard),
            ("weights.coverage", self.weights.coverage),
            ("keyword_boost.per_keyword", self.keyword_boost.per_keyword),
            ("keyword_boost.max", self.keyword_boost.max),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let unit = [
            ("length_penalty.min_ratio", self.length_penalty.min_ratio),
            ("length_penalty.factor", self.length_penalty.factor),
            ("comparison_confidence", self.comparison_confidence),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_tuned_constants() {
        let config = MatcherConfig::default();
        assert_eq!(config.variant, ScoringVariant::Blended);
        assert!(config.remove_stop_words);
        assert!(config.detect_comparisons);
        assert_eq!(config.weights, ScoreWeights::default());
        assert_eq!(config.comparison_confidence, 0.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn legacy_preset_disables_extras() {
        let config = MatcherConfig::legacy();
        assert_eq!(config.variant, ScoringVariant::SequenceRatio);
        assert!(!config.remove_stop_words);
        assert!(!config.detect_comparisons);
    }

    #[test]
    fn parses_variant_names() {
        assert_eq!(
            "sequence-ratio".parse::<ScoringVariant>().expect("parse"),
            ScoringVariant::SequenceRatio
        );
        assert_eq!(
            "blended".parse::<ScoringVariant>().expect("parse"),
            ScoringVariant::Blended
        );
        assert!("cosine".parse::<ScoringVariant>().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: MatcherConfig =
            serde_json::from_str(r#"{"variant":"sequence_ratio","weights":{"jaccard":0.6}}"#)
                .expect("parse");
        assert_eq!(config.variant, ScoringVariant::SequenceRatio);
        assert_eq!(config.weights.jaccard, 0.6);
        assert_eq!(config.weights.sequence, 0.3);
        assert_eq!(config.length_penalty, LengthPenalty::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut config = MatcherConfig::default();
        config.length_penalty.factor = 1.5;
        assert!(matches!(config.validate(), Err(MatchError::InvalidConfig(_))));

        let mut config = MatcherConfig::default();
        config.weights.jaccard = -0.1;
        assert!(matches!(config.validate(), Err(MatchError::InvalidConfig(_))));

        let mut config = MatcherConfig::default();
        config.comparison_confidence = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"detect_comparisons": false, "comparison_confidence": 0.9}}"#)
            .expect("write");

        let config = MatcherConfig::from_json_path(file.path()).expect("load");
        assert!(!config.detect_comparisons);
        assert_eq!(config.comparison_confidence, 0.9);
    }
}
