use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use faq_match::{ScoringVariant, DEFAULT_REQUIRED_PASS_RATE, DEFAULT_THRESHOLD};

#[derive(Debug, Parser)]
#[command(name = "faq-chat", version, about = "Answer questions from a FAQ list")]
pub struct Cli {
    /// FAQ source: a JSONL file, a CSV file, or a directory of per-material
    /// CSV exports. The built-in FAQs are used when omitted.
    #[arg(long, global = true)]
    pub faqs: Option<PathBuf>,

    /// JSON file with matcher settings (weights, variant, ...).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the scoring variant from --config.
    #[arg(long, global = true)]
    pub variant: Option<ScoringVariant>,

    /// A stored answer is shown only when its confidence is above this.
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a single question.
    Ask {
        question: String,
        /// Append the interaction to this JSONL chat log.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Run evaluation cases and report the pass rate.
    Eval {
        #[arg(long)]
        cases: PathBuf,
        #[arg(long, default_value_t = DEFAULT_REQUIRED_PASS_RATE)]
        min_pass_rate: f64,
    },
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!("threshold must be within [0, 1], got {}", self.threshold));
        }

        if let Commands::Eval { min_pass_rate, .. } = &self.command {
            if !(0.0..=1.0).contains(min_pass_rate) {
                return Err(format!(
                    "min-pass-rate must be within [0, 1], got {min_pass_rate}"
                ));
            }
        }

        Ok(())
    }
}
