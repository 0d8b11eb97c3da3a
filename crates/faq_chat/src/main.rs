mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use faq_match::{
    append_chat_log, default_entries, evaluate_cases, load_eval_cases, load_faqs,
    load_faqs_or_default, ChatLogEntry, ChatReply, EvalSummary, FaqEntry, MatchSource, Matcher,
    MatcherConfig, Responder,
};
use tracing::warn;

use crate::cli::{Cli, Commands, OutputFormat};

fn build_responder(cli: &Cli) -> Result<Responder> {
    let mut config = match &cli.config {
        Some(path) => MatcherConfig::from_json_path(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => MatcherConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }

    let matcher = Matcher::new(config).context("build matcher")?;
    Ok(Responder::new(matcher, cli.threshold))
}

fn read_faqs_strict(path: Option<&Path>) -> Result<Vec<FaqEntry>> {
    match path {
        Some(path) => load_faqs(path).with_context(|| format!("load faqs {}", path.display())),
        None => Ok(default_entries()),
    }
}

fn describe_source(source: MatchSource) -> String {
    match source {
        MatchSource::Faq(index) => format!("faq:{index}"),
        MatchSource::Comparison => "comparison".to_string(),
        MatchSource::Fallback => "fallback".to_string(),
    }
}

fn print_reply(format: OutputFormat, reply: &ChatReply) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "decision={:?} score={:.4} source={}",
                reply.decision,
                reply.confidence,
                describe_source(reply.source)
            );
            println!("answer={}", reply.answer);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reply).context("serialize reply")?);
        }
    }
    Ok(())
}

fn print_summary(format: OutputFormat, summary: &EvalSummary, required: f64) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "total={} passed={} failed={} pass_rate={:.4} required={:.4} meets_threshold={}",
                summary.total,
                summary.passed,
                summary.failed,
                summary.pass_rate,
                required,
                summary.meets(required)
            );
            for o in &summary.outcomes {
                println!(
                    "case={} passed={} decision={:?} source={} score={:.4} latency={:.1}ms",
                    o.case_id,
                    o.passed,
                    o.actual_decision,
                    describe_source(o.source),
                    o.score,
                    o.latency_ms
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary).context("serialize summary")?);
        }
    }
    Ok(())
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli.validate().map_err(anyhow::Error::msg)?;

    let responder = build_responder(&cli)?;

    match &cli.command {
        Commands::Ask { question, log } => {
            let entries = match &cli.faqs {
                Some(path) => load_faqs_or_default(path),
                None => default_entries(),
            };
            let reply = responder.reply(question, &entries);

            if let Some(log) = log {
                // A failed log write never costs the user their answer.
                if let Err(err) = append_chat_log(log, &ChatLogEntry::new(question, &reply)) {
                    warn!(path = %log.display(), error = %err, "error logging chat");
                }
            }

            print_reply(cli.format, &reply)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Eval {
            cases,
            min_pass_rate,
        } => {
            let entries = read_faqs_strict(cli.faqs.as_deref())?;
            let cases = load_eval_cases(cases)
                .with_context(|| format!("load eval cases {}", cases.display()))?;

            let summary = evaluate_cases(&responder, &entries, &cases);
            print_summary(cli.format, &summary, *min_pass_rate)?;

            if summary.meets(*min_pass_rate) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(2))
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
