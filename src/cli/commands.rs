//! Command implementations for the vanlang-nlp CLI.

use std::collections::BTreeMap;
use std::fs;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{NlpError, Result};
use crate::ml::intent_classifier::{IntentResult, load_keyword_table};
use crate::service::NlpService;

/// Execute a CLI command.
pub fn execute_command(args: NlpArgs) -> Result<()> {
    let table = load_keyword_table(args.keywords.as_deref())?;
    let service = NlpService::with_keyword_table(table.clone())?;
    match &args.command {
        Command::Analyze(text_args) => output_result(
            "Intent analysis",
            &service.analyze_intent(text_args.text.as_str()),
            &args,
        ),
        Command::Blocked(text_args) => output_result(
            "Blocked content check",
            &check_blocked(&service, &text_args.text),
            &args,
        ),
        Command::Language(text_args) => output_result(
            "Detected language",
            &LanguageDetection {
                language: service.detect_language(text_args.text.as_str()),
            },
            &args,
        ),
        Command::Normalize(text_args) => output_result(
            "Normalized text",
            &Normalization {
                original: text_args.text.clone(),
                normalized: service.normalize(text_args.text.as_str()),
            },
            &args,
        ),
        Command::Sentiment(sentiment_args) => output_result(
            "Sentiment analysis",
            &sentiment(&service, sentiment_args),
            &args,
        ),
        Command::Hash(text_args) => output_result(
            "Content hash",
            &ContentHash {
                hash: service.generate_hash(&text_args.text),
            },
            &args,
        ),
        Command::Batch(batch_args) => {
            output_result("Batch classification", &run_batch(&service, batch_args)?, &args)
        }
        Command::Stats => output_result("Service statistics", &service.stats(), &args),
        Command::Keywords => output_result("Keyword table", &table, &args),
    }
}

/// Check a message for blocked content.
fn check_blocked(service: &NlpService, text: &str) -> BlockedCheck {
    let result = service.analyze_intent(text);
    BlockedCheck {
        blocked: result.is_blocked(),
        intent: result.intent.to_string(),
        score: result.score,
    }
}

/// Analyze the sentiment of a text.
fn sentiment(service: &NlpService, sentiment_args: &SentimentArgs) -> SentimentReport {
    let language = sentiment_args.language.resolve(&sentiment_args.text);
    SentimentReport {
        language,
        sentiment: service.analyze_sentiment(&sentiment_args.text, language),
    }
}

/// Classify every non-blank line of a file.
fn run_batch(service: &NlpService, batch_args: &BatchArgs) -> Result<BatchResults> {
    let content = fs::read_to_string(&batch_args.input_file)?;
    let messages = read_messages(&content);
    if messages.is_empty() {
        return Err(NlpError::invalid_argument(format!(
            "no messages in {}",
            batch_args.input_file.display()
        )));
    }
    info!(
        "classifying {} messages from {}",
        messages.len(),
        batch_args.input_file.display()
    );

    let start = Instant::now();
    let results = classify_all(service, &messages, batch_args.parallel);
    let elapsed = start.elapsed();
    debug!("batch classified in {elapsed:?}");

    let intent_counts = count_intents(&results);
    let items = if batch_args.summary_only {
        Vec::new()
    } else {
        messages
            .into_iter()
            .zip(results)
            .map(|((line, message), result)| BatchItem {
                line,
                message: message.to_string(),
                result,
            })
            .collect()
    };

    let total_messages: usize = intent_counts.values().sum();
    let seconds = elapsed.as_secs_f64();
    Ok(BatchResults {
        total_messages,
        duration_ms: elapsed.as_millis() as u64,
        messages_per_second: if seconds > 0.0 {
            total_messages as f64 / seconds
        } else {
            0.0
        },
        intent_counts,
        items,
    })
}

/// Non-blank lines with their 1-based line numbers.
fn read_messages(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect()
}

/// Classify messages, keeping input order.
fn classify_all(service: &NlpService, messages: &[(usize, &str)], parallel: bool) -> Vec<IntentResult> {
    if parallel {
        messages
            .par_iter()
            .map(|(_, message)| service.analyze_intent(*message))
            .collect()
    } else {
        messages
            .iter()
            .map(|(_, message)| service.analyze_intent(*message))
            .collect()
    }
}

fn count_intents(results: &[IntentResult]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for result in results {
        *counts.entry(result.intent.to_string()).or_insert(0) += 1;
    }
    counts
}
