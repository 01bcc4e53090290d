//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::Language;
use crate::cli::args::{NlpArgs, OutputFormat};
use crate::error::Result;
use crate::ml::intent_classifier::IntentResult;
use crate::ml::sentiment::Sentiment;

/// Result structure for the blocked-content check.
#[derive(Debug, Serialize, Deserialize)]
pub struct BlockedCheck {
    pub blocked: bool,
    pub intent: String,
    pub score: f64,
}

/// Result structure for language detection.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageDetection {
    pub language: Language,
}

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct Normalization {
    pub original: String,
    pub normalized: String,
}

/// Result structure for sentiment analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentReport {
    pub language: Language,
    #[serde(flatten)]
    pub sentiment: Sentiment,
}

/// Result structure for content hashing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentHash {
    pub hash: String,
}

/// One classified line of a batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchItem {
    pub line: usize,
    pub message: String,
    pub result: IntentResult,
}

/// Result structure for batch classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub total_messages: usize,
    pub duration_ms: u64,
    pub messages_per_second: f64,
    pub intent_counts: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub items: Vec<BatchItem>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &NlpArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &NlpArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in render_human(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
pub fn render_human(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let pad = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if is_nested(val) {
                    lines.push(format!("{pad}{key}:"));
                    lines.extend(render_human(val, indent + 1));
                } else {
                    lines.push(format!("{pad}{key}: {}", format_value(val)));
                }
            }
        }
        serde_json::Value::Array(arr) if arr.iter().any(is_nested) => {
            for (i, item) in arr.iter().enumerate() {
                lines.push(format!("{pad}- [{}]", i + 1));
                lines.extend(render_human(item, indent + 1));
            }
        }
        _ => lines.push(format!("{pad}{}", format_value(value))),
    }

    lines
}

fn is_nested(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(_) => true,
        serde_json::Value::Array(arr) => arr.iter().any(|v| v.is_object() || v.is_array()),
        _ => false,
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NlpArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a scalar or flat JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
