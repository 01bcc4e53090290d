//! Command line argument parsing for vanlang-nlp using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::Language;

/// vanlang-nlp - intent classification for finance chat messages
#[derive(Parser, Debug, Clone)]
#[command(name = "vanlang-nlp")]
#[command(about = "Keyword-weighted intent classification for Vietnamese and English chat messages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NlpArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Keyword table JSON file replacing the built-in table
    #[arg(short, long, value_name = "KEYWORDS_FILE", env = "VANLANG_NLP_KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NlpArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify the intent of a message
    Analyze(TextArgs),

    /// Check whether a message is blocked (off-domain) content
    Blocked(TextArgs),

    /// Detect the language of a text
    Language(TextArgs),

    /// Print the normalized matching key of a text
    Normalize(TextArgs),

    /// Lexicon-based sentiment of a text
    Sentiment(SentimentArgs),

    /// MD5 cache key of a text
    Hash(TextArgs),

    /// Classify every line of a file
    Batch(BatchArgs),

    /// Print the active keyword table
    Keywords,

    /// Show service statistics
    Stats,
}

/// Arguments for commands taking a single text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Input text
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for sentiment analysis
#[derive(Parser, Debug, Clone)]
pub struct SentimentArgs {
    /// Input text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Language of the text
    #[arg(short, long, default_value = "auto")]
    pub language: LanguageArg,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one message per line
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Classify lines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Only print per-intent counts
    #[arg(long)]
    pub summary_only: bool,
}

/// Language selection on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageArg {
    /// Detect from the text
    Auto,
    /// Vietnamese
    Vi,
    /// English
    En,
}

impl LanguageArg {
    /// Resolve to a concrete language, detecting it from `text` for `Auto`.
    pub fn resolve(self, text: &str) -> Language {
        match self {
            LanguageArg::Auto => crate::analysis::detect_language(text),
            LanguageArg::Vi => Language::Vi,
            LanguageArg::En => Language::En,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
