//! vanlang-nlp CLI binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use vanlang_nlp::cli::args::NlpArgs;
use vanlang_nlp::cli::commands::execute_command;

/// Environment variable holding `env_logger` directives that override `-v`/`-q`.
const LOG_ENV: &str = "VANLANG_NLP_LOG";

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> ExitCode {
    let args = NlpArgs::parse();
    init_logger(args.verbosity());

    match execute_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
