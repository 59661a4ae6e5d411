//! Text redaction CLI
//!
//! Runs the batch over a directory of PDFs. With no arguments it reads
//! `input/`, `terms_to_redact.txt` and writes to `output/`.

use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use text_redact::{log_summary, BatchConfig, BatchRunner, TermOrder};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        matches
            .get_one::<LogLevel>("verbose")
            .copied()
            .unwrap_or(LogLevel::Info)
    };
    init_logging(level);

    let config = match resolve_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let runner = BatchRunner::new(config);

    if matches.get_flag("dry-run") {
        match runner.plan() {
            Ok(documents) => {
                info!("Dry run - {} documents would be processed:", documents.len());
                for path in documents {
                    info!("  {}", path.display());
                }
                return;
            }
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    }

    info!("Starting text-based PDF redaction workflow");
    let outcomes = match runner.run() {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!("Batch aborted: {}", e);
            process::exit(1);
        }
    };

    runner.write_report(&outcomes);
    let summary = log_summary(&outcomes);
    if summary.all_failed() {
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("text-redact")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts PDF page text and redacts configured terms")
        .long_about(
            "Extracts the text layer of every PDF in the input directory, replaces every \
             case-insensitive literal occurrence of each configured term with [REDACTED], \
             and writes one annotated text file per document to the output directory.",
        )
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Configuration file (JSON/YAML)"))
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .help("Directory containing input PDFs [default: input]"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .help("Directory for redacted text files [default: output]"))
        .arg(Arg::new("terms")
            .short('t')
            .long("terms")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Newline-delimited terms to redact [default: terms_to_redact.txt]"))
        .arg(Arg::new("term-order")
            .long("term-order")
            .value_parser(value_parser!(TermOrder))
            .help("Order in which terms are applied [default: longest-first]"))
        .arg(Arg::new("report")
            .short('r')
            .long("report")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Write a batch report (.json for JSON, otherwise plain text)"))
        .arg(Arg::new("dry-run")
            .long("dry-run")
            .action(ArgAction::SetTrue)
            .help("List the documents that would be processed without writing anything"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .value_parser(value_parser!(LogLevel))
            .default_value("info")
            .help("Set logging verbosity"))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Suppress all output except errors"))
}

/// Config file first, then command-line overrides.
fn resolve_config(matches: &ArgMatches) -> text_redact::Result<BatchConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => BatchConfig::from_file(path)?,
        None => BatchConfig::default(),
    };

    if let Some(dir) = matches.get_one::<PathBuf>("input") {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output") {
        config.output_dir = dir.clone();
    }
    if let Some(file) = matches.get_one::<PathBuf>("terms") {
        config.terms_file = file.clone();
    }
    if let Some(order) = matches.get_one::<TermOrder>("term-order") {
        config.term_order = *order;
    }
    if let Some(path) = matches.get_one::<PathBuf>("report") {
        config.report_path = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("text_redact={}", filter_level)))
        .with_target(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
