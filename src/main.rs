//! Mauka string matcher - command line entrypoint.
//!
//! Loads configuration, initializes logging, and runs single-pattern
//! searches, algorithm comparisons and multi-pattern batch scans.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mauka_match_lib::config::{self, ConfigLoader, LogConfig, MatchConfig};
use mauka_match_lib::engine::{SearchAlgorithm, SearchEngine};
use mauka_match_lib::error::{report_error, ErrorContext, MaukaError};
use mauka_match_lib::matchers::{chars, AutomatonMatch, SearchError, Symbol};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "mauka_match", version, author, about)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Where the text to search comes from.
#[derive(Args, Debug)]
struct TextSource {
    /// Inline text to search
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// File whose contents are searched
    #[arg(long)]
    file: Option<PathBuf>,

    /// Match Unicode scalar values instead of bytes
    #[arg(long)]
    chars: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Count occurrences of one pattern
    Search {
        /// Pattern to look for
        pattern: String,

        /// Algorithm to use; defaults to the configured one
        #[arg(short, long, value_enum)]
        algorithm: Option<SearchAlgorithm>,

        #[command(flatten)]
        source: TextSource,

        /// Print the start position of every occurrence
        #[arg(long)]
        positions: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every single-pattern algorithm on the same input
    Compare {
        /// Pattern to look for
        pattern: String,

        #[command(flatten)]
        source: TextSource,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report every occurrence of several patterns in one or more texts
    Scan {
        /// Pattern to look for; repeat for several
        #[arg(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Inline text to scan
        #[arg(long)]
        text: Option<String>,

        /// Files to scan; repeat for several
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// Match Unicode scalar values instead of bytes
        #[arg(long)]
        chars: bool,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Matches found in one scanned text.
#[derive(Serialize)]
struct ScanOutput<'a> {
    source: &'a str,
    matches: &'a [AutomatonMatch],
}

impl TextSource {
    fn load(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_text(path),
            (None, None) => Err(MaukaError::from(SearchError::InvalidText(
                "either --text or --file is required".to_string(),
            ))
            .into()),
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to set global tracing subscriber: {e}"))
}

/// Subscriber used while the configuration itself is loading, so loader
/// warnings reach stderr before the configured subscriber exists.
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    let level = LogConfig::default().level;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .finish()
}

fn search<S: Symbol>(
    engine: &SearchEngine,
    algorithm: SearchAlgorithm,
    text: &[S],
    pattern: &[S],
    positions: bool,
    json: bool,
) -> Result<()> {
    let report = engine.run(algorithm, text, pattern)?;
    let found = if positions {
        Some(engine.positions(algorithm, text, pattern)?)
    } else {
        None
    };

    if json {
        let mut value = serde_json::to_value(&report)?;
        if let Some(found) = &found {
            value["positions"] = serde_json::to_value(found)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{}: {} matches, {} comparisons, {} us",
            report.algorithm,
            report.matches,
            report.comparisons,
            report.elapsed.as_micros()
        );
        if let Some(found) = found {
            for position in found {
                println!("{position}");
            }
        }
    }
    Ok(())
}

fn compare<S: Symbol>(engine: &SearchEngine, text: &[S], pattern: &[S], json: bool) -> Result<()> {
    let reports = engine.compare(text, pattern)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{:<20} {:>10} {:>12} {:>10}",
        "algorithm", "matches", "comparisons", "us"
    );
    for report in &reports {
        println!(
            "{:<20} {:>10} {:>12} {:>10}",
            report.algorithm.name(),
            report.matches,
            report.comparisons,
            report.elapsed.as_micros()
        );
    }
    Ok(())
}

fn scan<S: Symbol>(
    engine: &SearchEngine,
    sources: &[String],
    texts: &[Vec<S>],
    patterns: &[Vec<S>],
    pattern_names: &[String],
    json: bool,
) -> Result<()> {
    let results = engine.scan_batch(texts, patterns)?;

    if json {
        let outputs: Vec<ScanOutput<'_>> = sources
            .iter()
            .zip(&results)
            .map(|(source, matches)| ScanOutput { source, matches })
            .collect();
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for (source, matches) in sources.iter().zip(&results) {
        println!("{source}: {} matches", matches.len());
        for m in matches {
            println!("  {} {}", m.position, pattern_names[m.pattern_id]);
        }
    }
    Ok(())
}

fn run(command: Command, config: &MatchConfig, config_path: Option<&Path>) -> Result<()> {
    let engine = SearchEngine::from_config(&config.search).map_err(MaukaError::from)?;

    match command {
        Command::Search {
            pattern,
            algorithm,
            source,
            positions,
            json,
        } => {
            let text = source.load()?;
            let algorithm = algorithm.unwrap_or(config.search.default_algorithm);
            if source.chars {
                search(&engine, algorithm, &chars(&text), &chars(&pattern), positions, json)
            } else {
                search(
                    &engine,
                    algorithm,
                    text.as_bytes(),
                    pattern.as_bytes(),
                    positions,
                    json,
                )
            }
        }
        Command::Compare {
            pattern,
            source,
            json,
        } => {
            let text = source.load()?;
            if source.chars {
                compare(&engine, &chars(&text), &chars(&pattern), json)
            } else {
                compare(&engine, text.as_bytes(), pattern.as_bytes(), json)
            }
        }
        Command::Scan {
            patterns,
            text,
            files,
            chars: by_char,
            json,
        } => {
            let mut sources = Vec::new();
            let mut texts = Vec::new();
            if let Some(text) = text {
                sources.push("<inline>".to_string());
                texts.push(text);
            }
            for path in &files {
                sources.push(path.display().to_string());
                texts.push(read_text(path)?);
            }
            if texts.is_empty() {
                return Err(MaukaError::from(SearchError::InvalidText(
                    "either --text or --file is required".to_string(),
                ))
                .into());
            }

            if by_char {
                let texts: Vec<Vec<char>> = texts.iter().map(|t| chars(t)).collect();
                let encoded: Vec<Vec<char>> = patterns.iter().map(|p| chars(p)).collect();
                scan(&engine, &sources, &texts, &encoded, &patterns, json)
            } else {
                let texts: Vec<Vec<u8>> = texts.into_iter().map(String::into_bytes).collect();
                let encoded: Vec<Vec<u8>> = patterns.iter().map(|p| p.as_bytes().to_vec()).collect();
                scan(&engine, &sources, &texts, &encoded, &patterns, json)
            }
        }
        Command::Validate => {
            info!("Validating configuration");
            ConfigLoader::new(config_path, config::ENV_PREFIX)
                .load()
                .map_err(MaukaError::from)?;
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&MatchConfig::default())
                .context("failed to serialize default configuration")?;
            fs::write(&output, toml)
                .with_context(|| format!("failed to write {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let cli = Cli::parse();

    let loaded = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        mauka_match_lib::init(cli.config.as_deref())
    });
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            let _ = init_logging(&LogConfig::default());
            report_error(ErrorContext::new(err, "config"));
            process::exit(1);
        }
    };

    if let Err(err) = init_logging(&config.log) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }

    if let Err(err) = run(cli.command, &config, cli.config.as_deref()) {
        let context = match err.downcast::<MaukaError>() {
            Ok(error) => ErrorContext::new(error, "cli"),
            Err(other) => ErrorContext::new(MaukaError::Custom(format!("{other:#}")), "cli"),
        };
        report_error(context);
        process::exit(1);
    }
}
