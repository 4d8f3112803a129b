use anyhow::Context;
use clap::{Parser, Subcommand};
use imhash_core::logging::{self, log_hash_error, log_input_error};
use imhash_core::{Hasher, HasherConfig, LogLevel, PHash};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "imhash")]
#[command(about = "Compute perceptual hashes of image files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to a rolling file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the perceptual hash of one or more images
    Hash {
        /// Images to hash
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Hamming distance between two images or fingerprints
    Compare {
        /// Image path or fingerprint such as 0x8f3c0000a1b2c3d4
        a: String,

        /// Image path or fingerprint
        b: String,

        /// Also report whether the distance is within this threshold
        #[arg(long)]
        threshold: Option<u32>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "imhash.json")]
        path: PathBuf,
    },
}

/// One line of `hash --json` output
#[derive(Serialize)]
struct HashReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    phash: Option<PHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HasherConfig::from_file(path)?,
        None => HasherConfig::default(),
    };

    // Set log level based on verbosity
    config.log_level = match cli.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    init_logging(&cli, config.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Hash { paths, json } => {
            let hasher = Hasher::new(config)?;
            let failures = run_hash(&hasher, &paths, json, &mut out)?;
            Ok(if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Compare { a, b, threshold } => {
            let hasher = Hasher::new(config)?;
            run_compare(&hasher, &a, &b, threshold, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::GenerateConfig { path } => {
            run_generate_config(&config, &path, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(cli: &Cli, level: LogLevel) -> anyhow::Result<()> {
    match &cli.log_dir {
        Some(dir) => logging::init_logger(dir, level.into())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Failed to set up logging in {}", dir.display())),
        None => {
            let level = logging::level_from_env().unwrap_or_else(|| level.into());
            env_logger::Builder::new().filter_level(level).init();
            Ok(())
        }
    }
}

/// Hash every path in parallel and write the results in argument order.
///
/// Failed paths are reported through the log and, with `json`, in the report.
/// Returns the number of paths that failed.
fn run_hash<W: Write>(
    hasher: &Hasher,
    paths: &[PathBuf],
    json: bool,
    out: &mut W,
) -> anyhow::Result<usize> {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path, hasher.hash_file(path)))
        .collect();

    let mut failures = 0;
    for (path, result) in &results {
        if let Err(e) = result {
            failures += 1;
            if e.is_input() {
                log_input_error(path, e);
            } else {
                log_hash_error(path, e);
            }
        }
    }

    if json {
        let reports: Vec<_> = results
            .iter()
            .map(|(path, result)| HashReport {
                path,
                phash: result.as_ref().ok().copied(),
                error: result.as_ref().err().map(|e| e.to_string()),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else {
        for (path, result) in &results {
            match result {
                Ok(hash) if paths.len() == 1 => writeln!(out, "{}", hash)?,
                Ok(hash) => writeln!(out, "{}  {}", hash, path.display())?,
                Err(_) => {}
            }
        }
    }

    info!("Hashed {} of {} images", results.len() - failures, results.len());
    Ok(failures)
}

/// Write the Hamming distance between two images or fingerprints, with a
/// verdict when a threshold is given
fn run_compare<W: Write>(
    hasher: &Hasher,
    a: &str,
    b: &str,
    threshold: Option<u32>,
    out: &mut W,
) -> anyhow::Result<()> {
    let first = resolve_fingerprint(hasher, a)?;
    let second = resolve_fingerprint(hasher, b)?;
    let distance = first.distance(&second);

    match threshold {
        Some(threshold) => {
            let verdict = if first.is_similar(&second, threshold) {
                "similar"
            } else {
                "different"
            };
            writeln!(out, "{} {}", distance, verdict)?;
        }
        None => writeln!(out, "{}", distance)?,
    }
    Ok(())
}

fn run_generate_config<W: Write>(
    config: &HasherConfig,
    path: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    config.save_to_file(path)?;
    writeln!(out, "Configuration file generated at: {}", path.display())?;
    Ok(())
}

/// Interpret an argument as a fingerprint if it parses as one, otherwise as an image path
fn resolve_fingerprint(hasher: &Hasher, arg: &str) -> anyhow::Result<PHash> {
    if let Ok(hash) = arg.parse::<PHash>() {
        if !Path::new(arg).exists() {
            debug!("Treating '{}' as a fingerprint", arg);
            return Ok(hash);
        }
    }

    hasher
        .hash_file(arg)
        .with_context(|| format!("Failed to hash {}", arg))
}
