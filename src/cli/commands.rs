//! Command implementations for the Glossa CLI.

use std::path::Path;
use std::time::Instant;

use serde_json::json;

use crate::classify::predictor::Predictor;
use crate::cli::args::*;
use crate::corpus::config::CorpusConfig;
use crate::error::{GlossaError, Result};

/// Execute a CLI command.
pub fn execute_command(args: GlossaArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Detect(detect_args) => detect(detect_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build a model from a configuration directory and persist it.
fn train(args: TrainArgs, cli_args: &GlossaArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Building model from: {}", args.config_dir.display());
    }

    let start = Instant::now();
    let config = CorpusConfig::load_from_dir(&args.config_dir)?;
    let predictor = Predictor::build_fresh(&config)?;
    predictor.save_snapshot(&args.snapshot)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Trained {} languages in {:.2?}, snapshot written to {}",
            predictor.statistics().languages().len(),
            start.elapsed(),
            args.snapshot.display()
        );
    }
    Ok(())
}

/// Classify a text sample with all three methods.
fn detect(args: DetectArgs, cli_args: &GlossaArgs) -> Result<()> {
    let predictor = load_predictor(args.snapshot.as_deref(), args.config_dir.as_deref())?;
    let predictions = predictor.predict(&args.text)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            for (method, language) in predictions.iter() {
                println!("{method}: {language}");
            }
        }
        OutputFormat::Json => {
            let map = predictions.to_map();
            let output = if cli_args.pretty {
                serde_json::to_string_pretty(&map)?
            } else {
                serde_json::to_string(&map)?
            };
            println!("{output}");
        }
    }
    Ok(())
}

/// Show the languages and vocabulary sizes of a model.
fn show_stats(args: StatsArgs, cli_args: &GlossaArgs) -> Result<()> {
    let predictor = load_predictor(args.snapshot.as_deref(), args.config_dir.as_deref())?;
    let statistics = predictor.statistics();

    match cli_args.output_format {
        OutputFormat::Human => {
            let codes: Vec<&str> = statistics.languages().iter().map(|l| l.as_str()).collect();
            println!("Languages: {}", codes.join(", "));
            println!("Unigram vocabulary: {}", statistics.unigram_vocabulary().len());
            println!("Trigram vocabulary: {}", statistics.trigram_vocabulary().len());
            println!("Stopword vocabulary: {}", statistics.stopword_vocabulary().len());
        }
        OutputFormat::Json => {
            let output = json!({
                "languages": statistics.languages(),
                "unigram_vocabulary": statistics.unigram_vocabulary().len(),
                "trigram_vocabulary": statistics.trigram_vocabulary().len(),
                "stopword_vocabulary": statistics.stopword_vocabulary().len(),
            });
            let rendered = if cli_args.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                output.to_string()
            };
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Resolve the model source for serving commands.
///
/// A snapshot path wins when given; otherwise a configuration directory
/// triggers an explicit fresh build. Neither is implicit; the choice is
/// always the caller's.
fn load_predictor(snapshot: Option<&Path>, config_dir: Option<&Path>) -> Result<Predictor> {
    match (snapshot, config_dir) {
        (Some(path), _) => Predictor::load_from_snapshot(path),
        (None, Some(dir)) => Predictor::build_fresh(&CorpusConfig::load_from_dir(dir)?),
        (None, None) => Err(GlossaError::config(
            "either --snapshot or --config-dir is required",
        )),
    }
}
