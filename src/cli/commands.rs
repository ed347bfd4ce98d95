//! Command implementations for the Respell CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corrector::Corrector;
use crate::dictionary::FrequencyDictionary;
use crate::error::Result;
use crate::eval::{evaluate, load_fixture};

/// Execute a CLI command.
pub fn execute_command(args: RespellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate_fixtures(evaluate_args.clone(), &args),
    }
}

/// Build the dictionary shared by every subcommand.
fn build_dictionary(args: &RespellArgs, corpus: &std::path::Path) -> Result<FrequencyDictionary> {
    if args.verbosity() > 1 {
        println!("Building dictionary from: {}", corpus.display());
    }

    let start = Instant::now();
    let dict = FrequencyDictionary::from_corpus_file(corpus)?;
    log::info!(
        "dictionary ready: {} unique words, {} occurrences in {:?}",
        dict.len(),
        dict.total_count(),
        start.elapsed()
    );

    Ok(dict)
}

/// Correct each word given on the command line.
fn correct_words(args: CorrectArgs, cli_args: &RespellArgs) -> Result<()> {
    let start = Instant::now();
    let dict = build_dictionary(cli_args, &args.corpus)?;
    let corrector = Corrector::new(&dict);

    let corrections: Vec<CorrectionOutput> = args
        .words
        .iter()
        .map(|word| CorrectionOutput {
            input: word.clone(),
            output: corrector.correct(word),
            known: dict.contains(word),
            suggestions: args
                .suggestions
                .map(|limit| corrector.suggestions(word, limit)),
        })
        .collect();

    output_result(
        "Corrections",
        &CorrectionsResult {
            corrections,
            dictionary_words: dict.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &RespellArgs) -> Result<()> {
    let dict = build_dictionary(cli_args, &args.corpus)?;

    output_result(
        "Dictionary statistics",
        &DictionaryStats {
            unique_words: dict.len(),
            total_count: dict.total_count(),
            top_words: dict.most_frequent(args.top),
        },
        cli_args,
    )
}

/// Evaluate the corrector against one or more fixture files.
fn evaluate_fixtures(args: EvaluateArgs, cli_args: &RespellArgs) -> Result<()> {
    let start = Instant::now();
    let dict = build_dictionary(cli_args, &args.corpus)?;
    let corrector = Corrector::new(&dict);

    let mut fixtures = Vec::with_capacity(args.fixtures.len());
    for path in &args.fixtures {
        let cases = load_fixture(path)?;
        log::info!("{}: {} cases", path.display(), cases.len());
        fixtures.push(FixtureReport {
            fixture: path.display().to_string(),
            report: evaluate(&corrector, &cases),
        });
    }

    output_result(
        "Evaluation results",
        &EvaluationResults {
            fixtures,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}
