//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RespellArgs};
use crate::corrector::Suggestion;
use crate::error::Result;
use crate::eval::EvalReport;

/// A single corrected word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub input: String,
    pub output: String,
    /// True when the input was already a dictionary word.
    pub known: bool,
    /// Ranked suggestions, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionsResult {
    pub corrections: Vec<CorrectionOutput>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub unique_words: usize,
    pub total_count: u64,
    pub top_words: Vec<(String, u64)>,
}

/// Evaluation outcome for one fixture file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureReport {
    pub fixture: String,
    #[serde(flatten)]
    pub report: EvalReport,
}

/// Result structure for the evaluate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResults {
    pub fixtures: Vec<FixtureReport>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &RespellArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CorrectionsResult") => {
            output_corrections_human(&value)
        }
        _ if std::any::type_name::<T>().contains("DictionaryStats") => output_stats_human(&value),
        _ if std::any::type_name::<T>().contains("EvaluationResults") => {
            output_evaluation_human(&value)
        }
        _ => output_generic_human(&value),
    }
}

/// Output corrections in human format.
fn output_corrections_human(value: &serde_json::Value) -> Result<()> {
    let Some(corrections) = value.get("corrections").and_then(|c| c.as_array()) else {
        return Ok(());
    };

    for correction in corrections {
        let input = correction.get("input").and_then(|v| v.as_str()).unwrap_or("");
        let output = correction
            .get("output")
            .and_then(|v| v.as_str())
            .unwrap_or("");

        if let Some(suggestions) = correction.get("suggestions").and_then(|s| s.as_array()) {
            println!("{input}:");
            if suggestions.is_empty() {
                println!("  (no suggestions)");
            }
            for suggestion in suggestions {
                let word = suggestion.get("word").and_then(|v| v.as_str()).unwrap_or("");
                let count = suggestion.get("count").and_then(|v| v.as_u64()).unwrap_or(0);
                let distance = suggestion
                    .get("distance")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0);
                println!("  {word} (count {count}, distance {distance})");
            }
        } else {
            println!("{input} -> {output}");
        }
    }

    Ok(())
}

/// Output dictionary statistics in human format.
fn output_stats_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    println!("Dictionary Statistics:");
    println!("═════════════════════");

    if let Some(unique) = obj.get("unique_words").and_then(|v| v.as_u64()) {
        println!("Unique words: {unique}");
    }
    if let Some(total) = obj.get("total_count").and_then(|v| v.as_u64()) {
        println!("Total occurrences: {total}");
    }

    if let Some(top_words) = obj.get("top_words").and_then(|v| v.as_array())
        && !top_words.is_empty()
    {
        println!();
        println!("Top words:");
        println!("──────────");
        for entry in top_words {
            if let Some(pair) = entry.as_array()
                && pair.len() >= 2
            {
                let word = pair[0].as_str().unwrap_or("unknown");
                let count = pair[1].as_u64().unwrap_or(0);
                println!("  {word} ({count})");
            }
        }
    }

    Ok(())
}

/// Output fixture evaluation in human format.
fn output_evaluation_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(fixtures) = obj.get("fixtures").and_then(|f| f.as_array()) {
        for fixture in fixtures {
            let name = fixture.get("fixture").and_then(|v| v.as_str()).unwrap_or("");
            let total = fixture.get("total").and_then(|v| v.as_u64()).unwrap_or(0);
            let correct = fixture.get("correct").and_then(|v| v.as_u64()).unwrap_or(0);
            let wrong = fixture.get("wrong").and_then(|v| v.as_u64()).unwrap_or(0);
            let accuracy = fixture
                .get("accuracy")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);

            println!("{name}: n {total} correct {correct} wrong {wrong} rate {accuracy:.3}");
        }
    }

    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!();
        println!("Done in {duration}ms");
    }

    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RespellArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
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
