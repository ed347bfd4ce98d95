//! Evaluation of the corrector against labeled typo fixtures.
//!
//! A fixture is a JSON object mapping each correct word to a
//! space-separated string of known misspellings:
//!
//! ```json
//! { "spelling": "speling spelng", "corrected": "korrected" }
//! ```
//!
//! Every misspelling becomes one test case; a case passes when the
//! corrector maps the misspelling back to its labeled word.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corrector::Corrector;
use crate::error::{RespellError, Result};

/// A single labeled test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// The misspelled input.
    pub typo: String,
    /// The word the corrector is expected to produce.
    pub expected: String,
}

/// Aggregate result of evaluating a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Number of test cases evaluated.
    pub total: usize,
    /// Cases where the corrector produced the labeled word.
    pub correct: usize,
    /// Cases where it did not.
    pub wrong: usize,
    /// correct / total, 0.0 for an empty fixture.
    pub accuracy: f64,
}

/// Load test cases from a fixture file.
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    let text = fs::read_to_string(path)?;
    parse_fixture(&text)
}

/// Parse fixture JSON into test cases.
///
/// A BTreeMap keeps case order independent of the source file's key order.
pub fn parse_fixture(text: &str) -> Result<Vec<TestCase>> {
    let entries: BTreeMap<String, String> = serde_json::from_str(text)?;

    let mut cases = Vec::new();
    for (expected, typos) in &entries {
        if expected.is_empty() {
            return Err(RespellError::fixture("empty expected word in fixture"));
        }
        for typo in typos.split_whitespace() {
            cases.push(TestCase {
                typo: typo.to_string(),
                expected: expected.clone(),
            });
        }
    }

    Ok(cases)
}

/// Run every test case through the corrector and tally the results.
pub fn evaluate(corrector: &Corrector<'_>, cases: &[TestCase]) -> EvalReport {
    let mut correct = 0;

    for case in cases {
        let produced = corrector.correct(&case.typo);
        if produced == case.expected {
            correct += 1;
        } else {
            log::debug!(
                "miss: {:?} -> {:?} (expected {:?})",
                case.typo,
                produced,
                case.expected
            );
        }
    }

    let total = cases.len();
    let wrong = total - correct;
    let accuracy = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };

    EvalReport {
        total,
        correct,
        wrong,
        accuracy,
    }
}
