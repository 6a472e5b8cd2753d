//! Built-in diff scorer.
//!
//! Compares a produced output file against the scoring reference line by
//! line, insensitive to trailing whitespace and trailing blank lines, and
//! renders a unified-style diff on mismatch.

use std::fs;
use std::io;
use std::path::Path;

use difference::{Changeset, Difference};

use crate::evaluator::{ExecutionResult, ScoringResult};
use crate::verdict::{Verdict, VerdictStatus};

/// Scores `produced_path` against the reference at `reference_path`.
///
/// An accepted run carries a clean execution result; a rejected run carries
/// the rendered diff in the scorer's stdout.
pub fn diff_score(reference_path: &Path, produced_path: &Path) -> io::Result<ScoringResult> {
    let expected = fs::read_to_string(reference_path)?;
    let actual = fs::read_to_string(produced_path)?;

    if outputs_match(&expected, &actual) {
        return Ok(ScoringResult::new(
            Verdict::new(VerdictStatus::Accepted),
            ExecutionResult::default(),
        ));
    }

    let diff = render_diff(&expected, &actual);
    Ok(ScoringResult::new(
        Verdict::new(VerdictStatus::WrongAnswer),
        ExecutionResult::new(Some(0), diff, String::new(), false),
    ))
}

fn normalized_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().map(|line| line.trim_end()).collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn outputs_match(expected: &str, actual: &str) -> bool {
    normalized_lines(expected) == normalized_lines(actual)
}

fn render_diff(expected: &str, actual: &str) -> String {
    let changeset = Changeset::new(expected.trim_end(), actual.trim_end(), "\n");
    let mut rendered = String::new();
    for diff in &changeset.diffs {
        let (marker, text) = match diff {
            Difference::Same(text) => (' ', text),
            Difference::Rem(text) => ('-', text),
            Difference::Add(text) => ('+', text),
        };
        for line in text.lines() {
            rendered.push(marker);
            rendered.push_str(line);
            rendered.push('\n');
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn score(expected: &str, actual: &str) -> ScoringResult {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("_evaluation.out");
        let produced = dir.path().join("case.out");
        fs::write(&reference, expected).unwrap();
        fs::write(&produced, actual).unwrap();
        diff_score(&reference, &produced).unwrap()
    }

    #[test]
    fn identical_outputs_are_accepted() {
        assert!(score("6\n", "6\n").verdict().is_accepted());
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        assert!(score("6\n", "6  \n\n").verdict().is_accepted());
    }

    #[test]
    fn differing_outputs_are_rejected_with_a_diff() {
        let result = score("6\n", "7\n");
        assert_eq!(result.verdict().status(), VerdictStatus::WrongAnswer);
        assert!(result.execution_result().stdout().contains("-6"));
        assert!(result.execution_result().stdout().contains("+7"));
    }

    #[test]
    fn internal_blank_lines_are_significant() {
        let result = score("1\n\n2\n", "1\n2\n");
        assert_eq!(result.verdict().status(), VerdictStatus::WrongAnswer);
    }
}
