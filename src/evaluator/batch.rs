//! Subprocess-backed evaluator.
//!
//! Runs the solution command through `sh -c` with stdin and stdout redirected
//! to the input and output files and stderr captured. Scoring uses the
//! built-in diff scorer unless an external scorer command is configured, in
//! which case the scorer's first stdout line is parsed as a verdict.

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::evaluator::{
    scorer, Evaluator, EvaluatorConfig, ExecutionResult, GenerationResult, ScoringResult,
    EVALUATION_OUT_FILENAME,
};
use crate::verdict::{self, Verdict, VerdictParseError, VerdictStatus};

/// Evaluator backed by synchronous local subprocesses.
#[derive(Debug, Default)]
pub struct BatchEvaluator {
    scorer_command: Option<String>,
}

impl BatchEvaluator {
    pub fn new() -> Self {
        BatchEvaluator::default()
    }

    /// Scores with an external command instead of the built-in diff scorer.
    ///
    /// The command is invoked as
    /// `<command> <input-file> <reference-file> <output-file>` and must print
    /// `AC` or `WA` on the first line of its stdout.
    pub fn with_scorer_command(mut self, command: impl Into<String>) -> Self {
        self.scorer_command = Some(command.into());
        self
    }

    fn run_scorer(
        &self,
        command: &str,
        input_path: &Path,
        reference_path: &Path,
        output_path: &Path,
    ) -> io::Result<ScoringResult> {
        let scorer_line = format!(
            "{} {} {} {}",
            command,
            input_path.display(),
            reference_path.display(),
            output_path.display()
        );
        let output = Command::new("sh")
            .arg("-c")
            .arg(&scorer_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let execution_result = ExecutionResult::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            false,
        );

        if !execution_result.is_successful() {
            return Ok(ScoringResult::new(
                Verdict::new(VerdictStatus::RuntimeError),
                execution_result,
            ));
        }

        let verdict = verdict::from_stream(&mut execution_result.stdout().as_bytes())
            .map_err(|err| match err {
                VerdictParseError::Io(io_err) => io_err,
                other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
            })?;
        Ok(ScoringResult::new(verdict, execution_result))
    }
}

impl Evaluator for BatchEvaluator {
    fn generate(
        &self,
        input_path: &Path,
        output_path: &Path,
        config: &EvaluatorConfig,
    ) -> io::Result<GenerationResult> {
        let input = File::open(input_path)?;
        let output = File::create(output_path)?;
        let result = Command::new("sh")
            .arg("-c")
            .arg(config.solution_command())
            .stdin(Stdio::from(input))
            .stdout(Stdio::from(output))
            .stderr(Stdio::piped())
            .output()?;

        // stdout went to the output file; only stderr is captured here.
        Ok(GenerationResult::new(ExecutionResult::new(
            result.status.code(),
            String::new(),
            String::from_utf8_lossy(&result.stderr).into_owned(),
            false,
        )))
    }

    fn score(&self, input_path: &Path, output_path: &Path) -> io::Result<ScoringResult> {
        let reference_path = output_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(EVALUATION_OUT_FILENAME);
        match &self.scorer_command {
            None => scorer::diff_score(&reference_path, output_path),
            Some(command) => self.run_scorer(command, input_path, &reference_path, output_path),
        }
    }
}
