//! Evaluation boundary: running the reference solution and scoring output.
//!
//! The pipeline talks to an [`Evaluator`] for two operations: `generate`
//! (run the solution on an input file, producing an output file) and `score`
//! (compare a produced output file against the reference written at
//! [`EVALUATION_OUT_FILENAME`]). [`BatchEvaluator`] is the shipped
//! implementation, backed by synchronous `sh` subprocesses and the built-in
//! line-diff scorer.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::verdict::Verdict;

mod batch;
pub mod scorer;

pub use batch::BatchEvaluator;

/// Well-known name of the scoring-reference file, resolved inside the run's
/// output directory.
pub const EVALUATION_OUT_FILENAME: &str = "_evaluation.out";

/// Process-level diagnostics of one subprocess run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    exit_code: Option<i32>,
    stdout: String,
    stderr: String,
    timed_out: bool,
}

impl ExecutionResult {
    pub fn new(exit_code: Option<i32>, stdout: String, stderr: String, timed_out: bool) -> Self {
        ExecutionResult {
            exit_code,
            stdout,
            stderr,
            timed_out,
        }
    }

    /// Exit code of the process; `None` when it was killed by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    pub fn is_successful(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

impl Default for ExecutionResult {
    /// A clean, successful execution with empty streams.
    fn default() -> Self {
        ExecutionResult::new(Some(0), String::new(), String::new(), false)
    }
}

/// Outcome of running the solution to produce an output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    execution_result: ExecutionResult,
}

impl GenerationResult {
    pub fn new(execution_result: ExecutionResult) -> Self {
        GenerationResult { execution_result }
    }

    pub fn execution_result(&self) -> &ExecutionResult {
        &self.execution_result
    }
}

/// Outcome of scoring a produced output file against the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    verdict: Verdict,
    execution_result: ExecutionResult,
}

impl ScoringResult {
    pub fn new(verdict: Verdict, execution_result: ExecutionResult) -> Self {
        ScoringResult {
            verdict,
            execution_result,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn execution_result(&self) -> &ExecutionResult {
        &self.execution_result
    }
}

/// Configuration for one evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    solution_command: String,
}

impl EvaluatorConfig {
    pub fn new(solution_command: impl Into<String>) -> Self {
        EvaluatorConfig {
            solution_command: solution_command.into(),
        }
    }

    pub fn solution_command(&self) -> &str {
        &self.solution_command
    }
}

/// Runs the reference solution and the scorer. Both operations are
/// synchronous and blocking; the pipeline imposes no timeout policy of its
/// own and surfaces whatever result the implementation returns.
pub trait Evaluator {
    /// Runs the solution on `input_path`, writing its output to
    /// `output_path`.
    fn generate(
        &self,
        input_path: &Path,
        output_path: &Path,
        config: &EvaluatorConfig,
    ) -> io::Result<GenerationResult>;

    /// Scores the produced output at `output_path` for the given input
    /// against the reference file next to it.
    fn score(&self, input_path: &Path, output_path: &Path) -> io::Result<ScoringResult>;
}
