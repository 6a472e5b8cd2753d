//! Failure taxonomy of the generation pipeline.
//!
//! Two tiers: *structural* failures are detected explicitly and carry the
//! data needed to render their dedicated diagnostic; *incidental* failures
//! (stream and file errors, malformed multi-case framing) are reported as raw
//! text. Every variant is caught at the top of `generate`, rendered through
//! the logger, and converted into a boolean result; no error value escapes
//! the pipeline.

use std::io;

use thiserror::Error;

use crate::evaluator::{ExecutionResult, ScoringResult};
use crate::verifier::ConstraintsVerificationResult;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The applied input violates constraints assigned to the case.
    #[error("constraints verification failed")]
    ConstraintsUnsatisfied(ConstraintsVerificationResult),

    /// The reference solution did not execute successfully.
    #[error("solution execution failed")]
    SolutionExecutionFailed(ExecutionResult),

    /// The freshly produced output does not match the sample's declared
    /// expected output.
    #[error("sample test case output check failed")]
    SampleCheckFailed(ScoringResult),

    /// A sample declares expected output although the run produces none.
    #[error("a sample output is supplied but no output is needed")]
    SampleOutputNotNeeded,

    /// A lower-level failure reported verbatim, such as malformed multi-case
    /// output framing.
    #[error("{0}")]
    Incidental(String),

    /// A stream or file error reported verbatim.
    #[error(transparent)]
    Io(#[from] io::Error),
}
