//! Verdicts: the outcome of comparing produced output against expected
//! output, and of classifying a solution's execution.

use std::fmt;
use std::io::{BufRead, BufReader, Read};

use serde::Serialize;
use thiserror::Error;

use crate::evaluator::ExecutionResult;

/// Verdict status, with the conventional short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerdictStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

impl VerdictStatus {
    pub fn code(&self) -> &'static str {
        match self {
            VerdictStatus::Accepted => "AC",
            VerdictStatus::WrongAnswer => "WA",
            VerdictStatus::TimeLimitExceeded => "TLE",
            VerdictStatus::RuntimeError => "RTE",
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The verdict of one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    status: VerdictStatus,
}

impl Verdict {
    pub fn new(status: VerdictStatus) -> Self {
        Verdict { status }
    }

    pub fn status(&self) -> VerdictStatus {
        self.status
    }

    pub fn is_accepted(&self) -> bool {
        self.status == VerdictStatus::Accepted
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)
    }
}

/// Failure to read a verdict from a scorer's output stream.
#[derive(Debug, Error)]
pub enum VerdictParseError {
    #[error("Expected: <verdict> on the first line")]
    MissingVerdict,
    #[error("Unknown verdict: {0}")]
    UnknownVerdict(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses a verdict from the first line of a scorer's output stream.
pub fn from_stream(stream: &mut dyn Read) -> Result<Verdict, VerdictParseError> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(VerdictParseError::MissingVerdict);
    }
    match line.trim_end_matches(['\r', '\n']) {
        "AC" => Ok(Verdict::new(VerdictStatus::Accepted)),
        "WA" => Ok(Verdict::new(VerdictStatus::WrongAnswer)),
        other => Err(VerdictParseError::UnknownVerdict(other.to_string())),
    }
}

/// Derives a verdict from how the solution's execution ended, if the
/// execution alone already determines one.
pub fn from_execution_result(execution_result: &ExecutionResult) -> Option<Verdict> {
    if execution_result.timed_out() {
        Some(Verdict::new(VerdictStatus::TimeLimitExceeded))
    } else if !execution_result.is_successful() {
        Some(Verdict::new(VerdictStatus::RuntimeError))
    } else {
        None
    }
}
