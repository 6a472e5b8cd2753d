//! Logging boundary of the generation pipeline, plus the shipped loggers.
//!
//! [`ConsoleLogger`] renders human-facing, colored output; [`BufferLogger`]
//! captures structured events for programmatic inspection and tests.

use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::evaluator::ExecutionResult;
use crate::verifier::ConstraintsVerificationResult;

/// Receives every user-facing message the pipeline emits. The pipeline never
/// formats text itself; it hands the structured data to the logger.
pub trait GeneratorLogger {
    fn log_test_case_introduction(&mut self, case_name: &str);
    fn log_test_case_successful_result(&mut self);
    fn log_test_case_failed_result(&mut self, description: &str);
    fn log_constraints_verification_failure(&mut self, result: &ConstraintsVerificationResult);
    /// Execution results keyed by a role label such as `"solution"` or
    /// `"scorer"`.
    fn log_execution_results(&mut self, results: &[(&str, &ExecutionResult)]);
    fn log_sample_test_case_check_failure(&mut self);
    fn log_sample_test_case_no_output_needed_failure(&mut self);
    /// Raw error text of an incidental failure, logged verbatim.
    fn log_simple_failure(&mut self, message: &str);
}

/// Colored console rendering of generation progress and diagnostics.
pub struct ConsoleLogger {
    stream: StandardStream,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        ConsoleLogger {
            stream: StandardStream::stdout(choice),
        }
    }

    fn write_colored(&mut self, color: Color, text: &str) {
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.stream, "{}", text);
        let _ = self.stream.reset();
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        ConsoleLogger::new()
    }
}

impl GeneratorLogger for ConsoleLogger {
    fn log_test_case_introduction(&mut self, case_name: &str) {
        let _ = write!(self.stream, "  {}: ", case_name);
        let _ = self.stream.flush();
    }

    fn log_test_case_successful_result(&mut self) {
        self.write_colored(Color::Green, "OK");
        let _ = writeln!(self.stream);
    }

    fn log_test_case_failed_result(&mut self, description: &str) {
        self.write_colored(Color::Red, "FAILED");
        let _ = writeln!(self.stream);
        if !description.is_empty() {
            let _ = writeln!(self.stream, "    Description: {}", description);
        }
        let _ = writeln!(self.stream, "    Reasons:");
    }

    fn log_constraints_verification_failure(&mut self, result: &ConstraintsVerificationResult) {
        for (subtask_id, descriptions) in result.unsatisfied_constraints() {
            if *subtask_id == -1 {
                let _ = writeln!(self.stream, "    * Does not satisfy constraints, on:");
            } else {
                let _ = writeln!(
                    self.stream,
                    "    * Does not satisfy subtask {}, on:",
                    subtask_id
                );
            }
            for description in descriptions {
                let _ = writeln!(self.stream, "      - {}", description);
            }
        }
        for subtask_id in result.satisfied_but_not_assigned() {
            let _ = writeln!(
                self.stream,
                "    * Satisfies subtask {} but is not assigned to it",
                subtask_id
            );
        }
    }

    fn log_execution_results(&mut self, results: &[(&str, &ExecutionResult)]) {
        for (label, execution_result) in results {
            let _ = writeln!(self.stream, "    * Execution of {}:", label);
            match execution_result.exit_code() {
                Some(code) => {
                    let _ = writeln!(self.stream, "      - exit code: {}", code);
                }
                None => {
                    let _ = writeln!(self.stream, "      - killed by a signal");
                }
            }
            if !execution_result.stderr().is_empty() {
                let _ = writeln!(self.stream, "      - standard error:");
                for line in execution_result.stderr().lines() {
                    let _ = writeln!(self.stream, "        {}", line);
                }
            }
            if !execution_result.stdout().is_empty() {
                let _ = writeln!(self.stream, "      - standard output:");
                for line in execution_result.stdout().lines() {
                    let _ = writeln!(self.stream, "        {}", line);
                }
            }
        }
    }

    fn log_sample_test_case_check_failure(&mut self) {
        let _ = writeln!(
            self.stream,
            "    * Sample test case output does not match expected output"
        );
    }

    fn log_sample_test_case_no_output_needed_failure(&mut self) {
        let _ = writeln!(
            self.stream,
            "    * Problem does not need test case outputs, but this sample test case has one"
        );
    }

    fn log_simple_failure(&mut self, message: &str) {
        let _ = writeln!(self.stream, "    * {}", message);
    }
}

/// One captured logger call, in structured form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LogEvent {
    Introduction { case_name: String },
    SuccessfulResult,
    FailedResult { description: String },
    ConstraintsVerificationFailure { result: ConstraintsVerificationResult },
    ExecutionResults { results: Vec<(String, ExecutionResult)> },
    SampleCheckFailure,
    NoOutputNeededFailure,
    SimpleFailure { message: String },
}

/// Captures logger calls as [`LogEvent`]s for tests and machine consumers.
#[derive(Debug, Default)]
pub struct BufferLogger {
    events: Vec<LogEvent>,
}

impl BufferLogger {
    pub fn new() -> Self {
        BufferLogger::default()
    }

    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// The captured events as a JSON array.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.events).unwrap_or_else(|_| "[]".to_string())
    }
}

impl GeneratorLogger for BufferLogger {
    fn log_test_case_introduction(&mut self, case_name: &str) {
        self.events.push(LogEvent::Introduction {
            case_name: case_name.to_string(),
        });
    }

    fn log_test_case_successful_result(&mut self) {
        self.events.push(LogEvent::SuccessfulResult);
    }

    fn log_test_case_failed_result(&mut self, description: &str) {
        self.events.push(LogEvent::FailedResult {
            description: description.to_string(),
        });
    }

    fn log_constraints_verification_failure(&mut self, result: &ConstraintsVerificationResult) {
        self.events.push(LogEvent::ConstraintsVerificationFailure {
            result: result.clone(),
        });
    }

    fn log_execution_results(&mut self, results: &[(&str, &ExecutionResult)]) {
        self.events.push(LogEvent::ExecutionResults {
            results: results
                .iter()
                .map(|(label, result)| (label.to_string(), (*result).clone()))
                .collect(),
        });
    }

    fn log_sample_test_case_check_failure(&mut self) {
        self.events.push(LogEvent::SampleCheckFailure);
    }

    fn log_sample_test_case_no_output_needed_failure(&mut self) {
        self.events.push(LogEvent::NoOutputNeededFailure);
    }

    fn log_simple_failure(&mut self, message: &str) {
        self.events.push(LogEvent::SimpleFailure {
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_logger_records_events_in_order() {
        let mut logger = BufferLogger::new();
        logger.log_test_case_introduction("sample_1");
        logger.log_test_case_failed_result("a sample");
        logger.log_simple_failure("stream broke");

        assert_eq!(
            logger.events(),
            &[
                LogEvent::Introduction {
                    case_name: "sample_1".to_string()
                },
                LogEvent::FailedResult {
                    description: "a sample".to_string()
                },
                LogEvent::SimpleFailure {
                    message: "stream broke".to_string()
                },
            ]
        );
    }

    #[test]
    fn buffer_logger_serializes_to_json() {
        let mut logger = BufferLogger::new();
        logger.log_test_case_introduction("tc_1");
        let json = logger.to_json();
        assert!(json.contains("Introduction"));
        assert!(json.contains("tc_1"));
    }
}
