//! The single-test-case generation pipeline.
//!
//! [`TestCaseGenerator::generate`] runs five strictly ordered phases for one
//! test case — apply input, verify input, write the input file, evaluate and
//! apply the output, report — and converts any failure into a rendered
//! diagnostic plus a `false` result. Each call is independent and
//! side-effect-scoped to its own two files; the problem state must be
//! exclusively owned by one in-flight generation at a time.

use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::case::{TestCase, TestCaseData};
use crate::config::{GeneratorConfig, MultipleTestCasesConfig};
use crate::evaluator::{Evaluator, EvaluatorConfig, EVALUATION_OUT_FILENAME};
use crate::io::IoManipulator;
use crate::os::OperatingSystem;
use crate::verifier::Verifier;

mod error;
mod logger;

pub use error::GenerationError;
pub use logger::{BufferLogger, ConsoleLogger, GeneratorLogger, LogEvent};

/// Orchestrates the generation of one test case over the problem state `S`.
pub struct TestCaseGenerator<'a, S> {
    verifier: &'a dyn Verifier<S>,
    io_manipulator: &'a dyn IoManipulator<S>,
    os: &'a dyn OperatingSystem,
    evaluator: &'a dyn Evaluator,
    logger: &'a mut dyn GeneratorLogger,
}

impl<'a, S> TestCaseGenerator<'a, S> {
    pub fn new(
        verifier: &'a dyn Verifier<S>,
        io_manipulator: &'a dyn IoManipulator<S>,
        os: &'a dyn OperatingSystem,
        evaluator: &'a dyn Evaluator,
        logger: &'a mut dyn GeneratorLogger,
    ) -> Self {
        TestCaseGenerator {
            verifier,
            io_manipulator,
            os,
            evaluator,
            logger,
        }
    }

    /// Generates the input file (and, when required, the output file) for one
    /// test case.
    ///
    /// Returns `true` iff every phase succeeded; on failure the diagnostic
    /// has already been rendered through the logger.
    pub fn generate(
        &mut self,
        state: &mut S,
        test_case: &TestCase<S>,
        config: &GeneratorConfig,
    ) -> bool {
        self.logger.log_test_case_introduction(test_case.name());

        let input_path = config.input_path(test_case.name());
        let output_path = config.output_path(test_case.name());

        match self.run_phases(state, test_case, config, &input_path, &output_path) {
            Ok(()) => {
                self.logger.log_test_case_successful_result();
                true
            }
            Err(failure) => {
                self.logger
                    .log_test_case_failed_result(test_case.description());
                self.report_failure(failure);
                false
            }
        }
    }

    fn run_phases(
        &mut self,
        state: &mut S,
        test_case: &TestCase<S>,
        config: &GeneratorConfig,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), GenerationError> {
        self.apply_input(state, test_case)?;
        self.verify_input(state, test_case)?;
        self.write_input(state, test_case, input_path, config)?;
        self.evaluate_and_apply_output(state, test_case, config, input_path, output_path)?;
        Ok(())
    }

    fn report_failure(&mut self, failure: GenerationError) {
        match failure {
            GenerationError::ConstraintsUnsatisfied(result) => {
                self.logger.log_constraints_verification_failure(&result);
            }
            GenerationError::SolutionExecutionFailed(execution_result) => {
                self.logger
                    .log_execution_results(&[("solution", &execution_result)]);
            }
            GenerationError::SampleCheckFailed(scoring_result) => {
                self.logger.log_sample_test_case_check_failure();
                self.logger
                    .log_execution_results(&[("scorer", scoring_result.execution_result())]);
            }
            GenerationError::SampleOutputNotNeeded => {
                self.logger.log_sample_test_case_no_output_needed_failure();
            }
            GenerationError::Incidental(message) => {
                self.logger.log_simple_failure(&message);
            }
            GenerationError::Io(err) => {
                self.logger.log_simple_failure(&err.to_string());
            }
        }
    }

    /// Phase 1: populate the problem state, either from the sample's literal
    /// input or by invoking the official case's generation closure.
    fn apply_input(&self, state: &mut S, test_case: &TestCase<S>) -> Result<(), GenerationError> {
        match test_case.data() {
            TestCaseData::Sample { input, .. } => {
                let mut reader = input.as_bytes();
                self.io_manipulator.parse_input(state, &mut reader)?;
            }
            TestCaseData::Official { closure } => closure(state),
        }
        Ok(())
    }

    /// Phase 2: check all constraints scoped to the case's subtask ids.
    fn verify_input(&self, state: &S, test_case: &TestCase<S>) -> Result<(), GenerationError> {
        let result = self
            .verifier
            .verify_constraints(state, test_case.subtask_ids());
        if result.is_valid() {
            Ok(())
        } else {
            Err(GenerationError::ConstraintsUnsatisfied(result))
        }
    }

    /// Phase 3: write the input file, framed by the multi-case counter when
    /// configured.
    fn write_input(
        &self,
        state: &S,
        test_case: &TestCase<S>,
        input_path: &Path,
        config: &GeneratorConfig,
    ) -> Result<(), GenerationError> {
        let mut input = self.os.open_for_writing(input_path)?;
        if config.multiple_test_cases().is_some() {
            // This pipeline packs exactly one logical case per physical file,
            // so the counter is always 1.
            writeln!(input, "1")?;
        }
        match test_case.data() {
            TestCaseData::Sample { input: text, .. } => input.write_all(text.as_bytes())?,
            TestCaseData::Official { .. } => self.io_manipulator.print_input(state, &mut *input)?,
        }
        input.flush()?;
        Ok(())
    }

    /// Phase 4: run the solution, gate samples through the scorer, and parse
    /// the produced output back into the problem state.
    fn evaluate_and_apply_output(
        &mut self,
        state: &mut S,
        test_case: &TestCase<S>,
        config: &GeneratorConfig,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), GenerationError> {
        let sample_output = test_case.sample_output();
        if !config.needs_output() {
            if sample_output.is_some() {
                return Err(GenerationError::SampleOutputNotNeeded);
            }
            return Ok(());
        }

        let evaluator_config = EvaluatorConfig::new(config.solution_command());
        let generation_result = self
            .evaluator
            .generate(input_path, output_path, &evaluator_config)?;
        if !generation_result.execution_result().is_successful() {
            return Err(GenerationError::SolutionExecutionFailed(
                generation_result.execution_result().clone(),
            ));
        }

        if let Some(expected) = sample_output {
            self.check_sample_output(expected, config, input_path, output_path)?;
        }

        let mut output = self.os.open_for_reading(output_path)?;
        if let Some(multi) = config.multiple_test_cases() {
            strip_first_output_prefix(&mut *output, multi)?;
        }
        self.io_manipulator.parse_output(state, &mut *output)?;
        Ok(())
    }

    /// Sample verification gate: score the produced output against the
    /// declared expected output, independent of the solution run's own
    /// pass/fail.
    fn check_sample_output(
        &self,
        expected: &str,
        config: &GeneratorConfig,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), GenerationError> {
        let mut expected = expected.to_string();
        if let Some(multi) = config.multiple_test_cases() {
            if let Some(first_prefix) = &multi.first_output_prefix {
                expected = format!("{first_prefix}{expected}");
            }
        }

        let reference_path = config.output_dir().join(EVALUATION_OUT_FILENAME);
        let mut reference = self.os.open_for_writing(&reference_path)?;
        reference.write_all(expected.as_bytes())?;
        reference.flush()?;
        drop(reference);

        let scoring_result = self.evaluator.score(input_path, output_path)?;
        if !scoring_result.verdict().is_accepted() {
            return Err(GenerationError::SampleCheckFailed(scoring_result));
        }
        Ok(())
    }
}

/// Consumes and validates the first-case output prefix from a produced
/// output stream.
///
/// The bytes are checked against the *first-case* prefix, while a mismatch
/// (including premature end of stream) names the *general* prefix. The
/// asymmetry is deliberate; see DESIGN.md before changing it.
fn strip_first_output_prefix(
    output: &mut dyn Read,
    multi: &MultipleTestCasesConfig,
) -> Result<(), GenerationError> {
    let Some(first_prefix) = multi.first_output_prefix.as_deref() else {
        return Ok(());
    };

    let mut buf = [0u8; 1];
    for expected in first_prefix.bytes() {
        match output.read_exact(&mut buf) {
            Ok(()) if buf[0] == expected => {}
            Ok(()) => return Err(prefix_mismatch(multi)),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                return Err(prefix_mismatch(multi))
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn prefix_mismatch(multi: &MultipleTestCasesConfig) -> GenerationError {
    let general_prefix = multi.output_prefix.as_deref().unwrap_or_default();
    GenerationError::Incidental(format!("Output must start with \"{}\"", general_prefix))
}
