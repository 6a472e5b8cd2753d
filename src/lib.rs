//! tcgen: a test-data authoring toolkit for algorithmic problems.
//!
//! The crate's core is a single-test-case generation pipeline: given one test
//! case description (a fixed sample or a procedurally described official
//! case), it produces a validated input file and, when required, a matching
//! output file by invoking an external reference solution, and reports
//! success or a categorized failure.
//!
//! # Architecture
//!
//! Generation runs as a strictly ordered, five-phase pipeline:
//! 1. **Apply**: populate the problem state, either by parsing a sample's
//!    literal input or by invoking an official case's generation closure.
//! 2. **Verify**: check the constraints assigned to the case's subtasks
//!    against the populated state.
//! 3. **Write input**: render the input file, framed by the multi-case
//!    counter when the target format packs several logical cases per file.
//! 4. **Evaluate**: run the reference solution on the input file, check a
//!    sample's expected output through the scorer, and parse the produced
//!    output back through the I/O manipulator.
//! 5. **Report**: log success, or render the failure and return `false`.
//!
//! The pipeline depends only on collaborator traits ([`verifier::Verifier`],
//! [`io::IoManipulator`], [`os::OperatingSystem`], [`evaluator::Evaluator`],
//! [`generator::GeneratorLogger`]); default implementations backed by the
//! local filesystem and `sh` subprocesses ship in [`os`] and [`evaluator`].
//!
//! # Example
//!
//! ```rust,no_run
//! use tcgen::case::TestCase;
//! use tcgen::config::GeneratorConfig;
//! use tcgen::evaluator::BatchEvaluator;
//! use tcgen::generator::{ConsoleLogger, TestCaseGenerator};
//! use tcgen::io::IoManipulator;
//! use tcgen::os::LocalOs;
//! use tcgen::verifier::{ConstraintsVerificationResult, Verifier};
//! use std::collections::BTreeSet;
//! use std::io::{Read, Write};
//!
//! #[derive(Default)]
//! struct Problem {
//!     n: i64,
//! }
//!
//! struct ProblemIo;
//!
//! impl IoManipulator<Problem> for ProblemIo {
//!     fn parse_input(&self, state: &mut Problem, input: &mut dyn Read) -> std::io::Result<()> {
//!         let mut text = String::new();
//!         input.read_to_string(&mut text)?;
//!         state.n = text.trim().parse().map_err(std::io::Error::other)?;
//!         Ok(())
//!     }
//!
//!     fn print_input(&self, state: &Problem, output: &mut dyn Write) -> std::io::Result<()> {
//!         writeln!(output, "{}", state.n)
//!     }
//! }
//!
//! struct ProblemConstraints;
//!
//! impl Verifier<Problem> for ProblemConstraints {
//!     fn verify_constraints(
//!         &self,
//!         state: &Problem,
//!         _subtask_ids: &BTreeSet<i32>,
//!     ) -> ConstraintsVerificationResult {
//!         let mut result = ConstraintsVerificationResult::default();
//!         if !(1..=1000).contains(&state.n) {
//!             result.add_unsatisfied(-1, "1 <= n <= 1000");
//!         }
//!         result
//!     }
//! }
//!
//! let mut state = Problem::default();
//! let mut logger = ConsoleLogger::new();
//! let os = LocalOs;
//! let evaluator = BatchEvaluator::new();
//! let mut generator =
//!     TestCaseGenerator::new(&ProblemConstraints, &ProblemIo, &os, &evaluator, &mut logger);
//!
//! let config = GeneratorConfig::new("tc", "./solution");
//! let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));
//! generator.generate(&mut state, &case, &config);
//! ```

pub use crate::generator::{GenerationError, GeneratorLogger, TestCaseGenerator};

pub mod case;
pub mod cli;
pub mod config;
pub mod evaluator;
pub mod generator;
pub mod io;
pub mod os;
pub mod rnd;
pub mod verdict;
pub mod verifier;
