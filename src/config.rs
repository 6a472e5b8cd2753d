//! Per-run generator configuration.
//!
//! A [`GeneratorConfig`] is immutable for the duration of one `generate`
//! call. Optional behavior is expressed with explicit `Option` fields rather
//! than sentinel values: a present [`MultipleTestCasesConfig`] means the
//! target format packs several logical cases into one physical file.

use std::path::{Path, PathBuf};

/// Options for formats that pack multiple logical cases into one file.
///
/// Presence of this struct on the config enables the leading case counter in
/// generated input files. The two prefixes frame the *output* side:
/// `output_prefix` is the general per-case prefix, `first_output_prefix` the
/// one expected before the first case's output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipleTestCasesConfig {
    pub output_prefix: Option<String>,
    pub first_output_prefix: Option<String>,
}

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    output_dir: PathBuf,
    solution_command: String,
    needs_output: bool,
    multiple_test_cases: Option<MultipleTestCasesConfig>,
}

impl GeneratorConfig {
    /// Creates a configuration that writes into `output_dir` and produces
    /// output files by invoking `solution_command`.
    pub fn new(output_dir: impl Into<PathBuf>, solution_command: impl Into<String>) -> Self {
        GeneratorConfig {
            output_dir: output_dir.into(),
            solution_command: solution_command.into(),
            needs_output: true,
            multiple_test_cases: None,
        }
    }

    /// Disables output file production. Sample cases that still declare an
    /// expected output are rejected by the pipeline under this setting.
    pub fn without_output(mut self) -> Self {
        self.needs_output = false;
        self
    }

    /// Enables multiple-test-cases packing with the given framing options.
    pub fn with_multiple_test_cases(mut self, options: MultipleTestCasesConfig) -> Self {
        self.multiple_test_cases = Some(options);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn solution_command(&self) -> &str {
        &self.solution_command
    }

    pub fn needs_output(&self) -> bool {
        self.needs_output
    }

    pub fn multiple_test_cases(&self) -> Option<&MultipleTestCasesConfig> {
        self.multiple_test_cases.as_ref()
    }

    /// Path of the input file generated for the named test case.
    pub fn input_path(&self, case_name: &str) -> PathBuf {
        self.output_dir.join(format!("{case_name}.in"))
    }

    /// Path of the output file generated for the named test case.
    pub fn output_path(&self, case_name: &str) -> PathBuf {
        self.output_dir.join(format!("{case_name}.out"))
    }
}
