//! Command-line arguments a problem runner binary accepts.
//!
//! This module uses the `clap` crate with its "derive" feature. A runner
//! binary parses [`RunnerArgs`] and converts them into a
//! [`GeneratorConfig`](crate::config::GeneratorConfig) for the pipeline.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{GeneratorConfig, MultipleTestCasesConfig};

/// Arguments for generating a problem's test data.
#[derive(Debug, Parser)]
#[command(name = "tcgen", version, about = "Generates test data for an algorithmic problem.")]
pub struct RunnerArgs {
    /// Directory the generated test files are written to.
    #[arg(long, default_value = "tc")]
    pub output_dir: PathBuf,

    /// Command used to invoke the reference solution.
    #[arg(long, default_value = "./solution")]
    pub solution: String,

    /// Seed for official test case randomness.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate input files only; do not run the solution.
    #[arg(long)]
    pub no_output: bool,
}

impl RunnerArgs {
    /// Builds the generator configuration for a plain, single-case-per-file
    /// problem. Problems with packed formats add their
    /// [`MultipleTestCasesConfig`] on top.
    pub fn to_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new(&self.output_dir, &self.solution);
        if self.no_output {
            config.without_output()
        } else {
            config
        }
    }

    /// Builds the generator configuration for a packed multi-case format.
    pub fn to_multi_case_config(&self, options: MultipleTestCasesConfig) -> GeneratorConfig {
        self.to_config().with_multiple_test_cases(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let args = RunnerArgs::parse_from(["tcgen"]);
        let config = args.to_config();
        assert_eq!(config.output_dir(), PathBuf::from("tc"));
        assert_eq!(config.solution_command(), "./solution");
        assert!(config.needs_output());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = RunnerArgs::parse_from([
            "tcgen",
            "--output-dir",
            "data",
            "--solution",
            "python3 sol.py",
            "--seed",
            "42",
            "--no-output",
        ]);
        let config = args.to_config();
        assert_eq!(config.output_dir(), PathBuf::from("data"));
        assert_eq!(config.solution_command(), "python3 sol.py");
        assert!(!config.needs_output());
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn multi_case_config_carries_options() {
        let args = RunnerArgs::parse_from(["tcgen"]);
        let config = args.to_multi_case_config(MultipleTestCasesConfig {
            output_prefix: Some("Case #: ".to_string()),
            first_output_prefix: Some("Case 1: ".to_string()),
        });
        assert!(config.multiple_test_cases().is_some());
    }
}
