//! Command-line surface for problem runner binaries.

pub mod args;

pub use args::RunnerArgs;
