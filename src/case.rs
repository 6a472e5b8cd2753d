//! Test case model: identity, subtask membership, and the case payload.
//!
//! A test case carries exactly one payload, a [`TestCaseData`] variant:
//! either a *sample* (literal input text, and optionally the expected output
//! text) or an *official* case (a generation closure that populates the
//! problem state as a side effect). Dispatch is always by matching the
//! variant.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Generation action of an official test case. Invoking it populates the
/// problem state `S`; no return value is inspected.
pub type GenerationClosure<S> = Box<dyn Fn(&mut S)>;

/// The payload of a test case.
pub enum TestCaseData<S> {
    /// A fixed sample: literal input text and, optionally, the expected
    /// output text.
    Sample {
        input: String,
        output: Option<String>,
    },
    /// A procedurally described case: a closure that fills the problem state.
    Official { closure: GenerationClosure<S> },
}

impl<S> fmt::Debug for TestCaseData<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestCaseData::Sample { input, output } => f
                .debug_struct("Sample")
                .field("input", input)
                .field("output", output)
                .finish(),
            TestCaseData::Official { .. } => f.debug_struct("Official").finish_non_exhaustive(),
        }
    }
}

/// One test case: a name, a human-readable description, the subtask ids it is
/// assigned to, and its payload.
///
/// Immutable once constructed; the generation pipeline only reads it.
#[derive(Debug)]
pub struct TestCase<S> {
    name: String,
    description: String,
    subtask_ids: BTreeSet<i32>,
    data: TestCaseData<S>,
}

impl<S> TestCase<S> {
    /// Creates a sample test case from literal input and optional expected
    /// output text.
    pub fn sample(name: impl Into<String>, input: impl Into<String>, output: Option<String>) -> Self {
        let name = name.into();
        TestCase {
            description: name.clone(),
            name,
            subtask_ids: BTreeSet::new(),
            data: TestCaseData::Sample {
                input: input.into(),
                output,
            },
        }
    }

    /// Creates an official test case from a generation closure.
    pub fn official(name: impl Into<String>, closure: impl Fn(&mut S) + 'static) -> Self {
        let name = name.into();
        TestCase {
            description: name.clone(),
            name,
            subtask_ids: BTreeSet::new(),
            data: TestCaseData::Official {
                closure: Box::new(closure),
            },
        }
    }

    /// Replaces the human-readable description (defaults to the name).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Assigns the case to the given subtask ids. The id `-1` denotes the
    /// global constraint set.
    pub fn with_subtasks(mut self, subtask_ids: impl IntoIterator<Item = i32>) -> Self {
        self.subtask_ids = subtask_ids.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn subtask_ids(&self) -> &BTreeSet<i32> {
        &self.subtask_ids
    }

    pub fn data(&self) -> &TestCaseData<S> {
        &self.data
    }

    /// The declared expected output, for sample cases that carry one.
    pub fn sample_output(&self) -> Option<&str> {
        match &self.data {
            TestCaseData::Sample { output, .. } => output.as_deref(),
            TestCaseData::Official { .. } => None,
        }
    }
}

/// Discovers sample test cases from a directory of `<name>.in` files with
/// optional `<name>.out` siblings, sorted by name.
pub fn load_samples<S>(dir: impl AsRef<Path>) -> io::Result<Vec<TestCase<S>>> {
    let mut samples = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "in") {
            continue;
        }
        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let input = fs::read_to_string(path)?;
        let output_path = path.with_extension("out");
        let output = if output_path.is_file() {
            Some(fs::read_to_string(&output_path)?)
        } else {
            None
        };
        samples.push(TestCase::sample(name, input, output));
    }
    samples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn sample_case_exposes_output() {
        let case: TestCase<()> = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));
        assert_eq!(case.name(), "sample_1");
        assert_eq!(case.description(), "sample_1");
        assert_eq!(case.sample_output(), Some("6\n"));
    }

    #[test]
    fn official_case_has_no_sample_output() {
        let case: TestCase<i64> = TestCase::official("tc_1", |n| *n = 42)
            .with_description("small random case")
            .with_subtasks([1, 2]);
        assert_eq!(case.sample_output(), None);
        assert_eq!(case.description(), "small random case");
        assert!(case.subtask_ids().contains(&2));
    }

    #[test]
    fn official_closure_populates_state() {
        let case: TestCase<i64> = TestCase::official("tc_1", |n| *n = 7);
        let mut state = 0i64;
        match case.data() {
            TestCaseData::Official { closure } => closure(&mut state),
            TestCaseData::Sample { .. } => panic!("expected an official case"),
        }
        assert_eq!(state, 7);
    }

    #[test]
    fn load_samples_pairs_in_and_out_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample_2.in"), "10\n").unwrap();
        fs::write(dir.path().join("sample_1.in"), "3\n").unwrap();
        fs::write(dir.path().join("sample_1.out"), "6\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let samples: Vec<TestCase<()>> = load_samples(dir.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name(), "sample_1");
        assert_eq!(samples[0].sample_output(), Some("6\n"));
        assert_eq!(samples[1].name(), "sample_2");
        assert_eq!(samples[1].sample_output(), None);
    }
}
