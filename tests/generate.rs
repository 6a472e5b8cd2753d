//! End-to-end generation tests: the real filesystem layer and real `sh`
//! solution processes, driven through the full pipeline.

mod common;

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use common::{Doubling, DoublingIo, RangeVerifier};
use tcgen::case::TestCase;
use tcgen::config::{GeneratorConfig, MultipleTestCasesConfig};
use tcgen::evaluator::BatchEvaluator;
use tcgen::generator::{BufferLogger, LogEvent, TestCaseGenerator};
use tcgen::os::LocalOs;
use tcgen::rnd::Rnd;

const DOUBLING_SOLUTION: &str = "read n; echo $((n * 2))";

fn generate(
    test_case: &TestCase<Doubling>,
    config: &GeneratorConfig,
) -> (bool, Vec<LogEvent>, Doubling) {
    let verifier = RangeVerifier { max_n: 1000 };
    let os = LocalOs;
    let evaluator = BatchEvaluator::new();
    let mut logger = BufferLogger::new();
    let mut state = Doubling::default();
    let mut generator =
        TestCaseGenerator::new(&verifier, &DoublingIo, &os, &evaluator, &mut logger);
    let generated = generator.generate(&mut state, test_case, config);
    (generated, logger.events().to_vec(), state)
}

#[test]
fn sample_case_round_trips_through_the_solution() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), DOUBLING_SOLUTION);
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    let (generated, events, state) = generate(&case, &config);

    assert!(generated, "events: {events:?}");
    assert_eq!(
        fs::read_to_string(dir.path().join("sample_1.in")).unwrap(),
        "3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("sample_1.out")).unwrap(),
        "6\n"
    );
    assert_eq!(state.answer, Some(6));
    assert_eq!(events.last(), Some(&LogEvent::SuccessfulResult));
}

#[test]
fn wrong_solution_fails_the_sample_check_with_scorer_details() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), "read n; echo 7");
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    let (generated, events, _) = generate(&case, &config);

    assert!(!generated);
    assert!(events.contains(&LogEvent::SampleCheckFailure));
    assert!(events.iter().any(|e| matches!(
        e,
        LogEvent::ExecutionResults { results } if results[0].0 == "scorer"
    )));
}

#[test]
fn crashing_solution_is_reported_with_its_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), "echo exploded >&2; exit 1");
    let case = TestCase::sample("sample_1", "3\n", None);

    let (generated, events, _) = generate(&case, &config);

    assert!(!generated);
    assert!(events.iter().any(|e| matches!(
        e,
        LogEvent::ExecutionResults { results }
            if results[0].0 == "solution" && results[0].1.stderr().contains("exploded")
    )));
}

#[test]
fn official_case_uses_seeded_randomness() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), DOUBLING_SOLUTION);
    let rnd = RefCell::new(Rnd::new(42));
    let case = TestCase::official("tc_1", move |state: &mut Doubling| {
        state.n = rnd.borrow_mut().next_i64(1, 1000);
    });

    let (generated, _, state) = generate(&case, &config);

    assert!(generated);
    let input = fs::read_to_string(dir.path().join("tc_1.in")).unwrap();
    let n: i64 = input.trim().parse().unwrap();
    assert!((1..=1000).contains(&n));
    assert_eq!(state.answer, Some(n * 2));
}

#[test]
fn out_of_range_official_case_fails_before_any_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), DOUBLING_SOLUTION);
    let case = TestCase::official("tc_1", |state: &mut Doubling| state.n = 5000);

    let (generated, events, _) = generate(&case, &config);

    assert!(!generated);
    assert!(!dir.path().join("tc_1.in").exists());
    assert!(!dir.path().join("tc_1.out").exists());
    assert!(events.iter().any(|e| matches!(
        e,
        LogEvent::ConstraintsVerificationFailure { result }
            if result.unsatisfied_constraints()[&-1] == vec!["1 <= n <= 1000"]
    )));
}

#[test]
fn sample_with_output_is_rejected_when_no_output_is_needed() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), DOUBLING_SOLUTION).without_output();
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    let (generated, events, _) = generate(&case, &config);

    assert!(!generated);
    assert!(events.contains(&LogEvent::NoOutputNeededFailure));
    assert!(!dir.path().join("sample_1.out").exists());
}

#[test]
fn multi_case_framing_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), "read c; read n; printf 'Case 1: %d\\n' $((n * 2))")
        .with_multiple_test_cases(MultipleTestCasesConfig {
            output_prefix: Some("Case #: ".to_string()),
            first_output_prefix: Some("Case 1: ".to_string()),
        });
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    let (generated, events, state) = generate(&case, &config);

    assert!(generated, "events: {events:?}");
    assert_eq!(
        fs::read_to_string(dir.path().join("sample_1.in")).unwrap(),
        "1\n3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("sample_1.out")).unwrap(),
        "Case 1: 6\n"
    );
    assert_eq!(state.answer, Some(6));
}

#[test]
fn multi_case_output_with_wrong_prefix_names_the_general_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), "read c; read n; printf 'Case 2: %d\\n' $((n * 2))")
        .with_multiple_test_cases(MultipleTestCasesConfig {
            output_prefix: Some("Case #: ".to_string()),
            first_output_prefix: Some("Case 1: ".to_string()),
        });
    let case = TestCase::sample("sample_1", "3\n", None);

    let (generated, events, _) = generate(&case, &config);

    assert!(!generated);
    assert!(events.contains(&LogEvent::SimpleFailure {
        message: "Output must start with \"Case #: \"".to_string()
    }));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), DOUBLING_SOLUTION);
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    assert!(generate(&case, &config).0);
    let first_in = fs::read(dir.path().join("sample_1.in")).unwrap();
    let first_out = fs::read(dir.path().join("sample_1.out")).unwrap();

    assert!(generate(&case, &config).0);
    assert_eq!(fs::read(dir.path().join("sample_1.in")).unwrap(), first_in);
    assert_eq!(fs::read(dir.path().join("sample_1.out")).unwrap(), first_out);
}

#[test]
fn missing_solution_command_is_an_execution_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(dir.path(), "./no-such-solution-binary");
    let case = TestCase::sample("sample_1", "3\n", None);

    let (generated, events, _) = generate(&case, &config);

    // sh itself runs and exits nonzero when the command is missing.
    assert!(!generated);
    assert!(events.iter().any(|e| matches!(
        e,
        LogEvent::ExecutionResults { results } if results[0].0 == "solution"
    )));
}

#[test]
fn output_dir_is_created_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("deep/tc");
    let config = GeneratorConfig::new(&nested, DOUBLING_SOLUTION);
    let case = TestCase::sample("sample_1", "3\n", Some("6\n".to_string()));

    let (generated, _, _) = generate(&case, &config);

    assert!(generated);
    assert!(Path::new(&nested).join("sample_1.in").is_file());
}
