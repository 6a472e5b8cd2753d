//! Shared problem definition for the integration tests: a tiny doubling
//! problem whose input is one integer `n` and whose output is `2n`.

use std::collections::BTreeSet;
use std::io::{self, Read, Write};

use tcgen::io::IoManipulator;
use tcgen::verifier::{ConstraintsVerificationResult, Verifier};

#[derive(Debug, Default)]
pub struct Doubling {
    pub n: i64,
    pub answer: Option<i64>,
}

pub struct DoublingIo;

impl IoManipulator<Doubling> for DoublingIo {
    fn parse_input(&self, state: &mut Doubling, input: &mut dyn Read) -> io::Result<()> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        state.n = text
            .trim()
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("{err}")))?;
        Ok(())
    }

    fn print_input(&self, state: &Doubling, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "{}", state.n)
    }

    fn parse_output(&self, state: &mut Doubling, output: &mut dyn Read) -> io::Result<()> {
        let mut text = String::new();
        output.read_to_string(&mut text)?;
        state.answer = Some(
            text.trim()
                .parse()
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("{err}")))?,
        );
        Ok(())
    }
}

/// Global constraint: `1 <= n <= max_n`.
pub struct RangeVerifier {
    pub max_n: i64,
}

impl Verifier<Doubling> for RangeVerifier {
    fn verify_constraints(
        &self,
        state: &Doubling,
        _subtask_ids: &BTreeSet<i32>,
    ) -> ConstraintsVerificationResult {
        let mut result = ConstraintsVerificationResult::default();
        if state.n < 1 || state.n > self.max_n {
            result.add_unsatisfied(-1, format!("1 <= n <= {}", self.max_n));
        }
        result
    }
}
