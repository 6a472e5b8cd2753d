//! I/O serialization boundary.
//!
//! An [`IoManipulator`] renders and parses the structured input and output
//! values of one problem to and from byte streams, side-effecting on the
//! problem state `S`. Parse and format failures surface as `std::io::Error`
//! and are reported verbatim by the pipeline.

use std::io::{self, Read, Write};

/// Renders and parses a problem's input/output formats over the state `S`.
pub trait IoManipulator<S> {
    /// Parses input text into the problem state, so downstream phases see the
    /// same state a real run would have.
    fn parse_input(&self, state: &mut S, input: &mut dyn Read) -> io::Result<()>;

    /// Renders the current problem state as input text.
    fn print_input(&self, state: &S, output: &mut dyn Write) -> io::Result<()>;

    /// Parses produced output text back into the problem state, validating
    /// that the solution's output matches the declared format.
    ///
    /// The default accepts any output; problems with a declared output format
    /// override this.
    fn parse_output(&self, state: &mut S, output: &mut dyn Read) -> io::Result<()> {
        let _ = state;
        let _ = output;
        Ok(())
    }
}
