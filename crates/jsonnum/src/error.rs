use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::BString;
use thiserror::Error;

use crate::outcome::Outcome;

/// Grammar violation recorded by the lexer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxError {
    /// The input is not a valid number literal. Carries the offending byte,
    /// or `None` when the input ended too early.
    #[error("invalid number literal{}", DisplayFound(.0))]
    InvalidNumberLiteral(Option<u8>),
}

struct DisplayFound<'a>(&'a Option<u8>);

impl fmt::Display for DisplayFound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(b) => write!(f, ": unexpected {:?}", char::from(b)),
            None => f.write_str(": unexpected end of input"),
        }
    }
}

/// A [`SyntaxError`] together with the global byte offset, counted across all
/// chunks, at which it was detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{source} at offset {offset}")]
pub struct LexError {
    /// What went wrong.
    pub source: SyntaxError,
    /// Offset of the offending byte, or the input length at end of input.
    pub offset: usize,
}

impl LexError {
    pub(crate) fn new(found: Option<u8>, offset: usize) -> Self {
        Self {
            source: SyntaxError::InvalidNumberLiteral(found),
            offset,
        }
    }
}

/// The lexer produced a different outcome for a split input than for the
/// same input fed in one piece.
///
/// This is a bug in the lexer, never a property of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "grind failure on {input:?} at split {splits:?}: expected {expected},{} but got {actual},{}",
    .expected.consumed,
    .actual.consumed
)]
pub struct GrindFailure {
    /// The input being verified.
    pub input: BString,
    /// Offsets at which the input was split for the failing run.
    pub splits: Vec<usize>,
    /// Outcome of the unsplit run.
    pub expected: Outcome,
    /// Outcome of the split run.
    pub actual: Outcome,
}

impl GrindFailure {
    /// Multi-line report for command-line output.
    #[must_use]
    pub fn explain(&self) -> String {
        alloc::format!(
            "grind failure\n  input:    {:?}\n  splits:   {:?}\n  expected: {} ({} consumed)\n  actual:   {} ({} consumed)",
            self.input,
            self.splits,
            self.expected,
            self.expected.consumed,
            self.actual,
            self.actual.consumed,
        )
    }
}
