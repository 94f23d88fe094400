use core::fmt;

use crate::{error::LexError, number::Number};

/// Snapshot of a finished lexer.
///
/// `value` is well formed even when `error` is set: the accumulators are
/// always finished before a snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// The grammar violation, if the input was rejected.
    pub error: Option<LexError>,
    /// The canonical text of the lexed number.
    pub value: Number,
    /// Bytes consumed across all chunks.
    pub consumed: usize,
}

impl Outcome {
    /// `true` when no error was recorded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{err}"),
            None => write!(f, "{}", self.value),
        }
    }
}
