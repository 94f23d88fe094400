//! A resumable lexer for JSON number literals.
//!
//! Input may arrive in arbitrary chunks. [`NumberLexer`] advances an explicit
//! state machine one chunk at a time and produces the same [`Outcome`] no
//! matter where the input was split. The [`grind`] family of functions checks
//! that property for a given input by replaying it across every split point.
//!
//! ```rust
//! use jsonnum::{NumberLexer, LexerOptions};
//!
//! let mut lexer = NumberLexer::new(LexerOptions::default());
//! assert_eq!(lexer.process(b"10"), 2);
//! assert_eq!(lexer.process(b"0.0"), 3);
//! lexer.finalize();
//!
//! assert!(lexer.error().is_none());
//! assert_eq!(lexer.value().render(), "100.0e0");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod accumulator;
mod chunk_utils;
mod error;
mod grind;
mod lexer;
mod number;
mod options;
mod outcome;

#[cfg(test)]
mod tests;

pub use accumulator::{DigitSink, ExponentBuilder, MantissaBuilder};
pub use chunk_utils::{produce_chunks, produce_split_points};
pub use error::{GrindFailure, LexError, SyntaxError};
pub use grind::{grind, grind_partitioned, grind_splits, grind_with};
pub use lexer::{NumberLexer, parse};
pub use number::{Number, NumberKind};
pub use options::LexerOptions;
pub use outcome::Outcome;
