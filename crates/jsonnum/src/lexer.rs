//! The resumable number lexer.
//!
//! [`NumberLexer`] accepts input one chunk at a time. Whenever a chunk runs
//! out before the current grammar stage is decided, the lexer records the
//! stage in [`LexState`] and returns; the next call resumes from exactly that
//! stage. Because every decision depends only on the state and the next byte,
//! the outcome does not depend on where the input was split.
//!
//! Grammar (`number = [sign] int [frac] [exp]`):
//!
//! ```text
//! Start            --[+-]--> AfterSign
//! AfterSign        --[0]---> Zero          ------> DecimalPoint
//! AfterSign        --------> Integer       --[.]-> DecimalPoint --[.]--> Fraction
//! Integer/Fraction --[eE]--> Exponent      --[eE]> ExponentSign --[+-]-> ExponentInteger
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jsonnum::{LexerOptions, NumberLexer};
//!
//! let mut lexer = NumberLexer::new(LexerOptions::default());
//! assert_eq!(lexer.process(b"-1"), 2);
//! assert!(!lexer.is_complete());
//! // The comma belongs to whatever surrounds the number.
//! assert_eq!(lexer.process(b"e3,"), 2);
//! assert!(lexer.is_complete());
//! assert_eq!(lexer.value().render(), "-1e3");
//! ```

#![allow(clippy::enum_glob_use)]

use crate::{
    accumulator::{DigitSink, ExponentBuilder, MantissaBuilder},
    error::LexError,
    number::Number,
    options::LexerOptions,
    outcome::Outcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the byte under the cursor.
enum Peeked {
    /// The current chunk is exhausted; more input may follow.
    Empty,
    /// Some byte.
    Byte(u8),
    /// End of input, the caller finalized the lexer.
    EndOfInput,
}

use Peeked::*;

/// What to do after one dispatch.
enum Step {
    /// The byte under the cursor was consumed.
    Consume,
    /// The state changed without consuming; dispatch the same byte again.
    Redispatch,
    /// Return to the caller, either to wait for input or because lexing is
    /// over.
    Yield,
}

/// Resumption points. Each variant is a place where lexing may stop for
/// lack of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Nothing seen yet.
    Start,
    /// After an optional sign; a digit or the end of the number is next.
    AfterSign,
    /// A leading `0`; only `.` may follow.
    Zero,
    /// Integer digits. `digits` is set once at least one was seen.
    Integer { digits: bool },
    /// Expecting the `.` of a fraction.
    DecimalPoint,
    /// Fraction digits.
    Fraction,
    /// Expecting the `e`/`E` marker.
    Exponent,
    /// After the marker; an optional sign is next.
    ExponentSign,
    /// Exponent digits. At least one is required.
    ExponentInteger { digits: bool },
    /// Terminal. The accumulators are finished.
    Done,
}

/// A resumable, split-invariant lexer for one JSON number.
///
/// Feed it chunks with [`process`](Self::process) and declare the end of
/// input with [`finalize`](Self::finalize). Lexing stops early, without an
/// error, at the first byte that cannot continue the number; that byte is
/// left unconsumed for the caller.
#[derive(Debug, Clone)]
pub struct NumberLexer {
    state: LexState,
    options: LexerOptions,

    /// Bytes consumed across all chunks.
    pos: usize,

    mantissa: MantissaBuilder,
    exponent: ExponentBuilder,
    error: Option<LexError>,
}

impl Default for NumberLexer {
    fn default() -> Self {
        Self::new(LexerOptions::default())
    }
}

impl NumberLexer {
    /// Creates a lexer with the given options.
    #[must_use]
    pub fn new(options: LexerOptions) -> Self {
        Self {
            state: LexState::Start,
            options,
            pos: 0,
            mantissa: MantissaBuilder::new(),
            exponent: ExponentBuilder::new(),
            error: None,
        }
    }

    /// Feeds the next chunk of input and returns how many of its leading
    /// bytes belong to the number.
    ///
    /// An empty `chunk` means no more input is coming and is equivalent to
    /// [`finalize`](Self::finalize). Once the lexer is complete, further
    /// calls consume nothing and return `0`.
    pub fn process(&mut self, chunk: &[u8]) -> usize {
        if chunk.is_empty() {
            self.finalize();
            return 0;
        }
        self.run(chunk, false)
    }

    /// Declares that no more input is coming.
    ///
    /// Does nothing if the lexer is already complete, so the recorded value
    /// and error never change once set.
    pub fn finalize(&mut self) {
        if !self.is_complete() {
            self.run(&[], true);
        }
        debug_assert!(self.is_complete());
    }

    /// `true` once the number has ended, was rejected, or the lexer was
    /// finalized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == LexState::Done
    }

    /// The grammar violation, if one was found.
    #[must_use]
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Bytes consumed across all chunks so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Snapshot of the number.
    ///
    /// Always well formed: if the lexer is not complete yet, the snapshot is
    /// taken as if it had been finalized, without finalizing the lexer
    /// itself.
    #[must_use]
    pub fn value(&self) -> Number {
        Number::from_builders(self.mantissa.clone(), self.exponent.clone())
    }

    /// Snapshot of error, value and consumed count.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            error: self.error,
            value: self.value(),
            consumed: self.pos,
        }
    }

    fn run(&mut self, chunk: &[u8], end_of_input: bool) -> usize {
        let mut cursor = 0;
        loop {
            let next = match chunk.get(cursor) {
                Some(&b) => Byte(b),
                None if end_of_input => EndOfInput,
                None => Empty,
            };
            match self.lex(next) {
                Step::Consume => {
                    cursor += 1;
                    self.pos += 1;
                }
                Step::Redispatch => {}
                Step::Yield => return cursor,
            }
        }
    }

    fn lex(&mut self, next: Peeked) -> Step {
        use LexState::*;

        if next == Empty {
            return Step::Yield;
        }

        match self.state {
            Start => match next {
                Byte(b'+') if self.options.reject_leading_plus => self.reject(next),
                Byte(b'+') => self.consume_to(AfterSign),
                Byte(b'-') => {
                    self.mantissa.push_negative();
                    self.consume_to(AfterSign)
                }
                Byte(_) => self.redispatch_to(AfterSign),
                // empty input
                _ => self.reject(next),
            },

            AfterSign => match next {
                Byte(b'0') => {
                    self.mantissa.push_digit(b'0');
                    self.consume_to(Zero)
                }
                Byte(_) => self.redispatch_to(Integer { digits: false }),
                // a sign alone
                _ => self.reject(next),
            },

            Zero => match next {
                Byte(_) => self.redispatch_to(DecimalPoint),
                _ => self.accept(),
            },

            Integer { digits } => match next {
                Byte(b) if b.is_ascii_digit() => {
                    self.mantissa.push_digit(b);
                    self.consume_to(Integer { digits: true })
                }
                _ if !digits && self.options.require_integer_digits => self.reject(next),
                Byte(b'.') => self.redispatch_to(DecimalPoint),
                Byte(b'e' | b'E') => self.redispatch_to(Exponent),
                _ => self.accept(),
            },

            DecimalPoint => match next {
                Byte(b'.') => {
                    self.mantissa.push_decimal_point();
                    self.consume_to(Fraction)
                }
                _ => self.reject(next),
            },

            Fraction => match next {
                Byte(b) if b.is_ascii_digit() => {
                    self.mantissa.push_digit(b);
                    self.consume_to(Fraction)
                }
                Byte(b'e' | b'E') => self.redispatch_to(Exponent),
                _ => self.accept(),
            },

            Exponent => match next {
                Byte(b'e' | b'E') => self.consume_to(ExponentSign),
                _ => self.reject(next),
            },

            ExponentSign => match next {
                Byte(b'-') => {
                    self.exponent.push_negative();
                    self.consume_to(ExponentInteger { digits: false })
                }
                Byte(b'+') => self.consume_to(ExponentInteger { digits: false }),
                Byte(_) => self.redispatch_to(ExponentInteger { digits: false }),
                // marker without digits
                _ => self.reject(next),
            },

            ExponentInteger { digits } => match next {
                Byte(b) if b.is_ascii_digit() => {
                    self.exponent.push_digit(b);
                    self.consume_to(ExponentInteger { digits: true })
                }
                _ if digits => self.accept(),
                _ => self.reject(next),
            },

            Done => Step::Yield,
        }
    }

    #[inline]
    fn transition(&mut self, to: LexState) {
        log::trace!("{:?} -> {:?} at offset {}", self.state, to, self.pos);
        self.state = to;
    }

    fn consume_to(&mut self, to: LexState) -> Step {
        self.transition(to);
        Step::Consume
    }

    fn redispatch_to(&mut self, to: LexState) -> Step {
        self.transition(to);
        Step::Redispatch
    }

    fn accept(&mut self) -> Step {
        self.complete(None);
        Step::Yield
    }

    fn reject(&mut self, next: Peeked) -> Step {
        let found = match next {
            Byte(b) => Some(b),
            Empty | EndOfInput => None,
        };
        self.complete(Some(LexError::new(found, self.pos)));
        Step::Yield
    }

    /// Moves to the terminal state and finishes both accumulators. Reached
    /// exactly once per lexer.
    fn complete(&mut self, error: Option<LexError>) {
        debug_assert!(!self.is_complete(), "lexer completed twice");
        match &error {
            Some(err) => log::debug!("number rejected in {:?}: {err}", self.state),
            None => log::trace!("number ended in {:?} at offset {}", self.state, self.pos),
        }
        self.error = error;
        self.transition(LexState::Done);
        self.mantissa.finish();
        self.exponent.finish();
    }
}

/// Lexes `input` in one chunk and finalizes.
///
/// ```rust
/// use jsonnum::{LexerOptions, parse};
///
/// let outcome = parse("100.0", LexerOptions::default());
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.value.render(), "100.0e0");
/// assert_eq!(outcome.consumed, 5);
/// ```
pub fn parse(input: impl AsRef<[u8]>, options: LexerOptions) -> Outcome {
    let mut lexer = NumberLexer::new(options);
    lexer.process(input.as_ref());
    lexer.finalize();
    lexer.outcome()
}
