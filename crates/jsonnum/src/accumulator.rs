use alloc::string::String;

/// Append-only text builder fed by the lexer while it scans one part of a
/// number.
///
/// The lexer guarantees the grammar: `push_negative` is called at most once,
/// before any digit, and `push_digit` only receives ASCII digits. The sink
/// itself does not validate anything.
pub trait DigitSink {
    /// Record a leading `-`.
    fn push_negative(&mut self);

    /// Record one ASCII digit (`b'0'..=b'9'`).
    fn push_digit(&mut self, digit: u8);

    /// Seal the text. Called exactly once, after which the sink is not
    /// mutated again.
    fn finish(&mut self);

    /// Whether [`finish`](Self::finish) has been called.
    fn is_finished(&self) -> bool;

    /// The text accumulated so far.
    fn as_str(&self) -> &str;
}

/// Accumulates the sign, integer and fraction parts of a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MantissaBuilder {
    buffer: String,
    finished: bool,
}

impl MantissaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the decimal point.
    pub fn push_decimal_point(&mut self) {
        debug_assert!(!self.finished, "mantissa mutated after finish");
        self.buffer.push('.');
    }

    pub(crate) fn into_string(self) -> String {
        self.buffer
    }
}

impl DigitSink for MantissaBuilder {
    fn push_negative(&mut self) {
        debug_assert!(!self.finished, "mantissa mutated after finish");
        self.buffer.push('-');
    }

    fn push_digit(&mut self, digit: u8) {
        debug_assert!(!self.finished, "mantissa mutated after finish");
        self.buffer.push(char::from(digit));
    }

    fn finish(&mut self) {
        debug_assert!(!self.finished, "mantissa finished twice");
        self.finished = true;
        if self.buffer.is_empty() {
            self.buffer.push('0');
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn as_str(&self) -> &str {
        &self.buffer
    }
}

/// Accumulates the sign and digits following an `e`/`E` marker.
///
/// On [`finish`](DigitSink::finish) the text is prefixed with `e`, so an
/// exponent that never saw a digit renders as `e0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExponentBuilder {
    buffer: String,
    finished: bool,
}

impl ExponentBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_string(self) -> String {
        self.buffer
    }
}

impl DigitSink for ExponentBuilder {
    fn push_negative(&mut self) {
        debug_assert!(!self.finished, "exponent mutated after finish");
        self.buffer.push('-');
    }

    fn push_digit(&mut self, digit: u8) {
        debug_assert!(!self.finished, "exponent mutated after finish");
        self.buffer.push(char::from(digit));
    }

    fn finish(&mut self) {
        debug_assert!(!self.finished, "exponent finished twice");
        self.finished = true;
        if self.buffer.is_empty() {
            self.buffer.push('0');
        }
        self.buffer.insert(0, 'e');
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn as_str(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mantissa_becomes_zero() {
        let mut m = MantissaBuilder::new();
        m.finish();
        assert_eq!(m.as_str(), "0");
    }

    #[test]
    fn mantissa_keeps_sign_digits_and_point() {
        let mut m = MantissaBuilder::new();
        m.push_negative();
        m.push_digit(b'1');
        m.push_decimal_point();
        m.push_digit(b'5');
        m.finish();
        assert_eq!(m.as_str(), "-1.5");
    }

    #[test]
    fn lone_sign_is_not_substituted() {
        let mut m = MantissaBuilder::new();
        m.push_negative();
        m.finish();
        assert_eq!(m.as_str(), "-");
    }

    #[test]
    fn exponent_is_prefixed_after_substitution() {
        let mut e = ExponentBuilder::new();
        e.finish();
        assert_eq!(e.as_str(), "e0");

        let mut e = ExponentBuilder::new();
        e.push_negative();
        e.push_digit(b'1');
        e.push_digit(b'2');
        e.finish();
        assert_eq!(e.as_str(), "e-12");
        assert!(e.is_finished());
    }

    #[test]
    #[should_panic(expected = "finished twice")]
    #[cfg(debug_assertions)]
    fn double_finish_is_caught() {
        let mut e = ExponentBuilder::new();
        e.finish();
        e.finish();
    }
}
