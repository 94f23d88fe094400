use alloc::string::String;
use core::fmt;

use crate::accumulator::{DigitSink, ExponentBuilder, MantissaBuilder};

/// Lexical hint so callers can distinguish integers from floats without
/// converting the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// No decimal point and a zero exponent.
    Integer,
    /// Has a decimal point or a non-zero exponent.
    Float,
}

/// The canonical text of a lexed number, split into mantissa and exponent.
///
/// Both parts come from finished accumulators, so neither is ever empty: the
/// mantissa is at least `"0"` and the exponent at least `"e0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    mantissa: String,
    exponent: String,
}

impl Number {
    /// Builds a number from the two accumulators, finishing whichever has
    /// not been finished yet.
    ///
    /// ```rust
    /// use jsonnum::{DigitSink, ExponentBuilder, MantissaBuilder, Number};
    ///
    /// let mut mantissa = MantissaBuilder::new();
    /// mantissa.push_digit(b'4');
    /// let number = Number::from_builders(mantissa, ExponentBuilder::new());
    /// assert_eq!(number.render(), "4e0");
    /// ```
    #[must_use]
    pub fn from_builders(mut mantissa: MantissaBuilder, mut exponent: ExponentBuilder) -> Self {
        if !mantissa.is_finished() {
            mantissa.finish();
        }
        if !exponent.is_finished() {
            exponent.finish();
        }
        Self {
            mantissa: mantissa.into_string(),
            exponent: exponent.into_string(),
        }
    }

    /// Sign, integer and fraction text, e.g. `"-1.5"`.
    #[must_use]
    pub fn mantissa(&self) -> &str {
        &self.mantissa
    }

    /// Exponent text including the leading `e`, e.g. `"e-3"`.
    #[must_use]
    pub fn exponent(&self) -> &str {
        &self.exponent
    }

    /// Mantissa followed by exponent: `"100.0"` lexes to `"100.0e0"`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.mantissa.len() + self.exponent.len());
        out.push_str(&self.mantissa);
        out.push_str(&self.exponent);
        out
    }

    /// Whether the text reads as an integer or a float.
    #[must_use]
    pub fn kind(&self) -> NumberKind {
        let zero_exponent = self.exponent[1..].bytes().all(|b| b == b'0' || b == b'-');
        if self.mantissa.contains('.') || !zero_exponent {
            NumberKind::Float
        } else {
            NumberKind::Integer
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mantissa)?;
        f.write_str(&self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn number(mantissa: &str, exponent: &str) -> Number {
        let mut m = MantissaBuilder::new();
        for b in mantissa.bytes() {
            match b {
                b'-' => m.push_negative(),
                b'.' => m.push_decimal_point(),
                d => m.push_digit(d),
            }
        }
        let mut e = ExponentBuilder::new();
        for b in exponent.bytes() {
            match b {
                b'-' => e.push_negative(),
                d => e.push_digit(d),
            }
        }
        Number::from_builders(m, e)
    }

    #[test]
    fn render_and_display_agree() {
        let n = number("100.0", "");
        assert_eq!(n.render(), "100.0e0");
        assert_eq!(n.to_string(), n.render());
        assert_eq!(n.mantissa(), "100.0");
        assert_eq!(n.exponent(), "e0");
    }

    #[test]
    fn equality_is_textual() {
        assert_eq!(number("1", "5"), number("1", "5"));
        assert_ne!(number("1", "05"), number("1", "5"));
        assert_ne!(number("1.", ""), number("1", ""));
    }

    #[test]
    fn from_builders_keeps_finished_text() {
        let mut m = MantissaBuilder::new();
        m.push_digit(b'7');
        m.finish();
        let mut e = ExponentBuilder::new();
        e.push_digit(b'2');
        e.finish();
        assert_eq!(Number::from_builders(m, e).render(), "7e2");
    }

    #[test]
    fn kind_hint() {
        assert_eq!(number("12", "").kind(), NumberKind::Integer);
        assert_eq!(number("12", "-00").kind(), NumberKind::Integer);
        assert_eq!(number("1.", "").kind(), NumberKind::Float);
        assert_eq!(number("1", "3").kind(), NumberKind::Float);
    }
}
