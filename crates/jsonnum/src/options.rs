/// Configuration options for [`NumberLexer`](crate::NumberLexer).
///
/// The default grammar is permissive: a leading `+` is skipped, and a
/// mantissa without integer digits simply ends the number. Both deviate from
/// the strict JSON grammar; the fields below opt back into it.
///
/// # Examples
///
/// ```rust
/// use jsonnum::{LexerOptions, parse};
///
/// assert!(parse(b"+1", LexerOptions::default()).error.is_none());
/// assert!(parse(b"+1", LexerOptions::strict()).error.is_some());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Whether a leading `+` is an invalid number literal.
    ///
    /// When `false`, the `+` is consumed and discarded; it never appears in
    /// the rendered number.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_leading_plus: bool,

    /// Whether the mantissa must contain at least one integer digit.
    ///
    /// When `false`, inputs such as `-x`, `.5` or `e3` are accepted: the
    /// integer stage ends without digits and lexing continues (or stops) at
    /// whatever follows.
    ///
    /// # Default
    ///
    /// `false`
    pub require_integer_digits: bool,
}

impl LexerOptions {
    /// Options matching the strict JSON number grammar.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_leading_plus: true,
            require_integer_digits: true,
        }
    }
}
