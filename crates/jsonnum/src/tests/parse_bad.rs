use alloc::string::ToString;

use rstest::rstest;

use super::init_logger;
use crate::{LexError, LexerOptions, NumberLexer, grind, grind_with};

#[rstest]
#[case::empty("", None, 0, "0e0")]
#[case::minus_alone("-", None, 1, "-e0")]
#[case::plus_alone("+", None, 1, "0e0")]
#[case::leading_zero("01", Some(b'1'), 1, "0e0")]
#[case::negative_leading_zero("-00", Some(b'0'), 2, "-0e0")]
#[case::zero_then_exponent("0e1", Some(b'e'), 1, "0e0")]
#[case::zero_then_comma("0,", Some(b','), 1, "0e0")]
#[case::exponent_at_end("1e", None, 2, "1e0")]
#[case::exponent_sign_at_end("1e-", None, 3, "1e-")]
#[case::exponent_plus_at_end("1E+", None, 3, "1e0")]
#[case::exponent_without_digits("1ex", Some(b'x'), 2, "1e0")]
#[case::exponent_sign_without_digits("2.5e+,", Some(b','), 5, "2.5e0")]
fn rejects(
    #[case] input: &str,
    #[case] found: Option<u8>,
    #[case] offset: usize,
    #[case] rendered: &str,
) {
    init_logger();
    let outcome = grind(input).unwrap();
    assert_eq!(outcome.error, Some(LexError::new(found, offset)), "{input:?}");
    assert_eq!(outcome.consumed, offset);
    // The value is still well formed after a rejection.
    assert_eq!(outcome.value.render(), rendered);
}

#[rstest]
#[case::leading_plus("+1", Some(b'+'), 0)]
#[case::bare_fraction(".5", Some(b'.'), 0)]
#[case::bare_exponent("e5", Some(b'e'), 0)]
#[case::sign_then_letter("-x", Some(b'x'), 1)]
#[case::not_a_number("x", Some(b'x'), 0)]
fn strict_mode_rejects(#[case] input: &str, #[case] found: Option<u8>, #[case] offset: usize) {
    let outcome = grind_with(input, LexerOptions::strict()).unwrap();
    assert_eq!(outcome.error, Some(LexError::new(found, offset)), "{input:?}");
}

#[test]
fn error_messages() {
    let outcome = grind("01").unwrap();
    assert_eq!(
        outcome.to_string(),
        "invalid number literal: unexpected '1' at offset 1"
    );
    let outcome = grind("-").unwrap();
    assert_eq!(
        outcome.to_string(),
        "invalid number literal: unexpected end of input at offset 1"
    );
}

#[test]
fn no_progress_after_error() {
    let mut lexer = NumberLexer::default();
    assert_eq!(lexer.process(b"0"), 1);
    assert_eq!(lexer.process(b"12"), 0);
    assert!(lexer.is_complete());
    let err = *lexer.error().unwrap();
    assert_eq!(lexer.process(b".5"), 0);
    lexer.finalize();
    assert_eq!(lexer.error(), Some(&err));
    assert_eq!(lexer.consumed(), 1);
}
