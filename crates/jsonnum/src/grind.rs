//! Split-invariance verification.
//!
//! Grinding replays one input through fresh lexers, split at different
//! offsets, and checks each run against a baseline that saw the input in a
//! single chunk. Any difference in error, value or consumed count is a
//! [`GrindFailure`].

use bstr::BString;

use crate::{
    chunk_utils::produce_split_points, error::GrindFailure, lexer::NumberLexer,
    options::LexerOptions, outcome::Outcome,
};

/// Verifies `input` against every 2-way split using the default options and
/// returns the baseline outcome.
///
/// A rejected input is not a failure: the returned [`Outcome`] carries the
/// error. Only a disagreement between split and unsplit runs is.
///
/// ```rust
/// let outcome = jsonnum::grind("100.0").unwrap();
/// assert_eq!(outcome.to_string(), "100.0e0");
/// assert_eq!(outcome.consumed, 5);
/// ```
///
/// # Errors
///
/// Returns a [`GrindFailure`] naming the first split whose outcome differs
/// from the baseline.
pub fn grind(input: impl AsRef<[u8]>) -> Result<Outcome, GrindFailure> {
    grind_with(input, LexerOptions::default())
}

/// Like [`grind`], with explicit lexer options.
///
/// # Errors
///
/// Returns a [`GrindFailure`] naming the first split whose outcome differs
/// from the baseline.
pub fn grind_with(
    input: impl AsRef<[u8]>,
    options: LexerOptions,
) -> Result<Outcome, GrindFailure> {
    let input = input.as_ref();
    let baseline = feed(input, &[], options);
    log::debug!(
        "grinding {:?}: baseline {baseline},{}",
        bstr::BStr::new(input),
        baseline.consumed
    );

    for split in 1..input.len() {
        check(input, &[split], options, &baseline)?;
    }
    Ok(baseline)
}

/// Verifies `input` fed in `parts` near-equal chunks against the baseline.
///
/// # Errors
///
/// Returns a [`GrindFailure`] if the chunked run differs from the baseline.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub fn grind_partitioned(
    input: impl AsRef<[u8]>,
    parts: usize,
    options: LexerOptions,
) -> Result<Outcome, GrindFailure> {
    let input = input.as_ref();
    let splits = produce_split_points(input, parts);
    grind_splits(input, &splits, options)
}

/// Verifies `input` split at each offset in `splits` against the baseline.
///
/// # Errors
///
/// Returns a [`GrindFailure`] if the split run differs from the baseline.
///
/// # Panics
///
/// Panics if `splits` is not ascending or an offset exceeds the input length.
pub fn grind_splits(
    input: impl AsRef<[u8]>,
    splits: &[usize],
    options: LexerOptions,
) -> Result<Outcome, GrindFailure> {
    let input = input.as_ref();
    let baseline = feed(input, &[], options);
    check(input, splits, options, &baseline)?;
    Ok(baseline)
}

fn check(
    input: &[u8],
    splits: &[usize],
    options: LexerOptions,
    baseline: &Outcome,
) -> Result<(), GrindFailure> {
    let actual = feed(input, splits, options);
    if actual == *baseline {
        log::trace!("split {splits:?} agrees: {actual},{}", actual.consumed);
        return Ok(());
    }

    let failure = GrindFailure {
        input: BString::from(input),
        splits: splits.to_vec(),
        expected: baseline.clone(),
        actual,
    };
    log::warn!("{failure}");
    Err(failure)
}

/// Runs a fresh lexer over `input` cut at `splits`, then finalizes it.
///
/// Chunks after the one that completed the lexer are not fed, and empty
/// chunks are skipped since an empty chunk would finalize early.
fn feed(input: &[u8], splits: &[usize], options: LexerOptions) -> Outcome {
    let mut lexer = NumberLexer::new(options);
    let mut start = 0;
    for end in splits.iter().copied().chain(core::iter::once(input.len())) {
        if lexer.is_complete() {
            break;
        }
        let chunk = &input[start..end];
        if !chunk.is_empty() {
            let consumed = lexer.process(chunk);
            debug_assert!(lexer.is_complete() || consumed == chunk.len());
        }
        start = end;
    }
    lexer.finalize();
    lexer.outcome()
}
