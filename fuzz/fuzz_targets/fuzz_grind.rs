#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonnum::{LexerOptions, grind_splits, grind_with};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Bytes that steer the lexer into every state, plus a few terminators.
static NUMBER_TABLE: &[u8] = b"0123456789+-.eE,] x";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03); // 2 bits

        // split-seed
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let limit = max_size.saturating_sub(HEADER);
        let written = if seed.is_multiple_of(2) {
            append_formatted(&mut data[HEADER..], size, limit)
        } else {
            append_noise(&mut data[HEADER..], limit)
        };

        HEADER + written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N bytes drawn from [`NUMBER_TABLE`], never exceeding `limit`.
fn append_noise(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n = rng.random_range(1..=limit.min(24));
        for b in &mut buf[..n] {
            *b = NUMBER_TABLE[rng.random_range(0..NUMBER_TABLE.len())];
        }
        n
    })
}

/// Append a float formatted the way Rust prints it, in plain or exponent
/// form.
fn append_formatted(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(8..size.max(9) * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        match ArbitraryNumber::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            Ok(value) => break value,
            Err(_) => continue,
        };
    };

    let formatted = if value.scientific {
        format!("{:e}", value.value)
    } else {
        format!("{}", value.value)
    };

    let len = formatted.len().min(limit);
    data[..len].copy_from_slice(&formatted.as_bytes()[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryNumber {
    value: f64,
    scientific: bool,
}

impl<'a> Arbitrary<'a> for ArbitraryNumber {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value: f64 = u.arbitrary()?;
        if !value.is_finite() {
            return Err(arbitrary::Error::IncorrectFormat);
        }
        Ok(ArbitraryNumber {
            value,
            scientific: u.arbitrary()?,
        })
    }
}

fn grinder(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as u64;
    let data = &data[HEADER..];

    let options = LexerOptions {
        reject_leading_plus: flags & 1 != 0,
        require_integer_digits: flags & 2 != 0,
    };

    // Every 2-way split, then one k-way split derived from the seed.
    if let Err(failure) = grind_with(data, options) {
        panic!("{}", failure.explain());
    }
    let splits = split_points(data.len(), split_seed);
    if let Err(failure) = grind_splits(data, &splits, options) {
        panic!("{}", failure.explain());
    }
}

fuzz_target!(|data: &[u8]| grinder(data));

/// Derive ascending interior split points using a deterministic random value.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
fn split_points(len: usize, split_seed: u64) -> Vec<usize> {
    let mut points = Vec::new();
    let mut start = 0;

    while start < len {
        let remaining = len - start;
        let size = (split_seed as usize % remaining) + 1;
        start += size;
        if start < len {
            points.push(start);
        }
    }

    points
}
