use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Splits fall on arbitrary byte offsets; the number grammar is ASCII, so no
/// code point handling is needed.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let end = core::cmp::min(start + chunk_size, len);
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

/// The interior offsets at which [`produce_chunks`] splits `payload`.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_split_points(payload: &[u8], parts: usize) -> Vec<usize> {
    let chunks = produce_chunks(payload, parts);
    let mut points = Vec::with_capacity(chunks.len().saturating_sub(1));
    let mut end = 0;
    for chunk in &chunks[..chunks.len().saturating_sub(1)] {
        end += chunk.len();
        points.push(end);
    }
    points
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn produce_helpers_example() {
        let payload = b"-12.5e+10";
        let chunks = produce_chunks(payload, 4);
        assert_eq!(chunks, vec![&b"-12"[..], &b".5e"[..], &b"+10"[..]]);
        assert_eq!(produce_split_points(payload, 4), vec![3, 6]);
    }

    #[test]
    fn more_parts_than_bytes() {
        let payload = b"12";
        assert_eq!(produce_chunks(payload, 5), vec![&b"1"[..], &b"2"[..]]);
        assert_eq!(produce_split_points(payload, 5), vec![1]);
        assert!(produce_chunks(b"", 3).is_empty());
        assert!(produce_split_points(b"", 3).is_empty());
    }
}
