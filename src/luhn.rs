//! Luhn mod-10 checksum (ISO/IEC 7812-1).
//!
//! Catches single-digit transcription errors and most adjacent
//! transpositions. A passing checksum says nothing about whether the
//! account exists; it only rules out malformed numbers.

/// Checks the Luhn checksum of a digit string.
///
/// Returns `false` for an empty string or any non-digit character; never
/// panics, so it is safe on untrusted form input.
pub fn valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    checksum(number.bytes().rev().map(|b| b - b'0')) % 10 == 0
}

/// Checks the Luhn checksum of already-parsed digit values (each 0-9).
///
/// An empty slice is invalid.
pub fn valid_digits(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    checksum(digits.iter().rev().copied()) % 10 == 0
}

/// Sums digits supplied rightmost-first, doubling every second digit and
/// folding doubled values above 9 back into a single digit.
fn checksum(rightmost_first: impl Iterator<Item = u8>) -> u32 {
    rightmost_first
        .enumerate()
        .map(|(i, d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}
