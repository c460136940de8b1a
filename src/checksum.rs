use num_bigint::BigUint;

use crate::alphabet::Alphabet;

/// Returns the symbol at index `n % modulus`.
///
/// This is a weak check: it detects only part of single-character typos and it reveals
/// `n % modulus` to anyone who knows the alphabet.
///
/// `modulus` must be in `1..=alphabet.len()`, which [`Configuration`](crate::Configuration)
/// validation guarantees for a [`Codec`](crate::Codec).
///
/// # Panics
///
/// Panics if `modulus` is `0` or greater than the alphabet length.
pub fn checksum(alphabet: &Alphabet, n: &BigUint, modulus: u32) -> char {
    assert!(
        modulus > 0 && modulus as usize <= alphabet.len(),
        "checksum modulus {} out of range for an alphabet of {} symbols",
        modulus,
        alphabet.len()
    );
    let index = (n % modulus).to_u32_digits().first().map_or(0, |&d| d as usize);
    alphabet.symbols()[index]
}
