use num_bigint::BigUint;

/// Reverses the order of the low `block_size` bits of `n`, leaving the higher bits untouched.
///
/// The permutation is its own inverse, so the same function is used for both encoding and
/// decoding. A `block_size` of `0` is the identity.
///
/// Note that a set bit is moved up to bit `block_size - 1`, so the result of scrambling a small
/// `n` with a huge `block_size` is a huge number. [`Configuration`](crate::Configuration)
/// validation caps the block size at [`MAX_BLOCK_SIZE`](crate::MAX_BLOCK_SIZE) bits.
pub fn scramble(n: &BigUint, block_size: u64) -> BigUint {
    let mut ret = (n >> block_size) << block_size;
    // Bits at and above `n.bits()` are unset and have nothing to move.
    for bit in 0..block_size.min(n.bits()) {
        if n.bit(bit) {
            ret.set_bit(block_size - 1 - bit, true);
        }
    }
    ret
}
