//! Packed reserve amounts of a bin.
//!
//! A bin pool stores the reserves of a bin in a single `bytes32` word: the
//! low 128 bits hold the amount of currency `x` and the high 128 bits hold
//! the amount of currency `y`.
use alloy_primitives::U256;

/// Splits `packed` into `(amount_x, amount_y)`.
///
/// `amount_x` is `packed mod 2^128` and `amount_y` is `packed / 2^128`.
#[must_use]
pub fn decode_bin_amount(packed: U256) -> (u128, u128) {
    let limbs = packed.as_limbs();
    let amount_x = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
    let amount_y = u128::from(limbs[2]) | (u128::from(limbs[3]) << 64);
    (amount_x, amount_y)
}

/// Packs `(amount_x, amount_y)` into a single word, the inverse of
/// [`decode_bin_amount`].
#[must_use]
pub fn encode_bin_amount(amount_x: u128, amount_y: u128) -> U256 {
    (U256::from(amount_y) << 128) | U256::from(amount_x)
}
