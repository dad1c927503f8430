//! Conversions between `1e18` decimal prices and `128.128` fixed-point
//! prices.
//!
//! Both directions floor, so the two functions are not inverses of each
//! other: a round trip may lose up to one unit of the target precision.
use alloy_primitives::U256;

use crate::{
    constants::{PRECISION, SCALE},
    math::{Math, Rounding},
};

/// Converts a `1e18`-scaled decimal price into a `128.128` fixed-point
/// price: `floor(price * 2^128 / 1e18)`.
///
/// Returns `None` when the result does not fit into [`U256`].
#[must_use]
pub fn decimal_to_fixed128x128(price: U256) -> Option<U256> {
    price.mul_div(SCALE, PRECISION, Rounding::Floor)
}

/// Converts a `128.128` fixed-point price into a `1e18`-scaled decimal
/// price: `floor(fixed * 1e18 / 2^128)`.
#[must_use]
pub fn fixed128x128_to_decimal(fixed: U256) -> U256 {
    // 1e18 < 2^128, so the quotient is always smaller than `fixed`.
    fixed
        .mul_div(PRECISION, SCALE, Rounding::Floor)
        .unwrap_or_default()
}
