//! Exact bin prices.
//!
//! The price of bin `id` for a pool with bin step `s` (in basis points) is
//! `(1 + s / 10_000) ^ (id - 2^23)`, expressed as the amount of currency `y`
//! paid for one unit of currency `x`. Prices are kept as exact fractions so
//! callers decide when and how to round.
use alloy_primitives::{Address, U256};
use num_bigint::BigUint;
use num_integer::Integer;

use crate::constants::{BASIS_POINT_MAX, MAX_BIN_ID, REFERENCE_ID, SCALE_OFFSET};

pub use sol::*;
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// The requested base currency is neither currency of the pool.
        ///
        /// * `currency` - Requested base currency.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error BinPriceUnknownCurrency(address currency);

        /// The bin id does not fit into `uint24`.
        ///
        /// * `id` - Invalid bin id.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error BinPriceInvalidId(uint256 id);
    }
}

/// An error that occurred while pricing a bin.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested base currency is neither currency of the pool.
    #[error("currency {} is not part of the pool", .0.currency)]
    UnknownCurrency(BinPriceUnknownCurrency),
    /// The bin id does not fit into `uint24`.
    #[error("bin id {} is out of range", .0.id)]
    InvalidId(BinPriceInvalidId),
}

/// Price of one unit of `base`, expressed in units of `quote`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinPrice {
    /// The priced currency.
    pub base: Address,
    /// The currency the price is expressed in.
    pub quote: Address,
    /// Numerator of the reduced fraction.
    pub numerator: BigUint,
    /// Denominator of the reduced fraction.
    pub denominator: BigUint,
}

impl BinPrice {
    /// Returns the price of `quote` in units of `base`.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        }
    }

    /// Returns `floor(price * 10^decimals)`.
    #[must_use]
    pub fn to_decimal(&self, decimals: u32) -> BigUint {
        &self.numerator * BigUint::from(10u32).pow(decimals) / &self.denominator
    }

    /// Returns `floor(price * 2^128)`, or `None` when it does not fit into
    /// [`U256`].
    #[must_use]
    pub fn to_fixed128x128(&self) -> Option<U256> {
        let fixed = (&self.numerator << SCALE_OFFSET) / &self.denominator;
        U256::try_from_be_slice(&fixed.to_bytes_be())
    }
}

/// Computes the exact price of bin `id` for a pool with the given
/// `bin_step`, oriented so that `base` is the priced currency.
///
/// # Arguments
///
/// * `bin_step` - Bin step of the pool, in basis points.
/// * `id` - Absolute bin id.
/// * `currency_x` - Currency `x` of the pool (`currency0`).
/// * `currency_y` - Currency `y` of the pool (`currency1`).
/// * `base` - Currency to price, one of `currency_x` and `currency_y`.
///
/// # Errors
///
/// * [`Error::InvalidId`] - If `id` does not fit into `uint24`.
/// * [`Error::UnknownCurrency`] - If `base` is neither `currency_x` nor
///   `currency_y`.
pub fn bin_price(
    bin_step: u16,
    id: u32,
    currency_x: Address,
    currency_y: Address,
    base: Address,
) -> Result<BinPrice, Error> {
    if id > MAX_BIN_ID {
        return Err(Error::InvalidId(BinPriceInvalidId { id: U256::from(id) }));
    }

    // (10_000 + s) / 10_000, reduced before exponentiation.
    let step_numerator = BASIS_POINT_MAX + u32::from(bin_step);
    let divisor = step_numerator.gcd(&BASIS_POINT_MAX);
    let step_numerator = BigUint::from(step_numerator / divisor);
    let step_denominator = BigUint::from(BASIS_POINT_MAX / divisor);

    let (numerator, denominator) = if id >= REFERENCE_ID {
        let exponent = id - REFERENCE_ID;
        (step_numerator.pow(exponent), step_denominator.pow(exponent))
    } else {
        let exponent = REFERENCE_ID - id;
        (step_denominator.pow(exponent), step_numerator.pow(exponent))
    };

    let price_of_x = BinPrice {
        base: currency_x,
        quote: currency_y,
        numerator,
        denominator,
    };

    if base == currency_x {
        Ok(price_of_x)
    } else if base == currency_y {
        Ok(price_of_x.invert())
    } else {
        Err(Error::UnknownCurrency(BinPriceUnknownCurrency { currency: base }))
    }
}
