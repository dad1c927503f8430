//! Pool identification: keys, ids and packed pool parameters.
use alloy_primitives::{Address, B256};

mod parameters;
mod pool_key;

pub use parameters::{BinPoolParameters, ClPoolParameters};
pub use pool_key::sort_currencies;

pub use crate::abi::{PathKey, PoolKey};
use crate::hooks;

/// Type representing a currency; the zero address is the native currency.
pub type Currency = Address;

/// Type representing Id of a Pool.
pub type PoolId = B256;

/// The pool manager family a pool belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolType {
    /// Concentrated-liquidity pool, parameterized by a tick spacing.
    Cl,
    /// Liquidity-book pool, parameterized by a bin step.
    Bin,
}

pub use sol::*;
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// The tick spacing does not fit into `int24`.
        ///
        /// * `tickSpacing` - Rejected tick spacing.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error TickSpacingOutOfRange(int32 tickSpacing);

        /// The packed parameters have bits set outside of the pool type's
        /// fields.
        ///
        /// * `parameters` - Rejected parameters.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidPoolParameters(bytes32 parameters);

        /// The currencies are equal or not sorted.
        ///
        /// * `currency0` - Expected lower currency.
        /// * `currency1` - Expected higher currency.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error CurrenciesOutOfOrder(address currency0, address currency1);

        /// The LP fee exceeds the pool type's bound.
        ///
        /// * `fee` - Rejected fee.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidPoolFee(uint32 fee);
    }
}

/// An error that occurred while building or inspecting a pool key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The hooks bitmap of the parameters is invalid.
    #[error(transparent)]
    Hooks(#[from] hooks::Error),
    /// The tick spacing does not fit into `int24`.
    #[error("tick spacing {} does not fit into int24", .0.tickSpacing)]
    TickSpacingOutOfRange(TickSpacingOutOfRange),
    /// The packed parameters have bits set outside of the pool type's fields.
    #[error("malformed pool parameters {}", .0.parameters)]
    InvalidParameters(InvalidPoolParameters),
    /// The currencies are equal or not sorted.
    #[error("currencies {} and {} are not sorted", .0.currency0, .0.currency1)]
    CurrenciesOutOfOrder(CurrenciesOutOfOrder),
    /// The LP fee exceeds the pool type's bound.
    #[error("invalid pool fee {}", .0.fee)]
    InvalidFee(InvalidPoolFee),
    /// The bin price could not be computed.
    #[error(transparent)]
    BinPrice(#[from] infinity_bin_math::price::Error),
}
