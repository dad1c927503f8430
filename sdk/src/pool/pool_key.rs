use alloy_primitives::{aliases::U24, keccak256, Address, Bytes};
use alloy_sol_types::SolValue;
use infinity_bin_math::{bin_price, BinPrice};

use super::{
    BinPoolParameters, ClPoolParameters, CurrenciesOutOfOrder, Currency,
    Error, InvalidPoolFee, PathKey, PoolId, PoolKey, PoolType,
};
use crate::constants::{DYNAMIC_FEE_FLAG, MAX_BIN_LP_FEE, MAX_CL_LP_FEE};

impl From<PoolKey> for PoolId {
    fn from(value: PoolKey) -> Self {
        value.pool_id()
    }
}

/// Sorts two currencies numerically.
///
/// # Errors
///
/// * [`Error::CurrenciesOutOfOrder`] - If both currencies are equal.
pub fn sort_currencies(
    currency_a: Currency,
    currency_b: Currency,
) -> Result<(Currency, Currency), Error> {
    if currency_a == currency_b {
        return Err(Error::CurrenciesOutOfOrder(CurrenciesOutOfOrder {
            currency0: currency_a,
            currency1: currency_b,
        }));
    }
    if currency_a < currency_b {
        Ok((currency_a, currency_b))
    } else {
        Ok((currency_b, currency_a))
    }
}

impl PoolKey {
    /// Builds the key of a CL pool, sorting the currencies.
    ///
    /// # Errors
    ///
    /// * [`Error::CurrenciesOutOfOrder`] - If both currencies are equal.
    /// * [`Error::InvalidFee`] - If `fee` exceeds the CL fee bound and is not
    ///   the dynamic fee flag.
    /// * [`Error::TickSpacingOutOfRange`] - If the tick spacing does not fit
    ///   into `int24`.
    pub fn cl(
        currency_a: Currency,
        currency_b: Currency,
        hooks: Address,
        pool_manager: Address,
        fee: u32,
        parameters: ClPoolParameters,
    ) -> Result<Self, Error> {
        let (currency0, currency1) = sort_currencies(currency_a, currency_b)?;
        check_fee(fee, PoolType::Cl)?;
        Ok(Self {
            currency0,
            currency1,
            hooks,
            poolManager: pool_manager,
            fee: U24::saturating_from(fee),
            parameters: parameters.encode()?,
        })
    }

    /// Builds the key of a Bin pool, sorting the currencies.
    ///
    /// # Errors
    ///
    /// * [`Error::CurrenciesOutOfOrder`] - If both currencies are equal.
    /// * [`Error::InvalidFee`] - If `fee` exceeds the Bin fee bound and is
    ///   not the dynamic fee flag.
    pub fn bin(
        currency_a: Currency,
        currency_b: Currency,
        hooks: Address,
        pool_manager: Address,
        fee: u32,
        parameters: BinPoolParameters,
    ) -> Result<Self, Error> {
        let (currency0, currency1) = sort_currencies(currency_a, currency_b)?;
        check_fee(fee, PoolType::Bin)?;
        Ok(Self {
            currency0,
            currency1,
            hooks,
            poolManager: pool_manager,
            fee: U24::saturating_from(fee),
            parameters: parameters.encode(),
        })
    }

    /// Returns the id of the pool, `keccak256(abi.encode(key))`.
    #[must_use]
    pub fn pool_id(&self) -> PoolId {
        keccak256(PoolKey::abi_encode(self))
    }

    /// Returns whether the pool has a dynamic LP fee.
    #[must_use]
    pub fn is_dynamic_fee(&self) -> bool {
        self.fee.to::<u32>() == DYNAMIC_FEE_FLAG
    }

    /// Checks the invariants of a key of a `pool_type` pool.
    ///
    /// # Errors
    ///
    /// * [`Error::CurrenciesOutOfOrder`] - If the currencies are not sorted.
    /// * [`Error::InvalidFee`] - If the fee is out of bounds.
    /// * [`Error::InvalidParameters`], [`Error::Hooks`] - If the parameters do
    ///   not decode for `pool_type`.
    pub fn validate(&self, pool_type: PoolType) -> Result<(), Error> {
        if self.currency0 >= self.currency1 {
            return Err(Error::CurrenciesOutOfOrder(CurrenciesOutOfOrder {
                currency0: self.currency0,
                currency1: self.currency1,
            }));
        }
        check_fee(self.fee.to(), pool_type)?;
        match pool_type {
            PoolType::Cl => self.cl_parameters().map(drop),
            PoolType::Bin => self.bin_parameters().map(drop),
        }
    }

    /// Decodes the parameters as CL pool parameters.
    ///
    /// # Errors
    ///
    /// See [`ClPoolParameters::decode`].
    pub fn cl_parameters(&self) -> Result<ClPoolParameters, Error> {
        ClPoolParameters::decode(self.parameters)
    }

    /// Decodes the parameters as Bin pool parameters.
    ///
    /// # Errors
    ///
    /// See [`BinPoolParameters::decode`].
    pub fn bin_parameters(&self) -> Result<BinPoolParameters, Error> {
        BinPoolParameters::decode(self.parameters)
    }

    /// Returns the exact price of `bin_id` in this Bin pool, with `base` as
    /// the priced currency.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParameters`], [`Error::Hooks`] - If the parameters
    ///   are not Bin pool parameters.
    /// * [`Error::BinPrice`] - If `base` is not a currency of the pool or
    ///   `bin_id` is out of range.
    pub fn bin_price(
        &self,
        bin_id: u32,
        base: Currency,
    ) -> Result<BinPrice, Error> {
        let BinPoolParameters { bin_step, .. } = self.bin_parameters()?;
        Ok(bin_price(bin_step, bin_id, self.currency0, self.currency1, base)?)
    }

    /// Returns the hop through this pool that ends in `intermediate_currency`.
    #[must_use]
    pub fn path_key(
        &self,
        intermediate_currency: Currency,
        hook_data: Bytes,
    ) -> PathKey {
        PathKey {
            intermediateCurrency: intermediate_currency,
            fee: self.fee,
            hooks: self.hooks,
            poolManager: self.poolManager,
            hookData: hook_data,
            parameters: self.parameters,
        }
    }
}

fn check_fee(fee: u32, pool_type: PoolType) -> Result<(), Error> {
    let max = match pool_type {
        PoolType::Cl => MAX_CL_LP_FEE,
        PoolType::Bin => MAX_BIN_LP_FEE,
    };
    if fee == DYNAMIC_FEE_FLAG || fee <= max {
        Ok(())
    } else {
        Err(Error::InvalidFee(InvalidPoolFee { fee }))
    }
}
