//! Bin pool deposits.
//!
//! Turns a deposit request into [`BinAddLiquidityParams`], spreading the
//! amounts over the requested bins with [`get_liquidity_shape`].
use alloy_primitives::{Address, Bytes, I256, U256};
use infinity_bin_math::{distribution, get_liquidity_shape, BinLiquidityShape};
use tracing::debug;

use crate::{
    abi::{BinAddLiquidityFromDeltasParams, BinAddLiquidityParams},
    pool::{self, PoolKey, PoolType},
};

/// An error that occurred while preparing a deposit.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pool key is not a valid Bin pool key.
    #[error(transparent)]
    Pool(#[from] pool::Error),
    /// The bin range is invalid.
    #[error(transparent)]
    Distribution(#[from] distribution::Error),
}

/// A deposit into a contiguous range of bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinDeposit {
    /// Weighting policy of the bins.
    pub shape: BinLiquidityShape,
    /// Lowest bin id of the range, inclusive.
    pub lower_id: u32,
    /// Highest bin id of the range, inclusive.
    pub upper_id: u32,
    /// Expected active bin id when the deposit executes.
    pub active_id_desired: u32,
    /// Tolerated distance between the actual and desired active bin.
    pub id_slippage: u32,
    /// Desired amount of `currency0`.
    pub amount0: u128,
    /// Desired amount of `currency1`.
    pub amount1: u128,
    /// Maximum amount of `currency0` paid.
    pub amount0_max: u128,
    /// Maximum amount of `currency1` paid.
    pub amount1_max: u128,
    /// Receiver of the liquidity tokens.
    pub to: Address,
    /// Data forwarded to the pool's hooks.
    pub hook_data: Bytes,
}

impl BinDeposit {
    /// Builds the `BIN_ADD_LIQUIDITY` parameters of the deposit.
    ///
    /// # Errors
    ///
    /// * [`Error::Pool`] - If `pool_key` is not a valid Bin pool key.
    /// * [`Error::Distribution`] - If the bin range is invalid.
    pub fn add_liquidity_params(
        &self,
        pool_key: &PoolKey,
    ) -> Result<BinAddLiquidityParams, Error> {
        let (delta_ids, distribution_x, distribution_y) =
            self.distribution(pool_key)?;
        Ok(BinAddLiquidityParams {
            poolKey: pool_key.clone(),
            amount0: self.amount0,
            amount1: self.amount1,
            amount0Max: self.amount0_max,
            amount1Max: self.amount1_max,
            activeIdDesired: U256::from(self.active_id_desired),
            idSlippage: U256::from(self.id_slippage),
            deltaIds: delta_ids,
            distributionX: distribution_x,
            distributionY: distribution_y,
            to: self.to,
            hookData: self.hook_data.clone(),
        })
    }

    /// Builds the `BIN_ADD_LIQUIDITY_FROM_DELTAS` parameters of the deposit.
    ///
    /// The desired amounts only shape the distribution; the executor pays
    /// with the open deltas.
    ///
    /// # Errors
    ///
    /// See [`Self::add_liquidity_params`].
    pub fn add_liquidity_from_deltas_params(
        &self,
        pool_key: &PoolKey,
    ) -> Result<BinAddLiquidityFromDeltasParams, Error> {
        let (delta_ids, distribution_x, distribution_y) =
            self.distribution(pool_key)?;
        Ok(BinAddLiquidityFromDeltasParams {
            poolKey: pool_key.clone(),
            amount0Max: self.amount0_max,
            amount1Max: self.amount1_max,
            activeIdDesired: U256::from(self.active_id_desired),
            idSlippage: U256::from(self.id_slippage),
            deltaIds: delta_ids,
            distributionX: distribution_x,
            distributionY: distribution_y,
            to: self.to,
            hookData: self.hook_data.clone(),
        })
    }

    fn distribution(
        &self,
        pool_key: &PoolKey,
    ) -> Result<(Vec<I256>, Vec<U256>, Vec<U256>), Error> {
        pool_key.validate(PoolType::Bin)?;
        let shape = get_liquidity_shape(
            self.shape,
            self.lower_id,
            self.upper_id,
            self.active_id_desired,
            self.amount0,
            self.amount1,
        )?;
        debug!(
            pool_id = %pool_key.pool_id(),
            bins = shape.len(),
            "prepared bin deposit"
        );
        Ok(shape.into_abi_vectors())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use infinity_bin_math::constants::DISTRIBUTION_TOTAL;

    use super::*;
    use crate::pool::BinPoolParameters;

    const REFERENCE_ID: u32 = 1 << 23;

    fn pool_key() -> PoolKey {
        PoolKey::bin(
            address!("55d398326f99059ff775485246999027b3197955"),
            address!("0e09fabb73bd3ade0a17ecc321fd13a19e81ce82"),
            Address::ZERO,
            address!("c697d2898e0d09264376196696c51d7abbbaa4a9"),
            2500,
            BinPoolParameters { bin_step: 10, ..Default::default() },
        )
        .unwrap()
    }

    fn deposit(shape: BinLiquidityShape) -> BinDeposit {
        BinDeposit {
            shape,
            lower_id: REFERENCE_ID - 2,
            upper_id: REFERENCE_ID + 2,
            active_id_desired: REFERENCE_ID,
            id_slippage: 5,
            amount0: 1_000,
            amount1: 2_000,
            amount0_max: 1_010,
            amount1_max: 2_020,
            to: address!("a11ce00000000000000000000000000000000000"),
            hook_data: Bytes::new(),
        }
    }

    #[test]
    fn fills_params_from_shape() {
        let key = pool_key();
        let params = deposit(BinLiquidityShape::Spot)
            .add_liquidity_params(&key)
            .unwrap();
        assert_eq!(params.poolKey, key);
        assert_eq!(params.activeIdDesired, U256::from(REFERENCE_ID));
        assert_eq!(
            params.deltaIds,
            (-2i32..=2).map(I256::unchecked_from).collect::<Vec<_>>()
        );
        let total = U256::from(DISTRIBUTION_TOTAL);
        let sum = |column: &[U256]| {
            column.iter().fold(U256::ZERO, |acc, x| acc + x)
        };
        assert!(sum(&params.distributionX) < total);
        assert!(sum(&params.distributionY) < total);
        assert_eq!(params.distributionX[0], U256::ZERO);
        assert_eq!(params.distributionY[4], U256::ZERO);
    }

    #[test]
    fn from_deltas_shares_the_distribution() {
        let key = pool_key();
        let deposit = deposit(BinLiquidityShape::BidAsk);
        let params = deposit.add_liquidity_params(&key).unwrap();
        let from_deltas =
            deposit.add_liquidity_from_deltas_params(&key).unwrap();
        assert_eq!(from_deltas.deltaIds, params.deltaIds);
        assert_eq!(from_deltas.distributionX, params.distributionX);
        assert_eq!(from_deltas.distributionY, params.distributionY);
        assert_eq!(from_deltas.amount0Max, 1_010);
    }

    #[test]
    fn rejects_cl_parameters_with_high_bits() {
        let mut key = pool_key();
        key.parameters = crate::pool::ClPoolParameters {
            tick_spacing: -1,
            ..Default::default()
        }
        .encode()
        .unwrap();
        assert!(matches!(
            deposit(BinLiquidityShape::Curve).add_liquidity_params(&key),
            Err(Error::Pool(pool::Error::InvalidParameters(_)))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut deposit = deposit(BinLiquidityShape::Spot);
        std::mem::swap(&mut deposit.lower_id, &mut deposit.upper_id);
        assert!(matches!(
            deposit.add_liquidity_params(&pool_key()),
            Err(Error::Distribution(distribution::Error::InvalidBinRange(_)))
        ));
    }
}
