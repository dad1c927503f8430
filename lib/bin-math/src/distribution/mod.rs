//! Spreading a deposit over a contiguous range of bins.
//!
//! A liquidity shape is three index-aligned columns: the bin ids relative to
//! the desired active bin, and the share of the `x` and `y` deposits each bin
//! receives. Shares are integers scaled by [`DISTRIBUTION_TOTAL`]; every
//! column sums to strictly less than it.
//!
//! Bins above the active bin only hold currency `x`, bins below it only hold
//! currency `y`, and the active bin is the only bin that may hold both.
use alloy_primitives::{I256, U256};
use tracing::debug;

use crate::constants::{DISTRIBUTION_TOTAL, MAX_BIN_ID};

mod bid_ask;
mod curve;
mod spot;

pub use bid_ask::generate_sequence;
pub use curve::DEFAULT_CURVE_DEVIATION;

pub use sol::*;
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// The bin range is empty or does not fit into `uint24` ids.
        ///
        /// * `lowerId` - Lowest bin id of the range.
        /// * `upperId` - Highest bin id of the range.
        /// * `activeId` - Desired active bin id.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidBinRange(uint24 lowerId, uint24 upperId, uint24 activeId);
    }
}

/// An error that occurred while computing a liquidity shape.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bin range is empty or does not fit into `uint24` ids.
    #[error(
        "invalid bin range [{}, {}] around active bin {}",
        .0.lowerId, .0.upperId, .0.activeId
    )]
    InvalidBinRange(InvalidBinRange),
}

/// Policy used to weight the bins of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinLiquidityShape {
    /// Every bin of a side receives the same share.
    Spot,
    /// Shares follow a Gaussian centered on the middle of the range.
    Curve,
    /// Shares grow linearly away from the middle of the range.
    BidAsk,
}

/// Per-bin weights of a deposit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiquidityShape {
    /// Bin ids relative to the desired active bin.
    pub delta_ids: Vec<i32>,
    /// Share of the `x` deposit per bin.
    pub distribution_x: Vec<u64>,
    /// Share of the `y` deposit per bin.
    pub distribution_y: Vec<u64>,
}

impl LiquidityShape {
    /// Number of bins in the shape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.delta_ids.len()
    }

    /// Returns `true` if the shape has no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delta_ids.is_empty()
    }

    /// Sum of the `x` column.
    #[must_use]
    pub fn total_x(&self) -> u64 {
        self.distribution_x.iter().sum()
    }

    /// Sum of the `y` column.
    #[must_use]
    pub fn total_y(&self) -> u64 {
        self.distribution_y.iter().sum()
    }

    /// Converts the columns into the `int256[]`/`uint256[]` arrays expected
    /// by bin add-liquidity actions.
    #[must_use]
    pub fn into_abi_vectors(self) -> (Vec<I256>, Vec<U256>, Vec<U256>) {
        let delta_ids = self
            .delta_ids
            .into_iter()
            .map(I256::unchecked_from)
            .collect();
        let distribution_x =
            self.distribution_x.into_iter().map(U256::from).collect();
        let distribution_y =
            self.distribution_y.into_iter().map(U256::from).collect();
        (delta_ids, distribution_x, distribution_y)
    }
}

/// Relative bins of a range together with which sides are funded.
#[derive(Debug)]
pub(crate) struct Bins {
    pub(crate) ids: Vec<i32>,
    pub(crate) fund_x: bool,
    pub(crate) fund_y: bool,
}

impl Bins {
    /// Whether the bin at relative `id` may receive currency `x`.
    pub(crate) fn holds_x(&self, id: i32) -> bool {
        self.fund_x && id >= 0
    }

    /// Whether the bin at relative `id` may receive currency `y`.
    pub(crate) fn holds_y(&self, id: i32) -> bool {
        self.fund_y && id <= 0
    }

    pub(crate) fn count_x(&self) -> usize {
        self.ids.iter().filter(|&&id| self.holds_x(id)).count()
    }

    pub(crate) fn count_y(&self) -> usize {
        self.ids.iter().filter(|&&id| self.holds_y(id)).count()
    }

    /// Both sides have at least one funded bin, which means the active bin
    /// is part of the range and shared between them.
    pub(crate) fn both_sides(&self) -> bool {
        self.count_x() > 0 && self.count_y() > 0
    }
}

/// Computes how a deposit of `(amount0, amount1)` is spread over the bins
/// `[lower_id, upper_id]` when the active bin is expected to be
/// `active_id_desired`.
///
/// A zero amount leaves its column all zero.
///
/// # Arguments
///
/// * `shape` - Weighting policy.
/// * `lower_id` - Lowest absolute bin id of the range, inclusive.
/// * `upper_id` - Highest absolute bin id of the range, inclusive.
/// * `active_id_desired` - Absolute id of the expected active bin.
/// * `amount0` - Desired amount of currency `x`.
/// * `amount1` - Desired amount of currency `y`.
///
/// # Errors
///
/// * [`Error::InvalidBinRange`] - If `lower_id > upper_id` or any id does not
///   fit into `uint24`.
pub fn get_liquidity_shape(
    shape: BinLiquidityShape,
    lower_id: u32,
    upper_id: u32,
    active_id_desired: u32,
    amount0: u128,
    amount1: u128,
) -> Result<LiquidityShape, Error> {
    if lower_id > upper_id
        || upper_id > MAX_BIN_ID
        || active_id_desired > MAX_BIN_ID
    {
        return Err(Error::InvalidBinRange(InvalidBinRange {
            lowerId: to_u24(lower_id),
            upperId: to_u24(upper_id),
            activeId: to_u24(active_id_desired),
        }));
    }

    // All ids fit into 24 bits, so neither the casts nor the differences
    // overflow `i32`.
    #[allow(clippy::cast_possible_wrap)]
    let ids = (lower_id..=upper_id)
        .map(|id| id as i32 - active_id_desired as i32)
        .collect();
    let bins = Bins { ids, fund_x: amount0 > 0, fund_y: amount1 > 0 };

    let (distribution_x, distribution_y) = match shape {
        BinLiquidityShape::Spot => spot::distribute(&bins),
        BinLiquidityShape::Curve => {
            curve::distribute(&bins, DEFAULT_CURVE_DEVIATION)
        }
        BinLiquidityShape::BidAsk => bid_ask::distribute(&bins),
    };

    let result = LiquidityShape {
        delta_ids: bins.ids,
        distribution_x,
        distribution_y,
    };
    debug!(
        ?shape,
        bins = result.len(),
        total_x = result.total_x(),
        total_y = result.total_y(),
        "computed liquidity shape"
    );
    Ok(result)
}

/// Largest unit such that `unit * weight_total` stays below
/// [`DISTRIBUTION_TOTAL`].
pub(crate) fn unit_below_total(weight_total: u64) -> u64 {
    (DISTRIBUTION_TOTAL - 1) / weight_total
}

fn to_u24(id: u32) -> alloy_primitives::aliases::U24 {
    alloy_primitives::aliases::U24::saturating_from(id)
}
