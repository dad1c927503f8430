//! Protocol constants shared by the bin pool math.
use alloy_primitives::{uint, U256};

/// Bin id whose price is exactly `1`.
pub const REFERENCE_ID: u32 = 1 << 23;

/// Largest valid bin id (bin ids are `uint24`).
pub const MAX_BIN_ID: u32 = (1 << 24) - 1;

/// Denominator of the bin step, expressed in basis points.
pub const BASIS_POINT_MAX: u32 = 10_000;

/// Number of fractional bits of a `128.128` fixed-point number.
pub const SCALE_OFFSET: usize = 128;

/// `1.0` in `128.128` fixed-point.
pub const SCALE: U256 = uint!(0x100000000000000000000000000000000_U256);

/// `1.0` in `1e18` decimal fixed-point.
pub const PRECISION: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Each liquidity distribution column sums to strictly less than this value.
pub const DISTRIBUTION_TOTAL: u64 = 1_000_000_000_000_000_000;
