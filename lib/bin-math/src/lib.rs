/*!
Numeric building blocks for Infinity bin pools.

> Note that `infinity-bin-math` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4).

## Packed amounts and fixed-point prices

[`amounts`](./src/amounts.rs) splits the packed reserve word a bin pool
returns into its `(x, y)` halves, and [`fixed_point`](./src/fixed_point.rs)
converts between `1e18`-scaled decimal prices and `128.128` fixed-point
prices.

## Bin prices

[`price`](./src/price.rs) computes the exact rational price of a bin from its
id and the pool's bin step, oriented towards the requested base currency.

## Liquidity shapes

[`distribution`](./src/distribution/mod.rs) spreads a deposit over a
contiguous range of bins following one of the [`BinLiquidityShape`] policies.
*/

pub mod amounts;
pub mod constants;
pub mod distribution;
pub mod fixed_point;
pub mod math;
pub mod price;

pub use amounts::{decode_bin_amount, encode_bin_amount};
pub use distribution::{get_liquidity_shape, BinLiquidityShape, LiquidityShape};
pub use fixed_point::{decimal_to_fixed128x128, fixed128x128_to_decimal};
pub use price::{bin_price, BinPrice};
