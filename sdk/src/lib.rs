/*!
# Infinity SDK

Client side building blocks for Infinity CL and Bin pools: pool keys and
their packed parameters, action plans for the position manager and router,
and the calldata wrapping them.

> Note that `infinity-sdk` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4).

## Usage

Build a plan, append the epilogue matching the operation and hand the
payload to the position manager:

```
use alloy_primitives::{address, Address, U256};
use infinity_sdk::{
    abi::BinAddLiquidityParams,
    actions::ActionsPlanner,
    calldata,
    pool::{BinPoolParameters, PoolKey},
};

let pool_key = PoolKey::bin(
    address!("55d398326f99059ff775485246999027b3197955"),
    address!("0e09fabb73bd3ade0a17ecc321fd13a19e81ce82"),
    Address::ZERO,
    address!("c697d2898e0d09264376196696c51d7abbbaa4a9"),
    3000,
    BinPoolParameters { bin_step: 10, ..Default::default() },
)?;

let mut planner = ActionsPlanner::new();
planner.add(BinAddLiquidityParams {
    poolKey: pool_key.clone(),
    ..Default::default()
});
let payload = planner.finalize_modify_liquidity_with_close(&pool_key);
let call = calldata::modify_liquidities(payload, U256::from(1_700_000_000));
# Ok::<(), infinity_sdk::pool::Error>(())
```

Liquidity shapes for Bin pools come from [`infinity_bin_math`], re-exported
as [`bin_math`].
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod abi;
pub mod actions;
pub mod calldata;
pub mod constants;
pub mod hooks;
pub mod liquidity;
pub mod pool;

pub use infinity_bin_math as bin_math;
