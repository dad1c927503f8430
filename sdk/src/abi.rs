//! Solidity structures shared with the Infinity periphery contracts.
//!
//! Every action parameter struct mirrors the layout the executor decodes, so
//! field order and widths must not change.
#![allow(missing_docs)]
use alloy_sol_types::sol;

sol! {
    /// Returns the key for identifying a pool.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct PoolKey {
        /// The lower currency of the pool, sorted numerically.
        address currency0;
        /// The higher currency of the pool, sorted numerically.
        address currency1;
        /// The hooks contract of the pool, or the zero address.
        address hooks;
        /// The pool manager (CL or Bin) the pool lives in.
        address poolManager;
        /// The pool LP fee. `0x800000` marks a dynamic fee.
        uint24 fee;
        /// Pool type specific parameters packed with the hooks bitmap.
        bytes32 parameters;
    }

    /// One hop of a multi-hop swap.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct PathKey {
        /// The currency reached after this hop.
        address intermediateCurrency;
        uint24 fee;
        address hooks;
        address poolManager;
        bytes hookData;
        bytes32 parameters;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClIncreaseLiquidityParams {
        uint256 tokenId;
        uint256 liquidity;
        uint128 amount0Max;
        uint128 amount1Max;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClDecreaseLiquidityParams {
        uint256 tokenId;
        uint256 liquidity;
        uint128 amount0Min;
        uint128 amount1Min;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClMintPositionParams {
        PoolKey poolKey;
        int24 tickLower;
        int24 tickUpper;
        uint256 liquidity;
        uint128 amount0Max;
        uint128 amount1Max;
        address owner;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClBurnPositionParams {
        uint256 tokenId;
        uint128 amount0Min;
        uint128 amount1Min;
        bytes hookData;
    }

    /// Increases a position using the caller's open deltas.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClIncreaseLiquidityFromDeltasParams {
        uint256 tokenId;
        uint128 amount0Max;
        uint128 amount1Max;
        bytes hookData;
    }

    /// Mints a position using the caller's open deltas.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClMintPositionFromDeltasParams {
        PoolKey poolKey;
        int24 tickLower;
        int24 tickUpper;
        uint128 amount0Max;
        uint128 amount1Max;
        address owner;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClSwapExactInputSingleParams {
        PoolKey poolKey;
        bool zeroForOne;
        uint128 amountIn;
        uint128 amountOutMinimum;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClSwapExactInputParams {
        address currencyIn;
        PathKey[] path;
        uint128 amountIn;
        uint128 amountOutMinimum;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClSwapExactOutputSingleParams {
        PoolKey poolKey;
        bool zeroForOne;
        uint128 amountOut;
        uint128 amountInMaximum;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClSwapExactOutputParams {
        address currencyOut;
        PathKey[] path;
        uint128 amountOut;
        uint128 amountInMaximum;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClDonateParams {
        PoolKey poolKey;
        uint256 amount0;
        uint256 amount1;
        bytes hookData;
    }

    /// Pays `amount` of `currency` to the vault, from the user or from the
    /// executor's own balance.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SettleParams {
        address currency;
        uint256 amount;
        bool payerIsUser;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct SettleAllParams {
        address currency;
        uint256 maxAmount;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct SettlePairParams {
        address currency0;
        address currency1;
    }

    /// Takes `amount` of `currency` out of the vault to `recipient`.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct TakeParams {
        address currency;
        address recipient;
        uint256 amount;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct TakeAllParams {
        address currency;
        uint256 minAmount;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct TakePortionParams {
        address currency;
        address recipient;
        uint256 bips;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct TakePairParams {
        address currency0;
        address currency1;
        address recipient;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CloseCurrencyParams {
        address currency;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct ClearOrTakeParams {
        address currency;
        uint256 amountMax;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct SweepParams {
        address currency;
        address to;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct WrapParams {
        uint256 amount;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct UnwrapParams {
        uint256 amount;
    }

    /// Adds liquidity to the bins `activeIdDesired + deltaIds[i]`.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinAddLiquidityParams {
        PoolKey poolKey;
        uint128 amount0;
        uint128 amount1;
        uint128 amount0Max;
        uint128 amount1Max;
        uint256 activeIdDesired;
        uint256 idSlippage;
        int256[] deltaIds;
        uint256[] distributionX;
        uint256[] distributionY;
        address to;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinRemoveLiquidityParams {
        PoolKey poolKey;
        uint128 amount0Min;
        uint128 amount1Min;
        uint256[] ids;
        uint256[] amounts;
        address from;
        bytes hookData;
    }

    /// Same as [`BinAddLiquidityParams`] but funded from open deltas.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinAddLiquidityFromDeltasParams {
        PoolKey poolKey;
        uint128 amount0Max;
        uint128 amount1Max;
        uint256 activeIdDesired;
        uint256 idSlippage;
        int256[] deltaIds;
        uint256[] distributionX;
        uint256[] distributionY;
        address to;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinSwapExactInputSingleParams {
        PoolKey poolKey;
        bool swapForY;
        uint128 amountIn;
        uint128 amountOutMinimum;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinSwapExactInputParams {
        address currencyIn;
        PathKey[] path;
        uint128 amountIn;
        uint128 amountOutMinimum;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinSwapExactOutputSingleParams {
        PoolKey poolKey;
        bool swapForY;
        uint128 amountOut;
        uint128 amountInMaximum;
        bytes hookData;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinSwapExactOutputParams {
        address currencyOut;
        PathKey[] path;
        uint128 amountOut;
        uint128 amountInMaximum;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BinDonateParams {
        PoolKey poolKey;
        uint128 amount0;
        uint128 amount1;
        bytes hookData;
    }

    /// The payload handed to the executor: one opcode byte per action and
    /// one encoded parameter blob per action.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct ActionsPayload {
        bytes actions;
        bytes[] params;
    }
}
