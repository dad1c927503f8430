use alloy_primitives::{
    address, aliases::I24, uint, Address, Bytes, I256, U256,
};
use infinity_sdk::{
    abi::*,
    actions::{Action, ActionType, ActionsPlanner},
    bin_math::{get_liquidity_shape, BinLiquidityShape},
    calldata,
    hooks::Hook,
    liquidity::BinDeposit,
    pool::{BinPoolParameters, ClPoolParameters, PoolKey},
};

const WBNB: Address = address!("bb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c");
const USDT: Address = address!("55d398326f99059ff775485246999027b3197955");
const CAKE: Address = address!("0e09fabb73bd3ade0a17ecc321fd13a19e81ce82");
const BIN_MANAGER: Address =
    address!("c697d2898e0d09264376196696c51d7abbbaa4a9");
const CL_MANAGER: Address =
    address!("a0ffb9c1ce1fe56963b0321b32e7a0302114058b");
const ALICE: Address = address!("a11ce00000000000000000000000000000000000");
const REFERENCE_ID: u32 = 1 << 23;

fn bin_pool_key() -> PoolKey {
    PoolKey::bin(
        USDT,
        CAKE,
        Address::ZERO,
        BIN_MANAGER,
        2500,
        BinPoolParameters {
            bin_step: 10,
            hooks_registration: [Hook::BeforeAddLiquidity, Hook::AfterSwap]
                .into_iter()
                .collect(),
        },
    )
    .unwrap()
}

fn cl_pool_key() -> PoolKey {
    PoolKey::cl(
        WBNB,
        USDT,
        Address::ZERO,
        CL_MANAGER,
        500,
        ClPoolParameters { tick_spacing: -10, ..Default::default() },
    )
    .unwrap()
}

#[test]
fn bin_add_liquidity_then_close_round_trips() {
    let pool_key = bin_pool_key();
    let active_id = REFERENCE_ID + 3;
    let (delta_ids, distribution_x, distribution_y) = get_liquidity_shape(
        BinLiquidityShape::Curve,
        active_id - 4,
        active_id + 4,
        active_id,
        1_000_000_000_000_000_000,
        2_500_000_000_000_000_000,
    )
    .unwrap()
    .into_abi_vectors();

    let add = BinAddLiquidityParams {
        poolKey: pool_key.clone(),
        amount0: 1_000_000_000_000_000_000,
        amount1: 2_500_000_000_000_000_000,
        amount0Max: 1_010_000_000_000_000_000,
        amount1Max: 2_525_000_000_000_000_000,
        activeIdDesired: U256::from(active_id),
        idSlippage: U256::from(5),
        deltaIds: delta_ids,
        distributionX: distribution_x,
        distributionY: distribution_y,
        to: ALICE,
        hookData: Bytes::new(),
    };

    let mut planner = ActionsPlanner::new();
    planner.add(add.clone());
    let encoded = planner.finalize_modify_liquidity_with_close(&pool_key);

    let decoded = ActionsPlanner::decode(&encoded).unwrap();
    assert_eq!(
        decoded.actions(),
        [
            Action::BinAddLiquidity(add),
            Action::CloseCurrency(CloseCurrencyParams {
                currency: pool_key.currency0,
            }),
            Action::CloseCurrency(CloseCurrencyParams {
                currency: pool_key.currency1,
            }),
        ]
    );
    assert_eq!(decoded, planner);

    let Action::BinAddLiquidity(params) = &decoded.actions()[0] else {
        panic!("first action is not a bin add liquidity");
    };
    assert_eq!(params.poolKey.pool_id(), pool_key.pool_id());
    assert_eq!(params.poolKey.bin_parameters(), pool_key.bin_parameters());
    let parameters = params.poolKey.bin_parameters().unwrap();
    assert!(parameters.hooks_registration.after_swap);
}

#[test]
fn deposit_helper_matches_manual_params() {
    let pool_key = bin_pool_key();
    let deposit = BinDeposit {
        shape: BinLiquidityShape::Spot,
        lower_id: REFERENCE_ID - 3,
        upper_id: REFERENCE_ID + 1,
        active_id_desired: REFERENCE_ID,
        id_slippage: 2,
        amount0: 5_000,
        amount1: 0,
        amount0_max: 5_000,
        amount1_max: 0,
        to: ALICE,
        hook_data: Bytes::new(),
    };
    let params = deposit.add_liquidity_params(&pool_key).unwrap();

    // Nothing of currency1 is deposited, so the y column is all zero.
    assert!(params.distributionY.iter().all(U256::is_zero));
    // Bins below the active bin never hold currency0.
    assert!(params.distributionX[..3].iter().all(U256::is_zero));

    let mut planner = ActionsPlanner::new();
    planner.add(params);
    let encoded = planner
        .finalize_modify_liquidity_with_settle_pair(&pool_key, None)
        .unwrap();
    let decoded = ActionsPlanner::decode(&encoded).unwrap();
    assert_eq!(
        decoded.actions().iter().map(Action::action_type).collect::<Vec<_>>(),
        [ActionType::BinAddLiquidity, ActionType::SettlePair]
    );
}

#[test]
fn every_action_round_trips() {
    let planner: ActionsPlanner =
        ActionType::ALL.iter().copied().map(sample).collect();
    let encoded = planner.encode();
    let decoded = ActionsPlanner::decode(&encoded).unwrap();
    assert_eq!(decoded, planner);

    for action in planner.actions() {
        let single: ActionsPlanner = std::iter::once(action.clone()).collect();
        assert_eq!(ActionsPlanner::decode(&single.encode()).unwrap(), single);
    }
}

#[test]
fn raw_blobs_from_encoded_plan_are_accepted() {
    let source: ActionsPlanner =
        ActionType::ALL.iter().copied().map(sample).collect();
    let mut rebuilt = ActionsPlanner::new();
    for action in source.actions() {
        rebuilt
            .add_raw(action.action_type().opcode(), &action.encode_params())
            .unwrap();
    }
    assert_eq!(rebuilt, source);
}

#[test]
fn payload_wraps_into_position_manager_call() {
    let mut planner = ActionsPlanner::new();
    planner.add(sample(ActionType::ClMintPosition));
    let payload = planner.finalize_modify_liquidity_with_close(&cl_pool_key());
    let deadline = U256::from(1_700_000_000u64);

    let call = calldata::multicall_with_permit(None, payload.clone(), deadline);
    assert_eq!(
        call,
        calldata::multicall_with_permit(None, payload.clone(), deadline)
    );
    let single = calldata::modify_liquidities(payload, deadline);
    assert!(call.windows(single.len()).any(|window| window == &single[..]));
}

fn path() -> Vec<PathKey> {
    vec![
        cl_pool_key().path_key(USDT, Bytes::new()),
        bin_pool_key().path_key(CAKE, Bytes::from_static(&[0xbe, 0xef])),
    ]
}

fn sample(action_type: ActionType) -> Action {
    let hook_data = Bytes::from_static(b"hook data");
    let liquidity = uint!(123_456_789_000_U256);
    match action_type {
        ActionType::ClIncreaseLiquidity => ClIncreaseLiquidityParams {
            tokenId: U256::from(42),
            liquidity,
            amount0Max: 1,
            amount1Max: u128::MAX,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClDecreaseLiquidity => ClDecreaseLiquidityParams {
            tokenId: U256::from(42),
            liquidity,
            amount0Min: 3,
            amount1Min: 4,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClMintPosition => ClMintPositionParams {
            poolKey: cl_pool_key(),
            tickLower: I24::try_from(-887_220i32).unwrap(),
            tickUpper: I24::try_from(887_220i32).unwrap(),
            liquidity,
            amount0Max: 10,
            amount1Max: 20,
            owner: ALICE,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClBurnPosition => ClBurnPositionParams {
            tokenId: U256::from(7),
            amount0Min: 0,
            amount1Min: 1,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClIncreaseLiquidityFromDeltas => {
            ClIncreaseLiquidityFromDeltasParams {
                tokenId: U256::from(42),
                amount0Max: 5,
                amount1Max: 6,
                hookData: hook_data,
            }
            .into()
        }
        ActionType::ClMintPositionFromDeltas => ClMintPositionFromDeltasParams {
            poolKey: cl_pool_key(),
            tickLower: I24::try_from(-60i32).unwrap(),
            tickUpper: I24::try_from(60i32).unwrap(),
            amount0Max: 10,
            amount1Max: 20,
            owner: ALICE,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClSwapExactInSingle => ClSwapExactInputSingleParams {
            poolKey: cl_pool_key(),
            zeroForOne: true,
            amountIn: 1_000,
            amountOutMinimum: 990,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClSwapExactIn => ClSwapExactInputParams {
            currencyIn: WBNB,
            path: path(),
            amountIn: 1_000,
            amountOutMinimum: 990,
        }
        .into(),
        ActionType::ClSwapExactOutSingle => ClSwapExactOutputSingleParams {
            poolKey: cl_pool_key(),
            zeroForOne: false,
            amountOut: 1_000,
            amountInMaximum: 1_010,
            hookData: hook_data,
        }
        .into(),
        ActionType::ClSwapExactOut => ClSwapExactOutputParams {
            currencyOut: CAKE,
            path: path(),
            amountOut: 1_000,
            amountInMaximum: 1_010,
        }
        .into(),
        ActionType::ClDonate => ClDonateParams {
            poolKey: cl_pool_key(),
            amount0: U256::from(11),
            amount1: U256::from(12),
            hookData: hook_data,
        }
        .into(),
        ActionType::Settle => SettleParams {
            currency: USDT,
            amount: U256::MAX,
            payerIsUser: true,
        }
        .into(),
        ActionType::SettleAll => {
            SettleAllParams { currency: USDT, maxAmount: U256::from(9) }.into()
        }
        ActionType::SettlePair => {
            SettlePairParams { currency0: USDT, currency1: CAKE }.into()
        }
        ActionType::Take => TakeParams {
            currency: CAKE,
            recipient: ALICE,
            amount: U256::from(1),
        }
        .into(),
        ActionType::TakeAll => {
            TakeAllParams { currency: CAKE, minAmount: U256::from(2) }.into()
        }
        ActionType::TakePortion => TakePortionParams {
            currency: CAKE,
            recipient: ALICE,
            bips: U256::from(25),
        }
        .into(),
        ActionType::TakePair => TakePairParams {
            currency0: USDT,
            currency1: CAKE,
            recipient: ALICE,
        }
        .into(),
        ActionType::CloseCurrency => {
            CloseCurrencyParams { currency: WBNB }.into()
        }
        ActionType::ClearOrTake => ClearOrTakeParams {
            currency: WBNB,
            amountMax: U256::from(100),
        }
        .into(),
        ActionType::Sweep => {
            SweepParams { currency: Address::ZERO, to: ALICE }.into()
        }
        ActionType::Wrap => WrapParams { amount: U256::from(10) }.into(),
        ActionType::Unwrap => UnwrapParams { amount: U256::from(10) }.into(),
        ActionType::BinAddLiquidity => BinAddLiquidityParams {
            poolKey: bin_pool_key(),
            amount0: 100,
            amount1: 200,
            amount0Max: 101,
            amount1Max: 202,
            activeIdDesired: U256::from(REFERENCE_ID),
            idSlippage: U256::from(3),
            deltaIds: vec![I256::MINUS_ONE, I256::ZERO, I256::ONE],
            distributionX: vec![U256::ZERO, U256::from(5), U256::from(5)],
            distributionY: vec![U256::from(5), U256::from(5), U256::ZERO],
            to: ALICE,
            hookData: hook_data,
        }
        .into(),
        ActionType::BinRemoveLiquidity => BinRemoveLiquidityParams {
            poolKey: bin_pool_key(),
            amount0Min: 1,
            amount1Min: 2,
            ids: vec![U256::from(REFERENCE_ID), U256::from(REFERENCE_ID + 1)],
            amounts: vec![U256::from(10), U256::from(20)],
            from: ALICE,
            hookData: hook_data,
        }
        .into(),
        ActionType::BinAddLiquidityFromDeltas => {
            BinAddLiquidityFromDeltasParams {
                poolKey: bin_pool_key(),
                amount0Max: 101,
                amount1Max: 202,
                activeIdDesired: U256::from(REFERENCE_ID),
                idSlippage: U256::ZERO,
                deltaIds: vec![I256::ZERO],
                distributionX: vec![U256::from(1)],
                distributionY: vec![U256::from(1)],
                to: ALICE,
                hookData: hook_data,
            }
            .into()
        }
        ActionType::BinSwapExactInSingle => BinSwapExactInputSingleParams {
            poolKey: bin_pool_key(),
            swapForY: true,
            amountIn: 1_000,
            amountOutMinimum: 1,
            hookData: hook_data,
        }
        .into(),
        ActionType::BinSwapExactIn => BinSwapExactInputParams {
            currencyIn: WBNB,
            path: path(),
            amountIn: 1_000,
            amountOutMinimum: 1,
        }
        .into(),
        ActionType::BinSwapExactOutSingle => BinSwapExactOutputSingleParams {
            poolKey: bin_pool_key(),
            swapForY: false,
            amountOut: 1_000,
            amountInMaximum: u128::MAX,
            hookData: hook_data,
        }
        .into(),
        ActionType::BinSwapExactOut => BinSwapExactOutputParams {
            currencyOut: CAKE,
            path: path(),
            amountOut: 1_000,
            amountInMaximum: u128::MAX,
        }
        .into(),
        ActionType::BinDonate => BinDonateParams {
            poolKey: PoolKey {
                parameters: BinPoolParameters {
                    bin_step: 1,
                    ..Default::default()
                }
                .encode(),
                ..bin_pool_key()
            },
            amount0: 7,
            amount1: 8,
            hookData: hook_data,
        }
        .into(),
    }
}
