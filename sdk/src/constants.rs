//! Protocol constants understood by the Infinity periphery.
use alloy_primitives::{address, uint, Address, U256};

/// Settle or take the caller's full open delta.
pub const OPEN_DELTA: U256 = U256::ZERO;

/// Use the executor's whole balance of a currency.
pub const CONTRACT_BALANCE: U256 = uint!(
    0x8000000000000000000000000000000000000000000000000000000000000000_U256
);

/// Recipient placeholder resolved to the transaction sender.
pub const MSG_SENDER: Address =
    address!("0000000000000000000000000000000000000001");

/// Recipient placeholder resolved to the executor itself.
pub const ADDRESS_THIS: Address =
    address!("0000000000000000000000000000000000000002");

/// The native currency is represented by the zero address.
pub const NATIVE_CURRENCY: Address = Address::ZERO;

/// Fee value flagging a pool with a dynamic LP fee.
pub const DYNAMIC_FEE_FLAG: u32 = 0x80_0000;

/// Largest static LP fee of a CL pool (100%, in hundredths of a bip).
pub const MAX_CL_LP_FEE: u32 = 1_000_000;

/// Largest static LP fee of a Bin pool (10%, in hundredths of a bip).
pub const MAX_BIN_LP_FEE: u32 = 100_000;

/// Smallest tick spacing representable in the packed parameters.
pub const MIN_TICK_SPACING: i32 = -(1 << 23);

/// Largest tick spacing representable in the packed parameters.
pub const MAX_TICK_SPACING: i32 = (1 << 23) - 1;
