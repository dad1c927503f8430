use alloy_sol_types::SolValue;

use super::{Error, InvalidActionParams, UnsupportedAction};
use crate::abi::{
    BinAddLiquidityFromDeltasParams, BinAddLiquidityParams, BinDonateParams,
    BinRemoveLiquidityParams, BinSwapExactInputParams,
    BinSwapExactInputSingleParams, BinSwapExactOutputParams,
    BinSwapExactOutputSingleParams, ClBurnPositionParams,
    ClDecreaseLiquidityParams, ClDonateParams,
    ClIncreaseLiquidityFromDeltasParams, ClIncreaseLiquidityParams,
    ClMintPositionFromDeltasParams, ClMintPositionParams,
    ClSwapExactInputParams, ClSwapExactInputSingleParams,
    ClSwapExactOutputParams, ClSwapExactOutputSingleParams, ClearOrTakeParams,
    CloseCurrencyParams, SettleAllParams, SettlePairParams, SettleParams,
    SweepParams, TakeAllParams, TakePairParams, TakeParams, TakePortionParams,
    UnwrapParams, WrapParams,
};

/// How the parameters of an action are laid out in its blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// The struct fields are the parameter list: `abi.encode(a, b, c)`.
    Flat,
    /// The struct is the single parameter: `abi.encode(params)`.
    Tuple,
}

macro_rules! layout {
    (flat) => {
        Layout::Flat
    };
    (tuple) => {
        Layout::Tuple
    };
}

macro_rules! encode_with {
    (flat, $params:expr) => {
        SolValue::abi_encode_params($params)
    };
    (tuple, $params:expr) => {
        SolValue::abi_encode($params)
    };
}

macro_rules! decode_with {
    (flat, $ty:ty, $data:expr) => {
        <$ty as SolValue>::abi_decode_params($data)
            .ok()
            .filter(|params| SolValue::abi_encode_params(params) == $data)
    };
    (tuple, $ty:ty, $data:expr) => {
        <$ty as SolValue>::abi_decode($data)
            .ok()
            .filter(|params| SolValue::abi_encode(params) == $data)
    };
}

/// Defines the action schema table: one [`ActionType`] opcode and one
/// [`Action`] variant per entry.
///
/// # Arguments
///
/// * `$variant` - Name of the opcode and of the action variant.
/// * `$opcode` - Opcode byte understood by the executor.
/// * `$params` - Parameter struct of the action.
/// * `$layout` - `flat` or `tuple`, see [`Layout`].
macro_rules! define_actions {
    ($(
        $(#[$doc:meta])*
        $variant:ident = $opcode:literal => $params:ident, $layout:ident;
    )*) => {
        /// Opcode of an action understood by the executor.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum ActionType {
            $(
                $(#[$doc])*
                $variant = $opcode,
            )*
        }

        impl ActionType {
            /// Every action type with a parameter schema, by opcode.
            pub const ALL: &'static [ActionType] = &[$(ActionType::$variant),*];

            /// Returns the opcode byte of the action type.
            #[must_use]
            pub const fn opcode(self) -> u8 {
                self as u8
            }

            /// Returns how the parameters of the action are laid out.
            #[must_use]
            pub const fn layout(self) -> Layout {
                match self {
                    $(ActionType::$variant => layout!($layout),)*
                }
            }
        }

        impl TryFrom<u8> for ActionType {
            type Error = Error;

            fn try_from(opcode: u8) -> Result<Self, Error> {
                match opcode {
                    $($opcode => Ok(ActionType::$variant),)*
                    _ => Err(Error::UnsupportedAction(UnsupportedAction {
                        opcode,
                    })),
                }
            }
        }

        /// An action together with its parameters.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum Action {
            $(
                $(#[$doc])*
                $variant($params),
            )*
        }

        impl Action {
            /// Returns the opcode of the action.
            #[must_use]
            pub fn action_type(&self) -> ActionType {
                match self {
                    $(Action::$variant(_) => ActionType::$variant,)*
                }
            }

            /// ABI encodes the parameters following the action's
            /// [`Layout`].
            #[must_use]
            pub fn encode_params(&self) -> Vec<u8> {
                match self {
                    $(Action::$variant(params) => {
                        encode_with!($layout, params)
                    })*
                }
            }

            /// Decodes the parameter blob of an `action_type` action.
            ///
            /// Only the canonical encoding is accepted: trailing bytes or
            /// dirty padding are rejected.
            ///
            /// # Errors
            ///
            /// * [`Error::InvalidParams`] - If `data` is not the canonical
            ///   encoding of the action's parameters.
            pub fn decode(
                action_type: ActionType,
                data: &[u8],
            ) -> Result<Self, Error> {
                let action = match action_type {
                    $(ActionType::$variant => {
                        decode_with!($layout, $params, data)
                            .map(Action::$variant)
                    })*
                };
                action.ok_or(Error::InvalidParams(InvalidActionParams {
                    opcode: action_type.opcode(),
                }))
            }
        }

        $(
            impl From<$params> for Action {
                fn from(params: $params) -> Self {
                    Action::$variant(params)
                }
            }
        )*
    };
}

define_actions! {
    /// Adds liquidity to an existing CL position.
    ClIncreaseLiquidity = 0x00 => ClIncreaseLiquidityParams, flat;
    /// Removes liquidity from a CL position.
    ClDecreaseLiquidity = 0x01 => ClDecreaseLiquidityParams, flat;
    /// Mints a new CL position.
    ClMintPosition = 0x02 => ClMintPositionParams, flat;
    /// Burns a CL position, collecting what is left.
    ClBurnPosition = 0x03 => ClBurnPositionParams, flat;
    /// Adds liquidity to a CL position, paid with open deltas.
    ClIncreaseLiquidityFromDeltas = 0x04 =>
        ClIncreaseLiquidityFromDeltasParams, flat;
    /// Mints a CL position, paid with open deltas.
    ClMintPositionFromDeltas = 0x05 => ClMintPositionFromDeltasParams, flat;
    /// Single pool exact input swap in a CL pool.
    ClSwapExactInSingle = 0x06 => ClSwapExactInputSingleParams, tuple;
    /// Multi-hop exact input swap through CL pools.
    ClSwapExactIn = 0x07 => ClSwapExactInputParams, tuple;
    /// Single pool exact output swap in a CL pool.
    ClSwapExactOutSingle = 0x08 => ClSwapExactOutputSingleParams, tuple;
    /// Multi-hop exact output swap through CL pools.
    ClSwapExactOut = 0x09 => ClSwapExactOutputParams, tuple;
    /// Donates to the in-range liquidity of a CL pool.
    ClDonate = 0x0a => ClDonateParams, flat;
    /// Pays an amount of a currency to the vault.
    Settle = 0x0b => SettleParams, flat;
    /// Pays the full debt of a currency, up to a maximum.
    SettleAll = 0x0c => SettleAllParams, flat;
    /// Pays the full debt of both currencies of a pair.
    SettlePair = 0x0d => SettlePairParams, flat;
    /// Takes an amount of a currency out of the vault.
    Take = 0x0e => TakeParams, flat;
    /// Takes the full credit of a currency, with a minimum.
    TakeAll = 0x0f => TakeAllParams, flat;
    /// Takes a portion, in bips, of the credit of a currency.
    TakePortion = 0x10 => TakePortionParams, flat;
    /// Takes the full credit of both currencies of a pair.
    TakePair = 0x11 => TakePairParams, flat;
    /// Settles or takes whatever delta a currency has.
    CloseCurrency = 0x12 => CloseCurrencyParams, flat;
    /// Forfeits a small credit or takes it when above a threshold.
    ClearOrTake = 0x13 => ClearOrTakeParams, flat;
    /// Sends the executor's balance of a currency to a recipient.
    Sweep = 0x14 => SweepParams, flat;
    /// Wraps native currency.
    Wrap = 0x15 => WrapParams, flat;
    /// Unwraps wrapped native currency.
    Unwrap = 0x16 => UnwrapParams, flat;
    /// Adds liquidity to a range of bins.
    BinAddLiquidity = 0x19 => BinAddLiquidityParams, tuple;
    /// Removes liquidity from a set of bins.
    BinRemoveLiquidity = 0x1a => BinRemoveLiquidityParams, tuple;
    /// Adds liquidity to a range of bins, paid with open deltas.
    BinAddLiquidityFromDeltas = 0x1b => BinAddLiquidityFromDeltasParams, tuple;
    /// Single pool exact input swap in a Bin pool.
    BinSwapExactInSingle = 0x1c => BinSwapExactInputSingleParams, tuple;
    /// Multi-hop exact input swap through Bin pools.
    BinSwapExactIn = 0x1d => BinSwapExactInputParams, tuple;
    /// Single pool exact output swap in a Bin pool.
    BinSwapExactOutSingle = 0x1e => BinSwapExactOutputSingleParams, tuple;
    /// Multi-hop exact output swap through Bin pools.
    BinSwapExactOut = 0x1f => BinSwapExactOutputParams, tuple;
    /// Donates to the active bin of a Bin pool.
    BinDonate = 0x20 => BinDonateParams, flat;
}
