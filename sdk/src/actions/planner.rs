use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use tracing::{debug, trace};

use super::{
    Action, ActionType, Error, InvalidRecipient, MalformedActionsPayload,
};
use crate::{
    abi::{
        ActionsPayload, CloseCurrencyParams, SettleAllParams, SettlePairParams,
        SettleParams, SweepParams, TakeAllParams, TakePairParams, TakeParams,
        UnwrapParams, WrapParams,
    },
    constants::{
        ADDRESS_THIS, CONTRACT_BALANCE, MSG_SENDER, NATIVE_CURRENCY,
        OPEN_DELTA,
    },
    pool::{Currency, PoolKey},
};

/// Append-only builder of an action plan.
///
/// Actions are replayed by the executor in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionsPlanner {
    actions: Vec<Action>,
}

impl ActionsPlanner {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the actions of the plan, in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the plan has no action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Appends an action.
    pub fn add(&mut self, action: impl Into<Action>) -> &mut Self {
        let action = action.into();
        trace!(
            action = ?action.action_type(),
            index = self.actions.len(),
            "add action"
        );
        self.actions.push(action);
        self
    }

    /// Appends an action given as an opcode and an already encoded
    /// parameter blob.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedAction`] - If `opcode` has no schema.
    /// * [`Error::InvalidParams`] - If `params` does not match the schema of
    ///   `opcode`.
    pub fn add_raw(
        &mut self,
        opcode: u8,
        params: &[u8],
    ) -> Result<&mut Self, Error> {
        let action = Action::decode(ActionType::try_from(opcode)?, params)?;
        Ok(self.add(action))
    }

    /// Encodes the plan into `abi.encode(bytes actions, bytes[] params)`.
    ///
    /// Encoding does not consume the plan and always yields the same bytes.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let (actions, params): (Vec<u8>, Vec<Bytes>) = self
            .actions
            .iter()
            .map(|action| {
                let params = Bytes::from(action.encode_params());
                (action.action_type().opcode(), params)
            })
            .unzip();
        let payload = ActionsPayload { actions: actions.into(), params }
            .abi_encode_params();
        debug!(
            actions = self.actions.len(),
            bytes = payload.len(),
            "encoded action plan"
        );
        payload.into()
    }

    /// Decodes a payload produced by [`Self::encode`].
    ///
    /// # Errors
    ///
    /// * [`Error::MalformedPayload`] - If `data` is not the canonical
    ///   encoding of a `(bytes, bytes[])` pair.
    /// * [`Error::LengthMismatch`] - If the number of opcodes and parameter
    ///   blobs differ.
    /// * [`Error::UnsupportedAction`] - If an opcode has no schema.
    /// * [`Error::InvalidParams`] - If a blob does not match its opcode's
    ///   schema.
    pub fn decode(data: &[u8]) -> Result<Self, Error> {
        let payload = ActionsPayload::abi_decode_params(data)
            .ok()
            .filter(|payload| payload.abi_encode_params() == data)
            .ok_or(Error::MalformedPayload(MalformedActionsPayload {}))?;
        if payload.actions.len() != payload.params.len() {
            return Err(Error::length_mismatch(
                payload.actions.len(),
                payload.params.len(),
            ));
        }

        let actions = payload
            .actions
            .iter()
            .zip(&payload.params)
            .map(|(&opcode, params)| {
                Action::decode(ActionType::try_from(opcode)?, params)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            actions = actions.len(),
            bytes = data.len(),
            "decoded action plan"
        );
        Ok(Self { actions })
    }

    /// Closes both currencies of the pool and encodes the plan.
    pub fn finalize_modify_liquidity_with_close(
        &mut self,
        pool_key: &PoolKey,
    ) -> Bytes {
        debug!("finalize with close");
        self.add(CloseCurrencyParams { currency: pool_key.currency0 })
            .add(CloseCurrencyParams { currency: pool_key.currency1 });
        self.encode()
    }

    /// Settles both currencies of the pool and encodes the plan.
    ///
    /// When `currency0` is the native currency, the excess sent along with
    /// the transaction is swept back to `sweep_recipient`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRecipient`] - If `currency0` is native and
    ///   `sweep_recipient` is missing or zero. Nothing is appended then.
    pub fn finalize_modify_liquidity_with_settle_pair(
        &mut self,
        pool_key: &PoolKey,
        sweep_recipient: Option<Address>,
    ) -> Result<Bytes, Error> {
        let sweep = if pool_key.currency0 == NATIVE_CURRENCY {
            Some(require_recipient(sweep_recipient.unwrap_or_default())?)
        } else {
            None
        };
        debug!(sweep = sweep.is_some(), "finalize with settle pair");

        self.add(SettlePairParams {
            currency0: pool_key.currency0,
            currency1: pool_key.currency1,
        });
        if let Some(to) = sweep {
            self.add(SweepParams { currency: pool_key.currency0, to });
        }
        Ok(self.encode())
    }

    /// Takes both currencies of the pool to `recipient` and encodes the
    /// plan.
    pub fn finalize_modify_liquidity_with_take_pair(
        &mut self,
        pool_key: &PoolKey,
        recipient: Address,
    ) -> Bytes {
        debug!(%recipient, "finalize with take pair");
        self.add(TakePairParams {
            currency0: pool_key.currency0,
            currency1: pool_key.currency1,
            recipient,
        });
        self.encode()
    }

    /// Pays `input_currency` and collects `output_currency` after a swap,
    /// then encodes the plan.
    ///
    /// A swap paid by and for the sender settles and takes everything; any
    /// other recipient settles and takes the open deltas.
    pub fn finalize_swap(
        &mut self,
        input_currency: Currency,
        output_currency: Currency,
        recipient: Address,
    ) -> Bytes {
        if recipient == MSG_SENDER {
            debug!("finalize swap for sender");
            self.add(SettleAllParams {
                currency: input_currency,
                maxAmount: U256::MAX,
            })
            .add(TakeAllParams {
                currency: output_currency,
                minAmount: U256::ZERO,
            });
        } else {
            debug!(%recipient, "finalize swap");
            self.add(SettleParams {
                currency: input_currency,
                amount: OPEN_DELTA,
                payerIsUser: true,
            })
            .add(TakeParams {
                currency: output_currency,
                recipient,
                amount: OPEN_DELTA,
            });
        }
        self.encode()
    }

    /// Wraps `amount` of native currency, pays the swap with it and sends
    /// `output_currency` to `recipient`, then encodes the plan.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRecipient`] - If `recipient` is zero. Nothing is
    ///   appended then.
    pub fn finalize_swap_with_wrap(
        &mut self,
        wrapped_native: Currency,
        output_currency: Currency,
        amount: U256,
        recipient: Address,
    ) -> Result<Bytes, Error> {
        let recipient = require_recipient(recipient)?;
        debug!(%recipient, %amount, "finalize swap with wrap");
        self.add(WrapParams { amount })
            .add(SettleParams {
                currency: wrapped_native,
                amount: CONTRACT_BALANCE,
                payerIsUser: false,
            })
            .add(TakeParams {
                currency: output_currency,
                recipient,
                amount: OPEN_DELTA,
            });
        Ok(self.encode())
    }

    /// Pays the swap with `input_currency`, unwraps the wrapped native
    /// output and sweeps it to `recipient`, then encodes the plan.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRecipient`] - If `recipient` is zero. Nothing is
    ///   appended then.
    pub fn finalize_swap_with_unwrap(
        &mut self,
        input_currency: Currency,
        wrapped_native: Currency,
        recipient: Address,
    ) -> Result<Bytes, Error> {
        let recipient = require_recipient(recipient)?;
        debug!(%recipient, "finalize swap with unwrap");
        self.add(SettleAllParams {
            currency: input_currency,
            maxAmount: U256::MAX,
        })
        .add(TakeParams {
            currency: wrapped_native,
            recipient: ADDRESS_THIS,
            amount: OPEN_DELTA,
        })
        .add(UnwrapParams { amount: CONTRACT_BALANCE })
        .add(SweepParams { currency: NATIVE_CURRENCY, to: recipient });
        Ok(self.encode())
    }
}

impl From<Vec<Action>> for ActionsPlanner {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl FromIterator<Action> for ActionsPlanner {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self { actions: iter.into_iter().collect() }
    }
}

fn require_recipient(recipient: Address) -> Result<Address, Error> {
    if recipient.is_zero() {
        return Err(Error::InvalidRecipient(InvalidRecipient { recipient }));
    }
    Ok(recipient)
}
