//! Action plans for the Infinity position manager and router.
//!
//! An [`ActionsPlanner`] collects [`Action`]s and encodes them into the
//! `(bytes actions, bytes[] params)` payload the executor replays in order.
use alloy_primitives::U256;

mod action;
mod planner;

pub use action::{Action, ActionType, Layout};
pub use planner::ActionsPlanner;

pub use sol::*;
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// The opcode has no parameter schema.
        ///
        /// * `opcode` - Rejected opcode.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error UnsupportedAction(uint8 opcode);

        /// The parameters do not match the schema of the action.
        ///
        /// * `opcode` - Opcode of the action.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidActionParams(uint8 opcode);

        /// The payload has a different number of opcodes and parameters.
        ///
        /// * `actions` - Number of opcodes.
        /// * `params` - Number of parameter blobs.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error ActionsLengthMismatch(uint256 actions, uint256 params);

        /// The payload is not an ABI encoded `(bytes, bytes[])` pair.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error MalformedActionsPayload();

        /// The recipient of native currency is missing.
        ///
        /// * `recipient` - Rejected recipient.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidRecipient(address recipient);
    }
}

/// An error that occurred while building, encoding or decoding a plan.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The opcode has no parameter schema.
    #[error("unsupported action {:#04x}", .0.opcode)]
    UnsupportedAction(UnsupportedAction),
    /// The parameters do not match the schema of the action.
    #[error("invalid parameters for action {:#04x}", .0.opcode)]
    InvalidParams(InvalidActionParams),
    /// The payload has a different number of opcodes and parameters.
    #[error("{} actions but {} parameters", .0.actions, .0.params)]
    LengthMismatch(ActionsLengthMismatch),
    /// The payload is not an ABI encoded `(bytes, bytes[])` pair.
    #[error("malformed actions payload")]
    MalformedPayload(MalformedActionsPayload),
    /// The recipient of native currency is missing.
    #[error("invalid recipient {}", .0.recipient)]
    InvalidRecipient(InvalidRecipient),
}

impl Error {
    pub(crate) fn length_mismatch(actions: usize, params: usize) -> Self {
        Error::LengthMismatch(ActionsLengthMismatch {
            actions: U256::from(actions),
            params: U256::from(params),
        })
    }
}
