//! Position manager calldata.
//!
//! Wraps an encoded action plan into the outer call the position manager
//! exposes, optionally preceded by a signed Permit2 batch approval.
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::debug;

pub use sol::*;
#[allow(missing_docs)]
mod sol {
    use alloy_sol_types::sol;

    sol! {
        interface IAllowanceTransfer {
            /// Allowance granted for one token.
            #[derive(Debug, Default, PartialEq, Eq)]
            struct PermitDetails {
                address token;
                uint160 amount;
                uint48 expiration;
                uint48 nonce;
            }

            /// Allowances granted to `spender` for several tokens.
            #[derive(Debug, Default, PartialEq, Eq)]
            struct PermitBatch {
                PermitDetails[] details;
                address spender;
                uint256 sigDeadline;
            }
        }

        interface IPositionManager {
            function modifyLiquidities(bytes calldata payload, uint256 deadline)
                external
                payable;

            function permitBatch(
                address owner,
                IAllowanceTransfer.PermitBatch calldata _permitBatch,
                bytes calldata signature
            ) external payable returns (bytes memory err);

            function multicall(bytes[] calldata data)
                external
                payable
                returns (bytes[] memory results);
        }
    }
}

/// A Permit2 batch approval signed by `owner`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignedPermitBatch {
    /// Owner of the tokens.
    pub owner: Address,
    /// Signed allowances.
    pub batch: IAllowanceTransfer::PermitBatch,
    /// Signature of `owner` over `batch`.
    pub signature: Bytes,
}

/// Encodes `modifyLiquidities(payload, deadline)`.
#[must_use]
pub fn modify_liquidities(payload: Bytes, deadline: U256) -> Bytes {
    IPositionManager::modifyLiquiditiesCall { payload, deadline }
        .abi_encode()
        .into()
}

/// Encodes a `multicall` running `modifyLiquidities(payload, deadline)`,
/// preceded by `permitBatch` when `permit` is given.
#[must_use]
pub fn multicall_with_permit(
    permit: Option<SignedPermitBatch>,
    payload: Bytes,
    deadline: U256,
) -> Bytes {
    let mut data: Vec<Bytes> = Vec::with_capacity(2);
    if let Some(SignedPermitBatch { owner, batch, signature }) = permit {
        debug!(%owner, tokens = batch.details.len(), "prepend permit batch");
        data.push(
            IPositionManager::permitBatchCall {
                owner,
                _permitBatch: batch,
                signature,
            }
            .abi_encode()
            .into(),
        );
    }
    data.push(modify_liquidities(payload, deadline));
    IPositionManager::multicallCall { data }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, aliases::U160, uint};

    use super::{
        IPositionManager::{
            modifyLiquiditiesCall, multicallCall, permitBatchCall,
        },
        *,
    };

    const OWNER: Address = address!("a11ce00000000000000000000000000000000000");
    const USDT: Address = address!("55d398326f99059ff775485246999027b3197955");

    #[test]
    fn modify_liquidities_passes_arguments_through() {
        let payload = Bytes::from_static(&[1, 2, 3]);
        let deadline = uint!(1_700_000_000_U256);
        let calldata = modify_liquidities(payload.clone(), deadline);
        assert_eq!(&calldata[..4], modifyLiquiditiesCall::SELECTOR);

        let call = modifyLiquiditiesCall::abi_decode(&calldata).unwrap();
        assert_eq!(call.payload, payload);
        assert_eq!(call.deadline, deadline);
    }

    #[test]
    fn multicall_without_permit_has_single_call() {
        let payload = Bytes::from_static(&[9]);
        let calldata = multicall_with_permit(None, payload.clone(), U256::ZERO);
        let call = multicallCall::abi_decode(&calldata).unwrap();
        assert_eq!(call.data, vec![modify_liquidities(payload, U256::ZERO)]);
    }

    #[test]
    fn permit_is_the_leading_call() {
        let permit = SignedPermitBatch {
            owner: OWNER,
            batch: IAllowanceTransfer::PermitBatch {
                details: vec![IAllowanceTransfer::PermitDetails {
                    token: USDT,
                    amount: U160::MAX,
                    ..Default::default()
                }],
                spender: USDT,
                sigDeadline: U256::from(1),
            },
            signature: Bytes::from_static(&[0xaa; 65]),
        };
        let calldata = multicall_with_permit(
            Some(permit.clone()),
            Bytes::new(),
            U256::ZERO,
        );
        let call = multicallCall::abi_decode(&calldata).unwrap();
        assert_eq!(call.data.len(), 2);

        let permit_call = permitBatchCall::abi_decode(&call.data[0]).unwrap();
        assert_eq!(permit_call.owner, permit.owner);
        assert_eq!(permit_call._permitBatch, permit.batch);
        assert_eq!(permit_call.signature, permit.signature);
    }
}
