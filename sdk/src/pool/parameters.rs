//! Packed pool parameters.
//!
//! The `parameters` word of a [`super::PoolKey`] stores the hooks bitmap in
//! bits `0..16` and the pool type specific field right above it: a signed
//! 24-bit tick spacing for CL pools, an unsigned 16-bit bin step for Bin
//! pools. Every higher bit must be zero.
use alloy_primitives::{B256, U256};

use super::{Error, InvalidPoolParameters, TickSpacingOutOfRange};
use crate::{
    constants::{MAX_TICK_SPACING, MIN_TICK_SPACING},
    hooks::HooksRegistration,
};

const HOOKS_BITS: usize = 16;
const TICK_SPACING_BITS: usize = 24;
const BIN_STEP_BITS: usize = 16;
const TICK_SPACING_MASK: u64 = (1 << TICK_SPACING_BITS) - 1;

/// Parameters of a CL pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClPoolParameters {
    /// Ticks that involve positions must be a multiple of tick spacing.
    pub tick_spacing: i32,
    /// Callbacks implemented by the pool's hooks contract.
    pub hooks_registration: HooksRegistration,
}

/// Parameters of a Bin pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinPoolParameters {
    /// Price step between two consecutive bins, in basis points.
    pub bin_step: u16,
    /// Callbacks implemented by the pool's hooks contract.
    pub hooks_registration: HooksRegistration,
}

impl ClPoolParameters {
    /// Packs the parameters into a `bytes32` word.
    ///
    /// # Errors
    ///
    /// * [`Error::TickSpacingOutOfRange`] - If the tick spacing does not fit
    ///   into `int24`.
    pub fn encode(&self) -> Result<B256, Error> {
        if !(MIN_TICK_SPACING..=MAX_TICK_SPACING).contains(&self.tick_spacing)
        {
            return Err(Error::TickSpacingOutOfRange(TickSpacingOutOfRange {
                tickSpacing: self.tick_spacing,
            }));
        }

        // Two's complement, truncated to 24 bits.
        #[allow(clippy::cast_sign_loss)]
        let tick_spacing =
            u64::from(self.tick_spacing as u32) & TICK_SPACING_MASK;
        Ok(pack(tick_spacing, self.hooks_registration))
    }

    /// Unpacks parameters previously produced by [`Self::encode`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParameters`] - If bits above the tick spacing are
    ///   set.
    /// * [`Error::Hooks`] - If the hooks bitmap is invalid.
    pub fn decode(parameters: B256) -> Result<Self, Error> {
        let (field, hooks_registration) =
            unpack(parameters, TICK_SPACING_BITS)?;
        // Sign-extend the 24-bit field.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let tick_spacing = ((field as u32) << 8) as i32 >> 8;
        Ok(Self { tick_spacing, hooks_registration })
    }
}

impl BinPoolParameters {
    /// Packs the parameters into a `bytes32` word.
    #[must_use]
    pub fn encode(&self) -> B256 {
        pack(u64::from(self.bin_step), self.hooks_registration)
    }

    /// Unpacks parameters previously produced by [`Self::encode`].
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidParameters`] - If bits above the bin step are set.
    /// * [`Error::Hooks`] - If the hooks bitmap is invalid.
    pub fn decode(parameters: B256) -> Result<Self, Error> {
        let (field, hooks_registration) = unpack(parameters, BIN_STEP_BITS)?;
        #[allow(clippy::cast_possible_truncation)]
        let bin_step = field as u16;
        Ok(Self { bin_step, hooks_registration })
    }
}

fn pack(field: u64, hooks_registration: HooksRegistration) -> B256 {
    let word = (field << HOOKS_BITS) | u64::from(hooks_registration.encode());
    B256::from(U256::from(word))
}

/// Splits `parameters` into the field of `field_bits` bits above the hooks
/// bitmap and the decoded bitmap.
fn unpack(
    parameters: B256,
    field_bits: usize,
) -> Result<(u64, HooksRegistration), Error> {
    let word = U256::from_be_bytes(parameters.0);
    if word >> (HOOKS_BITS + field_bits) != U256::ZERO {
        return Err(Error::InvalidParameters(InvalidPoolParameters {
            parameters,
        }));
    }

    // Fits into 40 bits after the check above.
    let word = word.as_limbs()[0];
    #[allow(clippy::cast_possible_truncation)]
    let hooks = (word & 0xFFFF) as u32;
    let hooks_registration = HooksRegistration::decode(hooks)?;
    Ok((word >> HOOKS_BITS, hooks_registration))
}
