//! Hooks registration bitmap.
//!
//! Infinity decides whether to invoke specific hooks by inspecting the 16
//! least significant bits of a pool's parameters. For example, a pool whose
//! parameters end in `0x0044` has the bits `00 0000 0100 0100` set, which
//! registers the `before add liquidity` and `before swap` callbacks.
//!
//! Only the 14 lowest bits are defined; a bitmap with any other bit set is
//! rejected.
use alloy_primitives::U256;

pub use sol::*;
mod sol {
    use alloy_sol_types::sol;

    sol! {
        /// The hooks bitmap has a bit set outside of the 14 defined hooks.
        ///
        /// * `value` - The rejected bitmap.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error InvalidHooksRegistration(uint256 value);
    }
}

/// An error that occurred while decoding a hooks registration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The hooks bitmap has a bit set outside of the 14 defined hooks.
    #[error("hooks registration {:#x} exceeds the hooks bitmap", .0.value)]
    InvalidRegistration(InvalidHooksRegistration),
}

/// A hook callback, with its bit offset as discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hook {
    /// Called before the state of a pool is initialized.
    BeforeInitialize = 0,
    /// Called after the state of a pool is initialized.
    AfterInitialize = 1,
    /// Called before liquidity is added.
    BeforeAddLiquidity = 2,
    /// Called after liquidity is added.
    AfterAddLiquidity = 3,
    /// Called before liquidity is removed.
    BeforeRemoveLiquidity = 4,
    /// Called after liquidity is removed.
    AfterRemoveLiquidity = 5,
    /// Called before a swap.
    BeforeSwap = 6,
    /// Called after a swap.
    AfterSwap = 7,
    /// Called before a donation.
    BeforeDonate = 8,
    /// Called after a donation.
    AfterDonate = 9,
    /// `before swap` may return a delta.
    BeforeSwapReturnsDelta = 10,
    /// `after swap` may return a delta.
    AfterSwapReturnsDelta = 11,
    /// `after add liquidity` may return a delta.
    AfterMintReturnsDelta = 12,
    /// `after remove liquidity` may return a delta.
    AfterBurnReturnsDelta = 13,
}

impl Hook {
    /// Every hook, ordered by bit offset.
    pub const ALL: [Hook; 14] = [
        Hook::BeforeInitialize,
        Hook::AfterInitialize,
        Hook::BeforeAddLiquidity,
        Hook::AfterAddLiquidity,
        Hook::BeforeRemoveLiquidity,
        Hook::AfterRemoveLiquidity,
        Hook::BeforeSwap,
        Hook::AfterSwap,
        Hook::BeforeDonate,
        Hook::AfterDonate,
        Hook::BeforeSwapReturnsDelta,
        Hook::AfterSwapReturnsDelta,
        Hook::AfterMintReturnsDelta,
        Hook::AfterBurnReturnsDelta,
    ];

    /// Bit offset of the hook inside the bitmap.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Bitmap with only this hook set.
    #[must_use]
    pub const fn mask(self) -> u16 {
        1 << self.offset()
    }
}

/// The set of callbacks a hooks contract implements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct HooksRegistration {
    /// See [`Hook::BeforeInitialize`].
    pub before_initialize: bool,
    /// See [`Hook::AfterInitialize`].
    pub after_initialize: bool,
    /// See [`Hook::BeforeAddLiquidity`].
    pub before_add_liquidity: bool,
    /// See [`Hook::AfterAddLiquidity`].
    pub after_add_liquidity: bool,
    /// See [`Hook::BeforeRemoveLiquidity`].
    pub before_remove_liquidity: bool,
    /// See [`Hook::AfterRemoveLiquidity`].
    pub after_remove_liquidity: bool,
    /// See [`Hook::BeforeSwap`].
    pub before_swap: bool,
    /// See [`Hook::AfterSwap`].
    pub after_swap: bool,
    /// See [`Hook::BeforeDonate`].
    pub before_donate: bool,
    /// See [`Hook::AfterDonate`].
    pub after_donate: bool,
    /// See [`Hook::BeforeSwapReturnsDelta`].
    pub before_swap_returns_delta: bool,
    /// See [`Hook::AfterSwapReturnsDelta`].
    pub after_swap_returns_delta: bool,
    /// See [`Hook::AfterMintReturnsDelta`].
    pub after_mint_returns_delta: bool,
    /// See [`Hook::AfterBurnReturnsDelta`].
    pub after_burn_returns_delta: bool,
}

impl HooksRegistration {
    /// Largest valid bitmap: all 14 hooks registered.
    pub const MAX: u16 = 0x3FFF;

    /// Returns a mutable reference to the flag of `hook`.
    fn flag_mut(&mut self, hook: Hook) -> &mut bool {
        match hook {
            Hook::BeforeInitialize => &mut self.before_initialize,
            Hook::AfterInitialize => &mut self.after_initialize,
            Hook::BeforeAddLiquidity => &mut self.before_add_liquidity,
            Hook::AfterAddLiquidity => &mut self.after_add_liquidity,
            Hook::BeforeRemoveLiquidity => &mut self.before_remove_liquidity,
            Hook::AfterRemoveLiquidity => &mut self.after_remove_liquidity,
            Hook::BeforeSwap => &mut self.before_swap,
            Hook::AfterSwap => &mut self.after_swap,
            Hook::BeforeDonate => &mut self.before_donate,
            Hook::AfterDonate => &mut self.after_donate,
            Hook::BeforeSwapReturnsDelta => {
                &mut self.before_swap_returns_delta
            }
            Hook::AfterSwapReturnsDelta => &mut self.after_swap_returns_delta,
            Hook::AfterMintReturnsDelta => &mut self.after_mint_returns_delta,
            Hook::AfterBurnReturnsDelta => &mut self.after_burn_returns_delta,
        }
    }

    /// Returns whether `hook` is registered.
    #[must_use]
    pub fn is_registered(&self, hook: Hook) -> bool {
        match hook {
            Hook::BeforeInitialize => self.before_initialize,
            Hook::AfterInitialize => self.after_initialize,
            Hook::BeforeAddLiquidity => self.before_add_liquidity,
            Hook::AfterAddLiquidity => self.after_add_liquidity,
            Hook::BeforeRemoveLiquidity => self.before_remove_liquidity,
            Hook::AfterRemoveLiquidity => self.after_remove_liquidity,
            Hook::BeforeSwap => self.before_swap,
            Hook::AfterSwap => self.after_swap,
            Hook::BeforeDonate => self.before_donate,
            Hook::AfterDonate => self.after_donate,
            Hook::BeforeSwapReturnsDelta => self.before_swap_returns_delta,
            Hook::AfterSwapReturnsDelta => self.after_swap_returns_delta,
            Hook::AfterMintReturnsDelta => self.after_mint_returns_delta,
            Hook::AfterBurnReturnsDelta => self.after_burn_returns_delta,
        }
    }

    /// Registers or unregisters `hook`.
    pub fn set(&mut self, hook: Hook, registered: bool) {
        *self.flag_mut(hook) = registered;
    }

    /// Returns the registered hooks, ordered by bit offset.
    pub fn hooks(&self) -> impl Iterator<Item = Hook> + '_ {
        Hook::ALL.into_iter().filter(|&hook| self.is_registered(hook))
    }

    /// Encodes the registration into its bitmap.
    ///
    /// The result is always within `0..=`[`HooksRegistration::MAX`].
    #[must_use]
    pub fn encode(&self) -> u16 {
        self.hooks().fold(0, |bitmap, hook| bitmap | hook.mask())
    }

    /// Decodes a bitmap into a registration.
    ///
    /// # Arguments
    ///
    /// * `value` - The bitmap to decode.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidRegistration`] - If `value` is greater than
    ///   [`HooksRegistration::MAX`].
    pub fn decode(value: u32) -> Result<Self, Error> {
        if value > u32::from(Self::MAX) {
            return Err(Error::InvalidRegistration(InvalidHooksRegistration {
                value: U256::from(value),
            }));
        }

        Ok(Hook::ALL
            .into_iter()
            .filter(|hook| value & u32::from(hook.mask()) != 0)
            .collect())
    }
}

impl FromIterator<Hook> for HooksRegistration {
    fn from_iter<T: IntoIterator<Item = Hook>>(iter: T) -> Self {
        let mut registration = Self::default();
        for hook in iter {
            registration.set(hook, true);
        }
        registration
    }
}
