//! Full-precision arithmetic missing in `alloy_primitives`.
use alloy_primitives::{U256, U512};

/// Trait for full-precision math over [`U256`].
pub trait Math: Sized {
    /// Calculates `self * y / denominator` with a [`U512`] intermediate,
    /// following the selected `rounding` direction.
    ///
    /// Returns `None` when `denominator` is zero or when the result does not
    /// fit into [`U256`].
    ///
    /// # Arguments
    ///
    /// * `self` - first value to compute the result.
    /// * `y` - second value to compute the result.
    /// * `denominator` - denominator of the division.
    /// * `rounding` - rounding technique to use in calculation.
    #[must_use]
    fn mul_div(
        self,
        y: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> Option<Self>;
}

/// Enum representing many rounding techniques.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Rounding toward negative infinity.
    Floor,
    /// Rounding toward positive infinity.
    Ceil,
}

impl Math for U256 {
    fn mul_div(
        self,
        y: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }

        // `U256` * `U256` always fits into `U512`.
        let prod = U512::from(self) * U512::from(y);

        let adjusted = match rounding {
            Rounding::Floor => prod,
            Rounding::Ceil => {
                prod.checked_add(U512::from(denominator) - U512::ONE)?
            }
        };

        let result = adjusted / U512::from(denominator);
        if result > U512::from(U256::MAX) {
            None
        } else {
            Some(U256::from(result))
        }
    }
}
