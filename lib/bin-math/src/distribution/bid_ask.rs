//! Bid-ask weighting: shares grow linearly away from the middle of the
//! range.
use super::{unit_below_total, Bins};
use crate::constants::DISTRIBUTION_TOTAL;

/// Generates the V-shaped integer sequence used to weight `len` bins.
///
/// Odd lengths `2k + 1` yield `[k + 1, ..., 2, 1, 2, ..., k + 1]`; even
/// lengths `2k` yield `[k, ..., 1, 1, ..., k]`.
///
/// # Examples
///
/// ```
/// use infinity_bin_math::distribution::generate_sequence;
///
/// assert_eq!(generate_sequence(5), vec![3, 2, 1, 2, 3]);
/// assert_eq!(generate_sequence(4), vec![2, 1, 1, 2]);
/// ```
#[must_use]
pub fn generate_sequence(len: usize) -> Vec<u64> {
    let half = len / 2;
    (0..len)
        .map(|i| {
            let distance = if len % 2 == 1 {
                i.abs_diff(half)
            } else if i < half {
                half - i - 1
            } else {
                i - half
            };
            distance as u64 + 1
        })
        .collect()
}

pub(crate) fn distribute(bins: &Bins) -> (Vec<u64>, Vec<u64>) {
    let sequence = generate_sequence(bins.ids.len());
    let both = bins.both_sides();

    let weights = |holds: &dyn Fn(i32) -> bool| -> Vec<u64> {
        bins.ids
            .iter()
            .zip(&sequence)
            .map(|(&id, &value)| match (holds(id), both) {
                (false, _) => 0,
                (true, true) if value != 1 => 2 * value,
                (true, _) => value,
            })
            .collect()
    };

    let x = weights(&|id| bins.holds_x(id));
    let y = weights(&|id| bins.holds_y(id));
    (scale(x), scale(y))
}

/// Multiplies every weight by `DISTRIBUTION_TOTAL / total`.
///
/// When `total` divides [`DISTRIBUTION_TOTAL`] the plain quotient would make
/// the column sum to exactly the total, so the unit is taken one below it.
/// Both forms agree for every other `total`.
fn scale(mut weights: Vec<u64>) -> Vec<u64> {
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return weights;
    }

    let unit = if DISTRIBUTION_TOTAL % total == 0 {
        unit_below_total(total)
    } else {
        DISTRIBUTION_TOTAL / total
    };
    for weight in &mut weights {
        *weight *= unit;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins(
        ids: std::ops::RangeInclusive<i32>,
        fund_x: bool,
        fund_y: bool,
    ) -> Bins {
        Bins { ids: ids.collect(), fund_x, fund_y }
    }

    #[test]
    fn sequences_for_small_lengths() {
        assert_eq!(generate_sequence(0), Vec::<u64>::new());
        assert_eq!(generate_sequence(1), vec![1]);
        assert_eq!(generate_sequence(2), vec![1, 1]);
        assert_eq!(generate_sequence(3), vec![2, 1, 2]);
        assert_eq!(generate_sequence(6), vec![3, 2, 1, 1, 2, 3]);
        assert_eq!(generate_sequence(7), vec![4, 3, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn doubles_all_but_the_shared_bin() {
        let (x, y) = distribute(&bins(-2..=2, true, true));
        // x weights: [0, 0, 1, 4, 6] -> total 11.
        let unit = DISTRIBUTION_TOTAL / 11;
        assert_eq!(x, vec![0, 0, unit, 4 * unit, 6 * unit]);
        assert_eq!(y, vec![6 * unit, 4 * unit, unit, 0, 0]);
    }

    #[test]
    fn exact_divisor_stays_below_total() {
        // A single x bin has weight total 1, which divides the total.
        let (x, y) = distribute(&bins(0..=0, true, false));
        assert_eq!(x, vec![DISTRIBUTION_TOTAL - 1]);
        assert_eq!(y, vec![0]);

        // [1, 1] sums to 2, which also divides the total.
        let (x, _) = distribute(&bins(0..=1, true, false));
        assert_eq!(x, vec![499_999_999_999_999_999, 499_999_999_999_999_999]);
    }

    #[test]
    fn even_range_places_low_weights_in_the_middle() {
        let (x, y) = distribute(&bins(-1..=2, true, false));
        // Sequence [2, 1, 1, 2]: the bin below the active one is skipped.
        let unit = DISTRIBUTION_TOTAL / 4 - 1;
        assert_eq!(x, vec![0, unit, unit, 2 * unit]);
        assert_eq!(y, vec![0; 4]);
    }
}
