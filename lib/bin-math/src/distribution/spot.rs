//! Uniform weighting.
use super::{unit_below_total, Bins};

/// Gives every funded bin of a side the same share.
///
/// When both sides are funded the active bin is shared: a side's weight
/// total becomes `2 * count - 1`, the active bin takes one unit and every
/// other bin two.
pub(crate) fn distribute(bins: &Bins) -> (Vec<u64>, Vec<u64>) {
    let both = bins.both_sides();
    let x = column(bins, bins.count_x(), both, |id| bins.holds_x(id));
    let y = column(bins, bins.count_y(), both, |id| bins.holds_y(id));
    (x, y)
}

fn column(
    bins: &Bins,
    count: usize,
    both: bool,
    holds: impl Fn(i32) -> bool,
) -> Vec<u64> {
    if count == 0 {
        return vec![0; bins.ids.len()];
    }

    let count = count as u64;
    let weight_total = if both { 2 * count - 1 } else { count };
    let unit = unit_below_total(weight_total);

    bins.ids
        .iter()
        .map(|&id| match (holds(id), both) {
            (false, _) => 0,
            (true, false) => unit,
            (true, true) if id == 0 => unit,
            (true, true) => 2 * unit,
        })
        .collect()
}
