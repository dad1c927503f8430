//! Gaussian weighting.
use super::Bins;
use crate::constants::DISTRIBUTION_TOTAL;

/// Default standard deviation of the curve, relative to the span of the
/// range.
pub const DEFAULT_CURVE_DEVIATION: f64 = 0.2;

/// Weights bins with a Gaussian centered on the middle index of the range.
///
/// Weights are computed in floating point and floored per bin; the last
/// funded bin of each side absorbs whatever is left so the column sums to
/// exactly `DISTRIBUTION_TOTAL - 1`.
pub(crate) fn distribute(bins: &Bins, deviation: f64) -> (Vec<u64>, Vec<u64>) {
    let raw = gaussian(bins.ids.len(), deviation);
    let halve_active = bins.fund_x && bins.fund_y;

    let mut x = vec![0.0; raw.len()];
    let mut y = vec![0.0; raw.len()];
    for (i, (&id, &weight)) in bins.ids.iter().zip(&raw).enumerate() {
        let weight =
            if id == 0 && halve_active { weight / 2.0 } else { weight };
        if bins.holds_x(id) {
            x[i] = weight;
        }
        if bins.holds_y(id) {
            y[i] = weight;
        }
    }

    (normalize(&x), normalize(&y))
}

#[allow(clippy::cast_precision_loss)]
fn gaussian(len: usize, deviation: f64) -> Vec<f64> {
    let mid = (len / 2) as f64;
    let span = len.saturating_sub(1).max(1) as f64;
    let variance = 2.0 * deviation * deviation;
    (0..len)
        .map(|i| {
            let t = (i as f64 - mid) / span;
            (-(t * t) / variance).exp()
        })
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn normalize(weights: &[f64]) -> Vec<u64> {
    let mut shares = vec![0; weights.len()];
    let total: f64 = weights.iter().sum();
    let Some(last) = weights.iter().rposition(|&w| w > 0.0) else {
        return shares;
    };

    let budget = DISTRIBUTION_TOTAL - 1;
    let mut remaining = budget;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        if i == last {
            shares[i] = remaining;
            break;
        }
        let share = ((weight / total) * budget as f64).floor() as u64;
        let share = share.min(remaining);
        shares[i] = share;
        remaining -= share;
    }
    shares
}
