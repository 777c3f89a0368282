//! Weighted random selection over any list of variants

use rand::Rng;

/// Pick an index with probability proportional to its weight.
///
/// Draws uniformly in `[0, total)` and walks the weights in order,
/// subtracting each one until the draw is exhausted. Entries with a weight of
/// zero (or less) are never returned. The last positive entry absorbs float
/// rounding. Returns `None` when no entry has a positive weight.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }

    let mut remaining = rng.gen_range(0.0..total);
    let mut last_positive = None;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = Some(index);
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(index);
        }
    }

    last_positive
}

/// Pick an item with probability proportional to the weight at the same position
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    weights: &[f64],
) -> Option<&'a T> {
    let usable = items.len().min(weights.len());
    weighted_index(rng, &weights[..usable]).map(|i| &items[i])
}

/// Uniform pick from a non-empty slice
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
