/// Elimination weight of a tile: the reciprocal of its rarity weight
///
/// Tiles with a larger weight are eliminated less often and therefore
/// survive more often in the output.
pub fn elimination_weight(weight: f64) -> f64 {
    if weight > 0.0 { 1.0 / weight } else { 0.0 }
}

/// Pick an index from a cumulative draw
///
/// Accumulates `weights` in order and returns the first index at which the
/// running sum reaches `draw`. `draw` is expected in `[0, sum)`; values past
/// the total fall back to the last index.
pub fn cumulative_pick(weights: &[f64], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative >= draw {
            return Some(i);
        }
    }
    weights.len().checked_sub(1)
}

/// Probability of choosing each entry under inverse-weight elimination
pub fn elimination_probabilities(weights: &[f64]) -> Vec<f64> {
    let inverse: Vec<f64> = weights.iter().map(|&w| elimination_weight(w)).collect();
    let total: f64 = inverse.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    inverse.iter().map(|&w| w / total).collect()
}
