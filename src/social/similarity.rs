use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets have nothing in common, so their similarity is `0.0`
/// rather than the undefined `0 / 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard<T>(a: &HashSet<T>, b: &HashSet<T>) -> f64
where
    T: Eq + Hash,
{
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}
