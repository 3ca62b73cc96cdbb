//! Aggregate helpers shared by the statistics reporters.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value; ties are broken by the smallest value in sort order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((bv, bc)) if count < *bc || (count == *bc && value >= *bv) => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(v, _)| v)
}

/// Per-value frequencies, sorted by descending count then ascending value.
pub fn value_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}
