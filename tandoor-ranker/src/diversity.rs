//! Per-locality diversity limiting.

use std::collections::HashMap;

use tandoor_core::ScoredCandidate;

/// Keep at most `max_per_locality` candidates from each locality.
///
/// Candidates are visited in their incoming order and a candidate is kept
/// while its locality is still under the cap, so the caller's ranking
/// decides which members of a crowded locality survive. A cap of zero
/// yields an empty list.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::{Candidate, Restaurant};
/// use tandoor_ranker::limit_by_locality;
///
/// let at = Coord { x: 77.2090, y: 28.6139 };
/// let ranked: Vec<_> = ["a", "b", "c"]
///     .into_iter()
///     .enumerate()
///     .map(|(position, id)| {
///         let restaurant = Restaurant::new(id, at, 4.5, 10, "Delhi").unwrap();
///         Candidate::new(restaurant, 1.0, position).with_score(1.0)
///     })
///     .collect();
/// let limited = limit_by_locality(ranked, 2);
/// assert_eq!(limited.len(), 2);
/// assert_eq!(limited[1].id(), "b");
/// ```
#[must_use]
pub fn limit_by_locality(
    ranked: Vec<ScoredCandidate>,
    max_per_locality: usize,
) -> Vec<ScoredCandidate> {
    let mut taken: HashMap<String, usize> = HashMap::new();
    ranked
        .into_iter()
        .filter(|candidate| {
            let count = taken.entry(candidate.locality().to_owned()).or_insert(0);
            if *count < max_per_locality {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}
