//! Cuisine affinity derived from a diner's favourite restaurants.

use std::collections::HashMap;

use tandoor_core::Restaurant;

/// Return the cuisine tag that appears most often across `favourites`.
///
/// Tags are compared exactly. Ties go to the tag encountered first while
/// walking the favourites in order and each favourite's tags in order.
/// Returns `None` when no favourite carries a cuisine tag.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::Restaurant;
/// use tandoor_ranker::top_cuisine;
///
/// let at = Coord { x: 72.8777, y: 19.0760 };
/// let favourites = vec![
///     Restaurant::new("a", at, 4.5, 10, "Mumbai").unwrap().with_cuisines(["Mughlai", "Biryani"]),
///     Restaurant::new("b", at, 4.2, 10, "Mumbai").unwrap().with_cuisines(["Biryani"]),
/// ];
/// assert_eq!(top_cuisine(&favourites), Some("Biryani"));
/// ```
#[must_use]
pub fn top_cuisine<'a, I>(favourites: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for cuisine in favourites
        .into_iter()
        .flat_map(|restaurant| restaurant.cuisines().iter().map(String::as_str))
    {
        let count = counts.entry(cuisine).or_insert_with(|| {
            order.push(cuisine);
            0
        });
        *count += 1;
    }
    let mut best: Option<(&'a str, usize)> = None;
    for cuisine in order {
        let count = counts.get(cuisine).copied().unwrap_or_default();
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((cuisine, count));
        }
    }
    best.map(|(cuisine, _)| cuisine)
}
