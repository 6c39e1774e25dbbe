//! Curated "popular" and "featured" lists backed by an injected cache.
//!
//! Each list is computed over the whole catalogue and cached as an ordered
//! list of restaurant ids tagged with a fingerprint of the catalogue it came
//! from. A cached ordering is reused only while the catalogue's fingerprint
//! still matches, so editing a rating, a review count, the featured flag or
//! the set of ids invalidates it. Cached ids that no longer name a record
//! are skipped. [`CuratedLists::invalidate`] drops every entry explicitly.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Mutex, PoisonError};

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tandoor_core::Restaurant;

/// Number of restaurants shown in the popular list by default.
pub const DEFAULT_POPULAR_COUNT: usize = 4;

/// Number of restaurants shown in the featured list by default.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Which curated list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Highest rated first.
    Popular,
    /// Seeded shuffle with flagged restaurants first.
    Featured,
}

/// A cached list ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedList {
    /// Fingerprint of the catalogue the ordering was computed from.
    pub fingerprint: u64,
    /// Restaurant ids in list order, covering the whole catalogue.
    pub ids: Vec<String>,
}

/// Storage for curated list orderings.
///
/// Implementations must be thread-safe; [`CuratedLists`] only ever holds a
/// shared reference.
pub trait ListCache: Send + Sync {
    /// Return the cached ordering for `kind`, if any.
    fn load(&self, kind: ListKind) -> Option<CachedList>;

    /// Replace the cached ordering for `kind`.
    fn store(&self, kind: ListKind, list: CachedList);

    /// Drop every cached ordering.
    fn invalidate(&self);
}

/// In-process [`ListCache`].
#[derive(Debug, Default)]
pub struct MemoryListCache {
    entries: Mutex<HashMap<ListKind, CachedList>>,
}

impl MemoryListCache {
    /// Construct an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached orderings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Report whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListCache for MemoryListCache {
    fn load(&self, kind: ListKind) -> Option<CachedList> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&kind)
            .cloned()
    }

    fn store(&self, kind: ListKind, list: CachedList) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind, list);
    }

    fn invalidate(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<K: ListCache + ?Sized> ListCache for &K {
    fn load(&self, kind: ListKind) -> Option<CachedList> {
        (**self).load(kind)
    }

    fn store(&self, kind: ListKind, list: CachedList) {
        (**self).store(kind, list);
    }

    fn invalidate(&self) {
        (**self).invalidate();
    }
}

/// Computes and caches the popular and featured lists.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::Restaurant;
/// use tandoor_ranker::{CuratedLists, MemoryListCache};
///
/// let at = Coord { x: 75.7873, y: 26.9124 };
/// let records = vec![
///     Restaurant::new("a", at, 4.2, 10, "Jaipur").unwrap(),
///     Restaurant::new("b", at, 4.9, 10, "Jaipur").unwrap(),
/// ];
/// let lists = CuratedLists::new(MemoryListCache::new(), 7);
/// let popular = lists.popular(&records, 1);
/// assert_eq!(popular[0].id(), "b");
/// ```
#[derive(Debug)]
pub struct CuratedLists<K>
where
    K: ListCache,
{
    cache: K,
    seed: u64,
}

impl<K> CuratedLists<K>
where
    K: ListCache,
{
    /// Construct lists backed by `cache`, shuffling featured picks with
    /// `seed`.
    #[must_use]
    pub const fn new(cache: K, seed: u64) -> Self {
        Self { cache, seed }
    }

    /// Return the backing cache.
    #[must_use]
    pub const fn cache(&self) -> &K {
        &self.cache
    }

    /// Return the featured shuffle seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Return up to `count` restaurants, highest rated first.
    ///
    /// Equal ratings keep catalogue order.
    #[must_use]
    pub fn popular<'a>(&self, records: &'a [Restaurant], count: usize) -> Vec<&'a Restaurant> {
        self.curated(ListKind::Popular, records, count, popular_order)
    }

    /// Return up to `count` restaurants from a seeded shuffle of the
    /// catalogue, restaurants flagged as featured first.
    #[must_use]
    pub fn featured<'a>(&self, records: &'a [Restaurant], count: usize) -> Vec<&'a Restaurant> {
        let seed = self.seed;
        self.curated(ListKind::Featured, records, count, |catalogue| {
            featured_order(catalogue, seed)
        })
    }

    /// Drop every cached ordering.
    pub fn invalidate(&self) {
        debug!("invalidating curated list cache");
        self.cache.invalidate();
    }

    fn curated<'a, F>(
        &self,
        kind: ListKind,
        records: &'a [Restaurant],
        count: usize,
        order: F,
    ) -> Vec<&'a Restaurant>
    where
        F: FnOnce(&'a [Restaurant]) -> Vec<&'a Restaurant>,
    {
        let fingerprint = catalogue_fingerprint(records);
        let cached = self
            .cache
            .load(kind)
            .filter(|list| list.fingerprint == fingerprint)
            .map(|list| resolve(records, &list.ids));
        let ordered = cached.map_or_else(
            || {
                debug!("computing {kind:?} list for {} restaurants", records.len());
                let computed = order(records);
                self.cache.store(
                    kind,
                    CachedList {
                        fingerprint,
                        ids: computed
                            .iter()
                            .map(|restaurant| restaurant.id().to_owned())
                            .collect(),
                    },
                );
                computed
            },
            |hit| {
                debug!("serving {kind:?} list from cache");
                hit
            },
        );
        ordered.into_iter().take(count).collect()
    }
}

/// Fingerprint the parts of a catalogue that affect curated lists.
///
/// The value is stable within a process run; it is not meant to be
/// persisted across builds.
#[must_use]
pub fn catalogue_fingerprint(records: &[Restaurant]) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.len().hash(&mut hasher);
    for restaurant in records {
        restaurant.id().hash(&mut hasher);
        restaurant.rating().to_bits().hash(&mut hasher);
        restaurant.review_count().hash(&mut hasher);
        restaurant.is_featured().hash(&mut hasher);
    }
    hasher.finish()
}

fn popular_order(records: &[Restaurant]) -> Vec<&Restaurant> {
    let mut ordered: Vec<&Restaurant> = records.iter().collect();
    ordered.sort_by(|lhs, rhs| rhs.rating().total_cmp(&lhs.rating()));
    ordered
}

fn featured_order(records: &[Restaurant], seed: u64) -> Vec<&Restaurant> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ordered: Vec<&Restaurant> = records.iter().collect();
    ordered.shuffle(&mut rng);
    ordered.sort_by_key(|restaurant| !restaurant.is_featured());
    ordered
}

/// Map cached ids back to records, skipping ids that no longer resolve.
fn resolve<'a>(records: &'a [Restaurant], ids: &[String]) -> Vec<&'a Restaurant> {
    let by_id: HashMap<&str, &'a Restaurant> = records
        .iter()
        .map(|restaurant| (restaurant.id(), restaurant))
        .collect();
    ids.iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect()
}
