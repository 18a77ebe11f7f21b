use fxhash::FxHashMap;
use stroll_geo::coordinate::Coordinate;
use tracing::debug;

use crate::{
    directions_result::DirectionsResult,
    provider::{Destination, DirectionsError, DirectionsProvider},
    travel_mode::TravelMode,
};

/// Six decimal places of a degree, ~0.11 m. Destinations closer than that
/// collapse to one key regardless of floating-point representation noise.
const KEY_SCALE: f64 = 1e6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    mode: TravelMode,
    lat_micro: i64,
    lng_micro: i64,
}

impl CacheKey {
    fn new(mode: TravelMode, destination: &Coordinate) -> Self {
        Self {
            mode,
            lat_micro: (destination.lat() * KEY_SCALE).round() as i64,
            lng_micro: (destination.lng() * KEY_SCALE).round() as i64,
        }
    }
}

struct CacheEntry {
    result: DirectionsResult,
    /// Where the user stood when this result was fetched.
    fetched_from: Coordinate,
    last_used: u64,
}

#[derive(Clone, Debug)]
pub struct DirectionsCacheParams {
    /// Movement below this distance keeps serving the cached result;
    /// geolocation jitter should not burn provider calls.
    pub significant_move_miles: f64,

    /// Entry count past which the least recently used entry is evicted.
    /// Callers sizing to the active route can pass its stop count.
    pub capacity: usize,
}

impl Default for DirectionsCacheParams {
    fn default() -> Self {
        Self {
            significant_move_miles: 0.1,
            capacity: 32,
        }
    }
}

/// The result handed back to the caller alongside the range verdict.
#[derive(Clone, Debug)]
pub struct Directions {
    pub result: DirectionsResult,

    /// Straight-line distance to the destination exceeds the travel mode's
    /// range cap. Informational: the result is still fetched or served so
    /// the caller can show the stop order and straight-line distance.
    pub out_of_range: bool,
}

/// Coordinate-aware cache in front of the external directions provider.
///
/// Keyed by travel mode and rounded destination. A cached result stays
/// valid while the user remains within `significant_move_miles` of the
/// position it was fetched from; moving further re-fetches and overwrites
/// the entry. Provider failures propagate and leave the cache untouched.
pub struct DirectionsCache {
    params: DirectionsCacheParams,
    entries: FxHashMap<CacheKey, CacheEntry>,
    tick: u64,
}

impl DirectionsCache {
    pub fn new(params: DirectionsCacheParams) -> Self {
        Self {
            params,
            entries: FxHashMap::default(),
            tick: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn get_directions<P>(
        &mut self,
        provider: &P,
        current: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> Result<Directions, DirectionsError>
    where
        P: DirectionsProvider,
    {
        let out_of_range =
            current.haversine_miles(&destination.coordinate()) > mode.max_range_miles();

        let key = CacheKey::new(mode, &destination.coordinate());
        self.tick += 1;

        if let Some(entry) = self.entries.get_mut(&key) {
            let moved_miles = current.haversine_miles(&entry.fetched_from);
            if moved_miles < self.params.significant_move_miles {
                debug!(%mode, moved_miles, "serving cached directions");
                entry.last_used = self.tick;
                return Ok(Directions {
                    result: entry.result.clone(),
                    out_of_range,
                });
            }
        }

        debug!(%mode, place_id = destination.place_id(), "fetching directions from provider");
        let result = provider.fetch(current, destination, mode).await?;

        self.insert(
            key,
            CacheEntry {
                result: result.clone(),
                fetched_from: current,
                last_used: self.tick,
            },
        );

        Ok(Directions {
            result,
            out_of_range,
        })
    }

    fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.params.capacity {
            self.evict_least_recently_used();
        }

        self.entries.insert(key, entry);
    }

    fn evict_least_recently_used(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(&key, _)| key);

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

impl Default for DirectionsCache {
    fn default() -> Self {
        Self::new(DirectionsCacheParams::default())
    }
}
