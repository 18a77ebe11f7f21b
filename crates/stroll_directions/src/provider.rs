use stroll_geo::coordinate::Coordinate;
use thiserror::Error;

use crate::{directions_result::DirectionsResult, travel_mode::TravelMode};

/// A routable place: the provider-side identifier plus the coordinate the
/// cache keys and range checks work from.
#[derive(Clone, Debug)]
pub struct Destination {
    place_id: String,
    coordinate: Coordinate,
}

impl Destination {
    pub fn new(place_id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            place_id: place_id.into(),
            coordinate,
        }
    }

    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[derive(Debug, Error)]
pub enum DirectionsError {
    #[error("directions provider request failed: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("provider returned no route between origin and destination")]
    NoRoute,
}

/// External directions service. Fetch failures propagate to the caller
/// unchanged; the cache never retries on the provider's behalf.
pub trait DirectionsProvider {
    fn fetch(
        &self,
        origin: Coordinate,
        destination: &Destination,
        mode: TravelMode,
    ) -> impl Future<Output = Result<DirectionsResult, DirectionsError>>;
}
