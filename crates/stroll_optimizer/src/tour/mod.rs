pub mod exhaustive_search;
pub mod nearest_neighbor;
pub mod route_result;
pub mod tour_params;
pub mod tour_strategy;

use stroll_geo::coordinate::Coordinate;
use tracing::debug;

use crate::catalog::store::Store;

use self::route_result::RouteResult;
use self::tour_params::TourParams;
use self::tour_strategy::{OrderTour, TourStrategy};

/// Visiting order for `stops` starting from `origin`, using the default
/// strategy switch (exhaustive search up to 7 stops, nearest-neighbor
/// beyond).
pub fn optimal_route(origin: Coordinate, stops: &[Store]) -> RouteResult {
    optimal_route_with(origin, stops, &TourParams::default())
}

pub fn optimal_route_with(origin: Coordinate, stops: &[Store], params: &TourParams) -> RouteResult {
    let strategy = TourStrategy::for_size(stops.len(), params);

    debug!(stops = stops.len(), strategy = %strategy, "ordering tour");

    strategy.order_tour(origin, stops)
}
