use smallvec::SmallVec;
use stroll_geo::coordinate::Coordinate;

use crate::catalog::store::Store;

use super::{route_result::RouteResult, tour_strategy::OrderTour};

/// Inline capacity covers every stop count the strategy switch admits.
type Order = SmallVec<[usize; 8]>;

/// Exact tour construction: enumerates every permutation of the stops and
/// keeps the shortest. The generator fixes the stop at each position in
/// turn and recursively permutes the remainder; strict less-than keeps the
/// first permutation that attains the minimum.
pub struct ExhaustiveSearch;

impl OrderTour for ExhaustiveSearch {
    fn order_tour(&self, origin: Coordinate, stops: &[Store]) -> RouteResult {
        if stops.is_empty() {
            return RouteResult::empty();
        }

        let coordinates: SmallVec<[Coordinate; 8]> =
            stops.iter().map(|stop| stop.coordinate()).collect();

        let mut order: Order = (0..stops.len()).collect();
        let mut best_order: Order = order.clone();
        let mut best_distance = f64::INFINITY;

        permute(
            &coordinates,
            origin,
            &mut order,
            0,
            &mut best_order,
            &mut best_distance,
        );

        let path = best_order.iter().map(|&index| stops[index].clone()).collect();
        RouteResult::new(path, best_distance)
    }
}

fn permute(
    coordinates: &[Coordinate],
    origin: Coordinate,
    order: &mut Order,
    depth: usize,
    best_order: &mut Order,
    best_distance: &mut f64,
) {
    if depth == order.len() {
        let total = tour_length(origin, coordinates, order);
        if total < *best_distance {
            *best_distance = total;
            best_order.copy_from_slice(order);
        }
        return;
    }

    for index in depth..order.len() {
        order.swap(depth, index);
        permute(
            coordinates,
            origin,
            order,
            depth + 1,
            best_order,
            best_distance,
        );
        order.swap(depth, index);
    }
}

fn tour_length(origin: Coordinate, coordinates: &[Coordinate], order: &[usize]) -> f64 {
    let mut total = 0.0;
    let mut position = origin;

    for &index in order {
        total += position.haversine_miles(&coordinates[index]);
        position = coordinates[index];
    }

    total
}
