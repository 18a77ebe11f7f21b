use stroll_geo::coordinate::Coordinate;

use crate::catalog::store::Store;

use super::{route_result::RouteResult, tour_strategy::OrderTour};

/// Greedy tour construction: from the current position, always travel to
/// the closest unvisited stop. Strict less-than on the running minimum means
/// distance ties go to the stop that appears first in the input.
pub struct NearestNeighbor;

impl OrderTour for NearestNeighbor {
    fn order_tour(&self, origin: Coordinate, stops: &[Store]) -> RouteResult {
        let coordinates: Vec<Coordinate> = stops.iter().map(|stop| stop.coordinate()).collect();
        let mut remaining: Vec<usize> = (0..stops.len()).collect();

        let mut path = Vec::with_capacity(stops.len());
        let mut position = origin;
        let mut total_distance = 0.0;

        while !remaining.is_empty() {
            let mut nearest_slot = 0;
            let mut nearest_distance = f64::INFINITY;

            for (slot, &stop_index) in remaining.iter().enumerate() {
                let distance = position.haversine_miles(&coordinates[stop_index]);
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest_slot = slot;
                }
            }

            let stop_index = remaining.remove(nearest_slot);
            total_distance += nearest_distance;
            position = coordinates[stop_index];
            path.push(stops[stop_index].clone());
        }

        RouteResult::new(path, total_distance)
    }
}
