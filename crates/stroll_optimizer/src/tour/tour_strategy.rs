use std::fmt::Display;

use stroll_geo::coordinate::Coordinate;

use crate::catalog::store::Store;

use super::{
    exhaustive_search::ExhaustiveSearch, nearest_neighbor::NearestNeighbor,
    route_result::RouteResult, tour_params::TourParams,
};

pub trait OrderTour {
    fn order_tour(&self, origin: Coordinate, stops: &[Store]) -> RouteResult;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TourStrategy {
    ExhaustiveSearch,
    NearestNeighbor,
}

impl TourStrategy {
    /// Size predicate for the strategy switch: exact search while the
    /// factorial stays small, greedy beyond.
    pub fn for_size(num_stops: usize, params: &TourParams) -> Self {
        if num_stops <= params.exhaustive_threshold {
            TourStrategy::ExhaustiveSearch
        } else {
            TourStrategy::NearestNeighbor
        }
    }
}

impl Display for TourStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExhaustiveSearch => write!(f, "ExhaustiveSearch"),
            Self::NearestNeighbor => write!(f, "NearestNeighbor"),
        }
    }
}

impl OrderTour for TourStrategy {
    fn order_tour(&self, origin: Coordinate, stops: &[Store]) -> RouteResult {
        match self {
            TourStrategy::ExhaustiveSearch => ExhaustiveSearch.order_tour(origin, stops),
            TourStrategy::NearestNeighbor => NearestNeighbor.order_tour(origin, stops),
        }
    }
}
