use serde::Serialize;

use crate::catalog::store::Store;

/// A computed visiting order. `path` is always a permutation of the stops
/// the optimizer was given.
#[derive(Clone, Debug, Serialize)]
pub struct RouteResult {
    path: Vec<Store>,
    total_distance_miles: f64,
}

impl RouteResult {
    pub(crate) fn new(path: Vec<Store>, total_distance_miles: f64) -> Self {
        Self {
            path,
            total_distance_miles,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            path: Vec::new(),
            total_distance_miles: 0.0,
        }
    }

    pub fn path(&self) -> &[Store] {
        &self.path
    }

    pub fn total_distance_miles(&self) -> f64 {
        self.total_distance_miles
    }
}
