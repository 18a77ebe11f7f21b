use crate::coordinate::Coordinate;

/// ~50 meters. Device fixes closer together than this are treated as noise.
pub const DEFAULT_JITTER_MILES: f64 = 0.031;

/// Suppresses sub-threshold jitter from a periodically refreshed position
/// source: an update only replaces the tracked coordinate once the device
/// has moved further than the threshold from the last accepted fix.
pub struct PositionFilter {
    threshold_miles: f64,
    accepted: Option<Coordinate>,
}

impl PositionFilter {
    pub fn new(threshold_miles: f64) -> Self {
        Self {
            threshold_miles,
            accepted: None,
        }
    }

    /// Feed the next raw fix; returns the coordinate callers should use.
    /// The first fix is always accepted.
    pub fn accept(&mut self, next: Coordinate) -> Coordinate {
        match self.accepted {
            None => {
                self.accepted = Some(next);
                next
            }
            Some(current) => {
                if current.haversine_miles(&next) > self.threshold_miles {
                    self.accepted = Some(next);
                    next
                } else {
                    current
                }
            }
        }
    }

    pub fn current(&self) -> Option<Coordinate> {
        self.accepted
    }
}

impl Default for PositionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER_MILES)
    }
}
