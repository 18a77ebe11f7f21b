use geo_types::Point;

pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A latitude/longitude pair in degrees. Value type, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    point: Point<f64>,
}

impl Coordinate {
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            point: Point::new(lng, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    /// Great-circle distance in miles, Haversine formula.
    ///
    /// The atan2 form is domain-safe: near-identical and antipodal points
    /// never produce a NaN from inverse trig. Non-finite input flows through
    /// as non-finite output.
    pub fn haversine_miles(&self, to: &Coordinate) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = to.lat().to_radians();
        let delta_phi = (to.lat() - self.lat()).to_radians();
        let delta_lambda = (to.lng() - self.lng()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_MILES * c
    }
}

impl From<&Coordinate> for Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        coordinate.point
    }
}
