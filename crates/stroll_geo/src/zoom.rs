use crate::coordinate::Coordinate;

/// Distance thresholds in miles, ascending. The first threshold the distance
/// stays under decides the zoom; anything past the last falls back to the
/// widest level.
const ZOOM_STEPS: [(f64, u8); 8] = [
    (0.31, 15),
    (0.62, 14),
    (1.24, 13),
    (3.11, 12),
    (6.21, 11),
    (12.43, 10),
    (31.07, 9),
    (62.14, 8),
];

const WIDEST_ZOOM: u8 = 7;

/// Map zoom level for a given distance in miles. Monotonic non-increasing.
pub fn zoom_for_distance(miles: f64) -> u8 {
    for (threshold, zoom) in ZOOM_STEPS {
        if miles < threshold {
            return zoom;
        }
    }

    WIDEST_ZOOM
}

/// Zoom level appropriate for framing both coordinates.
pub fn zoom_between(from: &Coordinate, to: &Coordinate) -> u8 {
    zoom_for_distance(from.haversine_miles(to))
}
