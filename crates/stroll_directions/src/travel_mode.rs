use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
}

impl TravelMode {
    /// Beyond this straight-line distance, detailed directions for the mode
    /// are not meaningful to display. Gates presentation only.
    pub fn max_range_miles(&self) -> f64 {
        match self {
            TravelMode::Driving => 100.0,
            TravelMode::Walking => 10.0,
            TravelMode::Bicycling => 20.0,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels() {
        assert_eq!(serde_json::to_string(&TravelMode::Driving).unwrap(), "\"DRIVING\"");
        assert_eq!(
            serde_json::from_str::<TravelMode>("\"BICYCLING\"").unwrap(),
            TravelMode::Bicycling
        );
    }

    #[test]
    fn test_range_caps() {
        assert_eq!(TravelMode::Driving.max_range_miles(), 100.0);
        assert_eq!(TravelMode::Walking.max_range_miles(), 10.0);
        assert_eq!(TravelMode::Bicycling.max_range_miles(), 20.0);
    }
}
