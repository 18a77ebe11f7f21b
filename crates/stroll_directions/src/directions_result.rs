use serde::{Deserialize, Serialize};

/// Turn-by-turn directions as returned by the external provider. Opaque to
/// the cache beyond being cloneable and keyed; all fields are presentation
/// strings in the provider's formatting.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DirectionsResult {
    pub legs: Vec<RouteLeg>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub distance_text: String,
    pub duration_text: String,
    pub start_address: String,
    pub end_address: String,
    pub steps: Vec<RouteStep>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub instructions: String,
    pub distance_text: String,
    pub duration_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_payload() {
        let json = r#"{
            "legs": [{
                "distanceText": "1.2 mi",
                "durationText": "8 mins",
                "startAddress": "Broome St, New York, NY",
                "endAddress": "529 Broadway, New York, NY",
                "steps": [{
                    "instructions": "Head north on Broadway",
                    "distanceText": "0.3 mi",
                    "durationText": "2 mins"
                }]
            }]
        }"#;

        let result: DirectionsResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.legs.len(), 1);
        assert_eq!(result.legs[0].steps.len(), 1);
        assert_eq!(result.legs[0].distance_text, "1.2 mi");
        assert_eq!(result.legs[0].steps[0].instructions, "Head north on Broadway");
    }
}
