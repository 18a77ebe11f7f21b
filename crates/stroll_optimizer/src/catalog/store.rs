use serde::{Deserialize, Serialize};
use stroll_geo::coordinate::Coordinate;

/// Identifier issued by the store catalog service.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum PriceRange {
    Budget,
    #[serde(rename = "Mid-Range")]
    MidRange,
    Premium,
    Luxury,
}

/// A retail store as returned by the catalog endpoint. Immutable input to
/// the optimizer and scorer; the catalog owns its lifecycle.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Store {
    #[serde(rename = "_id")]
    id: StoreId,
    name: String,
    lat: f64,
    lng: f64,
    brand: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(rename = "priceRange")]
    price_range: PriceRange,
    #[serde(default)]
    rating: f64,
    #[serde(rename = "ratingCount", default)]
    rating_count: u32,
}

impl Store {
    pub fn id(&self) -> &StoreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::from_lat_lng(self.lat, self.lng)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn rating_count(&self) -> u32 {
        self.rating_count
    }
}

#[derive(Default)]
pub struct StoreBuilder {
    id: Option<StoreId>,
    name: Option<String>,
    lat: f64,
    lng: f64,
    brand: Option<String>,
    categories: Vec<String>,
    price_range: Option<PriceRange>,
    rating: f64,
    rating_count: u32,
}

impl StoreBuilder {
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut StoreBuilder {
        self.id = Some(StoreId::new(id));
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut StoreBuilder {
        self.name = Some(name.into());
        self
    }

    pub fn set_lat_lng(&mut self, lat: f64, lng: f64) -> &mut StoreBuilder {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) -> &mut StoreBuilder {
        self.brand = Some(brand.into());
        self
    }

    pub fn add_category(&mut self, category: impl Into<String>) -> &mut StoreBuilder {
        self.categories.push(category.into());
        self
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) -> &mut StoreBuilder {
        self.price_range = Some(price_range);
        self
    }

    pub fn set_rating(&mut self, rating: f64, rating_count: u32) -> &mut StoreBuilder {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }

    pub fn build(self) -> Store {
        let id = self.id.expect("Expected store id");
        let name = self.name.unwrap_or_else(|| id.as_str().to_owned());

        Store {
            id,
            name,
            lat: self.lat,
            lng: self.lng,
            brand: self.brand.unwrap_or_default(),
            categories: self.categories,
            price_range: self.price_range.unwrap_or(PriceRange::MidRange),
            rating: self.rating,
            rating_count: self.rating_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_document() {
        let json = r#"{
            "_id": "ChIJd8kx3kZZwokRtV2k",
            "name": "Nike SoHo",
            "address": "529 Broadway",
            "lat": 40.7236,
            "lng": -74.0027,
            "brand": "Nike",
            "categories": ["Streetwear Shops", "Specialty Sneaker Stores"],
            "priceRange": "Mid-Range",
            "rating": 4.4,
            "ratingCount": 3361,
            "photos": []
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();

        assert_eq!(store.id().as_str(), "ChIJd8kx3kZZwokRtV2k");
        assert_eq!(store.name(), "Nike SoHo");
        assert_eq!(store.brand(), "Nike");
        assert_eq!(store.price_range(), PriceRange::MidRange);
        assert_eq!(store.rating_count(), 3361);
        assert_eq!(store.coordinate().lat(), 40.7236);
        assert_eq!(store.coordinate().lng(), -74.0027);
    }

    #[test]
    fn test_deserialize_price_range_labels() {
        for (label, expected) in [
            ("Budget", PriceRange::Budget),
            ("Mid-Range", PriceRange::MidRange),
            ("Premium", PriceRange::Premium),
            ("Luxury", PriceRange::Luxury),
        ] {
            let parsed: PriceRange = serde_json::from_str(&format!("\"{label}\"")).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_builder_defaults() {
        let mut builder = StoreBuilder::default();
        builder.set_id("store_1");
        builder.set_lat_lng(40.0, -74.0);
        let store = builder.build();

        assert_eq!(store.name(), "store_1");
        assert_eq!(store.rating(), 0.0);
        assert_eq!(store.rating_count(), 0);
        assert!(store.categories().is_empty());
    }
}
