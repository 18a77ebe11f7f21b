use crate::catalog::store::{Store, StoreBuilder};

pub fn store_at(id: &str, lat: f64, lng: f64) -> Store {
    let mut builder = StoreBuilder::default();
    builder.set_id(id);
    builder.set_lat_lng(lat, lng);
    builder.build()
}

pub fn rated_store(id: &str, brand: &str, rating: f64, rating_count: u32) -> Store {
    let mut builder = StoreBuilder::default();
    builder.set_id(id);
    builder.set_brand(brand);
    builder.set_rating(rating, rating_count);
    builder.build()
}
