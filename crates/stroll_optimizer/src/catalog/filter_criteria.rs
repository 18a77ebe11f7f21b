use crate::catalog::store::{PriceRange, Store};

/// User-selected filter state. Empty collections and absent minimums mean
/// "no constraint".
#[derive(Clone, Debug, Default)]
pub struct FilterCriteria {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub price_ranges: Vec<PriceRange>,
    pub min_rating: Option<f64>,
    pub min_rating_count: Option<u32>,
}

impl FilterCriteria {
    /// Hard quality gate. Stores failing the rating floors are excluded
    /// before any scoring happens.
    pub fn is_eligible(&self, store: &Store) -> bool {
        let rating_ok = self
            .min_rating
            .is_none_or(|min_rating| store.rating() >= min_rating);
        let count_ok = self
            .min_rating_count
            .is_none_or(|min_count| store.rating_count() >= min_count);

        rating_ok && count_ok
    }
}
