/// Weights and limits for the suggestion scorer. The defaults are the
/// calibrated production values; callers may override them but behavioral
/// compatibility expects these exact numbers.
#[derive(Clone, Debug)]
pub struct SuggestParams {
    pub brand_weight: u32,
    pub category_weight: u32,
    pub price_range_weight: u32,

    /// Minimum match score a store must reach to be suggested. Note that a
    /// price-range-only match (1 point) never clears the default floor of 3;
    /// price alone is treated as too weak a signal.
    pub score_floor: u32,

    /// Suggestion list is truncated to this many stores.
    pub max_results: usize,

    /// Prior mean rating used by the Bayesian tie-break, calibrated to the
    /// observed catalog rating distribution.
    pub global_average_rating: f64,

    /// Vote mass of the prior in the Bayesian tie-break.
    pub min_votes: u32,
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self {
            brand_weight: 5,
            category_weight: 3,
            price_range_weight: 1,
            score_floor: 3,
            max_results: 10,
            global_average_rating: 4.11,
            min_votes: 10,
        }
    }
}
