use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::{filter_criteria::FilterCriteria, store::Store};

use super::suggest_params::SuggestParams;

/// Weighted match score of a store against the criteria. A weight only
/// applies when the corresponding criterion is actually set.
fn match_score(store: &Store, criteria: &FilterCriteria, params: &SuggestParams) -> u32 {
    let mut score = 0;

    if !criteria.brands.is_empty() && criteria.brands.iter().any(|brand| brand == store.brand()) {
        score += params.brand_weight;
    }

    if !criteria.categories.is_empty()
        && store
            .categories()
            .iter()
            .any(|category| criteria.categories.contains(category))
    {
        score += params.category_weight;
    }

    if !criteria.price_ranges.is_empty() && criteria.price_ranges.contains(&store.price_range()) {
        score += params.price_range_weight;
    }

    score
}

/// Rating pulled toward the catalog-wide mean in proportion to how few votes
/// the store has. Keeps a single 5-star review from outranking hundreds of
/// 4.5-star ones.
pub fn weighted_rating(store: &Store, params: &SuggestParams) -> f64 {
    let count = f64::from(store.rating_count());
    let min_votes = f64::from(params.min_votes);

    (store.rating() * count + params.global_average_rating * min_votes) / (count + min_votes)
}

/// Rank the catalog against the user's criteria.
///
/// Ineligible stores (rating floors) are dropped before scoring. Eligible
/// stores are ordered by descending match score, ties broken by descending
/// weighted rating; only stores at or above the score floor survive, capped
/// at `params.max_results`.
pub fn suggest(catalog: &[Store], criteria: &FilterCriteria, params: &SuggestParams) -> Vec<Store> {
    let mut scored: Vec<(u32, f64, &Store)> = catalog
        .iter()
        .filter(|store| criteria.is_eligible(store))
        .map(|store| {
            (
                match_score(store, criteria, params),
                weighted_rating(store, params),
                store,
            )
        })
        .filter(|&(score, _, _)| score >= params.score_floor)
        .collect();

    // Stable sort: stores tied on both keys keep catalog order.
    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
    });

    scored.truncate(params.max_results);

    debug!(
        catalog = catalog.len(),
        suggested = scored.len(),
        "ranked store suggestions"
    );

    scored.into_iter().map(|(_, _, store)| store.clone()).collect()
}
