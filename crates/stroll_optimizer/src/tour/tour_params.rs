#[derive(Clone, Debug)]
pub struct TourParams {
    /// Largest stop count solved by exhaustive permutation search. 7 stops
    /// is 5040 tour evaluations, still comfortably interactive on a client
    /// device; 8 would be 40320.
    pub exhaustive_threshold: usize,
}

impl Default for TourParams {
    fn default() -> Self {
        Self {
            exhaustive_threshold: 7,
        }
    }
}
