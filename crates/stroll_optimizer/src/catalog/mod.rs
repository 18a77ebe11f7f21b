pub mod filter_criteria;
pub mod store;
