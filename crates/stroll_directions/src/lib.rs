pub mod cache;
pub mod directions_result;
pub mod provider;
pub mod travel_mode;
