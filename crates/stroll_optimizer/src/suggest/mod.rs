pub mod scorer;
pub mod suggest_params;
