pub mod coordinate;
pub mod position;
pub mod zoom;
