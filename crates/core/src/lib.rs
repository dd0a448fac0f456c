pub mod availability;
pub mod errors;
pub mod geo;
pub mod models;
