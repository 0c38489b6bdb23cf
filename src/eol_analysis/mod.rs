//! Domain layer: dataset records, derived report views and their policies
pub mod domain;
pub mod policies;
pub mod services;
