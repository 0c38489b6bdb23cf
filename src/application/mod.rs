/// Application layer - Use cases, DTOs and page view models
///
/// This layer orchestrates the eol_analysis services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
pub mod view_models;
