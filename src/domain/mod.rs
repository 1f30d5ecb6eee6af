//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::country_repository::CountryRepository;
pub use models::country::{Country, CountryId, NewCountry};
