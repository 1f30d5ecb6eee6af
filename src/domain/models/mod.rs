//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod country;

pub use country::{Country, CountryId, NewCountry};
