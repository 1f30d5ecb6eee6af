//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod country;

pub use country::{CountryDto, CreateCountryDto, UpdateCountryDto};
