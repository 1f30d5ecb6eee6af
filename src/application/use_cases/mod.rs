//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod countries;

pub use countries::{
    CreateCountryUseCase, DeleteCountryUseCase, GetCountryByIdUseCase, ListCountriesUseCase,
    UpdateCountryUseCase,
};
