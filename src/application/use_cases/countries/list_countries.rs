//! List Countries Use Case
//!
//! Retrieves every country in insertion order.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::Country;
use crate::shared::errors::UseCaseError;

/// Use case for listing all countries
pub struct ListCountriesUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl ListCountriesUseCase {
    /// Create a new ListCountriesUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Country>, UseCaseError> {
        tracing::debug!("Listing all countries");

        let countries = self.country_repository.find_all().await?;

        tracing::debug!(count = countries.len(), "Found countries");
        Ok(countries)
    }
}
