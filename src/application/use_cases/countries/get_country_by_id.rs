//! Get Country By ID Use Case
//!
//! Retrieves a single country by its ID.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::{Country, CountryId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a country by ID
pub struct GetCountryByIdUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl GetCountryByIdUseCase {
    /// Create a new GetCountryByIdUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the country doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: CountryId) -> Result<Country, UseCaseError> {
        tracing::debug!(country_id = %id, "Getting country by ID");

        let country = self.country_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(country_id = %id, "Country not found");
            UseCaseError::country_not_found(id)
        })?;

        Ok(country)
    }
}
