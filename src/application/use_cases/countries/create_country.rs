//! Create Country Use Case
//!
//! Inserts a new country; the store assigns its ID.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::{Country, NewCountry};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new country
pub struct CreateCountryUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl CreateCountryUseCase {
    /// Create a new CreateCountryUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the insert fails.
    pub async fn execute(&self, data: NewCountry) -> Result<Country, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new country");

        let created = self.country_repository.create(&data).await?;

        tracing::info!(country_id = %created.id(), "Country created successfully");
        Ok(created)
    }
}
