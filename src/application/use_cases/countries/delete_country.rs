//! Delete Country Use Case
//!
//! Permanently removes a country after confirming it exists.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::CountryId;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for deleting a country
pub struct DeleteCountryUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl DeleteCountryUseCase {
    /// Create a new DeleteCountryUseCase
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
    pub async fn execute(&self, id: CountryId) -> Result<(), UseCaseError> {
        tracing::info!(country_id = %id, "Deleting country");

        if self.country_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(country_id = %id, "Country not found for deletion");
            return Err(UseCaseError::country_not_found(id));
        }

        match self.country_repository.delete(id).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => {
                tracing::warn!(country_id = %id, "Country removed before deletion");
                return Err(UseCaseError::country_not_found(id));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(country_id = %id, "Country deleted successfully");
        Ok(())
    }
}
