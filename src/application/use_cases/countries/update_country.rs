//! Update Country Use Case (PUT)
//!
//! Overwrites every field of an existing country.

use std::sync::Arc;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::{Country, CountryId};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for full country update (PUT)
pub struct UpdateCountryUseCase {
    country_repository: Arc<dyn CountryRepository>,
}

impl UpdateCountryUseCase {
    /// Create a new UpdateCountryUseCase
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self { country_repository }
    }

    /// Execute the use case
    ///
    /// `id` is the identifier addressed by the request; it must match the
    /// identifier carried by `country`.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the two identifiers differ.
    /// Returns `UseCaseError::NotFound` if the country doesn't exist, including
    /// when a concurrent writer removed it.
    /// Returns `UseCaseError::Repository` if there's a database error or a
    /// concurrent modification on a row that still exists.
    pub async fn execute(&self, id: CountryId, country: Country) -> Result<Country, UseCaseError> {
        if id != country.id() {
            tracing::warn!(country_id = %id, body_id = %country.id(), "Path and body ids differ");
            return Err(UseCaseError::Validation(vec![format!(
                "id: path id {} does not match body id {}",
                id,
                country.id()
            )]));
        }

        tracing::info!(country_id = %id, "Updating country");

        match self.country_repository.update(&country).await {
            Ok(updated) => {
                tracing::info!(country_id = %id, "Country updated successfully");
                Ok(updated)
            }
            Err(RepositoryError::NotFound(_)) => {
                tracing::warn!(country_id = %id, "Country not found for update");
                Err(UseCaseError::country_not_found(id))
            }
            Err(RepositoryError::Concurrency(msg)) => {
                if self.country_repository.exists(id).await? {
                    tracing::error!(country_id = %id, "Concurrent modification on existing country");
                    Err(RepositoryError::Concurrency(msg).into())
                } else {
                    tracing::warn!(country_id = %id, "Country removed during update");
                    Err(UseCaseError::country_not_found(id))
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}
