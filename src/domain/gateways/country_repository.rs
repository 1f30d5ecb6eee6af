//! Country Repository Gateway
//!
//! Abstract trait defining the contract for country persistence operations.

use async_trait::async_trait;

use crate::domain::models::country::{Country, CountryId, NewCountry};
use crate::shared::errors::RepositoryError;

/// Repository trait for Country persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Find all countries in insertion order
    async fn find_all(&self) -> Result<Vec<Country>, RepositoryError>;

    /// Find a country by its ID
    async fn find_by_id(&self, id: CountryId) -> Result<Option<Country>, RepositoryError>;

    /// Insert a new country; the store assigns the ID
    async fn create(&self, country: &NewCountry) -> Result<Country, RepositoryError>;

    /// Overwrite every field of the country with the same ID
    ///
    /// Fails with `RepositoryError::NotFound` when no row has that ID and with
    /// `RepositoryError::Concurrency` when the store reports a write conflict.
    async fn update(&self, country: &Country) -> Result<Country, RepositoryError>;

    /// Delete a country. Callers check existence first.
    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError>;

    /// Check whether a country with this ID exists
    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError>;
}
