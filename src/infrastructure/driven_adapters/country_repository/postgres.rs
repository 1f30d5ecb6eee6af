//! PostgreSQL Country Repository Implementation
//!
//! Implements the CountryRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::CountryRepository;
use crate::domain::models::country::{Country, CountryId, NewCountry};
use crate::shared::errors::RepositoryError;

/// Database row representation for the countries table
#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    id: i32,
    name: String,
    short_name: Option<String>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country::new(CountryId::from(row.id), row.name, row.short_name)
    }
}

/// PostgreSQL implementation of CountryRepository
pub struct PostgresCountryRepository {
    pool: PgPool,
}

impl PostgresCountryRepository {
    /// Create a new PostgresCountryRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PostgresCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, RepositoryError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name, short_name
            FROM countries
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn find_by_id(&self, id: CountryId) -> Result<Option<Country>, RepositoryError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, name, short_name
            FROM countries
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Country::from))
    }

    async fn create(&self, country: &NewCountry) -> Result<Country, RepositoryError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            INSERT INTO countries (name, short_name)
            VALUES ($1, $2)
            RETURNING id, name, short_name
            "#,
        )
        .bind(&country.name)
        .bind(country.short_name.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "Country"))?;

        Ok(row.into())
    }

    async fn update(&self, country: &Country) -> Result<Country, RepositoryError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            UPDATE countries
            SET name = $2,
                short_name = $3
            WHERE id = $1
            RETURNING id, name, short_name
            "#,
        )
        .bind(country.id().as_i32())
        .bind(country.name())
        .bind(country.short_name())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &format!("Country {}", country.id())))?;

        row.map(Country::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("Country {}", country.id())))
    }

    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM countries
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &format!("Country {id}")))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Country {id}")));
        }
        Ok(())
    }

    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM countries WHERE id = $1
            )
            "#,
        )
        .bind(id.as_i32())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
