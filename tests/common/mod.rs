//! Common test utilities for API tests
//!
//! Provides an in-memory repository for router-level tests and a
//! PostgreSQL-backed application built on a throwaway container.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use country_registry::domain::gateways::CountryRepository;
use country_registry::domain::models::country::{Country, CountryId, NewCountry};
use country_registry::infrastructure::driven_adapters::country_repository::PostgresCountryRepository;
use country_registry::infrastructure::driven_adapters::database;
use country_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use country_registry::shared::errors::RepositoryError;

/// How the next update against the in-memory store should fail
#[derive(Debug, Clone, Copy)]
pub enum InjectedConflict {
    /// Report a conflict while the row stays in place
    RowKept,
    /// Report a conflict after another writer removed the row
    RowRemoved,
}

#[derive(Default)]
struct InMemoryState {
    rows: BTreeMap<i32, Country>,
    next_id: i32,
    conflict: Option<InjectedConflict>,
}

/// In-memory CountryRepository with store-assigned sequential IDs
#[derive(Default)]
pub struct InMemoryCountryRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryCountryRepository {
    pub fn inject_conflict(&self, conflict: InjectedConflict) {
        self.state.lock().unwrap().conflict = Some(conflict);
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CountryId) -> Result<Option<Country>, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.get(&id.as_i32()).cloned())
    }

    async fn create(&self, country: &NewCountry) -> Result<Country, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let created = Country::from_new(CountryId::from(id), country.clone());
        state.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, country: &Country) -> Result<Country, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let key = country.id().as_i32();
        match state.conflict.take() {
            Some(InjectedConflict::RowKept) => {
                return Err(RepositoryError::Concurrency(format!("Country {key}")));
            }
            Some(InjectedConflict::RowRemoved) => {
                state.rows.remove(&key);
                return Err(RepositoryError::Concurrency(format!("Country {key}")));
            }
            None => {}
        }
        match state.rows.get_mut(&key) {
            Some(row) => {
                *row = country.clone();
                Ok(country.clone())
            }
            None => Err(RepositoryError::NotFound(format!("Country {key}"))),
        }
    }

    async fn delete(&self, id: CountryId) -> Result<(), RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .rows
            .remove(&id.as_i32())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Country {id}")))
    }

    async fn exists(&self, id: CountryId) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().unwrap().rows.contains_key(&id.as_i32()))
    }
}

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Send one request through the router
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Router backed by a fresh in-memory repository
pub fn in_memory_app() -> (Router, Arc<InMemoryCountryRepository>) {
    let repository = Arc::new(InMemoryCountryRepository::default());
    let router = build_router(AppState::new(repository.clone()));
    (router, repository)
}

/// Test application context backed by PostgreSQL
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(PostgresCountryRepository::new(pool.clone()));
        let router = build_router(AppState::new(repository));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Clear all data and reset the ID sequence
    pub async fn clear_database(&self) {
        sqlx::query("TRUNCATE TABLE countries RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .expect("Failed to truncate countries table");
    }
}

/// Helper struct for creating country request bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl CreateCountryRequest {
    pub fn new(name: &str, short_name: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.map(str::to_string),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Helper struct for update request bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryRequest {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
}

impl UpdateCountryRequest {
    pub fn new(id: i32, name: &str, short_name: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            short_name: short_name.map(str::to_string),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Country response structure for deserialization
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
