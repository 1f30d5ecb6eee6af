//! REST API Module
//!
//! Contains HTTP handlers, DTOs, mapping functions, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod mapping;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::countries::{
    CreateCountryUseCase, DeleteCountryUseCase, GetCountryByIdUseCase, ListCountriesUseCase,
    UpdateCountryUseCase,
};
use crate::domain::gateways::CountryRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_countries_use_case: Arc<ListCountriesUseCase>,
    pub get_country_by_id_use_case: Arc<GetCountryByIdUseCase>,
    pub create_country_use_case: Arc<CreateCountryUseCase>,
    pub update_country_use_case: Arc<UpdateCountryUseCase>,
    pub delete_country_use_case: Arc<DeleteCountryUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(country_repository: Arc<dyn CountryRepository>) -> Self {
        Self {
            list_countries_use_case: Arc::new(ListCountriesUseCase::new(country_repository.clone())),
            get_country_by_id_use_case: Arc::new(GetCountryByIdUseCase::new(country_repository.clone())),
            create_country_use_case: Arc::new(CreateCountryUseCase::new(country_repository.clone())),
            update_country_use_case: Arc::new(UpdateCountryUseCase::new(country_repository.clone())),
            delete_country_use_case: Arc::new(DeleteCountryUseCase::new(country_repository)),
        }
    }
}

/// Build the application router with tracing, CORS, and request IDs
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(handlers::countries::COUNTRIES_PATH, handlers::countries::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
