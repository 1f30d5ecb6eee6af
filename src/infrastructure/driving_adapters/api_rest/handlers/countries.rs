//! Country Handlers
//!
//! HTTP handlers for country CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::country::{Country, CountryId};
use crate::infrastructure::driving_adapters::api_rest::dto::country::{
    CountryDto, CreateCountryDto, UpdateCountryDto,
};
use crate::infrastructure::driving_adapters::api_rest::mapping;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Path the country router is mounted under
pub const COUNTRIES_PATH: &str = "/api/countries";

/// Create the router for country endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_countries).post(create_country))
        .route(
            "/:id",
            get(get_country_by_id).put(update_country).delete(delete_country),
        )
}

fn parse_id(raw: &str) -> Result<CountryId, ApiError> {
    Ok(CountryId::try_from(raw)?)
}

/// GET /api/countries - List all countries
///
/// # Responses
///
/// * 200 OK - Every country, in insertion order (possibly empty)
#[axum::debug_handler]
async fn list_countries(State(state): State<AppState>) -> Result<Json<Vec<CountryDto>>, ApiError> {
    let countries = state.list_countries_use_case.execute().await?;

    Ok(Json(countries.iter().map(mapping::to_response).collect()))
}

/// GET /api/countries/:id - Get a country by ID
///
/// # Responses
///
/// * 200 OK - Country found
/// * 400 Bad Request - ID is not an integer
/// * 404 Not Found - Country does not exist
#[axum::debug_handler]
async fn get_country_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CountryDto>, ApiError> {
    let country_id = parse_id(&id)?;

    let country = state.get_country_by_id_use_case.execute(country_id).await?;

    Ok(Json(mapping::to_response(&country)))
}

/// POST /api/countries - Create a new country
///
/// # Responses
///
/// * 201 Created - Country created; `Location` points at the new resource
/// * 400 Bad Request - Missing or blank name, or malformed body
#[axum::debug_handler]
async fn create_country(
    State(state): State<AppState>,
    payload: Result<Json<CreateCountryDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CountryDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let country = state
        .create_country_use_case
        .execute(mapping::to_entity(dto))
        .await?;

    let location = format!("{COUNTRIES_PATH}/{}", country.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(mapping::to_response(&country)),
    ))
}

/// PUT /api/countries/:id - Full update of a country
///
/// # Responses
///
/// * 204 No Content - Country updated
/// * 400 Bad Request - Path and body IDs differ, or invalid body
/// * 404 Not Found - Country does not exist
#[axum::debug_handler]
async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCountryDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let country_id = parse_id(&id)?;
    let Json(dto) = payload?;
    dto.validate()?;

    state
        .update_country_use_case
        .execute(country_id, Country::from(dto))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/countries/:id - Delete a country
///
/// # Responses
///
/// * 204 No Content - Country deleted
/// * 404 Not Found - Country does not exist
#[axum::debug_handler]
async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let country_id = parse_id(&id)?;

    state.delete_country_use_case.execute(country_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
