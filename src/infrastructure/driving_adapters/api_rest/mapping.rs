//! Entity/DTO Mapping
//!
//! Field-by-field conversions between the Country entity and its wire shapes:
//! `name` maps to `name` and `short_name` to `shortName` in both directions.

use crate::domain::models::country::{Country, NewCountry};

use super::dto::{CountryDto, CreateCountryDto};

/// Convert a creation DTO into a not-yet-persisted country
#[must_use]
pub fn to_entity(dto: CreateCountryDto) -> NewCountry {
    NewCountry {
        name: dto.name,
        short_name: dto.short_name,
    }
}

/// Convert a country back into its creation shape, dropping the identifier
#[must_use]
pub fn to_dto(country: &Country) -> CreateCountryDto {
    CreateCountryDto {
        name: country.name().to_string(),
        short_name: country.short_name().map(str::to_string),
    }
}

/// Render a country for a response body
#[must_use]
pub fn to_response(country: &Country) -> CountryDto {
    CountryDto {
        id: country.id().as_i32(),
        name: country.name().to_string(),
        short_name: country.short_name().map(str::to_string),
    }
}
