//! Country DTOs
//!
//! Data transfer objects for country API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::country::{Country, CountryId};

/// Rejects names that are empty once surrounding whitespace is removed
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("name is required".into());
        return Err(error);
    }
    Ok(())
}

/// Rejects text containing control characters, which the store cannot hold
fn validate_no_control_chars(value: &str) -> Result<(), validator::ValidationError> {
    if value.chars().any(char::is_control) {
        let mut error = validator::ValidationError::new("control_chars");
        error.message = Some("must not contain control characters".into());
        return Err(error);
    }
    Ok(())
}

/// DTO for creating a new country
///
/// A missing `name` deserializes as an empty string so that it is reported as
/// a validation error rather than a body parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryDto {
    #[serde(default)]
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(custom(function = "validate_no_control_chars"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_no_control_chars"))]
    pub short_name: Option<String>,
}

/// DTO for full country update (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryDto {
    pub id: i32,

    #[serde(default)]
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(custom(function = "validate_no_control_chars"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_no_control_chars"))]
    pub short_name: Option<String>,
}

impl From<UpdateCountryDto> for Country {
    fn from(dto: UpdateCountryDto) -> Self {
        Country::new(CountryId::from(dto.id), dto.name, dto.short_name)
    }
}

/// Country response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Canada").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_control_characters_fail_validation() {
        let dto: CreateCountryDto =
            serde_json::from_str(r#"{"name":"Can\u0000ada","shortName":"CA"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let dto: UpdateCountryDto =
            serde_json::from_str(r#"{"id":1,"name":"Canada","shortName":"C\nA"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("short_name"));
    }

    #[test]
    fn test_create_dto_missing_name_fails_validation() {
        let dto: CreateCountryDto = serde_json::from_str(r#"{"shortName":"CA"}"#).unwrap();
        assert_eq!(dto.name, "");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_short_name_is_optional() {
        let dto: CreateCountryDto = serde_json::from_str(r#"{"name":"Canada"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.short_name, None);
    }

    #[test]
    fn test_create_dto_rejects_overlong_name() {
        let dto = CreateCountryDto {
            name: "x".repeat(101),
            short_name: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_requires_id() {
        let result: Result<UpdateCountryDto, _> = serde_json::from_str(r#"{"name":"Canada"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_dto_into_country() {
        let dto: UpdateCountryDto =
            serde_json::from_str(r#"{"id":1,"name":"Canada","shortName":"CAN"}"#).unwrap();
        let country = Country::from(dto);

        assert_eq!(country.id(), CountryId::from(1));
        assert_eq!(country.short_name(), Some("CAN"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let dto = CountryDto {
            id: 1,
            name: "Canada".to_string(),
            short_name: Some("CA".to_string()),
        };
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json, serde_json::json!({"id": 1, "name": "Canada", "shortName": "CA"}));
    }
}
