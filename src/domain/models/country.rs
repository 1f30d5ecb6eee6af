//! Country Domain Model
//!
//! Represents a country in the registry.

use std::num::ParseIntError;

/// Newtype wrapper for the store-assigned Country ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryId(i32);

impl CountryId {
    /// Get the underlying integer
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CountryId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for CountryId {
    type Error = ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.parse()?))
    }
}

/// A country that has not been persisted yet; the store assigns its ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub name: String,
    pub short_name: Option<String>,
}

/// Country domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    id: CountryId,
    name: String,
    short_name: Option<String>,
}

impl Country {
    /// Build a Country from its stored fields
    #[must_use]
    pub fn new(id: CountryId, name: String, short_name: Option<String>) -> Self {
        Self { id, name, short_name }
    }

    /// Attach a store-assigned ID to a pending country
    #[must_use]
    pub fn from_new(id: CountryId, data: NewCountry) -> Self {
        Self {
            id,
            name: data.name,
            short_name: data.short_name,
        }
    }

    #[must_use]
    pub fn id(&self) -> CountryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }
}
