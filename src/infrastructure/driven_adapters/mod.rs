//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod country_repository;
pub mod database;

pub use config::AppConfig;
pub use country_repository::PostgresCountryRepository;
