//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers
//! - DTOs and entity mapping for request/response

pub mod api_rest;
