//! HTTP Handlers

pub mod countries;
