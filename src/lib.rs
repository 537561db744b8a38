//! The `taskpad` library crate.
//!
//! This crate contains the business logic, domain models, authentication
//! mechanisms, persistence layer, routing configuration, and error handling
//! for the Taskpad application. It is used by the main binary (`main.rs`) to
//! construct and run the application.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
