//! HTTP client module
//!
//! Provides the API client and request credentials.
//!
//! # Features
//!
//! - **Base URL joining**: Request paths are relative to the configured root
//! - **Credentials**: Bearer token or custom header on every request
//! - **Error mapping**: Statuses of 400 and above carry the body in the error
//! - **Form-style writes**: POST parameters ride in the query string

mod client;
mod credential;

pub use client::{ApiClient, ApiConfig, ApiConfigBuilder};
pub use credential::Credential;

#[cfg(test)]
mod tests;
