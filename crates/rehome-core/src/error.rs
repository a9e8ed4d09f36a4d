//! Error types for the rehome libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, service, authentication, and input validation errors.

use thiserror::Error;

/// The unified error type for rehome operations.
///
/// This error type covers all possible failure modes in the libraries,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success responses from the adoption service.
    #[error("service error: {0}")]
    Api(#[from] ApiError),

    /// Authentication errors.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (empty credentials, malformed URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the service.
///
/// The service's error bodies are not interpreted; every non-2xx status is
/// reported uniformly by its status code alone.
#[derive(Debug, Error)]
#[error("service returned HTTP {status}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
}

impl ApiError {
    /// Create a new API error for a status code.
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login succeeded but the service did not establish a session cookie.
    #[error("no session cookie in login response")]
    MissingCookie,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A required credential field was empty after trimming.
    #[error("missing {field}: both name and email are required")]
    Credentials { field: &'static str },

    /// Invalid service URL format.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Dog identifiers are opaque but must not be empty.
    #[error("dog id must not be empty")]
    EmptyDogId,

    /// Unknown sort field name.
    #[error("invalid sort field '{value}' (expected breed, name, or age)")]
    SortField { value: String },

    /// Unknown sort direction name.
    #[error("invalid sort direction '{value}' (expected asc or desc)")]
    SortDirection { value: String },

    /// A match was requested with no favorites selected.
    #[error("no favorites selected")]
    NoFavorites,

    /// The record-fetch endpoint requires at least one id.
    #[error("record fetch requires at least one id")]
    EmptyIdList,
}
