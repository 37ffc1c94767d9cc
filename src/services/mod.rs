//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Handlers validate nothing themselves; every rule lives here.

pub mod account_service;
pub mod message_service;

use std::fmt;

/// Error type for service operations
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed input (blank/oversized text, short password, unknown author)
    Validation(String),
    /// Duplicate username at registration
    Conflict(String),
    /// Failed login credential match
    Unauthorized(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg)
            | ServiceError::Conflict(msg)
            | ServiceError::Unauthorized(msg) => write!(f, "{}", msg),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}
