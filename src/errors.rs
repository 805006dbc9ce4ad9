//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Referential integrity
    // ---------------------------
    #[error("Cannot delete {entity} {id}: {donations} donation(s) reference it")]
    DependencyExists {
        entity: &'static str,
        id: i64,
        donations: i64,
    },

    #[error("No {entity} found with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date-time format: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDateTime(String),

    #[error("Invalid amount: {0} (must not be negative)")]
    InvalidAmount(f64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
