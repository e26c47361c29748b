//! Error types for the core module.

use std::path::PathBuf;

use thiserror::Error;

use crate::roster::StudentId;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during core operations.
///
/// Stack and battle operations are total and never produce one of these.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown character kind: {0} (expected elf, giant or wizard)")]
    UnknownCharacterKind(String),

    #[error("Invalid name format: {0:?} (expected \"Last, First\")")]
    InvalidName(String),

    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Invalid PIN for savings account")]
    InvalidPin,

    #[error("Check for {amount:.2} has already been cashed")]
    CheckAlreadyCashed { amount: f64 },

    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
