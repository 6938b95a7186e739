//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
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
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid entry: {0} (expected HH:MM-HH:MM, HH:MM- or -HH:MM)")]
    InvalidEntry(String),

    #[error("Invalid target: {0} (expected a non-negative number of hours)")]
    InvalidTarget(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid interval {start}..{end}: {reason}")]
    InvalidInterval {
        start: u32,
        end: u32,
        reason: &'static str,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),
}

pub type AppResult<T> = Result<T, AppError>;
