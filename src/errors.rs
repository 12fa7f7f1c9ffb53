/*!
 * Error types for the subcue application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors caused by invalid configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when an unsupported subtitle format is requested
    #[error("Unknown subtitle format: {0} (expected 'srt' or 'vtt')")]
    UnknownFormat(String),

    /// Error when the maximum line width is out of range
    #[error("Invalid max line width: {0} (expected 20-100)")]
    InvalidLineWidth(usize),

    /// Error when the minimum cue duration is not a positive finite number
    #[error("Invalid minimum cue duration: {0}")]
    InvalidCueDuration(f64),
}

/// Errors that can occur while loading a transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// Error when reading the transcript source fails
    #[error("Failed to read transcript: {0}")]
    Read(String),

    /// Error when the transcript source is not valid JSON
    #[error("Failed to parse transcript JSON: {0}")]
    Parse(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from transcript loading
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for TranscriptError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
