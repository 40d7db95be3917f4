//! Error types shared across the crate.

use std::io;

use thiserror::Error;

/// Errors from the remote trivia service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("trivia service returned no questions")]
    EmptyResults,
    #[error("trivia service responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("malformed trivia service payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Error type for running the quiz application.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Terminal IO failed while the quiz was running.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
