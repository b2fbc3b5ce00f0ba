//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The form was submitted with empty fields; nothing was sent
    #[error("Missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

pub type ClientResult<T> = Result<T, ClientError>;
