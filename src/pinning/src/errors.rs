use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinningError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Error response ({status}): {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("Failed to read file {}: {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
