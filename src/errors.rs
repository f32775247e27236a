use crate::staging::UploadFailure;
use alloy::primitives::U256;
use contracts::errors::ContractsError;
use pinning::errors::PinningError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DppError {
    #[error("Error reading config file {}: {source}", .path.display())]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing configuration value: {0}")]
    MissingConfig(String),
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
    #[error("Error uploading JSON to Pinata: {0}")]
    MetadataUploadError(#[source] PinningError),
    /// At least one document failed to pin. `path` and `source` describe the
    /// first failure in input order; every later one is kept alongside.
    #[error("Error uploading file {path} to Pinata: {source}")]
    DocumentUploadError {
        path: String,
        #[source]
        source: PinningError,
        additional_failures: Vec<UploadFailure>,
    },
    #[error("Pinning service error: {0}")]
    PinningError(#[from] PinningError),
    #[error("Contract error: {0}")]
    ContractError(#[from] ContractsError),
    #[error("Insufficient funds: balance {balance} wei is below the required {required} wei")]
    InsufficientFunds { balance: U256, required: U256 },
}
