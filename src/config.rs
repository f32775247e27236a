//! Process-wide configuration, read once at start-up.
//!
//! `DppConfiguration::from_env` loads a `.env` file (if any) the first time it
//! runs and then reads plain environment variables.

use crate::DppError;
use crate::staging::{DEFAULT_MAX_CONCURRENT_UPLOADS, StagingOptions};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use pinning::{PINATA_API_URL, PinataConfiguration};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PRODUCT_DETAILS_FILE: &str = "product-details.json";

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv();
});

#[derive(Debug, Clone)]
pub struct DppContractsConfiguration {
    pub json_rpc_url: String,
    pub product_passport_address: Option<String>,
    pub product_details_address: Option<String>,
    pub batch_address: Option<String>,
}

#[derive(Clone)]
pub struct DppUserConfiguration {
    pub private_key: String,
}

impl fmt::Debug for DppUserConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DppUserConfiguration")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct DppConfiguration {
    pub pinata_configuration: PinataConfiguration,
    pub contracts_configuration: DppContractsConfiguration,
    pub user_configuration: DppUserConfiguration,
    pub staging_options: StagingOptions,
    /// Descriptor used when callers don't name one explicitly.
    pub product_details_file: PathBuf,
}

impl DppConfiguration {
    pub fn from_env() -> Result<Self, DppError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| optional(key).ok_or_else(|| DppError::MissingConfig(key.to_string()));

        let max_concurrent_uploads = match optional("MAX_CONCURRENT_UPLOADS") {
            Some(value) => parse_positive("MAX_CONCURRENT_UPLOADS", &value)?,
            None => DEFAULT_MAX_CONCURRENT_UPLOADS,
        };

        let timeout = match optional("PINATA_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(
                parse_positive("PINATA_TIMEOUT_SECS", &value)? as u64,
            )),
            None => None,
        };

        return Ok(Self {
            pinata_configuration: PinataConfiguration {
                api_url: optional("PINATA_API_URL").unwrap_or_else(|| PINATA_API_URL.to_string()),
                api_key: required("PINATA_API_KEY")?,
                secret_api_key: required("PINATA_SECRET_API_KEY")?,
                timeout,
            },
            contracts_configuration: DppContractsConfiguration {
                json_rpc_url: required("PROVIDER_URL")?,
                product_passport_address: optional("PRODUCT_PASSPORT_ADDRESS"),
                product_details_address: optional("PRODUCT_DETAILS_ADDRESS"),
                batch_address: optional("BATCH_CONTRACT_ADDRESS"),
            },
            user_configuration: DppUserConfiguration {
                private_key: required("PRIVATE_KEY")?,
            },
            staging_options: StagingOptions {
                max_concurrent_uploads,
            },
            product_details_file: optional("PRODUCT_DETAILS_FILE")
                .unwrap_or_else(|| DEFAULT_PRODUCT_DETAILS_FILE.to_string())
                .into(),
        });
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize, DppError> {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(DppError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
