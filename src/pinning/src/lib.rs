use crate::errors::PinningError;
use crate::types::{PinJsonRequest, PinResponse, PinataMetadata};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio_util::io::ReaderStream;
use url::Url;

pub mod errors;
pub mod types;

pub use reqwest::StatusCode;

pub const PINATA_API_URL: &str = "https://api.pinata.cloud";

/// Content identifier returned by the pinning service.
pub type Cid = String;

/// Submits bytes to a remote pinning service and hands back the CID it was
/// stored under. Implementations never retry.
#[async_trait]
pub trait PinningGateway: Send + Sync {
    async fn pin_json(&self, data: &Value) -> Result<Cid, PinningError>;

    async fn pin_file(&self, path: &Path) -> Result<Cid, PinningError>;
}

#[derive(Clone)]
pub struct PinataConfiguration {
    pub api_url: String,
    pub api_key: String,
    pub secret_api_key: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for PinataConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinataConfiguration")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub struct PinataGateway {
    client: Client,
    base_url: Url,
    api_key: String,
    secret_api_key: String,
}

impl PinataGateway {
    pub fn new(config: PinataConfiguration) -> Result<Self, PinningError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        // Endpoints join relative to the base, so it must end with a slash.
        let mut base_url = Url::parse(&config.api_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(PinataGateway {
            client: builder.build()?,
            base_url,
            api_key: config.api_key,
            secret_api_key: config.secret_api_key,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_api_key)
    }

    async fn read_pin_response(response: Response) -> Result<Cid, PinningError> {
        let status = response.status();

        if status.is_success() {
            let result: PinResponse = response.json().await?;
            return Ok(result.ipfs_hash);
        }

        let error_body = response.text().await?;

        return Err(PinningError::HttpError {
            status,
            body: error_body,
        });
    }
}

#[async_trait]
impl PinningGateway for PinataGateway {
    async fn pin_json(&self, data: &Value) -> Result<Cid, PinningError> {
        let url = self
            .base_url
            .join("pinning/pinJSONToIPFS")
            .map_err(PinningError::UrlError)?;

        let request = PinJsonRequest {
            content: data,
            metadata: None,
        };

        debug!("pinning JSON document via {url}");
        let response = self
            .authorized(self.client.post(url))
            .json(&request)
            .send()
            .await?;

        Self::read_pin_response(response).await
    }

    async fn pin_file(&self, path: &Path) -> Result<Cid, PinningError> {
        let url = self
            .base_url
            .join("pinning/pinFileToIPFS")
            .map_err(PinningError::UrlError)?;

        let file_error = |source| PinningError::FileError {
            path: path.to_path_buf(),
            source,
        };
        let file = tokio::fs::File::open(path).await.map_err(file_error)?;
        let length = file.metadata().await.map_err(file_error)?.len();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let metadata = serde_json::to_string(&PinataMetadata {
            name: file_name.clone(),
        })
        .unwrap_or_default();

        let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), length)
            .file_name(file_name);
        let form = Form::new()
            .part("file", part)
            .text("pinataMetadata", metadata);

        debug!("pinning file {} ({length} bytes) via {url}", path.display());
        let response = self
            .authorized(self.client.post(url))
            .multipart(form)
            .send()
            .await?;

        Self::read_pin_response(response).await
    }
}
