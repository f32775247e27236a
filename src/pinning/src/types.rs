use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct PinataMetadata {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PinJsonRequest<'a> {
    #[serde(rename = "pinataContent")]
    pub content: &'a Value,
    #[serde(rename = "pinataMetadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PinataMetadata>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PinResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize")]
    pub pin_size: Option<u64>,
    #[serde(rename = "Timestamp")]
    pub timestamp: Option<String>,
}
