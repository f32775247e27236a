use crate::DppError;
use crate::utils::read_json_file;
use pinning::Cid;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// A product whose documents still live on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalProductDescriptor {
    #[serde(rename = "productId", deserialize_with = "product_id_from_json")]
    pub product_id: String,
    pub description: String,
    #[serde(rename = "manuals", default)]
    pub manual_paths: Vec<String>,
    #[serde(rename = "specifications", default)]
    pub specification_paths: Vec<String>,
    #[serde(rename = "jsonConfigPath")]
    pub metadata_file_path: String,
}

impl LocalProductDescriptor {
    /// Loads a descriptor file (`productId`, `description`, `manuals`,
    /// `specifications`, `jsonConfigPath`).
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DppError> {
        read_json_file(path.as_ref()).await
    }
}

/// Descriptor whose document references have all been replaced by CIDs.
/// Only the staging pipeline builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProductDescriptor {
    #[serde(rename = "productId")]
    product_id: String,
    description: String,
    #[serde(rename = "manualCids")]
    manual_cids: Vec<Cid>,
    #[serde(rename = "specificationCids")]
    specification_cids: Vec<Cid>,
    #[serde(rename = "metadataCid")]
    metadata_cid: Cid,
}

impl ResolvedProductDescriptor {
    pub(crate) fn new(
        product_id: String,
        description: String,
        manual_cids: Vec<Cid>,
        specification_cids: Vec<Cid>,
        metadata_cid: Cid,
    ) -> Self {
        Self {
            product_id,
            description,
            manual_cids,
            specification_cids,
            metadata_cid,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn manual_cids(&self) -> &[Cid] {
        &self.manual_cids
    }

    pub fn specification_cids(&self) -> &[Cid] {
        &self.specification_cids
    }

    pub fn metadata_cid(&self) -> &str {
        &self.metadata_cid
    }
}

// Descriptor files in the wild carry the id either as a string or a number.
fn product_id_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!(
            "productId must be a string or a number, got {other}"
        ))),
    }
}
