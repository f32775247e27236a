use crate::DppError;
use crate::descriptor::{LocalProductDescriptor, ResolvedProductDescriptor};
use crate::utils::read_json_file;
use futures::StreamExt;
use futures::stream;
use log::{info, warn};
use pinning::errors::PinningError;
use pinning::{Cid, PinningGateway};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_MAX_CONCURRENT_UPLOADS: usize = 4;

#[derive(Debug, Clone)]
pub struct StagingOptions {
    /// Upper bound on file uploads in flight within one document list.
    pub max_concurrent_uploads: usize,
}

impl Default for StagingOptions {
    fn default() -> Self {
        Self {
            max_concurrent_uploads: DEFAULT_MAX_CONCURRENT_UPLOADS,
        }
    }
}

#[derive(Debug)]
pub struct UploadFailure {
    pub path: String,
    pub error: PinningError,
}

#[derive(Debug)]
pub enum UploadOutcome {
    Pinned { path: String, cid: Cid },
    Failed(UploadFailure),
}

/// Resolves a product's local documents into CIDs through a pinning gateway.
///
/// Metadata is pinned first and gates everything else. Manuals are then
/// pinned, followed by specifications; uploads inside one list may overlap,
/// but results always come back in input order. A failed file does not stop
/// its siblings, yet any failure fails the whole call. Pins created before
/// the failure are not rolled back.
pub struct DocumentStager<G: PinningGateway + ?Sized> {
    gateway: Arc<G>,
    options: StagingOptions,
}

impl<G: PinningGateway + ?Sized> DocumentStager<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_options(gateway, StagingOptions::default())
    }

    pub fn with_options(gateway: Arc<G>, options: StagingOptions) -> Self {
        Self { gateway, options }
    }

    pub async fn stage(
        &self,
        descriptor: LocalProductDescriptor,
    ) -> Result<ResolvedProductDescriptor, DppError> {
        let LocalProductDescriptor {
            product_id,
            description,
            manual_paths,
            specification_paths,
            metadata_file_path,
        } = descriptor;

        let metadata: Value = read_json_file(Path::new(&metadata_file_path)).await?;

        let metadata_cid = self
            .gateway
            .pin_json(&metadata)
            .await
            .map_err(DppError::MetadataUploadError)?;
        info!("metadata for product {product_id} pinned with CID {metadata_cid}");

        let manual_outcomes = self.pin_files(&manual_paths).await;
        let specification_outcomes = self.pin_files(&specification_paths).await;

        let mut failures = Vec::new();
        let manual_cids = split_outcomes(manual_outcomes, &mut failures);
        let specification_cids = split_outcomes(specification_outcomes, &mut failures);

        let mut failures = failures.into_iter();
        if let Some(first) = failures.next() {
            return Err(DppError::DocumentUploadError {
                path: first.path,
                source: first.error,
                additional_failures: failures.collect(),
            });
        }

        let resolved = ResolvedProductDescriptor::new(
            product_id,
            description,
            manual_cids,
            specification_cids,
            metadata_cid,
        );
        info!(
            "product {} staged: {} manuals, {} specifications",
            resolved.product_id(),
            resolved.manual_cids().len(),
            resolved.specification_cids().len()
        );

        return Ok(resolved);
    }

    /// Loads the descriptor file at `descriptor_path` and stages it.
    pub async fn stage_file(
        &self,
        descriptor_path: impl AsRef<Path>,
    ) -> Result<ResolvedProductDescriptor, DppError> {
        let descriptor = LocalProductDescriptor::load(descriptor_path).await?;
        self.stage(descriptor).await
    }

    async fn pin_files(&self, paths: &[String]) -> Vec<UploadOutcome> {
        stream::iter(paths.iter().cloned())
            .map(|path| async move {
                match self.gateway.pin_file(Path::new(&path)).await {
                    Ok(cid) => {
                        info!("file {path} pinned with CID {cid}");
                        UploadOutcome::Pinned { path, cid }
                    }
                    Err(error) => {
                        warn!("failed to upload file {path}: {error}");
                        UploadOutcome::Failed(UploadFailure { path, error })
                    }
                }
            })
            .buffered(self.options.max_concurrent_uploads.max(1))
            .collect()
            .await
    }
}

fn split_outcomes(outcomes: Vec<UploadOutcome>, failures: &mut Vec<UploadFailure>) -> Vec<Cid> {
    let mut cids = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            UploadOutcome::Pinned { cid, .. } => cids.push(cid),
            UploadOutcome::Failed(failure) => failures.push(failure),
        }
    }
    cids
}
