use crate::DppError;
use crate::batch::BatchClient;
use crate::config::DppConfiguration;
use crate::descriptor::ResolvedProductDescriptor;
use crate::passport::ProductPassportClient;
use crate::staging::DocumentStager;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionReceipt;
use contracts::ContractsError;
use contracts::provider::{ConnectedSigner, connect_signer};
use log::info;
use pinning::{PinataGateway, PinningGateway};
use std::path::Path;
use std::sync::Arc;

/// Entry point of the SDK. Owns the pinning gateway, the signing provider
/// and the contract clients for the lifetime of the process.
pub struct DigitalProductPassport {
    config: DppConfiguration,
    stager: DocumentStager<dyn PinningGateway>,
    passport: ProductPassportClient,
    batch: BatchClient,
    signer: ConnectedSigner,
}

impl DigitalProductPassport {
    pub fn new(config: DppConfiguration) -> Result<Self, DppError> {
        let gateway = PinataGateway::new(config.pinata_configuration.clone())?;
        Self::with_gateway(config, Arc::new(gateway))
    }

    /// Same as [`DigitalProductPassport::new`] but pins through `gateway`
    /// instead of Pinata.
    pub fn with_gateway(
        config: DppConfiguration,
        gateway: Arc<dyn PinningGateway>,
    ) -> Result<Self, DppError> {
        let signer = connect_signer(
            &config.contracts_configuration.json_rpc_url,
            &config.user_configuration.private_key,
        )?;

        Self::from_parts(config, gateway, signer)
    }

    /// Builds the SDK around an already connected signer. The RPC url and
    /// private key in `config` are not used.
    pub fn from_parts(
        config: DppConfiguration,
        gateway: Arc<dyn PinningGateway>,
        signer: ConnectedSigner,
    ) -> Result<Self, DppError> {
        let contracts_config = &config.contracts_configuration;
        let passport = ProductPassportClient::new(signer.provider.clone(), contracts_config)?;
        let batch = BatchClient::new(
            signer.provider.clone(),
            contracts_config.batch_address.as_deref(),
        )?;
        let stager = DocumentStager::with_options(gateway, config.staging_options.clone());

        return Ok(Self {
            config,
            stager,
            passport,
            batch,
            signer,
        });
    }

    pub fn passport(&self) -> &ProductPassportClient {
        &self.passport
    }

    pub fn batch(&self) -> &BatchClient {
        &self.batch
    }

    pub fn stager(&self) -> &DocumentStager<dyn PinningGateway> {
        &self.stager
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address
    }

    /// Stages the descriptor at `descriptor_path`, falling back to the
    /// configured product details file.
    pub async fn stage_documents(
        &self,
        descriptor_path: Option<&Path>,
    ) -> Result<ResolvedProductDescriptor, DppError> {
        let path = descriptor_path.unwrap_or(self.config.product_details_file.as_path());
        self.stager.stage_file(path).await
    }

    /// Stages a product's documents and writes the resulting passport.
    ///
    /// If staging fails nothing is written to the ledger, but some documents
    /// may already be pinned.
    pub async fn publish(
        &self,
        descriptor_path: Option<&Path>,
    ) -> Result<(ResolvedProductDescriptor, TransactionReceipt), DppError> {
        let resolved = self.stage_documents(descriptor_path).await?;
        let receipt = self.passport.submit(&resolved).await?;
        info!(
            "passport for product {} published in transaction {}",
            resolved.product_id(),
            receipt.transaction_hash
        );

        return Ok((resolved, receipt));
    }

    /// Fails with `InsufficientFunds` when the signer holds less than
    /// `required` wei.
    pub async fn check_funds(&self, required: U256) -> Result<(), DppError> {
        let balance = self
            .signer
            .provider
            .get_balance(self.signer.address)
            .await
            .map_err(ContractsError::from)?;

        if balance < required {
            return Err(DppError::InsufficientFunds { balance, required });
        }

        return Ok(());
    }
}
