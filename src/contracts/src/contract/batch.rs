use crate::Batch::BatchDetails;
use crate::errors::ContractsError;
use crate::utils::{ensure_success, parse_uint256};
use crate::Batch;
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use log::info;
use std::str::FromStr;

#[derive(Clone)]
pub struct BatchContract {
    provider: DynProvider,
    address: Address,
}

impl BatchContract {
    pub fn new(provider: DynProvider, contract_address: &str) -> Result<Self, ContractsError> {
        let address = Address::from_str(contract_address)?;
        return Ok(Self { provider, address });
    }

    pub async fn set_batch_details(
        &self,
        batch_id: &str,
        details: BatchDetails,
    ) -> Result<TransactionReceipt, ContractsError> {
        let contract = Batch::new(self.address, self.provider.clone());

        let receipt = contract
            .setBatchDetails(
                parse_uint256(batch_id)?,
                details.productIds,
                details.productionDate,
                details.expiryDate,
                details.location,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        let receipt = ensure_success(receipt)?;
        info!(
            "batch {batch_id} stored in transaction {}",
            receipt.transaction_hash
        );

        return Ok(receipt);
    }

    pub async fn get_batch_details(&self, batch_id: &str) -> Result<BatchDetails, ContractsError> {
        let contract = Batch::new(self.address, self.provider.clone());

        let result = contract
            .getBatchDetails(parse_uint256(batch_id)?)
            .call()
            .await?;

        return Ok(result);
    }
}
