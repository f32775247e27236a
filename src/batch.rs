use crate::DppError;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use contracts::Batch::BatchDetails;
use contracts::ContractsError;
use contracts::contract::batch::BatchContract;
use contracts::utils::parse_uint256_list;
use serde::{Deserialize, Serialize};

/// A production batch as stored by the `Batch` contract. Product ids are
/// decimal strings, the same ids the passport contract is keyed by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchRecord {
    pub product_ids: Vec<String>,
    pub production_date: String,
    pub expiry_date: String,
    pub location: String,
}

impl BatchRecord {
    fn into_contract(self) -> Result<BatchDetails, ContractsError> {
        return Ok(BatchDetails {
            productIds: parse_uint256_list(&self.product_ids)?,
            productionDate: self.production_date,
            expiryDate: self.expiry_date,
            location: self.location,
        });
    }
}

impl From<BatchDetails> for BatchRecord {
    fn from(details: BatchDetails) -> Self {
        Self {
            product_ids: details
                .productIds
                .iter()
                .map(|product_id| product_id.to_string())
                .collect(),
            production_date: details.productionDate,
            expiry_date: details.expiryDate,
            location: details.location,
        }
    }
}

#[derive(Clone)]
pub struct BatchClient {
    contract: Option<BatchContract>,
}

impl BatchClient {
    pub fn new(provider: DynProvider, batch_address: Option<&str>) -> Result<Self, DppError> {
        let contract = match batch_address {
            Some(address) => Some(BatchContract::new(provider, address)?),
            None => None,
        };

        return Ok(Self { contract });
    }

    fn contract(&self) -> Result<&BatchContract, DppError> {
        self.contract
            .as_ref()
            .ok_or(DppError::ContractError(ContractsError::MissingContractAddress("Batch")))
    }

    pub async fn set_batch(
        &self,
        batch_id: &str,
        record: &BatchRecord,
    ) -> Result<TransactionReceipt, DppError> {
        let contract = self.contract()?;
        let details = record.clone().into_contract()?;

        let receipt = contract.set_batch_details(batch_id, details).await?;
        return Ok(receipt);
    }

    pub async fn get_batch(&self, batch_id: &str) -> Result<BatchRecord, DppError> {
        let details = self.contract()?.get_batch_details(batch_id).await?;
        return Ok(details.into());
    }
}
