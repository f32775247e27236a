use crate::ProductPassport;
use crate::ProductPassport::{Passport, ProductData, createProductPassportCall};
use crate::errors::ContractsError;
use crate::utils::{ensure_success, parse_uint256};
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use log::info;
use std::str::FromStr;

#[derive(Clone)]
pub struct ProductPassportContract {
    provider: DynProvider,
    address: Address,
}

impl ProductPassportContract {
    pub fn new(provider: DynProvider, contract_address: &str) -> Result<Self, ContractsError> {
        let address = Address::from_str(contract_address)?;
        return Ok(Self { provider, address });
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn set_product_data(
        &self,
        product_id: &str,
        data: ProductData,
    ) -> Result<TransactionReceipt, ContractsError> {
        let contract = ProductPassport::new(self.address, self.provider.clone());

        let receipt = contract
            .setProductData(
                parse_uint256(product_id)?,
                data.description,
                data.manuals,
                data.specifications,
                data.batchNumber,
                data.productionDate,
                data.expiryDate,
                data.certifications,
                data.warrantyInfo,
                data.materialComposition,
                data.complianceInfo,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        let receipt = ensure_success(receipt)?;
        info!(
            "product data for {product_id} stored in transaction {}",
            receipt.transaction_hash
        );

        return Ok(receipt);
    }

    pub async fn get_product_data(&self, product_id: &str) -> Result<ProductData, ContractsError> {
        let contract = ProductPassport::new(self.address, self.provider.clone());

        let result = contract
            .getProductData(parse_uint256(product_id)?)
            .call()
            .await?;

        return Ok(result);
    }

    /// Writes a full passport, including the IPFS CID of the product
    /// metadata.
    pub async fn create_product_passport(
        &self,
        call: createProductPassportCall,
    ) -> Result<TransactionReceipt, ContractsError> {
        let contract = ProductPassport::new(self.address, self.provider.clone());
        let product_id = call.productId;

        let receipt = contract
            .createProductPassport(
                call.productId,
                call.description,
                call.manuals,
                call.specifications,
                call.batchNumber,
                call.productionDate,
                call.expiryDate,
                call.certifications,
                call.warrantyInfo,
                call.materialComposition,
                call.complianceInfo,
                call.ipfs,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        let receipt = ensure_success(receipt)?;
        info!(
            "passport for {product_id} created in transaction {}",
            receipt.transaction_hash
        );

        return Ok(receipt);
    }

    pub async fn get_product_passport(&self, product_id: &str) -> Result<Passport, ContractsError> {
        let contract = ProductPassport::new(self.address, self.provider.clone());

        let result = contract
            .getProductPassport(parse_uint256(product_id)?)
            .call()
            .await?;

        return Ok(result);
    }

    pub async fn authorize_entity(
        &self,
        entity_address: &str,
    ) -> Result<TransactionReceipt, ContractsError> {
        let contract = ProductPassport::new(self.address, self.provider.clone());
        let entity = Address::from_str(entity_address)?;

        let receipt = contract
            .authorizeEntity(entity)
            .send()
            .await?
            .get_receipt()
            .await?;

        let receipt = ensure_success(receipt)?;
        info!(
            "entity {entity} authorized in transaction {}",
            receipt.transaction_hash
        );

        return Ok(receipt);
    }
}
