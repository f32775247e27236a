use crate::ProductDetails::Product;
use crate::errors::ContractsError;
use crate::utils::{ensure_success, parse_uint256};
use crate::ProductDetails;
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use log::info;
use std::str::FromStr;

#[derive(Clone)]
pub struct ProductDetailsContract {
    provider: DynProvider,
    address: Address,
}

impl ProductDetailsContract {
    pub fn new(provider: DynProvider, contract_address: &str) -> Result<Self, ContractsError> {
        let address = Address::from_str(contract_address)?;
        return Ok(Self { provider, address });
    }

    pub async fn set_product(
        &self,
        product_id: &str,
        product: Product,
    ) -> Result<TransactionReceipt, ContractsError> {
        let contract = ProductDetails::new(self.address, self.provider.clone());

        let receipt = contract
            .setProduct(
                parse_uint256(product_id)?,
                product.uid,
                product.gtin,
                product.taricCode,
                product.manufacturerInfo,
                product.consumerInfo,
                product.endOfLifeInfo,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        let receipt = ensure_success(receipt)?;
        info!(
            "product {product_id} set in transaction {}",
            receipt.transaction_hash
        );

        return Ok(receipt);
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Product, ContractsError> {
        let contract = ProductDetails::new(self.address, self.provider.clone());

        let result = contract.getProduct(parse_uint256(product_id)?).call().await?;

        return Ok(result);
    }
}
