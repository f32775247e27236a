use crate::ContractsError;
use alloy::network::ReceiptResponse;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionReceipt;
use std::str::FromStr;

/// Parses a decimal (or `0x`-prefixed hex) identifier into a `uint256`.
pub fn parse_uint256(value: &str) -> Result<U256, ContractsError> {
    let result = U256::from_str(value.trim())?;
    return Ok(result);
}

pub fn parse_uint256_list(values: &[String]) -> Result<Vec<U256>, ContractsError> {
    values.iter().map(|value| parse_uint256(value)).collect()
}

pub(crate) fn ensure_success(
    receipt: TransactionReceipt,
) -> Result<TransactionReceipt, ContractsError> {
    if !receipt.status() {
        return Err(ContractsError::TransactionReverted(receipt.transaction_hash));
    }

    return Ok(receipt);
}
