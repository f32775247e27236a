use alloy::hex::FromHexError;
use alloy::primitives::TxHash;
use alloy::primitives::ruint::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractsError {
    #[error("Failed to parse the RPC URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Failed to parse the contract address: {0}")]
    AddressParseError(#[from] FromHexError),

    #[error("Contract call failed: {0}")]
    ContractCallError(#[from] alloy::contract::Error),

    #[error("Transaction was not confirmed: {0}")]
    PendingTransactionError(#[from] alloy::providers::PendingTransactionError),

    #[error("RPC request failed: {0}")]
    TransportError(#[from] alloy::transports::TransportError),

    #[error("Invalid signer key: {0}")]
    SignerError(#[from] alloy::signers::local::LocalSignerError),

    #[error("Parse contract type error: {0}")]
    ParseContractTypeError(#[from] ParseError),

    #[error("Transaction {0} reverted")]
    TransactionReverted(TxHash),

    #[error("{0} contract address is not initialized")]
    MissingContractAddress(&'static str),
}
