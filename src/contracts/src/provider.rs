use crate::ContractsError;
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use std::str::FromStr;

/// A provider that signs transactions with a single local key.
#[derive(Clone)]
pub struct ConnectedSigner {
    pub provider: DynProvider,
    pub address: Address,
}

pub fn connect_signer(rpc_url: &str, private_key: &str) -> Result<ConnectedSigner, ContractsError> {
    let signer = PrivateKeySigner::from_str(private_key.trim())?;
    let address = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(rpc_url.parse()?);

    return Ok(ConnectedSigner {
        provider: provider.erased(),
        address,
    });
}

pub fn connect_read_only(rpc_url: &str) -> Result<DynProvider, ContractsError> {
    let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
    return Ok(provider.erased());
}
