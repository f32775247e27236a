use crate::Batch::setBatchDetailsCall;
use crate::ProductPassport::{createProductPassportCall, setProductDataCall};
use alloy::sol_types::SolCall;

/// ABI-encodes contract calls for callers that hand transactions to a
/// relayer instead of signing them locally.
pub struct CallDataBuilder {}

impl CallDataBuilder {
    pub fn new() -> Self {
        Self {}
    }

    pub fn build_set_product_data_call_data(&self, inputs: setProductDataCall) -> Vec<u8> {
        inputs.abi_encode()
    }

    pub fn build_create_product_passport_call_data(
        &self,
        inputs: createProductPassportCall,
    ) -> Vec<u8> {
        inputs.abi_encode()
    }

    pub fn build_set_batch_details_call_data(&self, inputs: setBatchDetailsCall) -> Vec<u8> {
        inputs.abi_encode()
    }
}
