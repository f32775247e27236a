pub mod call_data_builder;
pub mod contract;
pub mod errors;
pub mod provider;
pub mod utils;

pub use crate::errors::ContractsError;
use alloy::sol;

sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    contract ProductPassport {
        struct ProductData {
            string description;
            string[] manuals;
            string[] specifications;
            string batchNumber;
            string productionDate;
            string expiryDate;
            string certifications;
            string warrantyInfo;
            string materialComposition;
            string complianceInfo;
        }

        struct Passport {
            string description;
            string[] manuals;
            string[] specifications;
            string batchNumber;
            string productionDate;
            string expiryDate;
            string certifications;
            string warrantyInfo;
            string materialComposition;
            string complianceInfo;
            string ipfs;
        }

        function setProductData(
            uint256 productId,
            string memory description,
            string[] memory manuals,
            string[] memory specifications,
            string memory batchNumber,
            string memory productionDate,
            string memory expiryDate,
            string memory certifications,
            string memory warrantyInfo,
            string memory materialComposition,
            string memory complianceInfo
        ) external;

        function getProductData(uint256 productId) external view returns (ProductData memory);

        function createProductPassport(
            uint256 productId,
            string memory description,
            string[] memory manuals,
            string[] memory specifications,
            string memory batchNumber,
            string memory productionDate,
            string memory expiryDate,
            string memory certifications,
            string memory warrantyInfo,
            string memory materialComposition,
            string memory complianceInfo,
            string memory ipfs
        ) external;

        function getProductPassport(uint256 productId) external view returns (Passport memory);

        function authorizeEntity(address entity) external;
    }
);

sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    contract ProductDetails {
        struct Product {
            string uid;
            string gtin;
            string taricCode;
            string manufacturerInfo;
            string consumerInfo;
            string endOfLifeInfo;
        }

        function setProduct(
            uint256 productId,
            string memory uid,
            string memory gtin,
            string memory taricCode,
            string memory manufacturerInfo,
            string memory consumerInfo,
            string memory endOfLifeInfo
        ) external;

        function getProduct(uint256 productId) external view returns (Product memory);
    }
);

sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    contract Batch {
        struct BatchDetails {
            uint256[] productIds;
            string productionDate;
            string expiryDate;
            string location;
        }

        function setBatchDetails(
            uint256 batchId,
            uint256[] memory productIds,
            string memory productionDate,
            string memory expiryDate,
            string memory location
        ) external;

        function getBatchDetails(uint256 batchId) external view returns (BatchDetails memory);
    }
);
