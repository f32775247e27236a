use crate::DppError;
use crate::config::DppContractsConfiguration;
use crate::descriptor::ResolvedProductDescriptor;
use alloy::providers::DynProvider;
use alloy::rpc::types::TransactionReceipt;
use contracts::ContractsError;
use contracts::ProductDetails::Product;
use contracts::ProductPassport::{Passport, ProductData, createProductPassportCall};
use contracts::contract::product_details::ProductDetailsContract;
use contracts::contract::product_passport::ProductPassportContract;
use contracts::utils::parse_uint256;
use serde::{Deserialize, Serialize};

/// Descriptive attributes a `ProductPassport` record stores for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPassportData {
    pub description: String,
    pub manuals: Vec<String>,
    pub specifications: Vec<String>,
    pub batch_number: String,
    pub production_date: String,
    pub expiry_date: String,
    pub certifications: String,
    pub warranty_info: String,
    pub material_composition: String,
    pub compliance_info: String,
}

impl From<ProductData> for ProductPassportData {
    fn from(data: ProductData) -> Self {
        Self {
            description: data.description,
            manuals: data.manuals,
            specifications: data.specifications,
            batch_number: data.batchNumber,
            production_date: data.productionDate,
            expiry_date: data.expiryDate,
            certifications: data.certifications,
            warranty_info: data.warrantyInfo,
            material_composition: data.materialComposition,
            compliance_info: data.complianceInfo,
        }
    }
}

impl From<ProductPassportData> for ProductData {
    fn from(data: ProductPassportData) -> Self {
        Self {
            description: data.description,
            manuals: data.manuals,
            specifications: data.specifications,
            batchNumber: data.batch_number,
            productionDate: data.production_date,
            expiryDate: data.expiry_date,
            certifications: data.certifications,
            warrantyInfo: data.warranty_info,
            materialComposition: data.material_composition,
            complianceInfo: data.compliance_info,
        }
    }
}

/// A full passport: the product data plus the CID of the product metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    #[serde(flatten)]
    pub data: ProductPassportData,
    #[serde(default)]
    pub ipfs: String,
}

impl PassportRecord {
    /// Passport carrying a staged product's documents.
    pub fn from_resolved(resolved: &ResolvedProductDescriptor) -> Self {
        Self {
            data: ProductPassportData {
                description: resolved.description().to_string(),
                manuals: resolved.manual_cids().to_vec(),
                specifications: resolved.specification_cids().to_vec(),
                ..Default::default()
            },
            ipfs: resolved.metadata_cid().to_string(),
        }
    }

    /// The ledger returns a zeroed record for ids that were never written.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn into_resolved(self, product_id: &str) -> ResolvedProductDescriptor {
        ResolvedProductDescriptor::new(
            product_id.to_string(),
            self.data.description,
            self.data.manuals,
            self.data.specifications,
            self.ipfs,
        )
    }

    /// The `createProductPassport` call that stores this record under
    /// `product_id`.
    pub fn create_call(
        self,
        product_id: &str,
    ) -> Result<createProductPassportCall, ContractsError> {
        let data = self.data;

        return Ok(createProductPassportCall {
            productId: parse_uint256(product_id)?,
            description: data.description,
            manuals: data.manuals,
            specifications: data.specifications,
            batchNumber: data.batch_number,
            productionDate: data.production_date,
            expiryDate: data.expiry_date,
            certifications: data.certifications,
            warrantyInfo: data.warranty_info,
            materialComposition: data.material_composition,
            complianceInfo: data.compliance_info,
            ipfs: self.ipfs,
        });
    }
}

impl From<Passport> for PassportRecord {
    fn from(passport: Passport) -> Self {
        Self {
            data: ProductPassportData {
                description: passport.description,
                manuals: passport.manuals,
                specifications: passport.specifications,
                batch_number: passport.batchNumber,
                production_date: passport.productionDate,
                expiry_date: passport.expiryDate,
                certifications: passport.certifications,
                warranty_info: passport.warrantyInfo,
                material_composition: passport.materialComposition,
                compliance_info: passport.complianceInfo,
            },
            ipfs: passport.ipfs,
        }
    }
}

impl From<PassportRecord> for Passport {
    fn from(record: PassportRecord) -> Self {
        let data = record.data;

        Self {
            description: data.description,
            manuals: data.manuals,
            specifications: data.specifications,
            batchNumber: data.batch_number,
            productionDate: data.production_date,
            expiryDate: data.expiry_date,
            certifications: data.certifications,
            warrantyInfo: data.warranty_info,
            materialComposition: data.material_composition,
            complianceInfo: data.compliance_info,
            ipfs: record.ipfs,
        }
    }
}

/// Identification and lifecycle details kept by the `ProductDetails` contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    pub uid: String,
    pub gtin: String,
    pub taric_code: String,
    pub manufacturer_info: String,
    pub consumer_info: String,
    pub end_of_life_info: String,
}

impl From<Product> for ProductInfo {
    fn from(product: Product) -> Self {
        Self {
            uid: product.uid,
            gtin: product.gtin,
            taric_code: product.taricCode,
            manufacturer_info: product.manufacturerInfo,
            consumer_info: product.consumerInfo,
            end_of_life_info: product.endOfLifeInfo,
        }
    }
}

impl From<ProductInfo> for Product {
    fn from(info: ProductInfo) -> Self {
        Self {
            uid: info.uid,
            gtin: info.gtin,
            taricCode: info.taric_code,
            manufacturerInfo: info.manufacturer_info,
            consumerInfo: info.consumer_info,
            endOfLifeInfo: info.end_of_life_info,
        }
    }
}

/// Reads and writes passport records. Ledger failures are returned as they
/// come back from the node; nothing is retried here.
#[derive(Clone)]
pub struct ProductPassportClient {
    passport: Option<ProductPassportContract>,
    details: Option<ProductDetailsContract>,
}

impl ProductPassportClient {
    pub fn new(
        provider: DynProvider,
        config: &DppContractsConfiguration,
    ) -> Result<Self, DppError> {
        let passport = match &config.product_passport_address {
            Some(address) => Some(ProductPassportContract::new(provider.clone(), address)?),
            None => None,
        };
        let details = match &config.product_details_address {
            Some(address) => Some(ProductDetailsContract::new(provider, address)?),
            None => None,
        };

        return Ok(Self { passport, details });
    }

    fn passport_contract(&self) -> Result<&ProductPassportContract, DppError> {
        self.passport
            .as_ref()
            .ok_or(DppError::ContractError(ContractsError::MissingContractAddress(
                "ProductPassport",
            )))
    }

    fn details_contract(&self) -> Result<&ProductDetailsContract, DppError> {
        self.details
            .as_ref()
            .ok_or(DppError::ContractError(ContractsError::MissingContractAddress(
                "ProductDetails",
            )))
    }

    /// Writes a staged product to the ledger.
    pub async fn submit(
        &self,
        resolved: &ResolvedProductDescriptor,
    ) -> Result<TransactionReceipt, DppError> {
        let record = PassportRecord::from_resolved(resolved);
        self.create_product_passport(resolved.product_id(), &record)
            .await
    }

    /// Reads a product back in staged form, or `None` if nothing was stored
    /// under `product_id`.
    pub async fn fetch(
        &self,
        product_id: &str,
    ) -> Result<Option<ResolvedProductDescriptor>, DppError> {
        let record = self.get_product_passport(product_id).await?;
        if record.is_empty() {
            return Ok(None);
        }

        return Ok(Some(record.into_resolved(product_id)));
    }

    pub async fn create_product_passport(
        &self,
        product_id: &str,
        record: &PassportRecord,
    ) -> Result<TransactionReceipt, DppError> {
        let contract = self.passport_contract()?;
        let call = record.clone().create_call(product_id)?;

        let receipt = contract.create_product_passport(call).await?;
        return Ok(receipt);
    }

    pub async fn get_product_passport(
        &self,
        product_id: &str,
    ) -> Result<PassportRecord, DppError> {
        let passport = self
            .passport_contract()?
            .get_product_passport(product_id)
            .await?;

        return Ok(passport.into());
    }

    pub async fn set_product_data(
        &self,
        product_id: &str,
        data: &ProductPassportData,
    ) -> Result<TransactionReceipt, DppError> {
        let receipt = self
            .passport_contract()?
            .set_product_data(product_id, data.clone().into())
            .await?;

        return Ok(receipt);
    }

    pub async fn get_product_data(
        &self,
        product_id: &str,
    ) -> Result<ProductPassportData, DppError> {
        let data = self
            .passport_contract()?
            .get_product_data(product_id)
            .await?;

        return Ok(data.into());
    }

    pub async fn set_product(
        &self,
        product_id: &str,
        product: &ProductInfo,
    ) -> Result<TransactionReceipt, DppError> {
        let receipt = self
            .details_contract()?
            .set_product(product_id, product.clone().into())
            .await?;

        return Ok(receipt);
    }

    pub async fn get_product(&self, product_id: &str) -> Result<ProductInfo, DppError> {
        let product = self.details_contract()?.get_product(product_id).await?;
        return Ok(product.into());
    }

    pub async fn authorize_entity(
        &self,
        entity_address: &str,
    ) -> Result<TransactionReceipt, DppError> {
        let receipt = self
            .passport_contract()?
            .authorize_entity(entity_address)
            .await?;

        return Ok(receipt);
    }
}
