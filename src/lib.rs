pub mod batch;
pub mod config;
pub mod descriptor;
pub mod dpp;
pub mod errors;
pub mod passport;
pub mod staging;

mod utils;

pub use crate::batch::{BatchClient, BatchRecord};
pub use crate::config::{DppConfiguration, DppContractsConfiguration, DppUserConfiguration};
pub use crate::descriptor::{LocalProductDescriptor, ResolvedProductDescriptor};
pub use crate::dpp::DigitalProductPassport;
pub use crate::errors::DppError;
pub use crate::passport::{PassportRecord, ProductInfo, ProductPassportClient, ProductPassportData};
pub use crate::staging::{DocumentStager, StagingOptions, UploadFailure, UploadOutcome};
pub use pinning::errors::PinningError;
pub use pinning::{Cid, PinataConfiguration, PinataGateway, PinningGateway};
