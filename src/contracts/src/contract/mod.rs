pub mod batch;
pub mod product_details;
pub mod product_passport;
