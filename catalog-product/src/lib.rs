pub mod catalog;
pub mod enums;
pub mod errors;
pub mod product;

pub use catalog::ProductCatalog;
pub use enums::{
    Condition, DisplayType, Gama, GpuType, PaymentFrequency, ProcessorBrand, Resolution, UsageTag,
};
pub use errors::CatalogError;
pub use product::{Product, ProductSpecs};
