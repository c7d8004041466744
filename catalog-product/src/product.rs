use crate::enums::*;
use serde::{Deserialize, Serialize};

/// One sellable catalog item. Immutable once loaded; the filter and sort
/// operations never mutate products, they only read them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub usage: Vec<UsageTag>,
    pub price: f64,
    /// Lowest recurring payment, stored at monthly scale.
    pub lowest_quota: f64,
    pub specs: ProductSpecs,
    pub gama: Gama,
    pub condition: Condition,
    pub available_now: bool,
    pub is_new: bool,
    pub is_featured: bool,
}

/// Nested hardware spec record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductSpecs {
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub processor_brand: ProcessorBrand,
    pub display_inches: f64,
    pub resolution: Resolution,
    pub display_type: DisplayType,
    pub gpu_type: GpuType,
    pub touch_screen: bool,
    pub backlit_keyboard: bool,
    pub numeric_keypad: bool,
    pub fingerprint_reader: bool,
    pub has_windows: bool,
    pub has_thunderbolt: bool,
    pub has_ethernet: bool,
    pub ram_expandable: bool,
}

impl Product {
    /// Get the unique product id
    pub fn key(&self) -> &str {
        &self.id
    }

    /// Quota amount expressed in the given payment frequency
    pub fn quota_at(&self, frequency: PaymentFrequency) -> f64 {
        self.lowest_quota * frequency.multiplier()
    }

    /// Whether any of the given usage tags applies to this product
    pub fn matches_any_usage(&self, tags: &[UsageTag]) -> bool {
        self.usage.iter().any(|tag| tags.contains(tag))
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json_str) => write!(f, "{}", json_str),
            Err(e) => {
                write!(f, "Failed to format Product: {}", e)?;
                Err(std::fmt::Error)
            }
        }
    }
}
