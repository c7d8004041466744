use catalog_product::{
    Condition, DisplayType, Gama, GpuType, PaymentFrequency, ProcessorBrand, Product, Resolution,
    UsageTag,
};
use serde::{Deserialize, Serialize};

/// Full-scale price range; the price predicate is a no-op while the
/// selection still equals this default.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (1000.0, 8000.0);

/// Full-scale quota range at monthly frequency
pub const DEFAULT_QUOTA_RANGE: (f64, f64) = (40.0, 400.0);

/// Snapshot of the user's current filter selections.
///
/// An empty set means "no constraint on this attribute"; a `None` boolean
/// means "don't care". Ranges are inclusive at both ends and only applied
/// once they differ from their full-scale defaults, so an untouched state
/// passes every product through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub brands: Vec<String>,
    pub usage: Vec<UsageTag>,
    pub ram_sizes: Vec<u32>,
    pub storage_sizes: Vec<u32>,
    pub display_sizes: Vec<f64>,
    pub resolutions: Vec<Resolution>,
    pub display_types: Vec<DisplayType>,
    pub processor_brands: Vec<ProcessorBrand>,
    pub gpu_types: Vec<GpuType>,
    pub gamas: Vec<Gama>,
    pub conditions: Vec<Condition>,
    pub price_range: (f64, f64),
    /// Quota bounds, stored at monthly scale and rescaled by the
    /// frequency multiplier when applied
    pub quota_range: (f64, f64),
    pub quota_frequency: PaymentFrequency,
    pub touch_screen: Option<bool>,
    pub backlit_keyboard: Option<bool>,
    pub numeric_keypad: Option<bool>,
    pub fingerprint_reader: Option<bool>,
    pub has_windows: Option<bool>,
    pub has_thunderbolt: Option<bool>,
    pub has_ethernet: Option<bool>,
    pub ram_expandable: Option<bool>,
    pub available_now: Option<bool>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brands: Vec::new(),
            usage: Vec::new(),
            ram_sizes: Vec::new(),
            storage_sizes: Vec::new(),
            display_sizes: Vec::new(),
            resolutions: Vec::new(),
            display_types: Vec::new(),
            processor_brands: Vec::new(),
            gpu_types: Vec::new(),
            gamas: Vec::new(),
            conditions: Vec::new(),
            price_range: DEFAULT_PRICE_RANGE,
            quota_range: DEFAULT_QUOTA_RANGE,
            quota_frequency: PaymentFrequency::Monthly,
            touch_screen: None,
            backlit_keyboard: None,
            numeric_keypad: None,
            fingerprint_reader: None,
            has_windows: None,
            has_thunderbolt: None,
            has_ethernet: None,
            ram_expandable: None,
            available_now: None,
        }
    }
}

impl FilterState {
    /// Create a new untouched filter state
    pub fn new() -> Self {
        Self::default()
    }

    /// Select specific brands
    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = brands;
        self
    }

    /// Select usage tags (products matching any selected tag pass)
    pub fn with_usage(mut self, usage: Vec<UsageTag>) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_ram_sizes(mut self, ram_sizes: Vec<u32>) -> Self {
        self.ram_sizes = ram_sizes;
        self
    }

    pub fn with_storage_sizes(mut self, storage_sizes: Vec<u32>) -> Self {
        self.storage_sizes = storage_sizes;
        self
    }

    pub fn with_display_sizes(mut self, display_sizes: Vec<f64>) -> Self {
        self.display_sizes = display_sizes;
        self
    }

    pub fn with_resolutions(mut self, resolutions: Vec<Resolution>) -> Self {
        self.resolutions = resolutions;
        self
    }

    pub fn with_display_types(mut self, display_types: Vec<DisplayType>) -> Self {
        self.display_types = display_types;
        self
    }

    pub fn with_processor_brands(mut self, processor_brands: Vec<ProcessorBrand>) -> Self {
        self.processor_brands = processor_brands;
        self
    }

    pub fn with_gpu_types(mut self, gpu_types: Vec<GpuType>) -> Self {
        self.gpu_types = gpu_types;
        self
    }

    pub fn with_gamas(mut self, gamas: Vec<Gama>) -> Self {
        self.gamas = gamas;
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Constrain the price range, inclusive at both ends
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = (min, max);
        self
    }

    /// Constrain the quota range at the given payment frequency
    pub fn with_quota_range(mut self, min: f64, max: f64, frequency: PaymentFrequency) -> Self {
        self.quota_range = (min, max);
        self.quota_frequency = frequency;
        self
    }

    pub fn with_touch_screen(mut self, touch_screen: bool) -> Self {
        self.touch_screen = Some(touch_screen);
        self
    }

    pub fn with_backlit_keyboard(mut self, backlit_keyboard: bool) -> Self {
        self.backlit_keyboard = Some(backlit_keyboard);
        self
    }

    pub fn with_numeric_keypad(mut self, numeric_keypad: bool) -> Self {
        self.numeric_keypad = Some(numeric_keypad);
        self
    }

    pub fn with_fingerprint_reader(mut self, fingerprint_reader: bool) -> Self {
        self.fingerprint_reader = Some(fingerprint_reader);
        self
    }

    pub fn with_has_windows(mut self, has_windows: bool) -> Self {
        self.has_windows = Some(has_windows);
        self
    }

    pub fn with_has_thunderbolt(mut self, has_thunderbolt: bool) -> Self {
        self.has_thunderbolt = Some(has_thunderbolt);
        self
    }

    pub fn with_has_ethernet(mut self, has_ethernet: bool) -> Self {
        self.has_ethernet = Some(has_ethernet);
        self
    }

    pub fn with_ram_expandable(mut self, ram_expandable: bool) -> Self {
        self.ram_expandable = Some(ram_expandable);
        self
    }

    pub fn with_available_now(mut self, available_now: bool) -> Self {
        self.available_now = Some(available_now);
        self
    }

    /// Whether the quota predicate is active at all
    fn quota_filter_active(&self) -> bool {
        self.quota_range != DEFAULT_QUOTA_RANGE || self.quota_frequency != PaymentFrequency::Monthly
    }

    /// Whether a product passes every active predicate.
    ///
    /// Predicates are evaluated as an AND-conjunction, short-circuiting on
    /// the first failure. A range with min > max simply matches nothing;
    /// the UI can produce that transiently while a slider is dragged.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.brands.is_empty()
            && !self
                .brands
                .iter()
                .any(|b| b.eq_ignore_ascii_case(&product.brand))
        {
            return false;
        }

        if !self.usage.is_empty() && !product.matches_any_usage(&self.usage) {
            return false;
        }

        if self.quota_filter_active() {
            let mult = self.quota_frequency.multiplier();
            let (min, max) = (self.quota_range.0 * mult, self.quota_range.1 * mult);
            let quota = product.quota_at(self.quota_frequency);
            if quota < min || quota > max {
                return false;
            }
        }

        if self.price_range != DEFAULT_PRICE_RANGE {
            let (min, max) = self.price_range;
            if product.price < min || product.price > max {
                return false;
            }
        }

        if !self.ram_sizes.is_empty() && !self.ram_sizes.contains(&product.specs.ram_gb) {
            return false;
        }

        if !self.storage_sizes.is_empty() && !self.storage_sizes.contains(&product.specs.storage_gb)
        {
            return false;
        }

        if !self.processor_brands.is_empty()
            && !self.processor_brands.contains(&product.specs.processor_brand)
        {
            return false;
        }

        if !self.display_sizes.is_empty()
            && !self.display_sizes.contains(&product.specs.display_inches)
        {
            return false;
        }

        if !bool_matches(self.touch_screen, product.specs.touch_screen) {
            return false;
        }

        if !self.gpu_types.is_empty() && !self.gpu_types.contains(&product.specs.gpu_type) {
            return false;
        }

        if !bool_matches(self.available_now, product.available_now) {
            return false;
        }

        if !self.gamas.is_empty() && !self.gamas.contains(&product.gama) {
            return false;
        }

        if !self.conditions.is_empty() && !self.conditions.contains(&product.condition) {
            return false;
        }

        if !self.resolutions.is_empty() && !self.resolutions.contains(&product.specs.resolution) {
            return false;
        }

        if !self.display_types.is_empty()
            && !self.display_types.contains(&product.specs.display_type)
        {
            return false;
        }

        bool_matches(self.backlit_keyboard, product.specs.backlit_keyboard)
            && bool_matches(self.numeric_keypad, product.specs.numeric_keypad)
            && bool_matches(self.fingerprint_reader, product.specs.fingerprint_reader)
            && bool_matches(self.has_windows, product.specs.has_windows)
            && bool_matches(self.has_thunderbolt, product.specs.has_thunderbolt)
            && bool_matches(self.has_ethernet, product.specs.has_ethernet)
            && bool_matches(self.ram_expandable, product.specs.ram_expandable)
    }
}

fn bool_matches(selected: Option<bool>, actual: bool) -> bool {
    match selected {
        Some(wanted) => actual == wanted,
        None => true,
    }
}

/// Apply the filter state over a product collection.
///
/// Returns a fresh vector holding the matching subset in the original
/// relative order; the input is never mutated or reordered.
pub fn filter_products(products: &[Product], state: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|product| state.matches(product))
        .cloned()
        .collect()
}
