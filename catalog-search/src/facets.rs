use crate::filter::FilterState;
use catalog_product::{
    Condition, DisplayType, Gama, GpuType, ProcessorBrand, Product, Resolution, UsageTag,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One filterable product dimension
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetAttribute {
    Brand,
    Usage,
    RamSize,
    StorageSize,
    DisplaySize,
    Resolution,
    DisplayType,
    ProcessorBrand,
    GpuType,
    Gama,
    Condition,
}

impl FacetAttribute {
    pub const ALL: [FacetAttribute; 11] = [
        FacetAttribute::Brand,
        FacetAttribute::Usage,
        FacetAttribute::RamSize,
        FacetAttribute::StorageSize,
        FacetAttribute::DisplaySize,
        FacetAttribute::Resolution,
        FacetAttribute::DisplayType,
        FacetAttribute::ProcessorBrand,
        FacetAttribute::GpuType,
        FacetAttribute::Gama,
        FacetAttribute::Condition,
    ];

    /// Copy of `state` with only this attribute's constraint cleared.
    /// Counting against the relaxed state is what keeps an option's own
    /// count unchanged when the option is toggled.
    fn relaxed(&self, state: &FilterState) -> FilterState {
        let mut relaxed = state.clone();
        match self {
            FacetAttribute::Brand => relaxed.brands.clear(),
            FacetAttribute::Usage => relaxed.usage.clear(),
            FacetAttribute::RamSize => relaxed.ram_sizes.clear(),
            FacetAttribute::StorageSize => relaxed.storage_sizes.clear(),
            FacetAttribute::DisplaySize => relaxed.display_sizes.clear(),
            FacetAttribute::Resolution => relaxed.resolutions.clear(),
            FacetAttribute::DisplayType => relaxed.display_types.clear(),
            FacetAttribute::ProcessorBrand => relaxed.processor_brands.clear(),
            FacetAttribute::GpuType => relaxed.gpu_types.clear(),
            FacetAttribute::Gama => relaxed.gamas.clear(),
            FacetAttribute::Condition => relaxed.conditions.clear(),
        }
        relaxed
    }

    /// The value(s) a product carries for this attribute. Multi-valued
    /// only for usage tags.
    fn values_of(&self, product: &Product) -> Vec<String> {
        match self {
            FacetAttribute::Brand => vec![product.brand.clone()],
            FacetAttribute::Usage => product.usage.iter().map(|tag| tag.to_string()).collect(),
            FacetAttribute::RamSize => vec![product.specs.ram_gb.to_string()],
            FacetAttribute::StorageSize => vec![product.specs.storage_gb.to_string()],
            FacetAttribute::DisplaySize => vec![product.specs.display_inches.to_string()],
            FacetAttribute::Resolution => vec![product.specs.resolution.to_string()],
            FacetAttribute::DisplayType => vec![product.specs.display_type.to_string()],
            FacetAttribute::ProcessorBrand => vec![product.specs.processor_brand.to_string()],
            FacetAttribute::GpuType => vec![product.specs.gpu_type.to_string()],
            FacetAttribute::Gama => vec![product.gama.to_string()],
            FacetAttribute::Condition => vec![product.condition.to_string()],
        }
    }

    /// All option values for this attribute: the full variant table for
    /// enum-backed attributes, distinct first-seen values from the
    /// collection for catalog-derived ones.
    fn known_values(&self, products: &[Product]) -> Vec<String> {
        match self {
            FacetAttribute::Usage => UsageTag::ALL.iter().map(ToString::to_string).collect(),
            FacetAttribute::Resolution => Resolution::ALL.iter().map(ToString::to_string).collect(),
            FacetAttribute::DisplayType => {
                DisplayType::ALL.iter().map(ToString::to_string).collect()
            }
            FacetAttribute::ProcessorBrand => {
                ProcessorBrand::ALL.iter().map(ToString::to_string).collect()
            }
            FacetAttribute::GpuType => GpuType::ALL.iter().map(ToString::to_string).collect(),
            FacetAttribute::Gama => Gama::ALL.iter().map(ToString::to_string).collect(),
            FacetAttribute::Condition => Condition::ALL.iter().map(ToString::to_string).collect(),
            FacetAttribute::Brand
            | FacetAttribute::RamSize
            | FacetAttribute::StorageSize
            | FacetAttribute::DisplaySize => {
                // Case-insensitive dedup, keeping first-seen casing, so
                // "Lenovo" and "lenovo" collapse into one option the way
                // the brand predicate already treats them
                let mut values: Vec<String> = Vec::new();
                for product in products {
                    for value in self.values_of(product) {
                        if !values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
                            values.push(value);
                        }
                    }
                }
                values
            }
        }
    }

    /// Display label for an option value
    fn label_for(&self, value: &str) -> String {
        match self {
            FacetAttribute::RamSize | FacetAttribute::StorageSize => format!("{} GB", value),
            FacetAttribute::DisplaySize => format!("{}\"", value),
            _ => value.to_string(),
        }
    }

    /// Whether the given option value is part of the current selection
    fn is_selected(&self, state: &FilterState, value: &str) -> bool {
        match self {
            FacetAttribute::Brand => state.brands.iter().any(|b| b.eq_ignore_ascii_case(value)),
            FacetAttribute::Usage => state.usage.iter().any(|t| t.to_string() == value),
            FacetAttribute::RamSize => state.ram_sizes.iter().any(|r| r.to_string() == value),
            FacetAttribute::StorageSize => {
                state.storage_sizes.iter().any(|s| s.to_string() == value)
            }
            FacetAttribute::DisplaySize => {
                state.display_sizes.iter().any(|d| d.to_string() == value)
            }
            FacetAttribute::Resolution => state.resolutions.iter().any(|r| r.to_string() == value),
            FacetAttribute::DisplayType => {
                state.display_types.iter().any(|d| d.to_string() == value)
            }
            FacetAttribute::ProcessorBrand => {
                state.processor_brands.iter().any(|p| p.to_string() == value)
            }
            FacetAttribute::GpuType => state.gpu_types.iter().any(|g| g.to_string() == value),
            FacetAttribute::Gama => state.gamas.iter().any(|g| g.to_string() == value),
            FacetAttribute::Condition => state.conditions.iter().any(|c| c.to_string() == value),
        }
    }
}

/// One selectable value for a discrete filter, with the count of products
/// that would remain visible if it were toggled on
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Per-option counts for one attribute, holding every *other* active
/// filter fixed (the attribute's own selection is never re-applied).
///
/// Keys appear in deterministic order: the variant table for enum-backed
/// attributes, first-seen catalog order otherwise. Values absent from the
/// re-filtered subset stay at zero.
pub fn facet_counts(
    products: &[Product],
    state: &FilterState,
    attribute: FacetAttribute,
) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = attribute
        .known_values(products)
        .into_iter()
        .map(|value| (value, 0))
        .collect();

    let relaxed = attribute.relaxed(state);
    for product in products.iter().filter(|p| relaxed.matches(p)) {
        for value in attribute.values_of(product) {
            tally(&mut counts, value);
        }
    }

    counts
}

/// Increment the count for a value, folding casing variants into the
/// already-seeded key
fn tally(counts: &mut IndexMap<String, usize>, value: String) {
    if let Some(count) = counts.get_mut(&value) {
        *count += 1;
        return;
    }
    if let Some(key) = counts
        .keys()
        .find(|k| k.eq_ignore_ascii_case(&value))
        .cloned()
    {
        if let Some(count) = counts.get_mut(&key) {
            *count += 1;
        }
        return;
    }
    counts.insert(value, 1);
}

/// Facet counts wrapped into display-ready option records
pub fn facet_options(
    products: &[Product],
    state: &FilterState,
    attribute: FacetAttribute,
) -> Vec<FacetOption> {
    facet_counts(products, state, attribute)
        .into_iter()
        .map(|(value, count)| FacetOption {
            label: attribute.label_for(&value),
            selected: attribute.is_selected(state, &value),
            value,
            count,
        })
        .collect()
}
