pub mod facets;
pub mod filter;
pub mod sort;

pub use facets::{facet_counts, facet_options, FacetAttribute, FacetOption};
pub use filter::{filter_products, FilterState, DEFAULT_PRICE_RANGE, DEFAULT_QUOTA_RANGE};
pub use sort::{sort_products, SortOption};
