use catalog_product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Active ordering for the product grid
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    QuotaAsc,
    Newest,
    Popular,
    /// Identity pass-through: the input order is the pre-ranked
    /// "recommended" order supplied by the data source
    Recommended,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::Recommended
    }
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Recommended,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::QuotaAsc,
        SortOption::Newest,
        SortOption::Popular,
    ];

    /// Parse a sort key, falling back to `Recommended` for anything
    /// unknown instead of failing
    pub fn from_key(key: &str) -> Self {
        match key {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "quota_asc" => SortOption::QuotaAsc,
            "newest" => SortOption::Newest,
            "popular" => SortOption::Popular,
            _ => SortOption::Recommended,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::QuotaAsc => "quota_asc",
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
            SortOption::Recommended => "recommended",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::QuotaAsc => "Lowest Quota",
            SortOption::Newest => "Newest Arrivals",
            SortOption::Popular => "Most Popular",
            SortOption::Recommended => "Recommended",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Order a product collection by the given option.
///
/// Returns a fresh vector; the sort is stable, so ties keep their
/// original relative order. `Newest` and `Popular` order by the boolean
/// flag only, with no secondary key.
pub fn sort_products(products: &[Product], option: SortOption) -> Vec<Product> {
    let mut sorted: Vec<Product> = products.to_vec();
    match option {
        SortOption::PriceAsc => sorted.sort_by(|a, b| cmp_f64(a.price, b.price)),
        SortOption::PriceDesc => sorted.sort_by(|a, b| cmp_f64(b.price, a.price)),
        SortOption::QuotaAsc => sorted.sort_by(|a, b| cmp_f64(a.lowest_quota, b.lowest_quota)),
        SortOption::Newest => sorted.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
        SortOption::Popular => sorted.sort_by(|a, b| b.is_featured.cmp(&a.is_featured)),
        SortOption::Recommended => {}
    }
    sorted
}
