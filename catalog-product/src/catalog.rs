use crate::errors::CatalogError;
use crate::product::Product;
use indexmap::IndexMap;

/// In-memory product catalog with id-keyed lookup.
///
/// Insertion order is preserved; it is the "recommended" order supplied by
/// the upstream data source and the default presentation order.
pub struct ProductCatalog {
    // Primary index: id -> Product, in load order
    products: IndexMap<String, Product>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            products: IndexMap::new(),
        }
    }

    /// Replace the catalog contents with products parsed from a JSON array.
    ///
    /// Returns the number of products loaded. A record with an empty id is
    /// rejected and the current contents are kept. A duplicate id inside
    /// the payload replaces the earlier record (last one wins).
    pub fn load_json(&mut self, json_data: &str) -> Result<usize, CatalogError> {
        let parsed: Vec<Product> = serde_json::from_str(json_data)?;

        if let Some(position) = parsed.iter().position(|p| p.id.trim().is_empty()) {
            return Err(CatalogError::ParseError(format!(
                "product at index {} has an empty id",
                position
            )));
        }

        self.products.clear();
        for product in parsed {
            if self.products.contains_key(&product.id) {
                log::warn!("Duplicate product id '{}', keeping later record", product.id);
            }
            self.products.insert(product.id.clone(), product);
        }

        Ok(self.products.len())
    }

    /// Serialize the full catalog back to a JSON array
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let all: Vec<&Product> = self.products.values().collect();
        Ok(serde_json::to_string(&all)?)
    }

    /// Add or replace a single product
    pub fn add(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Remove a product by id, keeping the order of the remaining items
    pub fn remove(&mut self, id: &str) -> bool {
        self.products.shift_remove(id).is_some()
    }

    /// Get a product by id - O(1)
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Get a product by id, failing if it is not in the catalog
    pub fn get_product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.products
            .get(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// All products in load order
    pub fn products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Owned snapshot of the catalog, for handing to the filter engine
    pub fn to_vec(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Distinct brands in first-seen order
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in self.products.values() {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands
    }

    /// Total number of products
    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
