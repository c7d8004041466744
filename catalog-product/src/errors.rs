/// Error types for catalog ingestion and lookups
#[derive(Debug)]
pub enum CatalogError {
    ParseError(String),
    SerdeJsonError(serde_json::Error),
    ProductNotFound(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::SerdeJsonError(err)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CatalogError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            CatalogError::ProductNotFound(id) => write!(f, "Product not found: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}
