//! Business logic services

pub mod catalog;

use crate::catalog::Catalog;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services around the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: catalog::CatalogService::new(catalog),
        }
    }
}
