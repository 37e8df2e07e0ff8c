use bakehouse_core::CakeSize;
use bakehouse_shared::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A cake offered on the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cake {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Display grouping on the catalog page ("Chocolate", "Strawberry")
    pub category: String,
    /// Sizes this cake can be ordered in, smallest first
    pub sizes: Vec<CakeSize>,
    pub flavors: Vec<String>,
    pub ingredients: Vec<String>,
    /// "From" price shown on cards: the smallest size, no extras
    pub display_price: Money,
    pub rating: f64,
    pub review_count: u32,
    pub is_active: bool,
}

impl Cake {
    /// Smallest size this cake can be ordered in
    pub fn smallest_size(&self) -> Option<CakeSize> {
        self.sizes.iter().min().copied()
    }

    pub fn offers_size(&self, size: CakeSize) -> bool {
        self.sizes.contains(&size)
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cake not found: {0}")]
    CakeNotFound(String),

    #[error("Cake has no orderable sizes: {0}")]
    NoOrderableSizes(String),
}

/// In-memory cake lookup
pub struct Catalog {
    cakes: HashMap<Uuid, Cake>,
}

impl Catalog {
    pub fn new(cakes: Vec<Cake>) -> Self {
        Self {
            cakes: cakes.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn get(&self, id: &Uuid) -> Result<&Cake, CatalogError> {
        self.cakes
            .get(id)
            .ok_or_else(|| CatalogError::CakeNotFound(id.to_string()))
    }

    /// Cakes currently shown on the storefront
    pub fn active_cakes(&self) -> Vec<&Cake> {
        self.cakes.values().filter(|c| c.is_active).collect()
    }

    pub fn len(&self) -> usize {
        self.cakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_catalog;
    use bakehouse_core::PriceCalculator;

    #[test]
    fn test_lookup_by_id() {
        let cakes = default_catalog(&PriceCalculator::default()).unwrap();
        let first_id = cakes[0].id;
        let catalog = Catalog::new(cakes);

        assert!(catalog.get(&first_id).is_ok());

        let missing = catalog.get(&Uuid::new_v4());
        assert!(matches!(missing, Err(CatalogError::CakeNotFound(_))));
    }

    #[test]
    fn test_active_filter() {
        let mut cakes = default_catalog(&PriceCalculator::default()).unwrap();
        cakes[0].is_active = false;
        let total = cakes.len();
        let catalog = Catalog::new(cakes);

        assert_eq!(catalog.active_cakes().len(), total - 1);
    }

    #[test]
    fn test_smallest_size() {
        let cakes = default_catalog(&PriceCalculator::default()).unwrap();
        for cake in &cakes {
            assert_eq!(cake.smallest_size(), Some(CakeSize::SixInch));
            assert!(cake.offers_size(CakeSize::TenInch));
        }
    }

    #[test]
    fn test_cake_wire_format() {
        let cakes = default_catalog(&PriceCalculator::default()).unwrap();
        let json = serde_json::to_value(&cakes[0]).unwrap();

        // Sizes travel as the storefront strings, prices as pence
        assert_eq!(json["sizes"][0], "6-inch");
        assert_eq!(json["display_price"], 7500);

        let back: Cake = serde_json::from_value(json).unwrap();
        assert_eq!(back.name, cakes[0].name);
    }
}
