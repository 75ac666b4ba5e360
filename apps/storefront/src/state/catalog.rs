//! # Catalog State
//!
//! The in-memory product list shared by the store grid and the admin panel.
//! Nothing is persisted; dropping the state drops the catalog.

use std::sync::{Arc, Mutex};

use flexnesse_core::{Product, ProductId};

/// Ordered product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Appends a product. Duplicate names and ids are allowed.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes every product whose id is `id`.
    ///
    /// ## Returns
    /// How many products were removed (0 when nothing matched).
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        before - self.products.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Shared catalog state.
#[derive(Debug, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use flexnesse_core::{DraftProduct, ImageData};

    fn product_at(millis: i64, name: &str) -> Product {
        let draft = DraftProduct {
            name: name.to_string(),
            price: "50".to_string(),
            ..DraftProduct::default()
        };
        Product::from_draft(
            &draft,
            ImageData::encode("image/png", b"png"),
            Utc.timestamp_millis_opt(millis).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_remove_only_matching() {
        let mut catalog = Catalog::new();
        catalog.push(product_at(1, "A"));
        catalog.push(product_at(2, "B"));
        catalog.push(product_at(3, "C"));

        assert_eq!(catalog.remove(ProductId::new(2)), 1);

        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut catalog = Catalog::new();
        catalog.push(product_at(1, "A"));

        assert_eq!(catalog.remove(ProductId::new(99)), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_drops_every_product_sharing_the_id() {
        let mut catalog = Catalog::new();
        catalog.push(product_at(7, "A"));
        catalog.push(product_at(7, "A copy"));

        assert_eq!(catalog.remove(ProductId::new(7)), 2);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get() {
        let mut catalog = Catalog::new();
        catalog.push(product_at(1, "A"));
        assert_eq!(catalog.get(ProductId::new(1)).map(|p| p.name.as_str()), Some("A"));
        assert!(catalog.get(ProductId::new(2)).is_none());
    }
}
