//! # Cart State
//!
//! Manages the shopper's cart and the cart drawer flag.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                 Cart State Change     │
//! │  ───────────────          ───────                 ─────────────────     │
//! │                                                                         │
//! │  Click "add to cart" ────► add_to_cart() ───────► entries.push(entry)  │
//! │                                                                         │
//! │  Click cart button ──────► open_cart() ─────────► drawer_open = true   │
//! │                                                                         │
//! │  Close drawer ───────────► close_cart() ────────► drawer_open = false  │
//! │                                                                         │
//! │  NOTE: Entries are never merged. Two clicks on the same product give    │
//! │        two entries with quantity 1 each.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use flexnesse_core::{CartEntry, Product};
use serde::Serialize;

/// The shopping cart.
///
/// ## Invariants
/// - Entries keep insertion order
/// - Every entry has quantity 1
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub entries: Vec<CartEntry>,

    /// Whether the host should show the cart drawer.
    pub drawer_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a snapshot of `product`.
    pub fn add(&mut self, product: &Product) {
        self.entries.push(CartEntry::from_product(product));
    }

    /// Number of entries (not distinct products).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared cart state.
///
/// ## Thread Safety
/// `Arc<Mutex<Cart>>` so handlers running on different tasks see one cart.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flexnesse_core::{DraftProduct, ImageData};

    fn test_product(name: &str) -> Product {
        let draft = DraftProduct {
            name: name.to_string(),
            price: "100".to_string(),
            ..DraftProduct::default()
        };
        Product::from_draft(&draft, ImageData::encode("image/png", b"png"), Utc::now()).unwrap()
    }

    #[test]
    fn test_cart_add_same_product_twice_gives_two_entries() {
        let mut cart = Cart::new();
        let product = test_product("Shirt");

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.len(), 2);
        assert!(cart.entries.iter().all(|e| e.quantity == 1));
        assert_eq!(cart.entries[0], cart.entries[1]);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product("Shirt"));
        cart.add(&test_product("Jacket"));

        let names: Vec<_> = cart.entries.iter().map(|e| e.product.name.as_str()).collect();
        assert_eq!(names, vec!["Shirt", "Jacket"]);
    }

    #[test]
    fn test_cart_state_round_trip() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));

        state.with_cart_mut(|c| c.drawer_open = true);
        assert!(state.with_cart(|c| c.drawer_open));
    }
}
