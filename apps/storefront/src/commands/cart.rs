//! # Cart Commands
//!
//! Commands for the shopper's cart and the cart drawer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  open_cart  ┌──────────┐      │
//! │  │  Empty   │──────────────►│ Entries  │────────────►│  Drawer  │      │
//! │  │  Cart    │               │ (qty 1)  │◄────────────│  shown   │      │
//! │  └──────────┘               └──────────┘  close_cart └──────────┘      │
//! │                                                                         │
//! │  Page reload ──► new AppState ──► empty cart                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use flexnesse_core::{CartEntry, CoreError, Notice, ProductId};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AppState, Cart};

/// Cart response including entries and the drawer flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub count: usize,
    pub drawer_open: bool,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            entries: cart.entries.clone(),
            count: cart.len(),
            drawer_open: cart.drawer_open,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(app: &AppState) -> CartResponse {
    debug!("get_cart command");
    app.cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Appends a snapshot of the product with quantity 1
/// - Never merges: a repeat add yields another entry
/// - Shows the "added to cart" notification
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shopper clicks "add to cart" on a product card                        │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(&app, product.id)                                         │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look the product up in the catalog                         │    │
/// │  │  2. Push CartEntry { product copy, quantity: 1 }               │    │
/// │  │  3. Toast "added to cart"                                      │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Header cart counter goes up by one                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// `NOT_FOUND` when the id is no longer in the catalog (a stale card).
/// The cart is left untouched and no toast is shown. The id is resolved
/// against the live catalog, so this is the one way adding can fail.
///
/// ## Runtime
/// The toast's dismiss timer is spawned on the current Tokio runtime.
/// Called outside one, the toast shows but does not clear itself.
pub fn add_to_cart(app: &AppState, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = app
        .catalog
        .with_catalog(|c| c.get(product_id).cloned())
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let response = app.cart.with_cart_mut(|c| {
        c.add(&product);
        CartResponse::from(&*c)
    });

    info!(product_id = %product_id, count = response.count, "product added to cart");
    app.notifications.show(Notice::AddedToCart.message());

    Ok(response)
}

/// Opens the cart drawer.
pub fn open_cart(app: &AppState) -> CartResponse {
    debug!("open_cart command");
    app.cart.with_cart_mut(|c| {
        c.drawer_open = true;
        CartResponse::from(&*c)
    })
}

/// Closes the cart drawer.
pub fn close_cart(app: &AppState) -> CartResponse {
    debug!("close_cart command");
    app.cart.with_cart_mut(|c| {
        c.drawer_open = false;
        CartResponse::from(&*c)
    })
}
