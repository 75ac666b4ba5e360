//! # Product Commands
//!
//! Catalog reads for the store grid and the admin panel, plus delete.
//!
//! ## Admin Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Panel                                          │
//! │                                                                         │
//! │  admin_summary() ──► [ products: n ] [ sales: 0 ] [ categories: 5 ]    │
//! │                                                                         │
//! │  list_products() ──► one row per product, each with a delete button    │
//! │                                                                         │
//! │  click delete ──► delete_product(id) ──► retain(p.id != id)            │
//! │                                      ──► toast "deleted" (always)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use flexnesse_core::{Category, Notice, Product, ProductId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Admin panel counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_products: usize,
    /// Always zero: no sales are recorded anywhere.
    pub total_sales: u64,
    pub category_count: usize,
}

/// Result of a delete click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// How many products had the id (normally 0 or 1).
    pub removed: usize,
    pub total_products: usize,
}

/// Lists the catalog in insertion order.
pub fn list_products(app: &AppState) -> Vec<Product> {
    debug!("list_products command");
    app.catalog.with_catalog(|c| c.products().to_vec())
}

/// Computes the admin panel counters.
pub fn admin_summary(app: &AppState) -> AdminSummary {
    AdminSummary {
        total_products: app.catalog.with_catalog(|c| c.len()),
        total_sales: 0,
        category_count: Category::ALL.len(),
    }
}

/// Deletes products by id.
///
/// ## Behavior
/// - Removes every product carrying `id`; others keep their order
/// - An unknown id changes nothing
/// - The "deleted" toast is shown either way
///
/// ## Runtime
/// The toast's dismiss timer is spawned on the current Tokio runtime.
/// Called outside one, the toast shows but does not clear itself.
pub fn delete_product(app: &AppState, id: ProductId) -> DeleteResponse {
    debug!(id = %id, "delete_product command");

    let (removed, total_products) = app.catalog.with_catalog_mut(|c| (c.remove(id), c.len()));

    if removed == 0 {
        warn!(id = %id, "delete_product matched nothing");
    } else {
        info!(id = %id, removed, total_products, "product deleted");
    }

    app.notifications.show(Notice::ProductDeleted.message());

    DeleteResponse {
        removed,
        total_products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app_with, shirt};

    #[tokio::test(start_paused = true)]
    async fn test_delete_removes_only_that_product() {
        let app = app_with(vec![shirt(1), shirt(2), shirt(3)]);

        let response = delete_product(&app, ProductId::new(2));

        assert_eq!(response.removed, 1);
        assert_eq!(response.total_products, 2);
        let ids: Vec<_> = list_products(&app).iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(
            app.notifications.current().message,
            Notice::ProductDeleted.message()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_unknown_id_still_notifies() {
        let app = app_with(vec![shirt(1)]);

        let response = delete_product(&app, ProductId::new(99));

        assert_eq!(response.removed, 0);
        assert_eq!(list_products(&app).len(), 1);
        assert!(app.notifications.current().visible);
        assert_eq!(
            app.notifications.current().message,
            Notice::ProductDeleted.message()
        );
    }

    #[test]
    fn test_admin_summary() {
        let app = app_with(vec![shirt(1), shirt(2)]);
        assert_eq!(
            admin_summary(&app),
            AdminSummary {
                total_products: 2,
                total_sales: 0,
                category_count: 5,
            }
        );
    }
}
