//! # Add-Product Commands
//!
//! Editing the draft, capturing its image, and committing it.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Product                                          │
//! │                                                                         │
//! │  update_draft(Name / Price / ToggleSize / ...)                         │
//! │  capture_image(Some(path)) ──► tokio::fs::read ──► data URL preview     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_product()                                                       │
//! │       │                                                                 │
//! │       ├── name, price or preview missing                               │
//! │       │      └──► toast "complete all data", nothing else changes      │
//! │       │                                                                 │
//! │       └── complete                                                      │
//! │              ├──► catalog.push(product)                                 │
//! │              ├──► draft + preview reset                                 │
//! │              ├──► view = admin                                          │
//! │              └──► toast "product added"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use chrono::Utc;
use flexnesse_core::{DraftProduct, ImageData, Notice, Product, ValidationError, View};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{AppState, Draft, DraftUpdate};

/// Draft response for the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: DraftProduct,
    pub image_preview: Option<ImageData>,
}

impl From<&Draft> for DraftResponse {
    fn from(draft: &Draft) -> Self {
        DraftResponse {
            draft: draft.product.clone(),
            image_preview: draft.image_preview.clone(),
        }
    }
}

pub fn get_draft(app: &AppState) -> DraftResponse {
    debug!("get_draft command");
    app.draft.with_draft(|d| DraftResponse::from(d))
}

/// Applies one form edit.
pub fn update_draft(app: &AppState, update: DraftUpdate) -> DraftResponse {
    debug!(?update, "update_draft command");
    app.draft.with_draft_mut(|d| {
        d.apply(update);
        DraftResponse::from(&*d)
    })
}

/// Reads the selected image file and stores it as the preview.
///
/// ## Behavior
/// - `None` (selection cancelled): nothing happens
/// - Read succeeds: preview becomes a data URL of the file
/// - Read fails: logged, preview cleared, no toast
///
/// The draft is not locked while the file is being read, so form edits made
/// meanwhile are kept.
///
/// Must be awaited on a Tokio runtime.
pub async fn capture_image(app: &AppState, file: Option<&Path>) -> DraftResponse {
    let Some(path) = file else {
        debug!("capture_image: no file selected");
        return get_draft(app);
    };

    debug!(path = %path.display(), "capture_image command");

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let image = ImageData::encode_for_path(path, &bytes);
            info!(
                path = %path.display(),
                bytes = bytes.len(),
                content_type = image.content_type().unwrap_or_default(),
                "image captured"
            );
            set_preview(app, image)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "image read failed, preview cleared");
            app.draft.with_draft_mut(|d| {
                d.image_preview = None;
                DraftResponse::from(&*d)
            })
        }
    }
}

/// Stores bytes the host already holds as the preview.
pub fn capture_image_bytes(app: &AppState, file_name: &str, bytes: &[u8]) -> DraftResponse {
    debug!(file_name, bytes = bytes.len(), "capture_image_bytes command");
    set_preview(app, ImageData::encode_for_path(Path::new(file_name), bytes))
}

fn set_preview(app: &AppState, image: ImageData) -> DraftResponse {
    app.draft.with_draft_mut(|d| {
        d.image_preview = Some(image);
        DraftResponse::from(&*d)
    })
}

/// Commits the draft to the catalog.
///
/// ## Errors
/// `VALIDATION_ERROR` when name, price or the image preview is missing.
/// The "complete all data" toast is shown and no state changes.
///
/// ## Runtime
/// The toast's dismiss timer is spawned on the current Tokio runtime.
/// Called outside one, the toast shows but does not clear itself.
pub fn submit_product(app: &AppState) -> Result<Product, ApiError> {
    debug!("submit_product command");

    let created_at = Utc::now();
    let outcome = app.draft.with_draft_mut(|d| {
        let image = d.image_preview.clone().unwrap_or_default();
        let product = Product::from_draft(&d.product, image, created_at)?;
        d.reset();
        Ok::<Product, ValidationError>(product)
    });

    let product = match outcome {
        Ok(product) => product,
        Err(e) => {
            warn!(error = %e, "submit_product rejected");
            app.notifications.show(Notice::IncompleteFields.message());
            return Err(ApiError::from(e));
        }
    };

    let total_products = app.catalog.with_catalog_mut(|c| {
        c.push(product.clone());
        c.len()
    });
    app.view.set(View::Admin);

    info!(id = %product.id, name = %product.name, total_products, "product added");
    app.notifications.show(Notice::ProductAdded.message());

    Ok(product)
}
