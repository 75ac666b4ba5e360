//! # Draft State
//!
//! The add-product form buffer and the pending image preview.
//!
//! The preview lives beside the draft rather than inside it: it is filled
//! asynchronously by image capture while the admin keeps typing.

use std::sync::{Arc, Mutex};

use flexnesse_core::{Category, Color, DraftProduct, ImageData, Size};
use serde::{Deserialize, Serialize};

/// Form buffer plus the preview of the selected image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub product: DraftProduct,
    pub image_preview: Option<ImageData>,
}

impl Draft {
    /// Back to an empty form with no preview.
    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        let product = &mut self.product;
        match update {
            DraftUpdate::Name(v) => product.name = v,
            DraftUpdate::Price(v) => product.price = v,
            DraftUpdate::Description(v) => product.description = v,
            DraftUpdate::Category(v) => product.category = v,
            DraftUpdate::ToggleSize(size) => product.toggle_size(size),
            DraftUpdate::ToggleColor(color) => product.toggle_color(color),
            DraftUpdate::Stock(v) => product.stock = v,
            DraftUpdate::Discount(v) => product.discount = v,
        }
    }
}

/// One form edit sent by the host.
///
/// ## Wire Format
/// ```json
/// { "field": "name", "value": "Shirt" }
/// { "field": "toggleSize", "value": "XL" }
/// { "field": "category", "value": null }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum DraftUpdate {
    Name(String),
    Price(String),
    Description(String),
    Category(Option<Category>),
    ToggleSize(Size),
    ToggleColor(Color),
    Stock(String),
    Discount(String),
}

/// Shared draft state.
#[derive(Debug, Default)]
pub struct DraftState {
    draft: Arc<Mutex<Draft>>,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Draft) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Draft) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }
}
