//! # Notices
//!
//! The fixed set of toast messages the storefront shows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user-facing status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Submit was attempted with name, price or image missing.
    IncompleteFields,
    ProductAdded,
    /// Shown after every delete, whether or not a product matched.
    ProductDeleted,
    AddedToCart,
}

impl Notice {
    pub const fn message(&self) -> &'static str {
        match self {
            Notice::IncompleteFields => "الرجاء إكمال جميع البيانات المطلوبة",
            Notice::ProductAdded => "تم إضافة المنتج بنجاح",
            Notice::ProductDeleted => "تم حذف المنتج بنجاح",
            Notice::AddedToCart => "تم إضافة المنتج إلى السلة",
        }
    }
}
