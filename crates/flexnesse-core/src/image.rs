//! # Inline Images
//!
//! Product images are never uploaded anywhere. The selected file is turned
//! into a self-contained `data:` URL and stored on the product itself.
//!
//! ```text
//! selected file ──► bytes ──► "data:image/png;base64,iVBORw0..." ──► Product.image
//! ```
//!
//! Reading the file is the app crate's job; this module only encodes bytes
//! it is handed.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// MIME type used when the extension is unknown or missing.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A `data:` URL carrying a whole image.
///
/// The empty value stands for "no image selected".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageData(String);

impl ImageData {
    /// Encodes raw bytes as a base64 data URL.
    ///
    /// ## Example
    /// ```rust
    /// use flexnesse_core::ImageData;
    ///
    /// let image = ImageData::encode("image/gif", b"GIF89a");
    /// assert_eq!(image.as_str(), "data:image/gif;base64,R0lGODlh");
    /// ```
    pub fn encode(content_type: &str, bytes: &[u8]) -> Self {
        ImageData(format!("data:{};base64,{}", content_type, STANDARD.encode(bytes)))
    }

    /// Encodes bytes read from `path`, picking the MIME type from its
    /// extension.
    pub fn encode_for_path(path: &Path, bytes: &[u8]) -> Self {
        ImageData::encode(content_type_for_path(path), bytes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The MIME type between `data:` and `;base64`, if this is a data URL.
    pub fn content_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (mime, _) = rest.split_once(';')?;
        Some(mime)
    }
}

/// Maps a file extension to an image MIME type.
pub fn content_type_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

pub fn content_type_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(content_type_for_extension)
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}
