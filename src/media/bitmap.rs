// SPDX-License-Identifier: MPL-2.0
//! Decoded frame bitmaps (PNG, JPEG, GIF, WebP, BMP).

use iced::widget::image;
use image_rs::{GenericImageView, ImageError};

/// A decoded frame, ready to be blitted onto a surface.
///
/// The pixels live only inside the iced handle; clones share them.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    opaque: bool,
}

impl Bitmap {
    /// Creates a new `Bitmap` from RGBA pixels, moving them into the handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let opaque = pixels.chunks_exact(4).all(|px| px[3] == u8::MAX);
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
            opaque,
        }
    }

    /// Decodes an encoded raster image (any format enabled on the `image`
    /// crate, detected from the content).
    ///
    /// # Errors
    ///
    /// Returns the decoder's error when the bytes are not a supported,
    /// well-formed image.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();
        Ok(Self::from_rgba(width, height, pixels))
    }

    /// Decoded RGBA bytes, row-major.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        handle_pixels(&self.handle).unwrap_or_default()
    }

    /// Whether every pixel has full alpha.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Raw RGBA pixels of an in-memory handle.
pub(crate) fn handle_pixels(handle: &image::Handle) -> Option<&[u8]> {
    match handle {
        image::Handle::Rgba { pixels, .. } => Some(pixels.as_ref()),
        _ => None,
    }
}
