// SPDX-License-Identifier: MPL-2.0
//! [`Surface`] implementation rendered by iced.
//!
//! The surface keeps one composited image; the view shows it at its natural
//! size with the input layer stacked on top.

use crate::config::DragCapture;
use crate::media::bitmap::handle_pixels;
use crate::media::Bitmap;
use crate::spinner::DragInput;
use crate::surface::Surface;
use crate::ui::input_layer::InputLayer;
use iced::widget::{image, Canvas, Space, Stack};
use iced::{ContentFit, Element, Length};
use image_rs::{imageops, RgbaImage};

#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    width: u32,
    height: u32,
    current: Option<image::Handle>,
}

impl CanvasSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, capture: DragCapture) -> Element<'_, DragInput> {
        let width = Length::Fixed(self.width as f32);
        let height = Length::Fixed(self.height as f32);

        let content: Element<'_, DragInput> = match &self.current {
            Some(handle) => image(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::None)
                .into(),
            None => Space::new().width(width).height(height).into(),
        };

        Stack::new()
            .width(width)
            .height(height)
            .push(content)
            .push(
                Canvas::new(InputLayer::new(capture))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }

    fn current_pixels(&self) -> Option<&[u8]> {
        self.current.as_ref().and_then(handle_pixels)
    }

    /// Current content as a mutable buffer, transparent where nothing was
    /// drawn yet.
    fn backing_image(&self) -> RgbaImage {
        self.current_pixels()
            .and_then(|pixels| RgbaImage::from_raw(self.width, self.height, pixels.to_vec()))
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if (self.width, self.height) != (width, height) {
            // Resizing a drawable clears it.
            self.current = None;
        }
        self.width = width;
        self.height = height;
    }

    fn draw(&mut self, bitmap: &Bitmap) {
        // An opaque frame covering the whole surface hides everything below.
        if bitmap.is_opaque() && bitmap.dimensions() == self.size() {
            self.current = Some(bitmap.handle.clone());
            return;
        }

        let Some(source) = RgbaImage::from_raw(
            bitmap.width,
            bitmap.height,
            bitmap.rgba_bytes().to_vec(),
        ) else {
            log::warn!("Skipping blit of a bitmap without RGBA pixels");
            return;
        };

        let mut target = self.backing_image();
        imageops::overlay(&mut target, &source, 0, 0);
        self.current = Some(image::Handle::from_rgba(
            self.width,
            self.height,
            target.into_raw(),
        ));
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_bitmap;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 255, 0];

    fn uniform(width: u32, height: u32, px: [u8; 4]) -> Bitmap {
        Bitmap::from_rgba(width, height, px.repeat((width * height) as usize))
    }

    #[test]
    fn new_surface_is_empty() {
        let surface = CanvasSurface::new();
        assert_eq!(surface.size(), (0, 0));
        assert!(surface.current_pixels().is_none());
    }

    #[test]
    fn resize_sets_exact_size() {
        let mut surface = CanvasSurface::new();
        surface.resize(640, 480);
        assert_eq!(surface.size(), (640, 480));
    }

    #[test]
    fn opaque_full_frame_is_shown_without_copy() {
        let mut surface = CanvasSurface::new();
        surface.resize(4, 4);
        surface.draw(&solid_bitmap(4, 4, 1));
        let second = solid_bitmap(4, 4, 2);
        surface.draw(&second);

        let shown = surface.current_pixels().expect("content");
        assert!(std::ptr::eq(shown.as_ptr(), second.rgba_bytes().as_ptr()));
    }

    #[test]
    fn transparent_frame_keeps_what_was_drawn_before() {
        let mut surface = CanvasSurface::new();
        surface.resize(2, 2);
        surface.draw(&uniform(2, 2, RED));
        surface.draw(&uniform(2, 2, CLEAR));

        assert_eq!(surface.current_pixels(), Some(RED.repeat(4).as_slice()));
    }

    #[test]
    fn smaller_frame_is_blitted_at_origin() {
        let mut surface = CanvasSurface::new();
        surface.resize(2, 1);
        surface.draw(&uniform(2, 1, RED));
        surface.draw(&uniform(1, 1, [0, 255, 0, 255]));

        assert_eq!(
            surface.current_pixels(),
            Some([0, 255, 0, 255, 255, 0, 0, 255].as_slice())
        );
    }

    #[test]
    fn transparent_frame_on_empty_surface_stays_transparent() {
        let mut surface = CanvasSurface::new();
        surface.resize(1, 1);
        surface.draw(&uniform(1, 1, CLEAR));
        assert_eq!(surface.current_pixels(), Some([0, 0, 0, 0].as_slice()));
    }

    #[test]
    fn resize_to_new_size_clears_content() {
        let mut surface = CanvasSurface::new();
        surface.resize(4, 4);
        surface.draw(&solid_bitmap(4, 4, 1));

        surface.resize(4, 4);
        assert!(surface.current_pixels().is_some());

        surface.resize(8, 8);
        assert!(surface.current_pixels().is_none());
    }
}
