//! Icon bitmaps for the icon sublayer.
//!
//! An [`Icon`] is a decoded RGBA8 bitmap plus a logical display size. The
//! control does not draw it directly: the bitmap becomes the mask of the
//! icon sublayer and the host renders the layer's tint color through the
//! bitmap's alpha channel (template-image semantics), so the icon follows
//! the resolved title color across appearance and state changes.

use std::path::Path;
use std::sync::Arc;

use gild_core::Size;
use thiserror::Error;

/// Errors that can occur while loading an icon.
#[derive(Error, Debug)]
pub enum IconError {
    /// Failed to read the icon file.
    #[error("failed to read icon file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the image data.
    #[error("failed to decode icon image: {0}")]
    Decode(#[from] image::ImageError),

    /// Raw pixel buffer does not match the stated dimensions.
    #[error("pixel buffer length {actual} does not match width x height x 4 = {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A decoded icon bitmap.
///
/// Cloning is cheap; the pixel data is shared.
#[derive(Debug, Clone)]
pub struct Icon {
    pixels: Arc<[u8]>,
    pixel_width: u32,
    pixel_height: u32,
    display_size: Size,
}

impl Icon {
    /// Create an icon from raw RGBA8 pixels.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba8(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, IconError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(IconError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.into(),
            pixel_width: width,
            pixel_height: height,
            display_size: Size::new(width as f32, height as f32),
        })
    }

    /// Decode an icon from encoded image bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IconError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        Self::from_rgba8(image.into_raw(), width, height)
    }

    /// Load and decode an icon from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Override the logical display size using builder pattern.
    ///
    /// By default the display size equals the bitmap's pixel dimensions.
    pub fn with_display_size(mut self, size: Size) -> Self {
        self.display_size = size;
        self
    }

    /// The bitmap width in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// The bitmap height in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// The logical size the icon occupies in the layout.
    pub fn display_size(&self) -> Size {
        self.display_size
    }

    /// The RGBA8 pixel data, row-major.
    pub fn rgba8(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_pixels(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let on = (x + y) % 2 == 0;
                pixels.extend_from_slice(if on {
                    &[255, 255, 255, 255]
                } else {
                    &[0, 0, 0, 0]
                });
            }
        }
        pixels
    }

    #[test]
    fn test_from_rgba8() {
        let icon = Icon::from_rgba8(checker_pixels(4, 2), 4, 2).unwrap();
        assert_eq!(icon.pixel_width(), 4);
        assert_eq!(icon.pixel_height(), 2);
        assert_eq!(icon.display_size(), Size::new(4.0, 2.0));
        assert_eq!(icon.rgba8().len(), 32);
    }

    #[test]
    fn test_from_rgba8_rejects_short_buffer() {
        let err = Icon::from_rgba8(vec![0u8; 10], 4, 2).unwrap_err();
        match err {
            IconError::BufferSize { expected, actual } => {
                assert_eq!(expected, 32);
                assert_eq!(actual, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_size_override() {
        let icon = Icon::from_rgba8(checker_pixels(32, 32), 32, 32)
            .unwrap()
            .with_display_size(Size::new(16.0, 16.0));
        assert_eq!(icon.display_size(), Size::new(16.0, 16.0));
        assert_eq!(icon.pixel_width(), 32);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        // Encode a tiny image with the same crate we decode with.
        let raw = image::RgbaImage::from_raw(2, 2, checker_pixels(2, 2)).unwrap();
        let mut encoded = Vec::new();
        raw.write_to(
            &mut std::io::Cursor::new(&mut encoded),
            image::ImageFormat::Png,
        )
        .unwrap();

        let icon = Icon::from_bytes(&encoded).unwrap();
        assert_eq!(icon.pixel_width(), 2);
        assert_eq!(icon.pixel_height(), 2);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Icon::from_bytes(b"definitely not an image"),
            Err(IconError::Decode(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(matches!(
            Icon::from_path("/nonexistent/icon.png"),
            Err(IconError::Io(_))
        ));
    }
}
