//! Decoder boundary
//!
//! The conversion core only needs an image's dimensions and an 8-bit RGB
//! color per coordinate. [`PixelSource`] captures that contract; decoding
//! JPEG/PNG bytes into something that satisfies it is delegated to the
//! `image` crate.

use crate::error::{AsciiError, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageReader, Pixel};
use std::ops::Deref;
use std::path::Path;

/// Read-only view of a decoded image
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Red, green and blue intensities at `(x, y)`, reduced to 8 bits
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];
}

/// Channel types that can be reduced to the 8-bit range
pub trait Channel: Copy {
    fn to_u8(self) -> u8;
}

impl Channel for u8 {
    fn to_u8(self) -> u8 {
        self
    }
}

impl Channel for u16 {
    fn to_u8(self) -> u8 {
        (self >> 8) as u8
    }
}

impl Channel for f32 {
    fn to_u8(self) -> u8 {
        (self.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel,
    P::Subpixel: Channel,
    C: Deref<Target = [P::Subpixel]>,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b] = self.get_pixel(x, y).to_rgb().0;
        [r.to_u8(), g.to_u8(), b.to_u8()]
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::dimensions(self).0
    }

    fn height(&self) -> u32 {
        GenericImageView::dimensions(self).1
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        // Wide variants go through the same reduction as their buffers
        match self {
            DynamicImage::ImageLuma16(buf) => buf.rgb(x, y),
            DynamicImage::ImageLumaA16(buf) => buf.rgb(x, y),
            DynamicImage::ImageRgb16(buf) => buf.rgb(x, y),
            DynamicImage::ImageRgba16(buf) => buf.rgb(x, y),
            DynamicImage::ImageRgb32F(buf) => buf.rgb(x, y),
            DynamicImage::ImageRgba32F(buf) => buf.rgb(x, y),
            other => {
                let [r, g, b, _] = GenericImageView::get_pixel(other, x, y).0;
                [r, g, b]
            }
        }
    }
}

/// Decode an in-memory JPEG or PNG
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Open and decode an image file, sniffing the format from its contents
pub fn open(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AsciiError::Decode(image::ImageError::IoError(e)))?;
    let img = reader.decode()?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Luma, Rgb, Rgba, RgbImage};
    use std::io::Cursor;

    #[test]
    fn test_rgba8_ignores_alpha() {
        let img = image::RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        assert_eq!(img.rgb(1, 1), [10, 20, 30]);
    }

    #[test]
    fn test_luma_expands_to_gray() {
        let img = image::GrayImage::from_pixel(1, 1, Luma([77]));
        assert_eq!(img.rgb(0, 0), [77, 77, 77]);
    }

    #[test]
    fn test_u16_channels_drop_low_byte() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([0xFFFF, 0x80FF, 0x00FF]));
        assert_eq!(img.rgb(0, 0), [0xFF, 0x80, 0x00]);
    }

    #[test]
    fn test_f32_channels_are_clamped() {
        let img: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::from_pixel(1, 1, Rgb([1.5, 0.5, -0.2]));
        assert_eq!(img.rgb(0, 0), [255, 128, 0]);
    }

    #[test]
    fn test_dynamic_image_wide_variant() {
        let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(3, 2, Rgb([0x1234, 0xABCD, 0xFF00]));
        let img = DynamicImage::ImageRgb16(buf);
        assert_eq!((PixelSource::width(&img), PixelSource::height(&img)), (3, 2));
        assert_eq!(img.rgb(2, 1), [0x12, 0xAB, 0xFF]);
    }

    #[test]
    fn test_decode_png_bytes() {
        let img = RgbImage::from_pixel(4, 3, Rgb([200, 100, 50]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(PixelSource::width(&decoded), 4);
        assert_eq!(PixelSource::height(&decoded), 3);
        assert_eq!(decoded.rgb(0, 0), [200, 100, 50]);
    }

    #[test]
    fn test_decode_jpeg_bytes() {
        let img = RgbImage::from_pixel(16, 8, Rgb([90, 140, 200]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();

        // Lossy, so only the shape is stable
        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(PixelSource::width(&decoded), 16);
        assert_eq!(PixelSource::height(&decoded), 8);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_bytes(b"definitely not an image");
        assert!(matches!(result, Err(AsciiError::Decode(_))));
    }

    #[test]
    fn test_open_missing_file_is_decode_error() {
        let result = open("/nonexistent/path/to/image.png");
        assert!(matches!(result, Err(AsciiError::Decode(_))));
    }
}
