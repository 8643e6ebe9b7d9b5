use crate::decode::PixelSource;
use crate::error::{AsciiError, Result};
use crate::matrix::BrightnessMatrix;

/// Perceptual brightness of one RGB pixel
///
/// Formula: Y = round(0.299*R + 0.587*G + 0.114*B)
///
/// Integer math with the coefficients scaled by 1000, so the result is exact
/// and always lands in [0, 255].
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}

/// Calculate a brightness matrix covering every pixel of `source`
///
/// # Arguments
/// * `source` - Decoded image
///
/// # Returns
/// A matrix with one row per image row and one entry per image column
pub fn calculate_luminance<S: PixelSource + ?Sized>(source: &S) -> Result<BrightnessMatrix> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(AsciiError::InvalidImage { width, height });
    }

    let mut values = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            values.push(luma(source.rgb(x, y)));
        }
    }

    BrightnessMatrix::from_vec(width, height, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_luminance_black() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let lum = calculate_luminance(&img).unwrap();
        assert_eq!(lum.get(0, 0), 0);
    }

    #[test]
    fn test_luminance_white() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let lum = calculate_luminance(&img).unwrap();
        assert_eq!(lum.get(9, 9), 255);
    }

    #[test]
    fn test_luma_primaries_round() {
        // 76.245, 149.685, 29.07
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 150);
        assert_eq!(luma([0, 0, 255]), 29);
    }

    #[test]
    fn test_green_dominates() {
        assert!(luma([0, 200, 0]) > luma([200, 0, 0]));
        assert!(luma([200, 0, 0]) > luma([0, 0, 200]));
    }

    #[test]
    fn test_shape_matches_source() {
        let mut img = RgbImage::new(7, 3);
        img.put_pixel(6, 2, Rgb([255, 255, 255]));
        let lum = calculate_luminance(&img).unwrap();

        assert_eq!(lum.dimensions(), (7, 3));
        assert_eq!(lum.rows().len(), 3);
        assert!(lum.rows().all(|row| row.len() == 7));
        assert_eq!(lum.get(6, 2), 255);
        assert_eq!(lum.get(0, 0), 0);
    }

    #[test]
    fn test_empty_image_is_invalid() {
        let img = RgbImage::new(0, 4);
        assert!(matches!(
            calculate_luminance(&img),
            Err(AsciiError::InvalidImage { width: 0, height: 4 })
        ));
    }
}
