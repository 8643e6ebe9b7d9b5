//! Output height derivation for aspect-ratio-correct rendering.

/// Default glyph aspect correction (cell width / cell height).
/// Monospace cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT: f32 = 0.5;

/// Derive the output height for a requested width.
///
/// Rendering one glyph per sampled pixel stretches the picture vertically
/// because glyph cells are not square. Scaling the row count by
/// `char_aspect` compensates:
///
/// `height = round(width / (src_width / src_height) * char_aspect)`, at least 1.
///
/// # Arguments
/// * `src_width` - Width of the source image in pixels
/// * `src_height` - Height of the source image in pixels
/// * `width` - Requested output width in glyphs
/// * `char_aspect` - Glyph cell width divided by its height
///
/// # Example
/// ```
/// use asciify::aspect::derive_height;
///
/// // 2:1 source at 120 columns
/// assert_eq!(derive_height(200, 100, 120, 0.5), 30);
/// ```
pub fn derive_height(src_width: u32, src_height: u32, width: u32, char_aspect: f32) -> u32 {
    if src_width == 0 || src_height == 0 {
        return 1;
    }

    let aspect = f64::from(src_width) / f64::from(src_height);
    let height = (f64::from(width) / aspect * f64::from(char_aspect)).round();

    // Saturating float->int cast; NaN becomes 0 and is clamped below
    (height as u32).max(1)
}
