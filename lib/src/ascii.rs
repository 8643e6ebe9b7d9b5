use crate::lut::GlyphRamp;
use crate::matrix::BrightnessMatrix;
use rayon::prelude::*;

/// Row-major grid of glyphs, one per output cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl GlyphGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[char]> {
        self.cells.chunks_exact(self.width as usize)
    }
}

/// Select a glyph for every brightness cell
///
/// # Arguments
/// * `matrix` - Resampled brightness values
/// * `ramp` - Glyphs ordered darkest to lightest
///
/// # Returns
/// A glyph grid with the same dimensions as `matrix`
pub fn select_glyphs(matrix: &BrightnessMatrix, ramp: &GlyphRamp) -> GlyphGrid {
    let cells = matrix
        .as_slice()
        .par_iter()
        .map(|&brightness| ramp.glyph_for(brightness))
        .collect();

    GlyphGrid {
        width: matrix.width(),
        height: matrix.height(),
        cells,
    }
}

/// Text output: `height` lines of `width` glyphs, each ending in `\n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    text: String,
    width: u32,
    height: u32,
}

impl RenderedArt {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl std::fmt::Display for RenderedArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join glyph rows into text, terminating every row (the last included)
/// with a single newline
pub fn render(grid: &GlyphGrid) -> RenderedArt {
    let mut text = String::with_capacity(grid.cells.len() + grid.height as usize);
    for row in grid.rows() {
        text.extend(row);
        text.push('\n');
    }

    RenderedArt {
        text,
        width: grid.width,
        height: grid.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_glyphs_keeps_shape() {
        let matrix = BrightnessMatrix::from_rows(vec![vec![0, 128, 255], vec![255, 0, 128]]).unwrap();
        let grid = select_glyphs(&matrix, &GlyphRamp::default());

        assert_eq!((grid.width(), grid.height()), (3, 2));
        let rows: Vec<&[char]> = grid.rows().collect();
        assert_eq!(rows[0], &['@', '+', ' ']);
        assert_eq!(rows[1], &[' ', '@', '+']);
    }

    #[test]
    fn test_render_terminates_every_row() {
        let matrix = BrightnessMatrix::from_rows(vec![vec![0, 0], vec![255, 255]]).unwrap();
        let art = render(&select_glyphs(&matrix, &GlyphRamp::default()));

        assert_eq!(art.as_str(), "@@\n  \n");
        assert_eq!(art.lines().count(), 2);
        assert!(!art.as_str().ends_with("\n\n"));
    }

    #[test]
    fn test_render_single_cell() {
        let matrix = BrightnessMatrix::from_rows(vec![vec![128]]).unwrap();
        let art = render(&select_glyphs(&matrix, &GlyphRamp::default()));
        assert_eq!(art.to_string(), "+\n");
        assert_eq!((art.width(), art.height()), (1, 1));
    }

    #[test]
    fn test_render_uses_custom_ramp() {
        let matrix = BrightnessMatrix::from_rows(vec![vec![0, 255, 0]]).unwrap();
        let ramp = GlyphRamp::new("#.").unwrap();
        let art = render(&select_glyphs(&matrix, &ramp));
        assert_eq!(art.into_string(), "#.#\n");
    }
}
