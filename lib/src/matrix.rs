use crate::error::{AsciiError, Result};

/// Row-major grid of brightness values in [0, 255]
///
/// Always at least 1×1 and rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessMatrix {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl BrightnessMatrix {
    /// Build a matrix from flat row-major values
    pub fn from_vec(width: u32, height: u32, values: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AsciiError::InvalidImage { width, height });
        }
        if values.len() != width as usize * height as usize {
            return Err(AsciiError::InvalidConfig(format!(
                "expected {} brightness values for {}x{}, got {}",
                width as usize * height as usize,
                width,
                height,
                values.len()
            )));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Build a matrix from explicit rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        if let Some(ragged) = rows.iter().find(|row| row.len() != width as usize) {
            return Err(AsciiError::InvalidConfig(format!(
                "all rows must have {} entries, found a row with {}",
                width,
                ragged.len()
            )));
        }
        Self::from_vec(width, height, rows.concat())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Brightness at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.values[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.values.chunks_exact(self.width as usize)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

/// Largest accepted output grid side, in glyphs
pub const MAX_TARGET_SIDE: u32 = 10_000;

/// Size of the output character grid, each side in 1..=[`MAX_TARGET_SIDE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl TargetDimensions {
    /// Zero or oversized dimensions are rejected, never clamped
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let target = Self { width, height };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |side: u32| (1..=MAX_TARGET_SIDE).contains(&side);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(AsciiError::InvalidTarget {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
