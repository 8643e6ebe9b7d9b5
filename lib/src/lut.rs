//! Glyph lookup
//!
//! A ramp lists glyphs from visually darkest (densest ink) to lightest, and
//! brightness values are quantized onto it.

use crate::error::{AsciiError, Result};

/// Default ramp, 10 levels from darkest to lightest
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Ordered glyphs used to represent increasing brightness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl GlyphRamp {
    /// Build a ramp from a string ordered darkest to lightest
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(AsciiError::InvalidRamp(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    /// Same glyphs, lightest first (for dark text on a light background)
    pub fn inverted(&self) -> Self {
        Self {
            glyphs: self.glyphs.iter().rev().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a ramp holds at least 2 glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Ramp index for a brightness value: floor(b * (N-1) / 255)
    pub fn index_for(&self, brightness: u8) -> usize {
        let last = self.glyphs.len() - 1;
        (usize::from(brightness) * last / 255).min(last)
    }

    /// Get the glyph for a brightness value
    ///
    /// # Arguments
    /// * `brightness` - Luminance in [0, 255]
    ///
    /// # Returns
    /// The glyph at the quantized ramp position
    pub fn glyph_for(&self, brightness: u8) -> char {
        self.glyphs[self.index_for(brightness)]
    }

    /// Like [`glyph_for`](Self::glyph_for), clamping out-of-range levels first
    pub fn glyph_for_level(&self, level: i64) -> char {
        self.glyph_for(level.clamp(0, 255) as u8)
    }
}

impl std::fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.glyphs.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
