//! asciify - image to plain-text ASCII art converter
//!
//! Computes per-pixel luminance, nearest-neighbor resamples it onto a
//! character grid and maps each cell onto a darkest-to-lightest glyph ramp.
//!
//! # Example
//! ```no_run
//! use asciify::{AsciiConfig, SizePolicy, process_image};
//!
//! let input = asciify::decode::open("photo.jpg").unwrap();
//! let config = AsciiConfig {
//!     size: SizePolicy::auto_height(120),
//!     ..Default::default()
//! };
//! let art = process_image(&input, &config).unwrap();
//! print!("{art}");
//! ```

pub mod ascii;
pub mod aspect;
pub mod config;
pub mod decode;
pub mod error;
pub mod lut;
pub mod luminance;
pub mod matrix;
pub mod processor;
pub mod resample;

// Re-export main types for convenience
pub use ascii::RenderedArt;
pub use config::{AsciiConfig, PersistPolicy, SizePolicy};
pub use decode::PixelSource;
pub use error::{AsciiError, Result};
pub use lut::GlyphRamp;
pub use matrix::{BrightnessMatrix, TargetDimensions};
pub use processor::{persist, process_image, process_matrix, save_art};
