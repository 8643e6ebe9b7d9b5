use crate::aspect::{DEFAULT_CHAR_ASPECT, derive_height};
use crate::error::{AsciiError, Result};
use crate::lut::GlyphRamp;
use crate::matrix::TargetDimensions;
use std::path::PathBuf;

/// Default output grid when no size is requested
pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 60;

/// File name used when the art is persisted without an explicit path
pub const DEFAULT_OUTPUT_FILE: &str = "ascii_art.txt";

/// How the output grid size is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizePolicy {
    /// Exact grid, source aspect ratio ignored
    Fixed { width: u32, height: u32 },
    /// Fixed width, height derived from the source aspect ratio
    AutoHeight { width: u32, char_aspect: f32 },
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy::Fixed {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl SizePolicy {
    /// Aspect-corrected sizing with the default glyph aspect
    pub fn auto_height(width: u32) -> Self {
        SizePolicy::AutoHeight {
            width,
            char_aspect: DEFAULT_CHAR_ASPECT,
        }
    }

    /// Resolve the output grid for a source of the given size
    pub fn target_for(&self, src_width: u32, src_height: u32) -> Result<TargetDimensions> {
        match *self {
            SizePolicy::Fixed { width, height } => TargetDimensions::new(width, height),
            SizePolicy::AutoHeight { width, char_aspect } => {
                TargetDimensions::new(width, 1)?;
                let height = derive_height(src_width, src_height, width, char_aspect);
                TargetDimensions::new(width, height)
            }
        }
    }
}

/// Whether rendered art is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    Never,
    Always,
    /// Only when the caller asks for it (e.g. a `--save` flag)
    #[default]
    OnRequest,
}

impl PersistPolicy {
    pub fn should_persist(self, requested: bool) -> bool {
        match self {
            PersistPolicy::Never => false,
            PersistPolicy::Always => true,
            PersistPolicy::OnRequest => requested,
        }
    }
}

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Output grid sizing
    pub size: SizePolicy,

    /// Glyphs, darkest first
    pub ramp: GlyphRamp,
    /// Map dark pixels to light glyphs (for light backgrounds)
    pub invert: bool,

    /// Persistence
    pub persist: PersistPolicy,
    pub output_path: PathBuf,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            size: SizePolicy::default(),

            ramp: GlyphRamp::default(),
            invert: false,

            persist: PersistPolicy::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        match self.size {
            SizePolicy::Fixed { width, height } => {
                TargetDimensions::new(width, height)?;
            }
            SizePolicy::AutoHeight { width, char_aspect } => {
                TargetDimensions::new(width, 1)?;
                if !char_aspect.is_finite() || char_aspect <= 0.0 {
                    return Err(AsciiError::InvalidConfig(format!(
                        "char_aspect must be a positive number, got {}",
                        char_aspect
                    )));
                }
            }
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AsciiError::InvalidConfig(
                "output_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Ramp actually used for mapping, honoring `invert`
    pub fn effective_ramp(&self) -> GlyphRamp {
        if self.invert {
            self.ramp.inverted()
        } else {
            self.ramp.clone()
        }
    }
}
