//! Command-line arguments.

use asciify::aspect::DEFAULT_CHAR_ASPECT;
use asciify::config::{DEFAULT_OUTPUT_FILE, DEFAULT_WIDTH};
use asciify::{AsciiConfig, GlyphRamp, PersistPolicy, SizePolicy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert a JPEG or PNG image into ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert an image into ASCII art", long_about = None)]
pub struct Args {
    /// Image to convert
    pub image: PathBuf,

    /// Output width in characters (height follows the aspect ratio unless given)
    pub width: Option<u32>,

    /// Output height in characters
    pub height: Option<u32>,

    /// Save the result to a text file
    #[arg(long)]
    pub save: bool,

    /// When to write the output file
    #[arg(long, value_enum, default_value = "on-request")]
    pub persist: Persist,

    /// Output file path
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Glyph cell width divided by height, used when only a width is given
    #[arg(long, default_value_t = DEFAULT_CHAR_ASPECT, value_parser = parse_char_aspect)]
    pub char_aspect: f32,

    /// Glyph ramp ordered darkest to lightest
    #[arg(long, allow_hyphen_values = true)]
    pub ramp: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output persistence mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Persist {
    Never,
    Always,
    #[default]
    OnRequest,
}

impl From<Persist> for PersistPolicy {
    fn from(p: Persist) -> Self {
        match p {
            Persist::Never => PersistPolicy::Never,
            Persist::Always => PersistPolicy::Always,
            Persist::OnRequest => PersistPolicy::OnRequest,
        }
    }
}

/// Parse and validate the glyph aspect (positive, finite)
fn parse_char_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(format!("char aspect must be greater than 0, got {}", aspect));
    }
    Ok(aspect)
}

impl Args {
    /// Size policy implied by which dimensions were given
    pub fn size_policy(&self) -> SizePolicy {
        match (self.width, self.height) {
            (Some(width), Some(height)) => SizePolicy::Fixed { width, height },
            (Some(width), None) => SizePolicy::AutoHeight {
                width,
                char_aspect: self.char_aspect,
            },
            (None, Some(height)) => SizePolicy::Fixed {
                width: DEFAULT_WIDTH,
                height,
            },
            (None, None) => SizePolicy::default(),
        }
    }

    pub fn to_config(&self) -> asciify::Result<AsciiConfig> {
        let ramp = match &self.ramp {
            Some(glyphs) => GlyphRamp::new(glyphs)?,
            None => GlyphRamp::default(),
        };

        let config = AsciiConfig {
            size: self.size_policy(),
            ramp,
            invert: self.invert,
            persist: self.persist.into(),
            output_path: self.output.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
