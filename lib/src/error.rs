use std::path::PathBuf;

/// Errors produced while converting an image to ASCII art
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// Image bytes could not be read or the format is unsupported
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Decoded image reports a zero dimension
    #[error("invalid image dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// Requested output grid side is 0 or above `MAX_TARGET_SIDE`
    #[error("invalid target size {width}x{height}: width and height must be between 1 and 10000")]
    InvalidTarget { width: u32, height: u32 },

    /// Glyph ramp is too short to represent a brightness range
    #[error("glyph ramp must contain at least 2 glyphs, got {0}")]
    InvalidRamp(usize),

    /// Configuration value outside its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing the rendered art to disk failed
    #[error("failed to save ASCII art to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsciiError {
    /// Whether the conversion result is still usable after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AsciiError::Persist { .. })
    }
}

pub type Result<T> = std::result::Result<T, AsciiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_persist_is_recoverable() {
        let persist = AsciiError::Persist {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(persist.is_recoverable());
        assert!(!AsciiError::InvalidTarget { width: 0, height: 3 }.is_recoverable());
        assert!(!AsciiError::InvalidImage { width: 0, height: 0 }.is_recoverable());
    }

    #[test]
    fn test_messages_name_the_dimensions() {
        let err = AsciiError::InvalidTarget { width: 0, height: 30 };
        assert!(err.to_string().contains("0x30"));

        let err = AsciiError::InvalidRamp(1);
        assert!(err.to_string().contains("got 1"));
    }
}
