use crate::ascii::{RenderedArt, render, select_glyphs};
use crate::config::AsciiConfig;
use crate::decode::PixelSource;
use crate::error::{AsciiError, Result};
use crate::luminance::calculate_luminance;
use crate::matrix::{BrightnessMatrix, TargetDimensions};
use crate::resample::resample;
use std::path::Path;

/// Converts a decoded image to ASCII art
///
/// Pipeline:
/// 1. Extract per-pixel luminance
/// 2. Resolve the output grid (derive height from the aspect ratio if requested)
/// 3. Nearest-neighbor resample to the grid
/// 4. Map each cell to a glyph
/// 5. Join rows into newline-terminated text
///
/// # Arguments
/// * `source` - Decoded image
/// * `config` - Conversion settings
///
/// # Returns
/// The rendered art, or the first error hit along the way
pub fn process_image<S: PixelSource + ?Sized>(
    source: &S,
    config: &AsciiConfig,
) -> Result<RenderedArt> {
    config.validate()?;

    // Step 1: Extract luminance
    let lum = calculate_luminance(source)?;

    // Step 2: Resolve target size against the source dimensions
    let target = config.size.target_for(lum.width(), lum.height())?;
    log::info!(
        "converting {}x{} pixels to {}x{} glyphs",
        lum.width(),
        lum.height(),
        target.width,
        target.height
    );

    process_matrix(&lum, target, config)
}

/// Steps 3-5 on an existing brightness matrix
pub fn process_matrix(
    lum: &BrightnessMatrix,
    target: TargetDimensions,
    config: &AsciiConfig,
) -> Result<RenderedArt> {
    // Step 3: Resample
    let scaled = resample(lum, target)?;
    log::debug!("resampled to {}x{}", scaled.width(), scaled.height());

    // Step 4: Glyph selection
    let grid = select_glyphs(&scaled, &config.effective_ramp());

    // Step 5: Render
    Ok(render(&grid))
}

/// Write rendered art verbatim to `path`
pub fn save_art(art: &RenderedArt, path: &Path) -> Result<()> {
    std::fs::write(path, art.as_str()).map_err(|source| AsciiError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved ASCII art to {}", path.display());
    Ok(())
}

/// Persist `art` if the config's policy says so
///
/// # Returns
/// `Ok(true)` when a file was written, `Ok(false)` when the policy skipped it.
/// A failed write is a recoverable [`AsciiError::Persist`]; the art itself
/// is unaffected.
pub fn persist(art: &RenderedArt, config: &AsciiConfig, requested: bool) -> Result<bool> {
    if !config.persist.should_persist(requested) {
        log::debug!("persist policy {:?} skipped saving", config.persist);
        return Ok(false);
    }
    save_art(art, &config.output_path)?;
    Ok(true)
}
