use crate::error::Result;
use crate::matrix::{BrightnessMatrix, TargetDimensions};
use rayon::prelude::*;

/// Source index for destination index `dst` when scaling `src_len` to `dst_len`
///
/// floor(dst * src_len / dst_len), computed in u64 so large grids cannot overflow.
#[inline]
fn source_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    (u64::from(dst) * u64::from(src_len) / u64::from(dst_len)) as u32
}

/// Scale a brightness matrix to `target` with nearest-neighbor sampling
///
/// Every destination cell copies exactly one source cell; nothing is
/// interpolated or averaged. Rows are filled in parallel, and the result is
/// identical to a sequential pass.
///
/// # Arguments
/// * `matrix` - Source brightness values
/// * `target` - Output grid size
///
/// # Returns
/// A matrix of `target.height` rows by `target.width` columns
pub fn resample(matrix: &BrightnessMatrix, target: TargetDimensions) -> Result<BrightnessMatrix> {
    target.validate()?;
    let (src_w, src_h) = matrix.dimensions();
    let TargetDimensions { width, height } = target;

    let columns: Vec<u32> = (0..width)
        .map(|dx| source_index(dx, src_w, width))
        .collect();

    let mut values = vec![0u8; width as usize * height as usize];
    values
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(dy, out_row)| {
            let src_row = matrix.row(source_index(dy as u32, src_h, height));
            for (out, &sx) in out_row.iter_mut().zip(&columns) {
                *out = src_row[sx as usize];
            }
        });

    BrightnessMatrix::from_vec(width, height, values)
}

/// Convenience wrapper validating raw target sizes first
pub fn resample_to(matrix: &BrightnessMatrix, width: u32, height: u32) -> Result<BrightnessMatrix> {
    resample(matrix, TargetDimensions::new(width, height)?)
}
