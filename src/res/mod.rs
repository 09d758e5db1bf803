//! RES resource stream serializer (internal).
//!
//! The stream is header plus fixed-size records, nothing else:
//! width/height as u16 little-endian, then one 6-byte record per pixel
//! in row-major order. Record bytes 0..4 are the mask pixel's channels
//! reversed to A,B,G,R; bytes 4..6 are the color pixel's hue angle as a
//! u16 big-endian in [0,360). No magic bytes and no checksum.

mod encode;

use crate::error::ResourceError;
use crate::limits::Limits;
use crate::raster::Raster;
use alloc::vec::Vec;
use enough::Stop;

/// Header length in bytes: u16 width + u16 height.
pub const HEADER_LEN: usize = 4;

/// Per-pixel record length in bytes: reversed RGBA + big-endian hue.
pub const RECORD_LEN: usize = 6;

/// Channel-sum cutoff for threshold mode.
///
/// A pixel whose `r + g + b + a` sum is strictly below this value is
/// emitted as opaque white, all others as transparent black. The cutoff
/// is a fixed device contract (about 29% of the 1020 maximum), not a
/// perceptual luminance weighting.
pub const THRESHOLD_CUTOFF: u16 = 300;

/// Encode a color/mask raster pair as a RES stream.
pub(crate) fn encode_fused(
    color: &Raster,
    mask: &Raster,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ResourceError> {
    if color.width != mask.width || color.height != mask.height {
        return Err(ResourceError::DimensionMismatch {
            color_width: color.width,
            color_height: color.height,
            mask_width: mask.width,
            mask_height: mask.height,
        });
    }
    let total = check_extent(color.width, color.height, limits)?;
    stop.check()?;
    encode::encode_fused(color, mask, total, stop)
}

/// Encode a single raster as a RES stream, binarizing by channel sum.
pub(crate) fn encode_threshold(
    raster: &Raster,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ResourceError> {
    let total = check_extent(raster.width, raster.height, limits)?;
    stop.check()?;
    encode::encode_threshold(raster, total, stop)
}

/// Validate that the extent fits the u16 header and any limits, and
/// return the total output size in bytes.
fn check_extent(
    width: u32,
    height: u32,
    limits: Option<&Limits>,
) -> Result<usize, ResourceError> {
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(ResourceError::DimensionsTooLarge { width, height });
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let total = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(RECORD_LEN))
        .and_then(|body| body.checked_add(HEADER_LEN))
        .ok_or(ResourceError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_memory(total)?;
    }
    Ok(total)
}
