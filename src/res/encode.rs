//! RES stream encode loops.

use alloc::vec::Vec;
use enough::Stop;

use super::THRESHOLD_CUTOFF;
use crate::error::ResourceError;
use crate::hue::hue_degrees;
use crate::raster::Raster;

/// Fused mode: mask supplies the reversed RGBA snapshot, color supplies
/// the hue. Callers have already validated dimensions and sizing.
pub(crate) fn encode_fused(
    color: &Raster,
    mask: &Raster,
    total: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ResourceError> {
    let mut out = Vec::with_capacity(total);
    write_header(&mut out, mask.width, mask.height);

    for y in 0..mask.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..mask.width {
            let (r, g, b, a) = mask.rgba(x, y);
            out.push(a);
            out.push(b);
            out.push(g);
            out.push(r);

            // Color alpha is read and discarded; only hue travels.
            let (r, g, b) = color.rgb(x, y);
            out.extend_from_slice(&hue_degrees(r, g, b).to_be_bytes());
        }
    }

    Ok(out)
}

/// Threshold mode: binarize by channel sum, keep the original hue.
pub(crate) fn encode_threshold(
    raster: &Raster,
    total: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ResourceError> {
    let mut out = Vec::with_capacity(total);
    write_header(&mut out, raster.width, raster.height);

    for y in 0..raster.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..raster.width {
            let (r, g, b, a) = raster.rgba(x, y);
            let sum = u16::from(r) + u16::from(g) + u16::from(b) + u16::from(a);
            if sum < THRESHOLD_CUTOFF {
                // set: opaque white
                out.extend_from_slice(&[255, 255, 255, 255]);
            } else {
                // unset: transparent black
                out.extend_from_slice(&[0, 0, 0, 0]);
            }

            // Hue comes from the pre-threshold channels
            out.extend_from_slice(&hue_degrees(r, g, b).to_be_bytes());
        }
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, width: u32, height: u32) {
    out.extend_from_slice(&(width as u16).to_le_bytes());
    out.extend_from_slice(&(height as u16).to_le_bytes());
}
