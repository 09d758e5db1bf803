//! Public encode surface.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::ResourceError;
use crate::limits::Limits;
use crate::raster::Raster;
use crate::res;

/// Configurable RES stream encode.
///
/// ```no_run
/// use zenres::{EncodeRequest, Limits, PixelLayout, Raster};
/// use enough::Unstoppable;
///
/// # let (color_pixels, mask_pixels): (&[u8], &[u8]) = (&[], &[]);
/// let color = Raster::new(color_pixels, 640, 480, PixelLayout::Rgba8)?;
/// let mask = Raster::new(mask_pixels, 640, 480, PixelLayout::Rgba8)?;
///
/// let limits = Limits {
///     max_memory_bytes: Some(64 * 1024 * 1024),
///     ..Default::default()
/// };
/// let stream = EncodeRequest::new()
///     .with_limits(&limits)
///     .encode_fused(&color, &mask, Unstoppable)?;
/// # Ok::<(), zenres::ResourceError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest<'a> {
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    /// A request with no limits configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resource limits to the encode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode a color/mask raster pair (fused mode).
    ///
    /// Fails with [`ResourceError::DimensionMismatch`] before any output
    /// exists if the rasters differ in width or height.
    pub fn encode_fused(
        &self,
        color: &Raster,
        mask: &Raster,
        stop: impl Stop,
    ) -> Result<Vec<u8>, ResourceError> {
        res::encode_fused(color, mask, self.limits, &stop)
    }

    /// Encode a single raster (threshold mode), binarizing each pixel by
    /// channel sum against [`crate::THRESHOLD_CUTOFF`].
    pub fn encode_threshold(
        &self,
        raster: &Raster,
        stop: impl Stop,
    ) -> Result<Vec<u8>, ResourceError> {
        res::encode_threshold(raster, self.limits, &stop)
    }
}

/// Encode a color/mask raster pair with default settings.
pub fn encode_fused(
    color: &Raster,
    mask: &Raster,
    stop: impl Stop,
) -> Result<Vec<u8>, ResourceError> {
    EncodeRequest::new().encode_fused(color, mask, stop)
}

/// Encode a single raster in threshold mode with default settings.
pub fn encode_threshold(raster: &Raster, stop: impl Stop) -> Result<Vec<u8>, ResourceError> {
    EncodeRequest::new().encode_threshold(raster, stop)
}

/// Encode a raster pair and write the stream to `path`.
///
/// Validation runs before the file is created, so a dimension mismatch
/// never leaves a file behind. The handle is opened once and released on
/// all exit paths; on a write failure the incomplete file is removed.
#[cfg(feature = "std")]
pub fn write_fused_to_path(
    path: impl AsRef<std::path::Path>,
    color: &Raster,
    mask: &Raster,
    stop: impl Stop,
) -> Result<(), ResourceError> {
    let encoded = EncodeRequest::new().encode_fused(color, mask, stop)?;
    write_stream(path.as_ref(), &encoded)
}

/// Encode a raster in threshold mode and write the stream to `path`.
///
/// Same file-handling behavior as [`write_fused_to_path`].
#[cfg(feature = "std")]
pub fn write_threshold_to_path(
    path: impl AsRef<std::path::Path>,
    raster: &Raster,
    stop: impl Stop,
) -> Result<(), ResourceError> {
    let encoded = EncodeRequest::new().encode_threshold(raster, stop)?;
    write_stream(path.as_ref(), &encoded)
}

#[cfg(feature = "std")]
fn write_stream(path: &std::path::Path, bytes: &[u8]) -> Result<(), ResourceError> {
    use std::io::Write as _;

    let mut file = std::fs::File::create(path)?;
    if let Err(err) = file.write_all(bytes).and_then(|()| file.flush()) {
        // Don't leave a truncated resource behind
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(err.into());
    }
    Ok(())
}
